//! storescout CLI
//!
//! Browses the store catalog from the terminal, driving the same query,
//! pagination, and reconciliation engine the UI uses.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use url::Url;

use storescout::{
    catalog::{CategoryBrowser, ScrollTrigger, StoreCatalog, Viewport},
    error::{AppError, Result},
    models::{Config, StoreStatus},
    nav::Navigation,
    query::{AlphabetFilter, Intent, SortOption},
    services::HttpBackend,
    storage::Favorites,
};

/// Simulated address bar origin for CLI sessions.
const APP_URL: &str = "app://storescout/stores";

/// storescout - Cashback Store Catalog Browser
#[derive(Parser, Debug)]
#[command(
    name = "storescout",
    version,
    about = "Browse a cashback store catalog"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "storescout.toml")]
    config: PathBuf,

    /// Directory holding persisted local state (favorites)
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List stores with filters, sorting, and pagination
    Stores {
        /// Alphabet filter: a letter, '#' for digits, or 'all'
        #[arg(long)]
        letter: Option<String>,

        /// Free-text name search
        #[arg(long)]
        search: Option<String>,

        /// Sort order (name-asc, featured-desc, clicks-desc, cashback-desc)
        #[arg(long)]
        sort: Option<SortOption>,

        /// Only stores offering cashback
        #[arg(long)]
        cashback: bool,

        /// Only promoted stores
        #[arg(long)]
        promoted: bool,

        /// Only sharable stores
        #[arg(long)]
        sharable: bool,

        /// Status filter (active, coming-soon, discontinued)
        #[arg(long)]
        status: Option<StoreStatus>,

        /// Scope to a category id
        #[arg(long)]
        category: Option<u64>,

        /// Number of pages to walk through
        #[arg(long, default_value_t = 1)]
        pages: usize,
    },

    /// List store categories
    Categories {
        /// Number of pages to walk through
        #[arg(long, default_value_t = 1)]
        pages: usize,
    },

    /// Toggle a store's favorite flag, or list favorites when no id is given
    Fav {
        /// Store id to toggle
        id: Option<u64>,
    },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Parse the alphabet strip flag.
fn parse_letter(raw: &str) -> Result<AlphabetFilter> {
    match raw {
        "all" | "All" => Ok(AlphabetFilter::All),
        "#" => Ok(AlphabetFilter::Digit),
        s => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_alphabetic() => Ok(AlphabetFilter::Letter(c)),
                _ => Err(AppError::validation(format!(
                    "--letter expects a single letter, '#', or 'all' (got '{raw}')"
                ))),
            }
        }
    }
}

/// Viewport representing a user scrolled to the very bottom of the list.
fn scrolled_to_bottom() -> Viewport {
    Viewport {
        scroll_top: 0.0,
        viewport_height: 1.0,
        content_height: 1.0,
    }
}

#[allow(clippy::too_many_arguments)]
async fn run_stores(
    config: &Config,
    favorites: &Favorites,
    letter: Option<String>,
    search: Option<String>,
    sort: Option<SortOption>,
    cashback: bool,
    promoted: bool,
    sharable: bool,
    status: Option<StoreStatus>,
    category: Option<u64>,
    pages: usize,
) -> Result<()> {
    let backend = HttpBackend::new(&config.api)?;

    let mut nav = Navigation::new(Url::parse(APP_URL)?);
    if let Some(id) = category {
        nav.select_category(id);
    }
    let mut catalog = StoreCatalog::from_navigation(&nav);

    let mut intents = Vec::new();
    if let Some(raw) = letter {
        intents.push(Intent::Alphabet(parse_letter(&raw)?));
    }
    if let Some(text) = search {
        intents.push(Intent::Search(text));
    }
    if let Some(option) = sort {
        intents.push(Intent::Sort(option));
    }
    if cashback {
        intents.push(Intent::Cashback(true));
    }
    if promoted {
        intents.push(Intent::Promoted(true));
    }
    if sharable {
        intents.push(Intent::Sharable(true));
    }
    if let Some(s) = status {
        intents.push(Intent::Status(s));
    }

    // Each dispatch supersedes the previous plan; only the last one runs.
    let mut plan = catalog.load();
    for intent in &intents {
        plan = catalog.dispatch(intent);
    }
    if let Some(option) = sort {
        nav.record_sort(option, catalog.query());
    }

    catalog.run(plan, &backend).await?;

    let trigger = ScrollTrigger::new(config.scroll.threshold);
    let mut fetched_pages = 1;
    while fetched_pages < pages {
        let Some(plan) = catalog.on_scroll(&trigger, scrolled_to_bottom()) else {
            break;
        };
        catalog.run(plan, &backend).await?;
        fetched_pages += 1;
    }

    for store in catalog.list().items() {
        let marker = if favorites.is_favorite(store.id) {
            "*"
        } else {
            " "
        };
        println!(
            "{marker} [{:>4}] {:<32} {:<24} {}",
            store.id,
            store.name,
            store.cashback_label(),
            store.status.label()
        );
    }

    if catalog.list().is_exhausted_empty() {
        println!("No stores found");
    } else {
        println!(
            "\nShowing {} of {} stores",
            catalog.list().len(),
            catalog.list().total()
        );
        if !catalog.list().has_more() {
            println!("No more stores to load");
        }
    }

    Ok(())
}

async fn run_categories(config: &Config, pages: usize) -> Result<()> {
    let backend = HttpBackend::new(&config.api)?;
    let mut browser = CategoryBrowser::new();

    let ticket = browser.load();
    browser.run(ticket, &backend).await?;

    let mut fetched_pages = 1;
    while fetched_pages < pages {
        let Some(ticket) = browser.load_more() else {
            break;
        };
        browser.run(ticket, &backend).await?;
        fetched_pages += 1;
    }

    for category in browser.list().items() {
        println!(
            "[{:>4}] {:<32} {} stores",
            category.id, category.name, category.store_count
        );
    }
    println!(
        "\nShowing {} of {} categories",
        browser.list().len(),
        browser.list().total()
    );

    Ok(())
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(&cli.config);
    let favorites_path = cli.data_dir.join("favorites.json");

    match cli.command {
        Command::Stores {
            letter,
            search,
            sort,
            cashback,
            promoted,
            sharable,
            status,
            category,
            pages,
        } => {
            let favorites = Favorites::load(&favorites_path);
            run_stores(
                &config, &favorites, letter, search, sort, cashback, promoted, sharable, status,
                category, pages,
            )
            .await?;
        }

        Command::Categories { pages } => {
            run_categories(&config, pages).await?;
        }

        Command::Fav { id } => {
            let mut favorites = Favorites::load(&favorites_path);

            match id {
                Some(id) => {
                    if favorites.toggle(id)? {
                        println!("Store {id} added to favorites");
                    } else {
                        println!("Store {id} removed from favorites");
                    }
                }
                None if favorites.is_empty() => println!("No favorites yet"),
                None => {
                    for id in favorites.ids() {
                        println!("{id}");
                    }
                }
            }
        }

        Command::Validate => {
            log::info!("Validating configuration...");
            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK");
        }
    }

    Ok(())
}
