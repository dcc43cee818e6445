//! Category sidebar browser.
//!
//! A second, independent paginated list. It shares nothing with the store
//! list: its own loading gate, page cursor, and exhaustion flag. Selecting
//! a category only touches the address bar; the store catalog picks the
//! change up through reconciliation.

use crate::catalog::list::{FetchMode, FetchTicket, PagedList};
use crate::error::Result;
use crate::models::{Category, ResultPage};
use crate::nav::Navigation;
use crate::services::CatalogBackend;

/// Paginated category list feeding the category facet.
#[derive(Default)]
pub struct CategoryBrowser {
    list: PagedList<Category>,
}

impl CategoryBrowser {
    /// Create an empty browser.
    pub fn new() -> Self {
        Self {
            list: PagedList::new(),
        }
    }

    /// The accumulated category list.
    pub fn list(&self) -> &PagedList<Category> {
        &self.list
    }

    /// Initial fetch of the first page.
    pub fn load(&mut self) -> FetchTicket {
        self.list.begin(FetchMode::Replace)
    }

    /// Request the next page, gated by in-flight and exhaustion flags.
    pub fn load_more(&mut self) -> Option<FetchTicket> {
        if self.list.loading() || !self.list.has_more() {
            return None;
        }
        Some(self.list.begin(FetchMode::Append))
    }

    /// Merge a successful response. Stale tickets are discarded.
    pub fn apply(&mut self, ticket: FetchTicket, page: ResultPage<Category>) -> bool {
        self.list.complete(ticket, page)
    }

    /// Record a failed fetch; the accumulated list stays usable.
    pub fn fail(&mut self, ticket: FetchTicket) -> bool {
        self.list.fail(ticket)
    }

    /// Select a category, delegating the toggle semantics to the
    /// address-bar synchronizer.
    pub fn select(&self, nav: &mut Navigation, id: u64) {
        nav.select_category(id);
    }

    /// Whether a category is the active selection.
    pub fn is_active(&self, nav: &Navigation, id: u64) -> bool {
        nav.current_category() == Some(id)
    }

    /// Execute a ticket against a backend and merge the outcome.
    pub async fn run(&mut self, ticket: FetchTicket, backend: &dyn CatalogBackend) -> Result<bool> {
        match backend.fetch_categories(ticket.page).await {
            Ok(page) => Ok(self.apply(ticket, page)),
            Err(error) => {
                log::warn!("category fetch failed: {}", error);
                self.fail(ticket);
                Err(error)
            }
        }
    }
}
