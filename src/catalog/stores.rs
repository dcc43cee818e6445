//! Store catalog controller.
//!
//! Owns the canonical [`QueryState`] and the accumulated store list. User
//! intents and history events are turned into [`FetchPlan`]s; responses are
//! merged back through the list's ticket discipline, so a stale response
//! can never clobber fresher state.

use crate::catalog::list::{FetchMode, FetchTicket, PagedList};
use crate::catalog::scroll::{ScrollTrigger, Viewport};
use crate::error::{AppError, Result};
use crate::models::{ResultPage, Store};
use crate::nav::Navigation;
use crate::query::{Intent, QueryState};
use crate::services::CatalogBackend;

/// An issued fetch: the query snapshot to request plus its ticket.
#[derive(Debug, Clone)]
pub struct FetchPlan {
    /// Query at issue time; later intent changes do not affect this plan
    pub query: QueryState,
    /// Ticket to present when the response arrives
    pub ticket: FetchTicket,
}

/// Coordinates filters, pagination, and fetches for the store list.
pub struct StoreCatalog {
    query: QueryState,
    list: PagedList<Store>,
    error: Option<String>,
}

impl Default for StoreCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreCatalog {
    /// Create a catalog with the default query.
    pub fn new() -> Self {
        Self {
            query: QueryState::new(),
            list: PagedList::new(),
            error: None,
        }
    }

    /// Create a catalog whose initial query is restored from the address
    /// bar: the persisted sort token plus any category scope.
    pub fn from_navigation(nav: &Navigation) -> Self {
        let mut query = QueryState::new();
        query = query.apply(&Intent::Sort(nav.initial_sort()));
        if let Some(id) = nav.current_category() {
            query = query.apply(&Intent::Category(Some(id)));
        }
        Self {
            query,
            list: PagedList::new(),
            error: None,
        }
    }

    /// The current canonical query.
    pub fn query(&self) -> &QueryState {
        &self.query
    }

    /// The accumulated store list.
    pub fn list(&self) -> &PagedList<Store> {
        &self.list
    }

    /// Last fetch failure message, if the latest fetch failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn plan(&mut self, mode: FetchMode) -> FetchPlan {
        FetchPlan {
            query: self.query.clone(),
            ticket: self.list.begin(mode),
        }
    }

    /// Initial (mount) fetch for the current query.
    pub fn load(&mut self) -> FetchPlan {
        self.plan(FetchMode::Replace)
    }

    /// Fold a user intent into the query and issue a replace fetch.
    ///
    /// Identity changes invalidate accumulated pages, but the list keeps
    /// its items until the replacement page actually arrives.
    pub fn dispatch(&mut self, intent: &Intent) -> FetchPlan {
        self.query = self.query.apply(intent);
        self.plan(FetchMode::Replace)
    }

    /// Request the next page, gated by the in-flight and exhaustion flags.
    pub fn load_more(&mut self) -> Option<FetchPlan> {
        if self.list.loading() || !self.list.has_more() {
            return None;
        }
        Some(self.plan(FetchMode::Append))
    }

    /// Handle a scroll event: append when the trigger fires.
    pub fn on_scroll(&mut self, trigger: &ScrollTrigger, viewport: Viewport) -> Option<FetchPlan> {
        if !trigger.should_load(viewport, &self.list) {
            return None;
        }
        self.load_more()
    }

    /// Reconcile the query with the address bar's category parameter.
    ///
    /// Called at mount and on every history event. Issues a replace fetch
    /// only when the parameter's presence or value differs from the
    /// query's current category.
    pub fn reconcile(&mut self, nav: &Navigation) -> Option<FetchPlan> {
        let current = nav.current_category();
        if current == self.query.category_id() {
            return None;
        }
        Some(self.dispatch(&Intent::Category(current)))
    }

    /// Merge a successful response. Stale tickets are discarded.
    pub fn apply(&mut self, ticket: FetchTicket, page: ResultPage<Store>) -> bool {
        let applied = self.list.complete(ticket, page);
        if applied {
            self.error = None;
        }
        applied
    }

    /// Record a failed fetch. The accumulated list stays visible.
    pub fn apply_err(&mut self, ticket: FetchTicket, error: &AppError) -> bool {
        let relevant = self.list.fail(ticket);
        if relevant {
            log::warn!("store fetch failed: {}", error);
            self.error = Some(error.to_string());
        }
        relevant
    }

    /// Execute a plan against a backend and merge the outcome.
    pub async fn run(&mut self, plan: FetchPlan, backend: &dyn CatalogBackend) -> Result<bool> {
        match backend.fetch_stores(&plan.query, plan.ticket.page).await {
            Ok(page) => Ok(self.apply(plan.ticket, page)),
            Err(error) => {
                self.apply_err(plan.ticket, &error);
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AmountType, RateType, StoreStatus};
    use crate::query::{AlphabetFilter, SortOption, keys};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use url::Url;

    fn store(id: u64, name: &str) -> Store {
        Store {
            id,
            name: name.to_string(),
            logo: String::new(),
            url: String::new(),
            cashback_enabled: false,
            rate_type: RateType::Flat,
            amount_type: AmountType::Fixed,
            cashback_amount: 0.0,
            is_promoted: false,
            is_sharable: false,
            status: StoreStatus::Active,
        }
    }

    fn page(ids: std::ops::Range<u64>, total: u64) -> ResultPage<Store> {
        let items = ids.map(|id| store(id, &format!("Store {id}"))).collect();
        ResultPage::new(items, total)
    }

    /// Backend serving pre-scripted page results in order.
    struct StubBackend {
        pages: Mutex<VecDeque<Result<ResultPage<Store>>>>,
    }

    impl StubBackend {
        fn with(pages: Vec<Result<ResultPage<Store>>>) -> Self {
            Self {
                pages: Mutex::new(pages.into()),
            }
        }
    }

    #[async_trait]
    impl CatalogBackend for StubBackend {
        async fn fetch_stores(
            &self,
            _query: &QueryState,
            _page: usize,
        ) -> Result<ResultPage<Store>> {
            self.pages
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(AppError::config("stub exhausted")))
        }

        async fn fetch_categories(
            &self,
            _page: usize,
        ) -> Result<ResultPage<crate::models::Category>> {
            Err(AppError::config("not used"))
        }
    }

    #[test]
    fn test_new_search_discards_late_append_for_old_term() {
        let mut catalog = StoreCatalog::new();

        let first = catalog.load();
        catalog.apply(first.ticket, page(0..20, 45));

        // Scroll kicks off page 2 for the old term...
        let append = catalog.load_more().unwrap();
        assert_eq!(append.ticket.page, 2);

        // ...but the user types a new search before it resolves.
        let replace = catalog.dispatch(&Intent::Search("new".to_string()));
        assert_eq!(replace.query.get(keys::NAME_LIKE), Some("new"));
        assert_eq!(replace.ticket.page, 1, "replace resets the cursor");

        catalog.apply(replace.ticket, page(100..105, 5));
        assert_eq!(catalog.list().len(), 5);

        // The old append resolves late and must be dropped wholesale.
        assert!(!catalog.apply(append.ticket, page(20..40, 45)));
        assert_eq!(catalog.list().len(), 5);
        assert_eq!(catalog.list().page(), 1);
    }

    #[test]
    fn test_load_more_is_gated() {
        let mut catalog = StoreCatalog::new();
        let first = catalog.load();
        catalog.apply(first.ticket, page(0..20, 45));

        let append = catalog.load_more().unwrap();
        assert!(catalog.load_more().is_none(), "in-flight gate");

        catalog.apply(append.ticket, page(20..40, 45));
        let third = catalog.load_more().unwrap();
        catalog.apply(third.ticket, page(40..45, 45));

        assert!(catalog.load_more().is_none(), "exhausted");
        assert_eq!(catalog.list().len(), 45);
    }

    #[test]
    fn test_failed_replace_keeps_previous_results() {
        let mut catalog = StoreCatalog::new();
        let first = catalog.load();
        catalog.apply(first.ticket, page(0..20, 45));

        let replace = catalog.dispatch(&Intent::Alphabet(AlphabetFilter::Letter('z')));
        catalog.apply_err(replace.ticket, &AppError::status(503, "http://x/stores"));

        assert_eq!(catalog.list().len(), 20, "cache of last resort");
        assert!(!catalog.list().loading());
        assert!(catalog.error().unwrap().contains("503"));
    }

    #[test]
    fn test_success_clears_error() {
        let mut catalog = StoreCatalog::new();
        let first = catalog.load();
        catalog.apply_err(first.ticket, &AppError::config("boom"));
        assert!(catalog.error().is_some());

        let retry = catalog.load();
        catalog.apply(retry.ticket, page(0..3, 3));
        assert!(catalog.error().is_none());
    }

    #[test]
    fn test_reconcile_follows_history() {
        let mut nav = Navigation::new(Url::parse("http://localhost:3000/").unwrap());
        let mut catalog = StoreCatalog::from_navigation(&nav);
        assert!(catalog.reconcile(&nav).is_none(), "already in sync");

        nav.select_category(4);
        let plan = catalog.reconcile(&nav).unwrap();
        assert_eq!(plan.query.category_id(), Some(4));
        catalog.apply(plan.ticket, page(0..10, 10));

        nav.back();
        let plan = catalog.reconcile(&nav).unwrap();
        assert_eq!(plan.query.category_id(), None);
        catalog.apply(plan.ticket, page(0..20, 45));

        assert!(catalog.reconcile(&nav).is_none());
    }

    #[test]
    fn test_history_listener_drives_reconciliation() {
        let mut nav = Navigation::new(Url::parse("http://localhost:3000/").unwrap());
        let mut rx = nav.subscribe();
        let mut catalog = StoreCatalog::from_navigation(&nav);

        nav.select_category(4);
        assert!(rx.try_recv().is_ok());
        // The handler reads the live location, not a cached one.
        let plan = catalog.reconcile(&nav).unwrap();
        assert_eq!(plan.query.category_id(), Some(4));
        catalog.apply(plan.ticket, page(0..5, 5));

        nav.back();
        assert!(rx.try_recv().is_ok());
        let plan = catalog.reconcile(&nav).unwrap();
        assert_eq!(plan.query.category_id(), None);
        catalog.apply(plan.ticket, page(0..20, 45));

        assert!(rx.try_recv().is_err(), "no further history events");
    }

    #[test]
    fn test_from_navigation_restores_sort_and_category() {
        let nav = Navigation::new(
            Url::parse("http://localhost:3000/?sort=clicks-desc&categoryId=7").unwrap(),
        );
        let catalog = StoreCatalog::from_navigation(&nav);

        assert_eq!(catalog.query().get(keys::SORT), Some("clicks"));
        assert_eq!(catalog.query().get(keys::ORDER), Some("desc"));
        assert_eq!(catalog.query().category_id(), Some(7));
    }

    #[test]
    fn test_scroll_drives_append() {
        let mut catalog = StoreCatalog::new();
        let first = catalog.load();
        catalog.apply(first.ticket, page(0..20, 45));

        let trigger = ScrollTrigger::default();
        let far = Viewport {
            scroll_top: 2400.0,
            viewport_height: 600.0,
            content_height: 3000.0,
        };
        let near_top = Viewport {
            scroll_top: 0.0,
            viewport_height: 600.0,
            content_height: 3000.0,
        };

        assert!(catalog.on_scroll(&trigger, near_top).is_none());
        let plan = catalog.on_scroll(&trigger, far).unwrap();
        assert_eq!(plan.ticket.page, 2);

        // Further scroll events while in flight are absorbed.
        assert!(catalog.on_scroll(&trigger, far).is_none());
    }

    #[tokio::test]
    async fn test_run_merges_success_and_failure() {
        let backend = StubBackend::with(vec![
            Ok(page(0..20, 25)),
            Err(AppError::status(500, "http://x/stores")),
        ]);

        let mut catalog = StoreCatalog::new();
        let plan = catalog.load();
        assert!(catalog.run(plan, &backend).await.unwrap());
        assert_eq!(catalog.list().len(), 20);

        let plan = catalog.load_more().unwrap();
        assert!(catalog.run(plan, &backend).await.is_err());
        assert_eq!(catalog.list().len(), 20, "failure leaves the list intact");
        assert!(catalog.error().is_some());
        assert!(!catalog.list().loading());

        // The append can be retried after the failure cleared the gate.
        assert!(catalog.load_more().is_some());
    }

    #[test]
    fn test_sort_mirrors_to_address_bar() {
        let mut nav = Navigation::new(Url::parse("http://localhost:3000/").unwrap());
        let mut catalog = StoreCatalog::new();

        let plan = catalog.dispatch(&Intent::Sort(SortOption::FeaturedDesc));
        nav.record_sort(SortOption::FeaturedDesc, catalog.query());
        catalog.apply(plan.ticket, page(0..5, 5));

        assert_eq!(nav.initial_sort(), SortOption::FeaturedDesc);
        assert!(nav.location().query().unwrap().contains("_sort=featured"));
    }
}
