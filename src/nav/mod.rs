// src/nav/mod.rs

//! Address-bar and history synchronization.
//!
//! [`Navigation`] owns the document location and a back/forward history
//! stack. The category selection lives in the `categoryId` query parameter;
//! the sort token is mirrored under `sort` for restore-on-load. Views
//! observe history movement through [`Navigation::subscribe`] and must read
//! the *current* location when handling an event, never a cached copy.

use tokio::sync::mpsc;
use url::Url;

use crate::query::{QueryState, SortOption, keys};

/// A history movement notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// A new entry was pushed
    Push,
    /// Back navigation
    Back,
    /// Forward navigation
    Forward,
}

/// The document location plus its history stack.
pub struct Navigation {
    history: Vec<Url>,
    index: usize,
    subscribers: Vec<mpsc::UnboundedSender<NavEvent>>,
}

impl Navigation {
    /// Start a session at the given location.
    pub fn new(initial: Url) -> Self {
        Self {
            history: vec![initial],
            index: 0,
            subscribers: Vec::new(),
        }
    }

    /// The current location.
    pub fn location(&self) -> &Url {
        &self.history[self.index]
    }

    fn query_param(&self, key: &str) -> Option<String> {
        self.location()
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    /// The category currently selected in the address bar.
    ///
    /// Reads the live location so handlers never act on stale state.
    pub fn current_category(&self) -> Option<u64> {
        self.query_param(keys::CATEGORY)?.parse().ok()
    }

    /// The sort restored from the address bar on initial load.
    /// Unknown or absent tokens fall back to the default sort.
    pub fn initial_sort(&self) -> SortOption {
        self.query_param("sort")
            .and_then(|token| SortOption::from_token(&token))
            .unwrap_or_default()
    }

    /// Register a history listener. Dropping the receiver deregisters it.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<NavEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    fn notify(&mut self, event: NavEvent) {
        self.subscribers.retain(|tx| tx.send(event).is_ok());
    }

    fn push(&mut self, url: Url) {
        // Pushing from mid-history drops the forward entries, like a browser.
        self.history.truncate(self.index + 1);
        self.history.push(url);
        self.index += 1;
        self.notify(NavEvent::Push);
    }

    /// Select a category, pushing a new history entry.
    ///
    /// Re-selecting the already active category clears the parameter
    /// (toggle-off) instead of navigating to an identical location.
    pub fn select_category(&mut self, id: u64) {
        let mut url = self.location().clone();
        let value = if self.current_category() == Some(id) {
            None
        } else {
            Some(id.to_string())
        };
        set_query_param(&mut url, keys::CATEGORY, value.as_deref());
        self.push(url);
    }

    /// Mirror a sort choice into the location: the human-readable token
    /// under `sort` plus the query's filter keys. Replaces the current
    /// entry; sort does not participate in back/forward reconciliation.
    pub fn record_sort(&mut self, sort: SortOption, query: &QueryState) {
        let mut url = self.location().clone();
        url.set_query(None);
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("sort", sort.token());
            for (key, value) in query.params() {
                pairs.append_pair(key, value);
            }
        }
        self.history[self.index] = url;
    }

    /// Navigate back one entry. Returns `false` at the start of history.
    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        self.notify(NavEvent::Back);
        true
    }

    /// Navigate forward one entry. Returns `false` at the end of history.
    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.history.len() {
            return false;
        }
        self.index += 1;
        self.notify(NavEvent::Forward);
        true
    }
}

/// Rewrite one query parameter, deleting it when `value` is `None`.
fn set_query_param(url: &mut Url, key: &str, value: Option<&str>) {
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != key)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    url.set_query(None);
    if kept.is_empty() && value.is_none() {
        return;
    }

    let mut pairs = url.query_pairs_mut();
    for (k, v) in &kept {
        pairs.append_pair(k, v);
    }
    if let Some(v) = value {
        pairs.append_pair(key, v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Intent;

    fn nav_at(url: &str) -> Navigation {
        Navigation::new(Url::parse(url).unwrap())
    }

    #[test]
    fn test_select_category_pushes_param() {
        let mut nav = nav_at("http://localhost:3000/");
        nav.select_category(5);

        assert_eq!(nav.current_category(), Some(5));
        assert!(nav.location().query().unwrap().contains("categoryId=5"));
    }

    #[test]
    fn test_reselect_toggles_off_round_trip() {
        let mut nav = nav_at("http://localhost:3000/");
        nav.select_category(5);
        nav.select_category(5);

        assert_eq!(nav.current_category(), None);
        assert_eq!(nav.location().query(), None);
    }

    #[test]
    fn test_switching_category_replaces_value() {
        let mut nav = nav_at("http://localhost:3000/");
        nav.select_category(5);
        nav.select_category(8);

        assert_eq!(nav.current_category(), Some(8));
    }

    #[test]
    fn test_back_and_forward_restore_selection() {
        let mut nav = nav_at("http://localhost:3000/");
        nav.select_category(5);
        nav.select_category(8);

        assert!(nav.back());
        assert_eq!(nav.current_category(), Some(5));

        assert!(nav.back());
        assert_eq!(nav.current_category(), None);
        assert!(!nav.back());

        assert!(nav.forward());
        assert_eq!(nav.current_category(), Some(5));
    }

    #[test]
    fn test_push_from_mid_history_drops_forward_entries() {
        let mut nav = nav_at("http://localhost:3000/");
        nav.select_category(5);
        nav.back();
        nav.select_category(9);

        assert!(!nav.forward());
        assert_eq!(nav.current_category(), Some(9));
    }

    #[test]
    fn test_subscribers_receive_events() {
        let mut nav = nav_at("http://localhost:3000/");
        let mut rx = nav.subscribe();

        nav.select_category(2);
        nav.back();
        nav.forward();

        assert_eq!(rx.try_recv().unwrap(), NavEvent::Push);
        assert_eq!(rx.try_recv().unwrap(), NavEvent::Back);
        assert_eq!(rx.try_recv().unwrap(), NavEvent::Forward);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_dropped_subscriber_is_pruned() {
        let mut nav = nav_at("http://localhost:3000/");
        let rx = nav.subscribe();
        drop(rx);

        nav.select_category(2);
        assert!(nav.subscribers.is_empty());
    }

    #[test]
    fn test_initial_sort_restored_from_token() {
        let nav = nav_at("http://localhost:3000/?sort=cashback-desc");
        assert_eq!(nav.initial_sort(), SortOption::CashbackDesc);

        let nav = nav_at("http://localhost:3000/?sort=bogus");
        assert_eq!(nav.initial_sort(), SortOption::NameAsc);
    }

    #[test]
    fn test_record_sort_mirrors_filters() {
        let mut nav = nav_at("http://localhost:3000/");
        let query = QueryState::new().apply(&Intent::Cashback(true));
        nav.record_sort(SortOption::CashbackDesc, &query);

        let q = nav.location().query().unwrap();
        assert!(q.contains("sort=cashback-desc"));
        assert!(q.contains("cashback_enabled=1"));

        // Replaces in place: no extra history entry to go back to.
        assert!(!nav.back());
    }
}
