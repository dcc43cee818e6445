//! Ordered query-parameter map.

use indexmap::IndexMap;

/// Fixed page size for every list request.
pub const PAGE_SIZE: usize = 20;

/// Canonical wire parameter names.
pub mod keys {
    /// Page number (1-based)
    pub const PAGE: &str = "_page";
    /// Page size
    pub const LIMIT: &str = "_limit";
    /// Comma-joined sort fields
    pub const SORT: &str = "_sort";
    /// Comma-joined sort orders, positionally paired with `_sort`
    pub const ORDER: &str = "_order";
    /// Name pattern filter (prefix anchor or free text)
    pub const NAME_LIKE: &str = "name_like";
    /// Cashback-only facet
    pub const CASHBACK: &str = "cashback_enabled";
    /// Promoted-only facet
    pub const PROMOTED: &str = "is_promoted";
    /// Sharable-only facet
    pub const SHARABLE: &str = "is_sharable";
    /// Publication status facet
    pub const STATUS: &str = "status";
    /// Selected category scope
    pub const CATEGORY: &str = "categoryId";
}

/// The canonical query for the store list.
///
/// Invariant: facets with "unset" semantics are *absent* keys. A removed
/// filter never lingers as an empty or falsy value, so it neither reaches
/// the outgoing request nor pollutes the address bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    params: IndexMap<String, String>,
}

impl QueryState {
    /// Create the initial query: first page, fixed page size, no filters.
    pub fn new() -> Self {
        let mut state = Self {
            params: IndexMap::new(),
        };
        state.set(keys::PAGE, "1");
        state.set(keys::LIMIT, PAGE_SIZE.to_string());
        state
    }

    /// Look up a parameter value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Set a parameter, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.insert(key.into(), value.into());
    }

    /// Delete a parameter. Removal, not falsy-value retention.
    pub fn remove(&mut self, key: &str) {
        self.params.shift_remove(key);
    }

    /// Whether a parameter is present.
    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// All parameters in insertion order.
    pub fn params(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The filter/sort/category identity of this query.
    ///
    /// Excludes the pagination keys: two queries with the same identity may
    /// be paged through with append fetches; a different identity
    /// invalidates previously accumulated pages.
    pub fn identity(&self) -> Vec<(&str, &str)> {
        self.params()
            .filter(|(k, _)| *k != keys::PAGE && *k != keys::LIMIT)
            .collect()
    }

    /// The selected category, if any.
    pub fn category_id(&self) -> Option<u64> {
        self.get(keys::CATEGORY)?.parse().ok()
    }

    /// Reset pagination back to the first page.
    pub(crate) fn reset_page(&mut self) {
        self.set(keys::PAGE, "1");
    }
}
