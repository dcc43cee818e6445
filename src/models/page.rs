//! One page of a paginated list response.

/// A fetched page of items plus the declared total for the whole query.
#[derive(Debug, Clone)]
pub struct ResultPage<T> {
    /// Items in this page, in server order
    pub items: Vec<T>,

    /// Total matching items across all pages, from the `X-Total-Count` header
    pub total_count: u64,
}

impl<T> ResultPage<T> {
    /// Create a page from its items and declared total.
    pub fn new(items: Vec<T>, total_count: u64) -> Self {
        Self { items, total_count }
    }

    /// Number of items in this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page carries no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
