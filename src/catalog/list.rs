//! Accumulated paginated list with stale-response protection.
//!
//! Every fetch is issued against a ticket carrying a monotonically
//! increasing epoch. A response whose ticket is no longer the most recently
//! issued one for the list is discarded, so a slow earlier response can
//! never overwrite fresher state.

use crate::models::ResultPage;
use crate::query::PAGE_SIZE;

/// How a fetched page merges into the accumulated list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// Discard prior items; the result becomes the whole list
    Replace,
    /// Concatenate onto the existing items (infinite scroll)
    Append,
}

/// Token tying an in-flight fetch to the list state that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    /// Request epoch at issue time
    pub epoch: u64,
    /// Merge policy for the response
    pub mode: FetchMode,
    /// Page number to request (1 for replace, cursor + 1 for append)
    pub page: usize,
}

/// Ordered items accumulated from successive pages of one query identity.
#[derive(Debug)]
pub struct PagedList<T> {
    items: Vec<T>,
    page: usize,
    total: u64,
    has_more: bool,
    loading: bool,
    epoch: u64,
}

impl<T> Default for PagedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PagedList<T> {
    /// Create an empty list ready for its first fetch.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            total: 0,
            has_more: true,
            loading: false,
            epoch: 0,
        }
    }

    /// Accumulated items in server order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Accumulated item count.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing has been accumulated.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current page cursor (last successfully merged page).
    pub fn page(&self) -> usize {
        self.page
    }

    /// Total match count last reported by the backend.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Whether further append fetches can yield items.
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Whether the most recently issued fetch is still unresolved.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Terminal state: fully loaded with nothing to show.
    pub fn is_exhausted_empty(&self) -> bool {
        self.items.is_empty() && !self.has_more
    }

    /// Issue a fetch ticket, superseding any fetch still in flight.
    ///
    /// The list itself is left untouched: a replace fetch must not clear
    /// items before its response arrives, or a transient failure would
    /// present an empty state.
    pub fn begin(&mut self, mode: FetchMode) -> FetchTicket {
        self.epoch += 1;
        self.loading = true;
        let page = match mode {
            FetchMode::Replace => 1,
            FetchMode::Append => self.page + 1,
        };
        FetchTicket {
            epoch: self.epoch,
            mode,
            page,
        }
    }

    fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.epoch == self.epoch
    }

    /// Merge a fetched page. Returns `false` when the ticket is stale, in
    /// which case the list is left entirely untouched.
    pub fn complete(&mut self, ticket: FetchTicket, result: ResultPage<T>) -> bool {
        if !self.is_current(&ticket) {
            log::debug!(
                "discarding stale page (epoch {} superseded by {})",
                ticket.epoch,
                self.epoch
            );
            return false;
        }

        let fetched = result.items.len();
        match ticket.mode {
            FetchMode::Replace => {
                self.items = result.items;
                self.page = 1;
            }
            FetchMode::Append => {
                self.items.extend(result.items);
                self.page = ticket.page;
            }
        }
        self.total = result.total_count;

        // A short page or reaching the declared total ends pagination.
        self.has_more = fetched == PAGE_SIZE && (self.items.len() as u64) < self.total;
        self.loading = false;
        true
    }

    /// Record a failed fetch. Stale tickets are ignored; the current
    /// ticket only clears the loading gate, leaving items, cursor, and
    /// `has_more` intact as a cache of last resort.
    pub fn fail(&mut self, ticket: FetchTicket) -> bool {
        if !self.is_current(&ticket) {
            return false;
        }
        self.loading = false;
        true
    }
}
