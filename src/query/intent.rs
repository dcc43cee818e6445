//! Discrete user intents and the state transition function.

use crate::models::StoreStatus;
use crate::query::sort::SortOption;
use crate::query::state::{QueryState, keys};

/// One position of the alphabet filter strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphabetFilter {
    /// "All": no name-prefix filter
    All,
    /// "#": names beginning with a digit
    Digit,
    /// A single letter prefix
    Letter(char),
}

/// A discrete user interaction with the filter controls.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Alphabet strip selection
    Alphabet(AlphabetFilter),
    /// Free-text search; empty text clears the filter
    Search(String),
    /// Sort menu selection
    Sort(SortOption),
    /// Cashback-only toggle
    Cashback(bool),
    /// Promoted-only toggle
    Promoted(bool),
    /// Sharable-only toggle
    Sharable(bool),
    /// Status selector (always one of the three values)
    Status(StoreStatus),
    /// Category scope, driven by the address-bar synchronizer
    Category(Option<u64>),
}

impl QueryState {
    /// Fold one intent into a new query state.
    ///
    /// Every intent changes the filter/sort/category identity, so every
    /// transition resets pagination to the first page.
    #[must_use]
    pub fn apply(&self, intent: &Intent) -> QueryState {
        let mut next = self.clone();

        match intent {
            Intent::Alphabet(AlphabetFilter::All) => {
                next.remove(keys::NAME_LIKE);
            }
            Intent::Alphabet(AlphabetFilter::Digit) => {
                next.set(keys::NAME_LIKE, "^[0-9]");
            }
            Intent::Alphabet(AlphabetFilter::Letter(letter)) => {
                next.set(
                    keys::NAME_LIKE,
                    format!("^{}", letter.to_ascii_lowercase()),
                );
            }
            Intent::Search(text) => {
                if text.is_empty() {
                    next.remove(keys::NAME_LIKE);
                } else {
                    next.set(keys::NAME_LIKE, text.clone());
                }
            }
            Intent::Sort(option) => {
                next.set_sort(*option);
            }
            Intent::Cashback(true) => {
                // Cashback-only implies sorting by the best offer
                next.set(keys::CASHBACK, "1");
                next.set_sort(SortOption::CashbackDesc);
            }
            Intent::Cashback(false) => {
                next.remove(keys::CASHBACK);
            }
            Intent::Promoted(on) => {
                next.set_flag(keys::PROMOTED, *on);
            }
            Intent::Sharable(on) => {
                next.set_flag(keys::SHARABLE, *on);
            }
            Intent::Status(status) => {
                next.set(keys::STATUS, status.wire());
            }
            Intent::Category(Some(id)) => {
                next.set(keys::CATEGORY, id.to_string());
            }
            Intent::Category(None) => {
                next.remove(keys::CATEGORY);
            }
        }

        next.reset_page();
        next
    }

    /// Install a sort option's wire parameters.
    fn set_sort(&mut self, option: SortOption) {
        let (sort, order) = option.wire_params();
        self.set(keys::SORT, sort);
        self.set(keys::ORDER, order);
    }

    /// Boolean facet: present with `"1"` when on, absent when off.
    fn set_flag(&mut self, key: &str, on: bool) {
        if on {
            self.set(key, "1");
        } else {
            self.remove(key);
        }
    }
}
