// src/query/mod.rs

//! Canonical query construction and intent transitions.
//!
//! A [`QueryState`] is the single source of truth for what the catalog is
//! currently showing. User interactions are expressed as [`Intent`] values
//! and folded into a new state by [`QueryState::apply`]; nothing mutates a
//! state in place.

mod intent;
mod pattern;
mod sort;
mod state;

pub use intent::{AlphabetFilter, Intent};
pub use pattern::name_like_matches;
pub use sort::SortOption;
pub use state::{PAGE_SIZE, QueryState, keys};
