// src/catalog/mod.rs

//! Catalog controllers.
//!
//! - [`PagedList`]: accumulated list with replace/append merge semantics
//!   and stale-response protection
//! - [`ScrollTrigger`]: viewport-proximity gate for append fetches
//! - [`StoreCatalog`]: query state, fetch planning, and address-bar
//!   reconciliation for the store list
//! - [`CategoryBrowser`]: the independent category sidebar list

mod categories;
mod list;
mod scroll;
mod stores;

pub use categories::CategoryBrowser;
pub use list::{FetchMode, FetchTicket, PagedList};
pub use scroll::{DEFAULT_SCROLL_THRESHOLD, ScrollTrigger, Viewport};
pub use stores::{FetchPlan, StoreCatalog};
