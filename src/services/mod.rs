// src/services/mod.rs

//! Remote catalog API access.
//!
//! [`CatalogBackend`] abstracts the two paginated list endpoints so the
//! controllers can be driven by an in-memory stub in tests. The real
//! implementation is [`HttpBackend`].

mod http;

pub use http::{HttpBackend, TOTAL_COUNT_HEADER};

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Category, ResultPage, Store};
use crate::query::QueryState;

/// Trait for the paginated list resource.
#[async_trait]
pub trait CatalogBackend: Send + Sync {
    /// Fetch one page of stores for the given query.
    ///
    /// The explicit page number and the fixed page size always override
    /// any pagination keys carried by the query itself.
    async fn fetch_stores(&self, query: &QueryState, page: usize) -> Result<ResultPage<Store>>;

    /// Fetch one page of the category list.
    async fn fetch_categories(&self, page: usize) -> Result<ResultPage<Category>>;
}
