//! reqwest-backed implementation of the catalog API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{ApiConfig, Category, ResultPage, Store};
use crate::query::{PAGE_SIZE, QueryState, keys};
use crate::services::CatalogBackend;

/// Response header carrying the total match count for the query.
pub const TOTAL_COUNT_HEADER: &str = "X-Total-Count";

/// HTTP client for the json-server style list service.
pub struct HttpBackend {
    client: Client,
    base: Url,
}

impl HttpBackend {
    /// Create a backend from API connection settings.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let base = Url::parse(&config.base_url)?;

        Ok(Self { client, base })
    }

    /// Build the request URL for a list endpoint.
    ///
    /// Filter parameters come first in their canonical order; `_page` and
    /// `_limit` are appended last so they override anything inherited.
    fn list_url<'a>(
        &self,
        path: &str,
        params: impl Iterator<Item = (&'a str, &'a str)>,
        page: usize,
    ) -> Result<Url> {
        let mut url = self.base.join(path)?;
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                if key == keys::PAGE || key == keys::LIMIT {
                    continue;
                }
                pairs.append_pair(key, value);
            }
            pairs.append_pair(keys::PAGE, &page.to_string());
            pairs.append_pair(keys::LIMIT, &PAGE_SIZE.to_string());
        }
        Ok(url)
    }

    /// Execute a list request and parse one page plus its total count.
    async fn fetch_list<T: DeserializeOwned>(&self, url: Url) -> Result<ResultPage<T>> {
        log::debug!("GET {}", url);
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::status(status.as_u16(), url.as_str()));
        }

        let total_count = response
            .headers()
            .get(TOTAL_COUNT_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(0);

        let items: Vec<T> = response.json().await?;
        Ok(ResultPage::new(items, total_count))
    }
}

#[async_trait]
impl CatalogBackend for HttpBackend {
    async fn fetch_stores(&self, query: &QueryState, page: usize) -> Result<ResultPage<Store>> {
        let url = self.list_url("stores", query.params(), page)?;
        self.fetch_list(url).await
    }

    async fn fetch_categories(&self, page: usize) -> Result<ResultPage<Category>> {
        let url = self.list_url("categories", std::iter::empty(), page)?;
        self.fetch_list(url).await
    }
}
