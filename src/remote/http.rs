//! HTTP implementation of the catalog provider.
//!
//! Endpoints, relative to the configured base URL:
//! - `GET products?limit=&skip=`
//! - `GET products/search?q=&limit=&skip=`
//! - `GET products/{id}`

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::Config;
use crate::error::{CatalogError, Result};
use crate::types::{ProductDetail, ProductId, ProductPage};

use super::error::ApiError;
use super::{CatalogProvider, PageQuery};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Catalog provider backed by the remote JSON API.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: Client,
    base: Url,
}

impl HttpCatalog {
    /// Create a provider from configuration, resolving the base URL with the
    /// optional CLI override.
    pub fn from_config(config: &Config, api_url_override: Option<&str>) -> Result<Self> {
        let base = config.api_base_url(api_url_override)?;
        Self::new(base, config.request_timeout())
    }

    /// Create a provider for `base`, capping each request at `timeout` when set.
    pub fn new(base: Url, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().connect_timeout(CONNECT_TIMEOUT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| CatalogError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, base })
    }

    /// Build the URL for a page request
    pub fn page_url(&self, query: &PageQuery) -> Result<Url> {
        let mut url = if query.is_search() {
            self.endpoint(&["products", "search"])?
        } else {
            self.endpoint(&["products"])?
        };

        {
            let mut pairs = url.query_pairs_mut();
            if query.is_search() {
                pairs.append_pair("q", &query.term);
            }
            pairs
                .append_pair("limit", &query.limit.to_string())
                .append_pair("skip", &query.skip.to_string());
        }

        Ok(url)
    }

    /// Build the URL for a detail request
    pub fn detail_url(&self, id: ProductId) -> Result<Url> {
        self.endpoint(&["products", &id.to_string()])
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        url.set_query(None);
        url.path_segments_mut()
            .map_err(|_| {
                CatalogError::Config(format!("API URL '{}' cannot be a base", self.base))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        detail_id: Option<ProductId>,
    ) -> Result<T> {
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ApiError::from(e).into_catalog_error(detail_id))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.is_empty() {
                format!("request to {url} failed")
            } else {
                truncate(&body, 200)
            };
            return Err(ApiError::with_status(message, status).into_catalog_error(detail_id));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::from(e).into_catalog_error(detail_id))?;

        serde_json::from_slice(&bytes).map_err(|e| CatalogError::Decode(format!("{url}: {e}")))
    }
}

impl CatalogProvider for HttpCatalog {
    async fn fetch_page(&self, query: &PageQuery) -> Result<ProductPage> {
        let url = self.page_url(query)?;
        self.get_json(url, None).await
    }

    async fn fetch_detail(&self, id: ProductId) -> Result<ProductDetail> {
        let url = self.detail_url(id)?;
        self.get_json(url, Some(id)).await
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    let trimmed = s.trim();
    if trimmed.chars().count() <= max_chars {
        return trimmed.to_string();
    }
    let cut: String = trimmed.chars().take(max_chars).collect();
    format!("{cut}...")
}
