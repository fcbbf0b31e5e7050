//! Remote catalog access.
//!
//! This module defines the capability the browser uses to reach the catalog
//! API, plus the reqwest-backed implementation of it.

pub mod error;
pub mod http;

use std::fmt;
use std::future::Future;

use crate::error::Result;
use crate::types::{PAGE_SIZE, ProductDetail, ProductId, ProductPage};

pub use http::HttpCatalog;

/// Parameters for one page request.
///
/// An empty `term` means the unfiltered listing; anything else goes to the
/// search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub term: String,
    pub skip: usize,
    pub limit: usize,
}

impl PageQuery {
    /// First page of the unfiltered listing
    pub fn listing() -> Self {
        Self::new("", 0)
    }

    /// A page of `PAGE_SIZE` items for `term` starting at `skip`
    pub fn new(term: impl Into<String>, skip: usize) -> Self {
        Self {
            term: term.into(),
            skip,
            limit: PAGE_SIZE,
        }
    }

    pub fn is_search(&self) -> bool {
        !self.term.is_empty()
    }
}

impl fmt::Display for PageQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_search() {
            write!(
                f,
                "search '{}' (skip={}, limit={})",
                self.term, self.skip, self.limit
            )
        } else {
            write!(f, "list (skip={}, limit={})", self.skip, self.limit)
        }
    }
}

/// Common interface for catalog backends.
///
/// Each call is a single round trip: no retries and no caching. Callers decide
/// whether to re-invoke.
pub trait CatalogProvider: Send + Sync {
    /// Fetch one page of the listing or of a search
    fn fetch_page(&self, query: &PageQuery) -> impl Future<Output = Result<ProductPage>> + Send;

    /// Fetch the full record of a single product
    fn fetch_detail(&self, id: ProductId) -> impl Future<Output = Result<ProductDetail>> + Send;
}
