//! Detail view loading.
//!
//! Each visit fetches its own record; nothing is shared with the list store
//! beyond the product id carried by navigation.

use crate::error::CatalogError;
use crate::remote::CatalogProvider;
use crate::types::{ProductDetail, ProductId};

#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    Loading(ProductId),
    Loaded(ProductDetail),
    Failed { id: ProductId, message: String },
}

impl DetailView {
    pub fn id(&self) -> ProductId {
        match self {
            DetailView::Loading(id) => *id,
            DetailView::Loaded(detail) => detail.product.id,
            DetailView::Failed { id, .. } => *id,
        }
    }

    pub fn detail(&self) -> Option<&ProductDetail> {
        match self {
            DetailView::Loaded(detail) => Some(detail),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, DetailView::Failed { .. })
    }
}

/// Loads one product for a detail view visit
pub struct DetailFetcher;

impl DetailFetcher {
    pub async fn load<P: CatalogProvider>(provider: &P, id: ProductId) -> DetailView {
        match provider.fetch_detail(id).await {
            Ok(detail) => DetailView::Loaded(detail),
            Err(err) => {
                tracing::warn!(id, "failed to load product details: {err}");
                let message = match err {
                    CatalogError::NotFound(_) => "This product no longer exists.".to_string(),
                    other => format!("Failed to load product details: {other}"),
                };
                DetailView::Failed { id, message }
            }
        }
    }
}
