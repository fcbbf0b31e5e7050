//! Error mapping for catalog API calls.
//!
//! Converts reqwest failures and non-success responses into `CatalogError`
//! so callers only ever see the catalog taxonomy.

use std::fmt;

use reqwest::StatusCode;

use crate::error::CatalogError;
use crate::types::ProductId;

/// A failed API exchange, with the HTTP status when one was received.
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status code, if available
    pub status: Option<StatusCode>,
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    pub fn with_status(message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status == Some(StatusCode::NOT_FOUND)
    }

    /// Convert into a `CatalogError`, treating 404 as a missing product when
    /// the request was a detail lookup.
    pub fn into_catalog_error(self, detail_id: Option<ProductId>) -> CatalogError {
        if let Some(id) = detail_id
            && self.is_not_found()
        {
            return CatalogError::NotFound(id);
        }
        CatalogError::Network(self.to_string())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(
                f,
                "HTTP {} {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown"),
                self.message
            ),
            None => write!(f, "{}", self.message),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            format!("request timed out: {err}")
        } else if err.is_connect() {
            format!("connection failed: {err}")
        } else {
            err.to_string()
        };
        Self {
            status: err.status(),
            message,
        }
    }
}
