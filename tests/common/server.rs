//! Local HTTP server speaking the catalog API, backed by a `MockCatalog`.
//!
//! Besides the regular endpoints it mounts a few broken variants:
//! - `/broken/products` answers 200 with a body that is not JSON
//! - `/down/products` answers 500
//! - `/slow/products` answers after two seconds

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Json;
use serde_json::json;

use super::mock_data::MockCatalog;

type Params = Query<HashMap<String, String>>;

fn paging(params: &HashMap<String, String>) -> (usize, usize) {
    let limit = params
        .get("limit")
        .and_then(|v| v.parse().ok())
        .unwrap_or(30);
    let skip = params.get("skip").and_then(|v| v.parse().ok()).unwrap_or(0);
    (skip, limit)
}

fn page_response(catalog: &MockCatalog, term: &str, params: &HashMap<String, String>) -> Response {
    let (skip, limit) = paging(params);
    let page = catalog.page(term, skip, limit);
    Json(json!({
        "products": page.products,
        "total": page.total,
        "skip": skip,
        "limit": limit,
    }))
    .into_response()
}

async fn list_handler(State(catalog): State<Arc<MockCatalog>>, Query(params): Params) -> Response {
    page_response(&catalog, "", &params)
}

async fn search_handler(
    State(catalog): State<Arc<MockCatalog>>,
    Query(params): Params,
) -> Response {
    let term = params.get("q").cloned().unwrap_or_default();
    page_response(&catalog, &term, &params)
}

async fn detail_handler(State(catalog): State<Arc<MockCatalog>>, Path(id): Path<u64>) -> Response {
    match catalog.detail(id) {
        Some(detail) => Json(detail).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": format!("Product with id '{id}' not found") })),
        )
            .into_response(),
    }
}

async fn slow_handler(State(catalog): State<Arc<MockCatalog>>, Query(params): Params) -> Response {
    tokio::time::sleep(Duration::from_secs(2)).await;
    page_response(&catalog, "", &params)
}

/// Start the server on an ephemeral port and return its base URL
pub async fn spawn_catalog_server(catalog: Arc<MockCatalog>) -> String {
    let app = Router::new()
        .route("/products", get(list_handler))
        .route("/products/search", get(search_handler))
        .route("/products/:id", get(detail_handler))
        .route("/broken/products", get(|| async { "<html>oops</html>" }))
        .route(
            "/down/products",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database unavailable") }),
        )
        .route("/slow/products", get(slow_handler))
        .with_state(catalog);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test server");
    let addr = listener.local_addr().expect("Failed to read local address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server failed");
    });

    format!("http://{addr}")
}
