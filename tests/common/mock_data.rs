//! In-memory catalog used by the controller, session and HTTP tests.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::Notify;

use catalog::{
    CatalogError, CatalogProvider, PageQuery, Product, ProductDetail, ProductId, ProductPage,
    Result,
};

/// Build `count` products with ids `1..=count`. Every third product is a phone.
pub fn fixture_products(count: u64) -> Vec<Product> {
    (1..=count)
        .map(|id| Product {
            id,
            title: if id % 3 == 0 {
                format!("Smart Phone {id}")
            } else {
                format!("Desk Lamp {id}")
            },
            thumbnail: format!("https://cdn.example.com/{id}/thumbnail.jpg"),
            price: 10.0 + id as f64,
            brand: if id % 3 == 0 { "Phonecorp" } else { "Lumen" }.to_string(),
        })
        .collect()
}

pub fn ids(products: &[Product]) -> Vec<ProductId> {
    products.iter().map(|p| p.id).collect()
}

/// Catalog backed by a fixed product list. Requests can be gated (held until
/// released) or made to fail, and every page request is recorded.
#[derive(Default)]
pub struct MockCatalog {
    products: Vec<Product>,
    calls: Mutex<Vec<PageQuery>>,
    detail_calls: Mutex<Vec<ProductId>>,
    gates: Mutex<HashMap<(String, usize), Arc<Notify>>>,
    failing: Mutex<HashSet<(String, usize)>>,
}

impl MockCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            ..Default::default()
        }
    }

    pub fn with_fixture(count: u64) -> Self {
        Self::new(fixture_products(count))
    }

    /// Page of products matching `term` (case-insensitive title/brand match)
    pub fn page(&self, term: &str, skip: usize, limit: usize) -> ProductPage {
        let needle = term.to_lowercase();
        let matching: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| {
                needle.is_empty()
                    || p.title.to_lowercase().contains(&needle)
                    || p.brand.to_lowercase().contains(&needle)
            })
            .collect();

        let products = matching
            .iter()
            .skip(skip)
            .take(limit)
            .map(|p| (*p).clone())
            .collect();
        ProductPage::new(products, matching.len())
    }

    pub fn detail(&self, id: ProductId) -> Option<ProductDetail> {
        self.products.iter().find(|p| p.id == id).map(|p| ProductDetail {
            product: p.clone(),
            description: format!("Description of {}", p.title),
            images: vec![
                format!("https://cdn.example.com/{id}/1.jpg"),
                format!("https://cdn.example.com/{id}/2.jpg"),
            ],
        })
    }

    /// Hold requests for `(term, skip)` until the returned handle is notified
    pub fn gate(&self, term: &str, skip: usize) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        self.gates
            .lock()
            .insert((term.to_string(), skip), Arc::clone(&notify));
        notify
    }

    /// Make requests for `(term, skip)` fail with a network error
    pub fn fail(&self, term: &str, skip: usize) {
        self.failing.lock().insert((term.to_string(), skip));
    }

    pub fn recover(&self, term: &str, skip: usize) {
        self.failing.lock().remove(&(term.to_string(), skip));
    }

    pub fn calls(&self) -> Vec<PageQuery> {
        self.calls.lock().clone()
    }

    pub fn detail_calls(&self) -> Vec<ProductId> {
        self.detail_calls.lock().clone()
    }
}

impl CatalogProvider for MockCatalog {
    async fn fetch_page(&self, query: &PageQuery) -> Result<ProductPage> {
        self.calls.lock().push(query.clone());

        let key = (query.term.clone(), query.skip);
        let gate = self.gates.lock().get(&key).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        if self.failing.lock().contains(&key) {
            return Err(CatalogError::Network("connection reset".to_string()));
        }

        Ok(self.page(&query.term, query.skip, query.limit))
    }

    async fn fetch_detail(&self, id: ProductId) -> Result<ProductDetail> {
        self.detail_calls.lock().push(id);
        self.detail(id).ok_or(CatalogError::NotFound(id))
    }
}
