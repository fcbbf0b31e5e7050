//! Async driver for the list state machine.
//!
//! The controller is cheap to clone; clones share the same store, so several
//! UI events can have loads outstanding at once while the generation check in
//! `ListModel::complete` keeps only the newest response.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::Result;
use crate::remote::CatalogProvider;

use super::model::{ListModel, ListState, LoadOutcome, LoadRequest, normalize_search_term};

pub struct ListController<P> {
    provider: Arc<P>,
    model: Arc<Mutex<ListModel>>,
}

impl<P> Clone for ListController<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            model: Arc::clone(&self.model),
        }
    }
}

impl<P: CatalogProvider> ListController<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self {
            provider,
            model: Arc::new(Mutex::new(ListModel::new())),
        }
    }

    pub fn provider(&self) -> &Arc<P> {
        &self.provider
    }

    /// Copy of the current list state for rendering
    pub fn snapshot(&self) -> ListState {
        self.model.lock().state().clone()
    }

    /// Entering the list view: load the first page unless items are retained
    pub async fn enter(&self) -> LoadOutcome {
        let request = self.model.lock().begin_enter();
        self.run(request).await
    }

    /// Unconditionally reload the first unfiltered page
    pub async fn reload(&self) -> LoadOutcome {
        let request = self.model.lock().begin_listing();
        self.run(Some(request)).await
    }

    /// "Load more": no-op once every product for the query is shown
    pub async fn load_more(&self) -> LoadOutcome {
        let request = self.model.lock().begin_load_more();
        self.run(request).await
    }

    /// Submit the current search input. A blank input is rejected without a
    /// request.
    pub async fn submit_search(&self) -> Result<LoadOutcome> {
        let request = self.model.lock().begin_search()?;
        Ok(self.run(Some(request)).await)
    }

    /// Type `term` into the search input and submit it. A blank term is
    /// rejected before the input changes, so it never triggers a reload.
    pub async fn search(&self, term: &str) -> Result<LoadOutcome> {
        normalize_search_term(term)?;
        let request = {
            let mut model = self.model.lock();
            model.set_search_term(term);
            model.begin_search()?
        };
        Ok(self.run(Some(request)).await)
    }

    /// The search input changed; clearing it reloads the unfiltered listing
    pub async fn update_search_input(&self, term: &str) -> LoadOutcome {
        let request = self.model.lock().set_search_term(term);
        self.run(request).await
    }

    pub fn record_scroll(&self, offset: f64) {
        self.model.lock().set_scroll_offset(offset);
    }

    pub fn scroll_offset(&self) -> f64 {
        self.model.lock().state().scroll_offset
    }

    /// Discard the whole store, e.g. when a browsing session restarts
    pub fn reset(&self) {
        self.model.lock().reset();
    }

    async fn run(&self, request: Option<LoadRequest>) -> LoadOutcome {
        let Some(request) = request else {
            return LoadOutcome::Skipped;
        };

        tracing::debug!(generation = request.generation, query = %request.query, "loading");
        // The lock is never held across the await.
        let result = self.provider.fetch_page(&request.query).await;
        self.model.lock().complete(&request, result)
    }
}
