//! Session-scoped browsing state.
//!
//! A `Session` is created once at the application root and handed to
//! whatever front end drives it. It owns the list store for the whole session
//! so that visiting a detail view and coming back shows the same listing at
//! the same scroll position without refetching.

use std::sync::Arc;

use crate::remote::CatalogProvider;
use crate::types::ProductId;

use super::controller::ListController;
use super::detail::{DetailFetcher, DetailView};
use super::model::LoadOutcome;
use super::nav::{Navigator, Route};

pub struct Session<P, N> {
    controller: ListController<P>,
    navigator: N,
    detail: Option<DetailView>,
}

impl<P: CatalogProvider, N: Navigator> Session<P, N> {
    pub fn new(provider: Arc<P>, navigator: N) -> Self {
        Self {
            controller: ListController::new(provider),
            navigator,
            detail: None,
        }
    }

    pub fn controller(&self) -> &ListController<P> {
        &self.controller
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    pub fn route(&self) -> Route {
        self.navigator.current()
    }

    /// The detail view of the current visit, if one is displayed
    pub fn detail(&self) -> Option<&DetailView> {
        self.detail.as_ref()
    }

    /// Mount the list view: restore the saved scroll position and load the
    /// first page if nothing is retained.
    pub async fn open_list(&mut self) -> LoadOutcome {
        let offset = self.controller.scroll_offset();
        self.navigator.scroll_to(offset);
        self.controller.enter().await
    }

    /// Leave the list for a product's detail view.
    ///
    /// The list's scroll position is saved first; the list store itself is
    /// left untouched.
    pub async fn open_detail(&mut self, id: ProductId) -> &DetailView {
        if self.navigator.current() == Route::List {
            self.controller.record_scroll(self.navigator.scroll_offset());
        }
        self.navigator.push(Route::Detail(id));
        self.load_detail(id).await
    }

    /// Go back one view. Returning to the list restores its scroll position
    /// and shows the retained listing as-is.
    pub async fn back(&mut self) -> Option<Route> {
        let route = self.navigator.back()?;
        match route {
            Route::List => {
                self.detail = None;
                let offset = self.controller.scroll_offset();
                self.navigator.scroll_to(offset);
            }
            Route::Detail(id) => {
                self.load_detail(id).await;
            }
        }
        Some(route)
    }

    /// Restart browsing from scratch: the list store is replaced wholesale
    /// and navigation returns to the list.
    pub fn reset(&mut self) {
        self.controller.reset();
        self.detail = None;
        self.navigator.clear();
    }

    async fn load_detail(&mut self, id: ProductId) -> &DetailView {
        self.detail = Some(DetailView::Loading(id));
        let view = DetailFetcher::load(self.controller.provider().as_ref(), id).await;
        self.detail.insert(view)
    }
}
