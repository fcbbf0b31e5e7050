//! List state and the pagination/search state machine.
//!
//! Transitions are split in two halves so they can be tested without any
//! I/O: a `begin_*` call decides whether a request is needed and hands back a
//! `LoadRequest`; `complete` later applies the response. Each `begin_*` bumps
//! the generation, and only the latest generation may write to the state, so
//! a slow response can never overwrite what a newer request produced.

use crate::error::{CatalogError, Result};
use crate::remote::PageQuery;
use crate::types::{PAGE_SIZE, Product, ProductPage};

// ============================================================================
// State Types
// ============================================================================

/// Progress of the most recent load
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    /// Last load failed; previously loaded items are still shown
    Failed(String),
}

impl LoadPhase {
    pub fn is_failed(&self) -> bool {
        matches!(self, LoadPhase::Failed(_))
    }
}

/// Listing data shared by the list view across navigations
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListState {
    /// Products in arrival order
    pub items: Vec<Product>,
    /// Skip offset for the next "load more"
    pub cursor: usize,
    /// Server-reported count of products matching `query`
    pub total: usize,
    /// Current contents of the search input
    pub search_term: String,
    /// Search term the current `items` were loaded for (empty = browse all)
    pub query: String,
    /// Vertical scroll position recorded before leaving for a detail view
    pub scroll_offset: f64,
    pub phase: LoadPhase,
}

impl ListState {
    /// Whether the "load more" affordance should be offered
    pub fn can_load_more(&self) -> bool {
        self.items.len() < self.total
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// Inline status line for the list view
    pub fn status_message(&self) -> Option<String> {
        match &self.phase {
            LoadPhase::Loading => Some("Loading...".to_string()),
            LoadPhase::Failed(message) => Some(format!("Failed to load products: {message}")),
            LoadPhase::Loaded if self.items.is_empty() => Some("No matching products.".to_string()),
            LoadPhase::Idle | LoadPhase::Loaded => None,
        }
    }

    /// "shown/total" counter
    pub fn progress(&self) -> String {
        format!("{}/{}", self.items.len(), self.total)
    }
}

// ============================================================================
// Requests and outcomes
// ============================================================================

/// How a completed page is merged into the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadKind {
    /// Fresh listing or search: items are replaced
    Replace,
    /// "Load more": items are appended
    Append,
}

/// A load that has been started and awaits its response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub generation: u64,
    pub kind: LoadKind,
    pub query: PageQuery,
}

/// Result of driving one transition
#[derive(Debug)]
pub enum LoadOutcome {
    /// Response was merged into the state
    Applied,
    /// Request failed; state kept its items and records the failure
    Failed(CatalogError),
    /// A newer request superseded this one; response discarded
    Stale,
    /// No request was needed
    Skipped,
}

impl LoadOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, LoadOutcome::Applied)
    }

    pub fn is_stale(&self) -> bool {
        matches!(self, LoadOutcome::Stale)
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, LoadOutcome::Skipped)
    }
}

/// Trim a search term, rejecting one that is blank
pub fn normalize_search_term(term: &str) -> Result<String> {
    let term = term.trim();
    if term.is_empty() {
        return Err(CatalogError::Validation(
            "Please enter a search term.".to_string(),
        ));
    }
    Ok(term.to_string())
}

// ============================================================================
// Model
// ============================================================================

/// The list store plus the bookkeeping needed to suppress stale responses
#[derive(Debug, Default)]
pub struct ListModel {
    state: ListState,
    generation: u64,
}

impl ListModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace the store wholesale. Any in-flight request becomes stale.
    pub fn reset(&mut self) {
        self.state = ListState::default();
        self.generation += 1;
    }

    /// Unfiltered first page, replacing whatever is shown.
    ///
    /// Used for the initial entry into the list and when the search input is
    /// cleared.
    pub fn begin_listing(&mut self) -> LoadRequest {
        self.begin(LoadKind::Replace, PageQuery::listing())
    }

    /// Initial load on entering the list view; skipped when items are retained
    /// from an earlier visit
    pub fn begin_enter(&mut self) -> Option<LoadRequest> {
        if self.state.items.is_empty() {
            Some(self.begin_listing())
        } else {
            None
        }
    }

    /// Next page of the committed query, or `None` at the boundary
    pub fn begin_load_more(&mut self) -> Option<LoadRequest> {
        if !self.state.can_load_more() {
            return None;
        }
        let query = PageQuery::new(self.state.query.clone(), self.state.cursor);
        Some(self.begin(LoadKind::Append, query))
    }

    /// First page of a search for the current input
    pub fn begin_search(&mut self) -> Result<LoadRequest> {
        let term = normalize_search_term(&self.state.search_term)?;
        Ok(self.begin(LoadKind::Replace, PageQuery::new(term, 0)))
    }

    /// Record a change to the search input. Clearing a non-empty input starts
    /// a fresh unfiltered load.
    pub fn set_search_term(&mut self, term: &str) -> Option<LoadRequest> {
        let was_empty = self.state.search_term.is_empty();
        self.state.search_term = term.to_string();
        if term.is_empty() && !was_empty {
            Some(self.begin_listing())
        } else {
            None
        }
    }

    pub fn set_scroll_offset(&mut self, offset: f64) {
        self.state.scroll_offset = if offset.is_finite() {
            offset.max(0.0)
        } else {
            0.0
        };
    }

    /// Merge the response for `request` if it is still the latest one
    pub fn complete(
        &mut self,
        request: &LoadRequest,
        result: Result<ProductPage>,
    ) -> LoadOutcome {
        if request.generation != self.generation {
            tracing::debug!(
                generation = request.generation,
                latest = self.generation,
                query = %request.query,
                "discarding stale response"
            );
            return LoadOutcome::Stale;
        }

        match result {
            Ok(page) => {
                self.apply_page(request, page);
                LoadOutcome::Applied
            }
            Err(err) => {
                tracing::warn!(query = %request.query, "load failed: {err}");
                self.state.phase = LoadPhase::Failed(err.to_string());
                LoadOutcome::Failed(err)
            }
        }
    }

    fn begin(&mut self, kind: LoadKind, query: PageQuery) -> LoadRequest {
        self.generation += 1;
        self.state.phase = LoadPhase::Loading;
        LoadRequest {
            generation: self.generation,
            kind,
            query,
        }
    }

    fn apply_page(&mut self, request: &LoadRequest, page: ProductPage) {
        let state = &mut self.state;
        match request.kind {
            LoadKind::Replace => {
                state.items = page.products;
                state.query = request.query.term.clone();
                state.cursor = PAGE_SIZE;
            }
            LoadKind::Append => {
                state.items.extend(page.products);
                state.cursor += PAGE_SIZE;
            }
        }
        state.total = page.total;

        if state.items.len() > state.total {
            tracing::warn!(
                items = state.items.len(),
                total = state.total,
                "server returned more products than its reported total; trimming"
            );
            state.items.truncate(state.total);
        }

        state.phase = LoadPhase::Loaded;
        tracing::info!(
            query = %request.query,
            shown = state.items.len(),
            total = state.total,
            "products loaded"
        );
    }
}
