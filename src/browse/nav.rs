//! Navigation and scroll capability.
//!
//! The browser only needs to move between the list and a product's detail
//! view and to read or restore the list's scroll position. `Navigator`
//! captures that; `History` is the in-memory implementation used by the
//! terminal front end and tests.

use std::fmt;

use crate::types::ProductId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    List,
    Detail(ProductId),
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::List => write!(f, "/"),
            Route::Detail(id) => write!(f, "/product/{id}"),
        }
    }
}

pub trait Navigator: Send {
    /// Route currently displayed
    fn current(&self) -> Route;

    /// Navigate forward to `route`
    fn push(&mut self, route: Route);

    /// Go back one entry. Returns the route now displayed, or `None` when
    /// there is nothing to go back to. The bottom entry is always the list
    /// and is never popped.
    fn back(&mut self) -> Option<Route>;

    /// Drop every entry above the list and show the list at the top
    fn clear(&mut self);

    /// Current vertical scroll position of the visible view
    fn scroll_offset(&self) -> f64;

    fn scroll_to(&mut self, offset: f64);
}

/// Stack-based history starting at the list view
#[derive(Debug, Clone)]
pub struct History {
    stack: Vec<Route>,
    scroll: f64,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::List],
            scroll: 0.0,
        }
    }

}

impl Navigator for History {
    fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or(Route::List)
    }

    fn push(&mut self, route: Route) {
        self.stack.push(route);
        // A newly displayed view starts at the top.
        self.scroll = 0.0;
    }

    fn back(&mut self) -> Option<Route> {
        if self.stack.len() <= 1 {
            return None;
        }
        self.stack.pop();
        self.scroll = 0.0;
        Some(self.current())
    }

    fn clear(&mut self) {
        self.stack.truncate(1);
        self.scroll = 0.0;
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll
    }

    fn scroll_to(&mut self, offset: f64) {
        self.scroll = offset.max(0.0);
    }
}
