//! Product browsing: the list store, its pagination/search state machine,
//! detail loading, and navigation between the two views.

pub mod controller;
pub mod detail;
pub mod model;
pub mod nav;
pub mod session;

pub use controller::ListController;
pub use detail::{DetailFetcher, DetailView};
pub use model::{
    ListModel, ListState, LoadKind, LoadOutcome, LoadPhase, LoadRequest, normalize_search_term,
};
pub use nav::{History, Navigator, Route};
pub use session::Session;
