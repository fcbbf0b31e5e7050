pub mod browse;
pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod remote;
pub mod types;

pub use browse::{
    DetailFetcher, DetailView, History, ListController, ListState, LoadOutcome, LoadPhase,
    Navigator, Route, Session,
};
pub use config::Config;
pub use error::{CatalogError, Result};
pub use remote::{CatalogProvider, HttpCatalog, PageQuery};
pub use types::{PAGE_SIZE, Product, ProductDetail, ProductId, ProductPage};
