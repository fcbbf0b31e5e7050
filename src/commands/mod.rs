mod browse;
mod config;
mod list;
mod show;

pub use browse::{BrowseCommand, cmd_browse, parse_browse_command};
pub use config::cmd_config_show;
pub use list::{cmd_list, cmd_search};
pub use show::cmd_show;

use std::sync::Arc;

use crate::browse::{ListController, ListState, LoadOutcome};
use crate::config::Config;
use crate::error::{CatalogError, Result};
use crate::remote::{CatalogProvider, HttpCatalog};

/// Flags shared by every command that talks to the catalog API
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub api_url: Option<String>,
    pub timeout: Option<u64>,
}

impl GlobalOptions {
    /// Load configuration with CLI overrides applied
    pub fn config(&self) -> Result<Config> {
        let mut config = Config::load()?;
        if let Some(seconds) = self.timeout {
            config.set_request_timeout(seconds);
        }
        Ok(config)
    }

    /// Build the HTTP provider. Fails when no API URL is configured.
    pub fn provider(&self) -> Result<Arc<HttpCatalog>> {
        let config = self.config()?;
        Ok(Arc::new(HttpCatalog::from_config(
            &config,
            self.api_url.as_deref(),
        )?))
    }
}

/// Drive "load more" until `pages` pages are shown or the listing is
/// exhausted.
///
/// A failure on the first page is returned as-is. A failure on a later page
/// returns the partial listing along with the error.
pub(crate) async fn paginate<P: CatalogProvider>(
    controller: &ListController<P>,
    first: LoadOutcome,
    pages: usize,
) -> (ListState, Option<CatalogError>) {
    if let LoadOutcome::Failed(err) = first {
        return (controller.snapshot(), Some(err));
    }

    for _ in 1..pages.max(1) {
        match controller.load_more().await {
            LoadOutcome::Applied | LoadOutcome::Stale => {}
            LoadOutcome::Skipped => break,
            LoadOutcome::Failed(err) => return (controller.snapshot(), Some(err)),
        }
    }

    (controller.snapshot(), None)
}
