use clap::{Args, Parser, Subcommand};

use crate::commands::GlobalOptions;
use crate::types::ProductId;

#[derive(Parser)]
#[command(name = "catalog")]
#[command(about = "Browse a remote product catalog from the terminal")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Catalog API base URL (overrides CATALOG_API_URL and the config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Request timeout in seconds (0 disables)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Debug-level logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl GlobalArgs {
    pub fn options(&self) -> GlobalOptions {
        GlobalOptions {
            api_url: self.api_url.clone(),
            timeout: self.timeout,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List products
    #[command(visible_alias = "ls")]
    List {
        /// Number of pages to load
        #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u64).range(1..))]
        pages: u64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search products
    #[command(visible_alias = "s")]
    Search {
        /// Search term
        term: String,

        /// Number of pages to load
        #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u64).range(1..))]
        pages: u64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a product's details
    Show {
        /// Product ID
        id: ProductId,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Browse interactively
    #[command(visible_alias = "b")]
    Browse,

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the resolved configuration
    Show,
}
