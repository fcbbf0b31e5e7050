use crate::browse::{ListController, ListState, normalize_search_term};
use crate::display::{listing_json, product_table, to_pretty_json};
use crate::error::{CatalogError, Result};

use super::{GlobalOptions, paginate};

/// List products, loading up to `pages` pages
pub async fn cmd_list(opts: &GlobalOptions, pages: usize, output_json: bool) -> Result<()> {
    let controller = ListController::new(opts.provider()?);
    let first = controller.enter().await;
    let (state, error) = paginate(&controller, first, pages).await;
    print_listing(&state, output_json, error)
}

/// Search products, loading up to `pages` pages of results
pub async fn cmd_search(
    opts: &GlobalOptions,
    term: &str,
    pages: usize,
    output_json: bool,
) -> Result<()> {
    // Reject a blank term before touching configuration or the network.
    normalize_search_term(term)?;

    let controller = ListController::new(opts.provider()?);
    let first = controller.search(term).await?;
    let (state, error) = paginate(&controller, first, pages).await;
    print_listing(&state, output_json, error)
}

fn print_listing(state: &ListState, output_json: bool, error: Option<CatalogError>) -> Result<()> {
    if output_json {
        println!("{}", to_pretty_json(&listing_json(state))?);
    } else if !state.items.is_empty() {
        println!("{}", product_table(&state.items));
        println!("Showing {} of {} products", state.items.len(), state.total);
    } else if error.is_none() {
        println!("No matching products.");
    }

    match error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
