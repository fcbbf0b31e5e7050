use owo_colors::OwoColorize;

use crate::browse::{DetailView, ListState};
use crate::types::{Product, ProductDetail};

use super::format_price;

/// Format a product for single-line display with colors
pub fn format_product_line(product: &Product) -> String {
    let id_padded = format!("{:>5}", format!("#{}", product.id));
    let brand = if product.brand.is_empty() {
        String::new()
    } else {
        format!("{} ", product.brand.cyan())
    };
    format!(
        "{} {}{} {}",
        id_padded.dimmed(),
        brand,
        product.title.bold(),
        format_price(product.price).green()
    )
}

/// Render the list view: search header, products, status line and the
/// "load more" hint when more products are available
pub fn format_list_view(state: &ListState) -> String {
    let mut lines = Vec::new();

    if !state.query.is_empty() {
        lines.push(format!("Results for '{}'", state.query).bold().to_string());
    }

    for product in &state.items {
        lines.push(format_product_line(product));
    }

    if let Some(status) = state.status_message() {
        let styled = if state.phase.is_failed() {
            status.red().to_string()
        } else {
            status.yellow().to_string()
        };
        lines.push(styled);
    }

    if state.can_load_more() {
        lines.push(
            format!(
                "Showing {} products. Type 'more' to load more.",
                state.progress()
            )
            .dimmed()
            .to_string(),
        );
    } else if !state.items.is_empty() {
        lines.push(
            format!("Showing all {} products.", state.items.len())
                .dimmed()
                .to_string(),
        );
    }

    lines.join("\n")
}

/// Render a loaded product record
pub fn format_detail(detail: &ProductDetail) -> String {
    let product = &detail.product;
    let mut output = format!("# {}", product.title).bold().to_string();

    if !product.brand.is_empty() {
        output.push_str(&format!("\n{}", product.brand.cyan()));
    }
    output.push_str(&format!("\n{}", format_price(product.price).green()));

    if !detail.description.is_empty() {
        output.push_str(&format!("\n\n{}", detail.description));
    }

    if !product.thumbnail.is_empty() {
        output.push_str(&format!("\n\n{} {}", "Thumbnail:".dimmed(), product.thumbnail));
    }

    if !detail.images.is_empty() {
        output.push_str(&format!("\n{}", "Images:".dimmed()));
        for (i, image) in detail.images.iter().enumerate() {
            output.push_str(&format!("\n  {}. {}", i + 1, image));
        }
    }

    output
}

/// Render the detail view in whatever state its load is in
pub fn format_detail_view(view: &DetailView) -> String {
    match view {
        DetailView::Loading(_) => format!("Loading product {}...", view.id())
            .yellow()
            .to_string(),
        DetailView::Loaded(detail) => format_detail(detail),
        DetailView::Failed { message, .. } => format!(
            "{}\n{}",
            message.red(),
            "Type 'back' to return to the list.".dimmed()
        ),
    }
}
