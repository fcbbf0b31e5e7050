use serde::Serialize;
use serde_json::{Value, json};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::browse::ListState;
use crate::types::Product;

use super::format_price;

#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Brand")]
    brand: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Price")]
    price: String,
}

/// Format products as a table
pub fn product_table(products: &[Product]) -> String {
    let rows: Vec<ProductRow> = products
        .iter()
        .map(|p| ProductRow {
            id: p.id,
            brand: p.brand.clone(),
            title: p.title.clone(),
            price: format_price(p.price),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::modern());
    table.to_string()
}

/// Listing as JSON, for `--json` output
pub fn listing_json(state: &ListState) -> Value {
    json!({
        "query": state.query,
        "total": state.total,
        "cursor": state.cursor,
        "count": state.items.len(),
        "products": state.items,
    })
}

/// Pretty-print any serializable value
pub fn to_pretty_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}
