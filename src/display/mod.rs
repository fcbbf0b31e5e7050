pub mod cli_formatting;
pub mod data_formatting;

pub use cli_formatting::*;
pub use data_formatting::*;

/// Format a price the way the storefront shows it: whole amounts without
/// decimals, fractional amounts with up to two.
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        return format!("${price:.0}");
    }
    let fixed = format!("{price:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("${trimmed}")
}
