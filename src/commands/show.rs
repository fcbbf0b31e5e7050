use crate::display::{format_detail, to_pretty_json};
use crate::error::Result;
use crate::remote::CatalogProvider;
use crate::types::ProductId;

use super::GlobalOptions;

/// Display a single product's full record
pub async fn cmd_show(opts: &GlobalOptions, id: ProductId, output_json: bool) -> Result<()> {
    let provider = opts.provider()?;
    let detail = provider.fetch_detail(id).await?;

    if output_json {
        println!("{}", to_pretty_json(&detail)?);
    } else {
        println!("{}", format_detail(&detail));
    }

    Ok(())
}
