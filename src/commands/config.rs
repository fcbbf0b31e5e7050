//! `config show`: display the resolved configuration.

use owo_colors::OwoColorize;

use crate::config::Config;
use crate::error::Result;

use super::GlobalOptions;

pub fn cmd_config_show(opts: &GlobalOptions) -> Result<()> {
    let config = opts.config()?;

    let path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(no config directory)".to_string());
    println!("{} {}", "config file:".bold(), path);

    match config.api_base_url(opts.api_url.as_deref()) {
        Ok(url) => println!("{} {}", "api_url:".bold(), url),
        Err(e) => println!("{} {}", "api_url:".bold(), e.to_string().red()),
    }

    let timeout = match config.request_timeout() {
        Some(d) => format!("{}s", d.as_secs()),
        None => "disabled".to_string(),
    };
    println!("{} {}", "request_timeout:".bold(), timeout);

    Ok(())
}
