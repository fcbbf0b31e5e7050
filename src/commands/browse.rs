//! Interactive browsing over stdin.
//!
//! Each input line is one UI event; the session is rendered after every
//! event.

use std::io::Write;

use owo_colors::OwoColorize;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::browse::{History, LoadOutcome, Navigator, Route, Session};
use crate::display::{format_detail_view, format_list_view};
use crate::error::{CatalogError, Result};
use crate::remote::CatalogProvider;
use crate::types::ProductId;

use super::GlobalOptions;

const HELP: &str = "\
Commands:
  more             load the next page
  search <term>    search products
  type [text]      edit the search input without submitting (empty clears it)
  clear            clear the search input and show all products
  open <id>        show a product's details
  back             return to the previous view
  scroll <offset>  set the list's scroll position
  reset            start browsing from scratch
  help             show this help
  quit             exit";

#[derive(Debug, Clone, PartialEq)]
pub enum BrowseCommand {
    More,
    Search(String),
    Type(String),
    Open(ProductId),
    Back,
    Scroll(f64),
    Reset,
    Help,
    Quit,
}

/// Parse one input line
pub fn parse_browse_command(line: &str) -> Result<BrowseCommand> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "more" | "m" => BrowseCommand::More,
        "search" | "s" | "/" => BrowseCommand::Search(rest.to_string()),
        "type" => BrowseCommand::Type(rest.to_string()),
        "clear" => BrowseCommand::Type(String::new()),
        "open" | "o" => {
            let id = rest.parse::<ProductId>().map_err(|_| {
                CatalogError::Validation(format!("invalid product id '{rest}'"))
            })?;
            BrowseCommand::Open(id)
        }
        "back" | "b" => BrowseCommand::Back,
        "scroll" => {
            let offset = rest
                .parse::<f64>()
                .ok()
                .filter(|o| o.is_finite() && *o >= 0.0)
                .ok_or_else(|| {
                    CatalogError::Validation(format!("invalid scroll offset '{rest}'"))
                })?;
            BrowseCommand::Scroll(offset)
        }
        "reset" => BrowseCommand::Reset,
        "help" | "h" | "?" => BrowseCommand::Help,
        "quit" | "q" | "exit" => BrowseCommand::Quit,
        other => {
            return Err(CatalogError::Validation(format!(
                "unknown command '{other}' (type 'help' for a list)"
            )));
        }
    };

    Ok(command)
}

/// Run the interactive browser until stdin closes or the user quits
pub async fn cmd_browse(opts: &GlobalOptions) -> Result<()> {
    let provider = opts.provider()?;
    let mut session = Session::new(provider, History::new());

    report(session.open_list().await);
    render(&session);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{} ", format!("{} >", session.route()).dimmed());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_browse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{}", e.to_string().red());
                continue;
            }
        };

        if !apply(&mut session, command).await {
            break;
        }
    }

    Ok(())
}

/// Apply one command. Returns `false` when the loop should stop.
async fn apply<P: CatalogProvider, N: Navigator>(
    session: &mut Session<P, N>,
    command: BrowseCommand,
) -> bool {
    let on_list = session.route() == Route::List;

    match command {
        BrowseCommand::Quit => return false,
        BrowseCommand::Help => {
            println!("{HELP}");
            return true;
        }
        BrowseCommand::More if on_list => {
            let outcome = session.controller().load_more().await;
            if outcome.is_skipped() {
                println!("{}", "All products are already shown.".dimmed());
                return true;
            }
            report(outcome);
        }
        BrowseCommand::Search(term) if on_list => {
            match session.controller().search(&term).await {
                Ok(outcome) => report(outcome),
                Err(e) => {
                    eprintln!("{}", e.to_string().red());
                    return true;
                }
            }
        }
        BrowseCommand::Type(text) if on_list => {
            let outcome = session.controller().update_search_input(&text).await;
            if outcome.is_skipped() {
                return true;
            }
            report(outcome);
        }
        BrowseCommand::Open(id) if on_list => {
            session.open_detail(id).await;
        }
        BrowseCommand::Scroll(offset) if on_list => {
            session.navigator_mut().scroll_to(offset);
            return true;
        }
        BrowseCommand::Back => {
            if session.back().await.is_none() {
                println!("{}", "Already at the product list.".dimmed());
                return true;
            }
        }
        BrowseCommand::Reset => {
            session.reset();
            report(session.open_list().await);
        }
        _ => {
            eprintln!(
                "{}",
                "That command only works on the product list. Type 'back' first.".red()
            );
            return true;
        }
    }

    render(session);
    true
}

fn report(outcome: LoadOutcome) {
    // Failures are shown inline by the list view's status line.
    if let LoadOutcome::Stale = outcome {
        tracing::debug!("superseded load finished");
    }
}

fn render<P: CatalogProvider, N: Navigator>(session: &Session<P, N>) {
    match session.route() {
        Route::List => {
            let state = session.controller().snapshot();
            if !state.search_term.is_empty() {
                println!("{} {}", "Search:".dimmed(), state.search_term);
            }
            println!("{}", format_list_view(&state));
            let offset = session.navigator().scroll_offset();
            if offset > 0.0 {
                println!("{}", format!("(scroll position {offset})").dimmed());
            }
        }
        Route::Detail(_) => {
            if let Some(view) = session.detail() {
                println!("{}", format_detail_view(view));
            }
        }
    }
}
