use clap::Parser;
use std::process::ExitCode;

use catalog::cli::{Cli, Commands, ConfigAction};
use catalog::commands::{cmd_browse, cmd_config_show, cmd_list, cmd_search, cmd_show};
use catalog::logging::{Verbosity, init_subscriber};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_subscriber(Verbosity::from_flags(cli.global.verbose, cli.global.quiet));
    let opts = cli.global.options();

    let result = match cli.command {
        Commands::List { pages, json } => cmd_list(&opts, pages as usize, json).await,
        Commands::Search { term, pages, json } => {
            cmd_search(&opts, &term, pages as usize, json).await
        }
        Commands::Show { id, json } => cmd_show(&opts, id, json).await,
        Commands::Browse => cmd_browse(&opts).await,
        Commands::Config { action } => match action {
            ConfigAction::Show => cmd_config_show(&opts),
        },
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
