mod cli;
mod commands;
mod error;
mod logging;
mod utils;

use crate::cli::{Cli, Commands};
use crate::error::{CliError, Result};
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("Elementa CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    if let Some(num_threads) = cli.threads {
        info!(
            "Setting Rayon global thread pool to {} threads.",
            num_threads
        );
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(|e| {
                CliError::Other(anyhow::anyhow!("Failed to build global thread pool: {}", e))
            })?;
    }

    let command_result = match &cli.command {
        Commands::Config(args) => {
            info!("Dispatching to 'config' command.");
            commands::config::run(args)
        }
        Commands::Element(args) => {
            info!("Dispatching to 'element' command.");
            commands::element::run(args, &cli.data)
        }
        Commands::Bond(args) => {
            info!("Dispatching to 'bond' command.");
            commands::bond::run(args, &cli.data)
        }
        Commands::Survey(args) => {
            info!("Dispatching to 'survey' command.");
            commands::survey::run(args, &cli.data, cli.quiet)
        }
        Commands::Additivity(args) => {
            info!("Dispatching to 'additivity' command.");
            commands::additivity::run(args).map(|_| ())
        }
    };

    match &command_result {
        Ok(()) => info!("Command completed successfully."),
        Err(e) => error!("Command failed: {}", e),
    }
    command_result
}
