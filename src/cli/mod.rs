pub mod commands;
pub mod logging;
pub mod types;

use clap::Parser;
use log::error;
use std::path::PathBuf;

use rustyll_toc::config;
use types::Commands;

/// Run the command-line interface, returning the process exit code
pub fn run() -> i32 {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug, cli.quiet);

    let source = cli.source.clone().unwrap_or_else(|| PathBuf::from("./"));
    let config = match config::load_config(&source, cli.config.clone()) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config: {}", e);
            return 1;
        }
    };

    let result = match &cli.command {
        command @ Commands::Ids { .. } => commands::handle_ids_command(command, config),
        command @ Commands::Anchors { .. } => commands::handle_anchors_command(command, config),
        command @ Commands::Toc { .. } => commands::handle_toc_command(command, config),
        command @ Commands::Process { .. } => commands::handle_process_command(command, config),
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            error!("{}", e);
            1
        }
    }
}
