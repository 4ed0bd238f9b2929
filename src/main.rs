//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `api_finder` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Printing (and optionally appending) the discovered paths
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use api_finder::app::{append_results, print_results};
use api_finder::initialization::init_logger_with;
use api_finder::{run_discovery, Cli, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config: Config = Cli::parse().into();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let output = config.output.clone();
    match run_discovery(config).await {
        Ok(report) => {
            print_results(&report.paths);
            if let Some(path) = output {
                if let Err(e) = append_results(&path, &report.paths) {
                    eprintln!("api_finder error: failed to write {}: {e}", path.display());
                    process::exit(1);
                }
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("api_finder error: {:#}", e);
            process::exit(1);
        }
    }
}
