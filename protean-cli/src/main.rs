use clap::Parser;
use colored::*;
use std::process;
use tracing_subscriber::EnvFilter;

mod cli;

use crate::cli::{Cli, Commands};
use protean_core::ProteanError;

fn main() {
    // Initialize logging with PROTEAN_LOG environment variable support
    let log_level = std::env::var("PROTEAN_LOG").unwrap_or_else(|_| "warn".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);

        // Use appropriate exit codes based on error type
        let exit_code = match e.downcast_ref::<ProteanError>() {
            Some(ProteanError::Configuration(_)) => 2,
            Some(ProteanError::Io(_)) => 3,
            Some(ProteanError::InvalidResidue { .. }) | Some(ProteanError::EmptyInput) => 4,
            Some(ProteanError::EmptyReferenceTable) => 5,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Analyze(args) => crate::cli::commands::analyze::run(args),
        Commands::Compare(args) => crate::cli::commands::compare::run(args),
        Commands::Validate(args) => crate::cli::commands::validate::run(args),
        Commands::Functions(args) => crate::cli::commands::functions::run(args),
    }
}
