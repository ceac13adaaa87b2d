// loadsend - Load API test-case submission tool
// Copyright (c) 2025 loadsend Contributors
// Licensed under the MIT License

use clap::Parser;
use loadsend::cli::{Cli, Commands};
use loadsend::config::load_config;
use loadsend::logging::{init_logging, resolve_logging};
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    // This is optional - if .env doesn't exist, it's silently ignored
    let _ = dotenvy::dotenv();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging from the configuration file when it loads; a load
    // failure falls back to console-only defaults and is reported by the
    // command itself (`init` never needs a config to exist)
    let loaded = load_config(&cli.config).ok();
    let (log_level, logging_config) = resolve_logging(cli.log_level.as_deref(), loaded.as_ref());
    if let Err(e) = init_logging(&log_level, &logging_config) {
        eprintln!("Failed to initialize logging: {e}");
        process::exit(5);
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "loadsend - Load API test-case submission tool"
    );

    // Execute command and get exit code
    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5 // Fatal error exit code
        }
    };

    // Exit with appropriate code
    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Send(args) => args.execute(&cli.config).await,
        Commands::ValidateConfig(args) => args.execute(&cli.config).await,
        Commands::Init(args) => args.execute().await,
    }
}
