//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for loadsend using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// loadsend - Load API test-case submission tool
#[derive(Parser, Debug)]
#[command(name = "loadsend")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "loadsend.toml", env = "LOADSEND_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "LOADSEND_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build load payloads from the input table and submit them to the API
    Send(commands::send::SendArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
