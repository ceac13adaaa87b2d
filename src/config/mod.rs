//! Configuration management for loadsend.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! loadsend uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Environment variable overrides (`LOADSEND_*` prefix)
//! - Default values for optional settings
//! - Comprehensive validation
//! - Type-safe configuration structs
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use loadsend::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Load configuration from file
//! let config = load_config("loadsend.toml")?;
//!
//! // Access configuration sections
//! println!("API endpoint: {}", config.api.endpoint);
//! println!("Input file: {}", config.input.path);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! The configuration is organized into sections:
//!
//! - [`ApplicationConfig`] - Application settings (log level)
//! - [`ApiConfig`] - Load API connection and authentication
//! - [`InputConfig`] - Input table location and identifier column
//! - [`OutputConfig`] - Results file location and response truncation
//! - [`LoggingConfig`] - Local structured log files
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [api]
//! endpoint = "https://api.example.com/api/v1/loads"
//! organization_id = "b8411102-f0a5-423f-bd8a-c84734288fb1"
//! username = "api_user"
//! password = "${LOADSEND_API_PASSWORD}"
//!
//! [input]
//! path = "test_cases.csv"
//! id_column = "TEST_CASE_ID"
//!
//! [output]
//! results_path = "api_results.csv"
//! ```
//!
//! # Environment Variables
//!
//! Use `${VAR_NAME}` syntax for environment variable substitution:
//!
//! ```bash
//! export LOADSEND_API_PASSWORD="secret-password"
//! ```
//!
//! Any setting can also be overridden directly with a `LOADSEND_*`
//! environment variable, e.g. `LOADSEND_API_ENDPOINT` or
//! `LOADSEND_INPUT_PATH`.

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApiConfig, ApplicationConfig, InputConfig, LoadsendConfig, LoggingConfig, OutputConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
