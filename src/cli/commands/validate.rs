//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the loadsend configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates after parsing, so a successful load means
        // the file is both well-formed and valid
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  API Endpoint: {}", config.api.endpoint);
        println!("  Organization ID: {}", config.api.organization_id);
        println!(
            "  Credentials: {}",
            if config.api.has_credentials() {
                "set"
            } else {
                "NOT SET (requests will be unauthenticated)"
            }
        );
        println!("  Request Timeout: {}s", config.api.timeout_seconds);
        println!("  Input: {}", config.input.path);
        println!("  ID Column: {}", config.input.id_column);
        println!("  Results: {}", config.output.results_path);
        println!();
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_args_creation() {
        let args = ValidateArgs {};
        // Just ensure it compiles and can be created
        let _ = format!("{args:?}");
    }
}
