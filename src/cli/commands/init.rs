//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "loadsend.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing loadsend configuration");
        println!();

        // Check if file already exists
        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        // Write to file
        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Set your credentials:");
                println!("     export LOADSEND_API_USERNAME='your_username'");
                println!("     export LOADSEND_API_PASSWORD='your_password'");
                println!("  3. Validate configuration: loadsend validate-config");
                println!("  4. Submit test cases: loadsend send");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate the starter configuration
    fn generate_config() -> String {
        r#"# loadsend Configuration File
# Load API test-case submission tool

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

[api]
# Load-creation endpoint
endpoint = "https://api.example.com/api/v1/loads"

# Organization ID sent with every request (UUID)
organization_id = "00000000-0000-0000-0000-000000000000"

# Basic Authentication credentials (prefer environment variables)
# username = "${LOADSEND_API_USERNAME}"
# password = "${LOADSEND_API_PASSWORD}"

# Request timeout in seconds
timeout_seconds = 60

[input]
# Input table with one test case per row
path = "test_cases.csv"

# Column holding the display identifier for each row
id_column = "TEST_CASE_ID"

[output]
# Per-row outcomes are written here
results_path = "api_results.csv"

# Response bodies are truncated to this many characters in the results file
response_truncate_chars = 500

[logging]
# Enable local JSON file logging
local_enabled = false

# Local log file path
local_path = "logs"

# Log rotation (daily or hourly)
local_rotation = "daily"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_args_defaults() {
        let args = InitArgs {
            output: "loadsend.toml".to_string(),
            force: false,
        };

        assert_eq!(args.output, "loadsend.toml");
        assert!(!args.force);
    }

    #[test]
    fn test_generate_config_sections() {
        let config = InitArgs::generate_config();
        assert!(config.contains("[application]"));
        assert!(config.contains("[api]"));
        assert!(config.contains("[input]"));
        assert!(config.contains("[output]"));
        assert!(config.contains("[logging]"));
    }

    #[test]
    fn test_generated_config_parses() {
        let config = InitArgs::generate_config();
        let parsed: toml::Value = toml::from_str(&config).unwrap();
        assert!(parsed.get("api").is_some());
        assert_eq!(
            parsed["input"]["id_column"].as_str(),
            Some("TEST_CASE_ID")
        );
    }
}
