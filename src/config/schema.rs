//! Configuration schema types
//!
//! This module defines the configuration structure for loadsend.

use crate::config::SecretString;
use serde::{Deserialize, Serialize};

/// Main loadsend configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoadsendConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Load API configuration
    pub api: ApiConfig,

    /// Input table configuration
    pub input: InputConfig,

    /// Result persistence configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl LoadsendConfig {
    /// Validates the configuration
    ///
    /// Missing API credentials are deliberately not a validation error:
    /// requests are still attempted unauthenticated with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.api.validate()?;
        self.input.validate()?;
        self.output.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Load API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Full URL of the load-creation endpoint
    pub endpoint: String,

    /// Organization UUID sent as the `organization-id` header on every
    /// request
    pub organization_id: String,

    /// Username for Basic Authentication (optional)
    #[serde(default)]
    pub username: Option<String>,

    /// Password for Basic Authentication (optional)
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default)]
    pub password: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl ApiConfig {
    /// Returns true when both username and password are configured
    pub fn has_credentials(&self) -> bool {
        self.username.is_some() && self.password.is_some()
    }

    fn validate(&self) -> Result<(), String> {
        if self.endpoint.is_empty() {
            return Err("api.endpoint cannot be empty".to_string());
        }

        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err("api.endpoint must start with http:// or https://".to_string());
        }

        if uuid::Uuid::parse_str(&self.organization_id).is_err() {
            return Err(format!(
                "api.organization_id must be a UUID, got '{}'",
                self.organization_id
            ));
        }

        if self.timeout_seconds == 0 {
            return Err("api.timeout_seconds must be > 0".to_string());
        }

        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8080/api/v1/loads".to_string(),
            organization_id: "00000000-0000-0000-0000-000000000000".to_string(),
            username: None,
            password: None,
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

/// Input table configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Path to the CSV of test cases
    pub path: String,

    /// Column holding the display identifier for each row
    #[serde(default = "default_id_column")]
    pub id_column: String,
}

impl InputConfig {
    fn validate(&self) -> Result<(), String> {
        if self.path.is_empty() {
            return Err("input.path cannot be empty".to_string());
        }
        if self.id_column.is_empty() {
            return Err("input.id_column cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: "test_cases.csv".to_string(),
            id_column: default_id_column(),
        }
    }
}

/// Result persistence configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Path of the results CSV written after the batch completes
    #[serde(default = "default_results_path")]
    pub results_path: String,

    /// Maximum characters of response body kept per result row
    #[serde(default = "default_truncate_chars")]
    pub response_truncate_chars: usize,
}

impl OutputConfig {
    fn validate(&self) -> Result<(), String> {
        if self.results_path.is_empty() {
            return Err("output.results_path cannot be empty".to_string());
        }
        if self.response_truncate_chars == 0 {
            return Err("output.response_truncate_chars must be > 0".to_string());
        }
        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            results_path: default_results_path(),
            response_truncate_chars: default_truncate_chars(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging (console logging is always on)
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log file directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily or hourly)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout_seconds() -> u64 {
    60
}

fn default_id_column() -> String {
    "TEST_CASE_ID".to_string()
}

fn default_results_path() -> String {
    "api_results.csv".to_string()
}

fn default_truncate_chars() -> usize {
    500
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
