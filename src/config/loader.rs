//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::LoadsendConfig;
use crate::config::secret::secret_string;
use crate::domain::errors::LoadsendError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into LoadsendConfig
/// 4. Applies environment variable overrides (`LOADSEND_*` prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use loadsend::config::load_config;
///
/// let config = load_config("loadsend.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<LoadsendConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LoadsendError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        LoadsendError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: LoadsendConfig = toml::from_str(&contents)
        .map_err(|e| LoadsendError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        LoadsendError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format `${VAR_NAME}`
///
/// Comment lines are left untouched so commented-out examples don't require
/// the variable to exist.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("static regex");
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(LoadsendError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the `LOADSEND_*` prefix
///
/// Environment variables follow the pattern `LOADSEND_<SECTION>_<KEY>`,
/// e.g. `LOADSEND_API_ENDPOINT`, `LOADSEND_INPUT_PATH`.
fn apply_env_overrides(config: &mut LoadsendConfig) {
    if let Ok(val) = std::env::var("LOADSEND_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("LOADSEND_API_ENDPOINT") {
        config.api.endpoint = val;
    }
    if let Ok(val) = std::env::var("LOADSEND_API_ORGANIZATION_ID") {
        config.api.organization_id = val;
    }
    if let Ok(val) = std::env::var("LOADSEND_API_USERNAME") {
        config.api.username = Some(val);
    }
    if let Ok(val) = std::env::var("LOADSEND_API_PASSWORD") {
        config.api.password = Some(secret_string(val));
    }
    if let Ok(val) = std::env::var("LOADSEND_API_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.api.timeout_seconds = timeout;
        }
    }

    if let Ok(val) = std::env::var("LOADSEND_INPUT_PATH") {
        config.input.path = val;
    }
    if let Ok(val) = std::env::var("LOADSEND_INPUT_ID_COLUMN") {
        config.input.id_column = val;
    }

    if let Ok(val) = std::env::var("LOADSEND_OUTPUT_RESULTS_PATH") {
        config.output.results_path = val;
    }

    if let Ok(val) = std::env::var("LOADSEND_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("LOADSEND_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}
