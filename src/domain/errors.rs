//! Domain error types
//!
//! This module defines the error hierarchy for loadsend. All errors are
//! domain-specific and don't expose third-party types. Per-row failures
//! (building or sending) are caught at the row boundary by the batch runner
//! and converted into failed submission results; only setup errors escape.

use thiserror::Error;

/// Main loadsend error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum LoadsendError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Payload construction errors (row-level)
    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    /// Load API errors (row-level)
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Input table errors
    #[error("Input error: {0}")]
    Input(String),

    /// Result persistence errors
    #[error("Output error: {0}")]
    Output(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Payload construction errors
///
/// Raised by the mapping engine when a row's data cannot be turned into a
/// payload. Absence of an optional section is never an error; a present but
/// unparseable value is.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    /// A numeric field is present but not parseable
    #[error("field {field} is not numeric: '{value}'")]
    MalformedNumeric { field: String, value: String },
}

/// Load API errors
///
/// Errors that occur when submitting a payload. These don't expose the
/// underlying HTTP client types.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Failed to reach the API endpoint
    #[error("failed to connect to load API: {0}")]
    ConnectionFailed(String),

    /// Request timed out
    #[error("request timeout: {0}")]
    Timeout(String),

    /// Response could not be read
    #[error("invalid response from server: {0}")]
    InvalidResponse(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for LoadsendError {
    fn from(err: std::io::Error) -> Self {
        LoadsendError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for LoadsendError {
    fn from(err: serde_json::Error) -> Self {
        LoadsendError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for LoadsendError {
    fn from(err: toml::de::Error) -> Self {
        LoadsendError::Configuration(format!("TOML parse error: {err}"))
    }
}

// Conversion from csv errors
impl From<csv::Error> for LoadsendError {
    fn from(err: csv::Error) -> Self {
        LoadsendError::Input(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loadsend_error_display() {
        let err = LoadsendError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_build_error_conversion() {
        let build_err = BuildError::MalformedNumeric {
            field: "WEIGHT_VALUE".to_string(),
            value: "heavy".to_string(),
        };
        let err: LoadsendError = build_err.into();
        assert!(matches!(err, LoadsendError::Build(_)));
        assert!(err.to_string().contains("WEIGHT_VALUE"));
    }

    #[test]
    fn test_api_error_conversion() {
        let api_err = ApiError::ConnectionFailed("connection refused".to_string());
        let err: LoadsendError = api_err.into();
        assert!(matches!(err, LoadsendError::Api(_)));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: LoadsendError = io_err.into();
        assert!(matches!(err, LoadsendError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: LoadsendError = json_err.into();
        assert!(matches!(err, LoadsendError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: LoadsendError = toml_err.into();
        assert!(matches!(err, LoadsendError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_errors_implement_std_error() {
        let err = LoadsendError::Other("test".to_string());
        let _: &dyn std::error::Error = &err;
        let err = ApiError::Timeout("60s".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
