//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Configurable log levels
//! - Console output on stderr
//! - Optional JSON file logging with rotation
//!
//! Diagnostics always go through `tracing`; the per-row progress report is
//! plain stdout and is owned by the batch runner, not this module.
//!
//! # Example
//!
//! ```no_run
//! use loadsend::logging::init_logging;
//! use loadsend::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! // Use tracing macros for logging
//! tracing::info!("Application started");
//! tracing::error!(error = "Something went wrong", "Error occurred");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, resolve_logging, LoggingGuard};
