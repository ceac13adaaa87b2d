// loadsend - Load API test-case submission tool
// Copyright (c) 2025 loadsend Contributors
// Licensed under the MIT License

//! # loadsend - Load API test-case submission
//!
//! loadsend reads tabular logistics test cases, maps each row to a nested
//! load-creation payload, submits it to a load API with Basic Authentication,
//! and records one outcome per row in a results CSV.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Reading** test-case rows from a CSV table with loose typing
//! - **Building** nested load payloads (stops, locations, appointments,
//!   measurements, carrier, tender) from flat columns
//! - **Submitting** payloads over HTTP with Basic Auth and an
//!   organization header
//! - **Recording** one success-or-failure outcome per input row
//!
//! ## Architecture
//!
//! loadsend follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (payload building, batch orchestration)
//! - [`adapters`] - External integrations (load API, CSV tables)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use loadsend::adapters::api::HttpLoadApi;
//! use loadsend::adapters::table::{read_records, write_results};
//! use loadsend::config::load_config;
//! use loadsend::core::batch::BatchRunner;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("loadsend.toml")?;
//!
//!     let api = Arc::new(HttpLoadApi::new(config.api.clone())?);
//!     let records = read_records(&config.input.path)?;
//!
//!     let runner = BatchRunner::new(
//!         api,
//!         config.input.id_column.clone(),
//!         config.output.response_truncate_chars,
//!     );
//!     let summary = runner.run(&records).await;
//!     write_results(&config.output.results_path, &summary.results)?;
//!
//!     println!("Submitted {} loads, {} failed", summary.total, summary.failed);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! loadsend uses the [`domain::LoadsendError`] type for all errors:
//!
//! ```rust,no_run
//! use loadsend::domain::LoadsendError;
//!
//! fn example() -> Result<(), LoadsendError> {
//!     // Errors are automatically converted using the ? operator
//!     let config = loadsend::config::load_config("loadsend.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! loadsend uses structured logging with the `tracing` crate. Diagnostics
//! go to stderr; the per-row progress report is plain stdout.
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!("Starting batch");
//! warn!(test_case_id = "TC-1", "Submission failed");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
