//! Core business logic for loadsend.
//!
//! This module contains the row-to-payload mapping engine and the batch
//! orchestration that drives it.
//!
//! # Modules
//!
//! - [`build`] - Row-to-payload mapping (locations, appointments, stops,
//!   measurements, the full load payload)
//! - [`batch`] - Batch orchestration and per-row outcome tracking
//!
//! # Submission Workflow
//!
//! The typical run:
//!
//! 1. **Read Input**: Load the tabular test cases from CSV
//! 2. **Build**: Map each row to a nested load-creation payload
//! 3. **Submit**: POST the payload with Basic Auth and the organization header
//! 4. **Record**: Capture exactly one outcome per row
//! 5. **Report**: Print the summary and persist the results CSV
//!
//! # Example
//!
//! ```rust,no_run
//! use loadsend::adapters::api::HttpLoadApi;
//! use loadsend::adapters::table::read_records;
//! use loadsend::config::load_config;
//! use loadsend::core::batch::BatchRunner;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("loadsend.toml")?;
//!
//! let api = Arc::new(HttpLoadApi::new(config.api.clone())?);
//! let records = read_records(&config.input.path)?;
//!
//! let runner = BatchRunner::new(
//!     api,
//!     config.input.id_column.clone(),
//!     config.output.response_truncate_chars,
//! );
//! let summary = runner.run(&records).await;
//!
//! println!("Total: {}", summary.total);
//! println!("Successful: {}", summary.successful);
//! println!("Failed: {}", summary.failed);
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod build;
