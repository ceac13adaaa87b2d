//! External system integrations for loadsend.
//!
//! This module provides the simple I/O boundaries around the mapping
//! engine:
//!
//! - [`api`] - load-creation API submission (trait-based, reqwest-backed)
//! - [`table`] - tabular input reading and result persistence (CSV)
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate external dependencies
//! and enable testing with mock implementations. The API layer uses a
//! trait seam so the batch runner can be exercised without a network:
//!
//! ```rust,no_run
//! use loadsend::adapters::api::{HttpLoadApi, LoadApi};
//! use loadsend::config::ApiConfig;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ApiConfig::default();
//! let api = HttpLoadApi::new(config)?;
//! // Use api.submit_load(&payload) per row
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod table;
