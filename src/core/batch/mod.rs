//! Batch submission orchestration
//!
//! Drives the row-by-row build/submit loop and aggregates the per-row
//! outcomes into a [`BatchSummary`].

pub mod runner;
pub mod summary;

pub use runner::BatchRunner;
pub use summary::BatchSummary;
