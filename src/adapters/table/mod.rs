//! Tabular input/output adapter
//!
//! Row-oriented boundaries of the tool: reading test-case rows from a CSV
//! and persisting submission results to another.

pub mod reader;
pub mod writer;

pub use reader::read_records;
pub use writer::write_results;
