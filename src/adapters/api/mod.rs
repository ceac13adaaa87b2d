//! Load-creation API adapter
//!
//! The external collaborator boundary for submission: a [`LoadApi`] trait
//! seam plus the reqwest-backed [`HttpLoadApi`] implementation.

pub mod client;
pub mod models;

pub use client::{HttpLoadApi, LoadApi};
pub use models::ApiResponse;
