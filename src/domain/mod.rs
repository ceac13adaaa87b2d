//! Domain models and types for loadsend.
//!
//! This module contains the core domain models, types, and business rules.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Loosely-typed input** ([`RawValue`], [`RawRecord`]) with the value
//!   normalizer as a pure function over the tagged union
//! - **The payload model** ([`LoadPayload`], [`Stop`], [`Location`],
//!   [`Appointment`], [`ActualEvent`], [`Measurement`], [`Carrier`])
//! - **Outcome records** ([`SubmissionResult`])
//! - **Error types** ([`LoadsendError`], [`BuildError`], [`ApiError`])
//! - **Result type alias** ([`Result`])
//!
//! # Null handling
//!
//! The model enforces the all-or-nothing invariant for optional sections:
//! a sub-object is either fully present with defaults applied or entirely
//! absent from the serialized payload. `Option` fields carry
//! `skip_serializing_if` so absent values are omitted, never null.
//!
//! # Error handling
//!
//! All fallible operations return [`Result<T, LoadsendError>`]:
//!
//! ```
//! use loadsend::domain::{LoadsendError, Result};
//!
//! fn example() -> Result<()> {
//!     Err(LoadsendError::Input("no rows".to_string()))
//! }
//! ```

pub mod errors;
pub mod load;
pub mod outcome;
pub mod record;
pub mod result;
pub mod value;

// Re-export commonly used types for convenience
pub use errors::{ApiError, BuildError, LoadsendError};
pub use load::{
    ActualEvent, Appointment, Carrier, Charges, LoadPayload, Location, Measurement, Metadata,
    PartyRef, Stop, Tender,
};
pub use outcome::SubmissionResult;
pub use record::RawRecord;
pub use result::Result;
pub use value::RawValue;
