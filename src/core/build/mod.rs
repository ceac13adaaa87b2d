//! Row-to-payload mapping engine
//!
//! Deterministic, field-by-field transformation from a flat [`RawRecord`]
//! into the nested [`LoadPayload`], composed leaf-first: location,
//! appointment, and actual-event builders feed the stop builder, which feeds
//! the payload builder. Each builder applies its own defaulting and
//! existence-gate rules; data flows strictly downward.
//!
//! [`RawRecord`]: crate::domain::RawRecord
//! [`LoadPayload`]: crate::domain::LoadPayload

pub mod actual;
pub mod appointment;
pub mod location;
pub mod payload;
pub mod stop;

pub use actual::build_actual;
pub use appointment::build_appointment;
pub use location::build_location;
pub use payload::build_load_payload;
pub use stop::build_stop;
