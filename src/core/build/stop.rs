//! Stop builder
//!
//! Composes location + appointment + actual + notes into one stop for a
//! prefix (ORIGIN or DESTINATION). The location gate decides existence:
//! a stop without a location is no stop at all.

use crate::core::build::actual::build_actual;
use crate::core::build::appointment::build_appointment;
use crate::core::build::location::build_location;
use crate::domain::{BuildError, RawRecord, Stop};

/// Builds a stop from all `{prefix}_*` columns
///
/// Returns `Ok(None)` when the location gate fails, which is not an error.
/// The appointment is always attached, sentinel included: "no appointment"
/// is meaningful output, unlike the actual/notes fields which are omitted
/// when absent.
///
/// # Errors
///
/// Returns [`BuildError::MalformedNumeric`] when `{prefix}_SEQUENCE_NUMBER`
/// is present but not an integer. This surfaces as a per-row failure rather
/// than being swallowed.
pub fn build_stop(record: &RawRecord, prefix: &str) -> Result<Option<Stop>, BuildError> {
    let location = match build_location(record, prefix) {
        Some(location) => location,
        None => return Ok(None),
    };

    let sequence_number = record
        .integer(&format!("{prefix}_SEQUENCE_NUMBER"))?
        .unwrap_or(0);

    Ok(Some(Stop {
        sequence_number,
        stop_type: record
            .text(&format!("{prefix}_STOP_TYPE"))
            .unwrap_or_else(|| "PICKUP".to_string()),
        loading_type: record
            .text(&format!("{prefix}_LOADING_TYPE"))
            .unwrap_or_else(|| "LIVE".to_string()),
        location,
        appointment: build_appointment(record, prefix),
        actual: build_actual(record, prefix),
        notes: record.text(&format!("{prefix}_NOTES")),
    }))
}
