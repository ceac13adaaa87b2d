//! Appointment builder
//!
//! Assembles the scheduling sub-object for a stop prefix. When the type is
//! absent or literally `"NONE"` the builder short-circuits to the sentinel
//! and ignores every timestamp column: a partial appointment is never built
//! without a real type.

use crate::domain::{Appointment, RawRecord};

/// Builds an appointment from `{prefix}_APPOINTMENT_*` columns
///
/// Always returns an appointment; "no appointment" is the meaningful
/// sentinel `{type: "NONE"}`, not absence. Timestamps pass through as
/// normalized strings without format validation, and absent timestamps are
/// omitted from the serialized object.
pub fn build_appointment(record: &RawRecord, prefix: &str) -> Appointment {
    let appointment_type = match record.text(&format!("{prefix}_APPOINTMENT_TYPE")) {
        Some(t) if t != "NONE" => t,
        _ => return Appointment::none(),
    };

    Appointment {
        appointment_type,
        scheduled_earliest: record.text(&format!("{prefix}_APPOINTMENT_SCHEDULED_EARLIEST")),
        scheduled_latest: record.text(&format!("{prefix}_APPOINTMENT_SCHEDULED_LATEST")),
        original_earliest: record.text(&format!("{prefix}_APPOINTMENT_ORIGINAL_EARLIEST")),
        original_latest: record.text(&format!("{prefix}_APPOINTMENT_ORIGINAL_LATEST")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_type_yields_sentinel() {
        let record = RawRecord::from_cells([(
            "ORIGIN_APPOINTMENT_SCHEDULED_EARLIEST",
            "2024-05-01T08:00:00",
        )]);
        let appt = build_appointment(&record, "ORIGIN");

        // Timestamps present in the row are deliberately ignored
        assert_eq!(appt, Appointment::none());
    }

    #[test]
    fn test_explicit_none_yields_sentinel() {
        let record = RawRecord::from_cells([
            ("ORIGIN_APPOINTMENT_TYPE", "NONE"),
            ("ORIGIN_APPOINTMENT_SCHEDULED_LATEST", "2024-05-01T17:00:00"),
        ]);
        assert!(build_appointment(&record, "ORIGIN").is_sentinel());
    }

    #[test]
    fn test_real_type_with_partial_timestamps() {
        let record = RawRecord::from_cells([
            ("ORIGIN_APPOINTMENT_TYPE", "SCHEDULED"),
            ("ORIGIN_APPOINTMENT_SCHEDULED_EARLIEST", "2024-05-01T08:00:00"),
            ("ORIGIN_APPOINTMENT_ORIGINAL_LATEST", "2024-05-01T18:00:00"),
        ]);
        let appt = build_appointment(&record, "ORIGIN");

        assert_eq!(appt.appointment_type, "SCHEDULED");
        assert_eq!(
            appt.scheduled_earliest.as_deref(),
            Some("2024-05-01T08:00:00")
        );
        assert!(appt.scheduled_latest.is_none());
        assert!(appt.original_earliest.is_none());
        assert_eq!(appt.original_latest.as_deref(), Some("2024-05-01T18:00:00"));
    }

    #[test]
    fn test_timestamps_pass_through_unvalidated() {
        let record = RawRecord::from_cells([
            ("ORIGIN_APPOINTMENT_TYPE", "FCFS"),
            ("ORIGIN_APPOINTMENT_SCHEDULED_EARLIEST", "sometime tuesday"),
        ]);
        let appt = build_appointment(&record, "ORIGIN");
        assert_eq!(appt.scheduled_earliest.as_deref(), Some("sometime tuesday"));
    }
}
