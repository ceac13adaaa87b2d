//! Actual-event builder
//!
//! Assembles the recorded arrival/departure sub-object for a stop prefix.
//! Unlike appointments there is no sentinel: when both timestamps are
//! absent the section is omitted entirely.

use crate::domain::{ActualEvent, RawRecord};

/// Builds an actual-event from `{prefix}_ACTUAL_*` columns
///
/// Returns `None` when both timestamps are absent; otherwise only the
/// present one(s) are populated. Never yields an empty object.
pub fn build_actual(record: &RawRecord, prefix: &str) -> Option<ActualEvent> {
    let arrived_at = record.text(&format!("{prefix}_ACTUAL_ARRIVED_AT"));
    let departed_at = record.text(&format!("{prefix}_ACTUAL_DEPARTED_AT"));

    if arrived_at.is_none() && departed_at.is_none() {
        return None;
    }

    Some(ActualEvent {
        arrived_at,
        departed_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_absent_yields_none() {
        let record = RawRecord::new();
        assert!(build_actual(&record, "ORIGIN").is_none());
    }

    #[test]
    fn test_arrival_only() {
        let record = RawRecord::from_cells([("ORIGIN_ACTUAL_ARRIVED_AT", "2024-05-01T09:15:00")]);
        let actual = build_actual(&record, "ORIGIN").unwrap();
        assert_eq!(actual.arrived_at.as_deref(), Some("2024-05-01T09:15:00"));
        assert!(actual.departed_at.is_none());
    }

    #[test]
    fn test_departure_only() {
        let record =
            RawRecord::from_cells([("DESTINATION_ACTUAL_DEPARTED_AT", "2024-05-02T14:00:00")]);
        let actual = build_actual(&record, "DESTINATION").unwrap();
        assert!(actual.arrived_at.is_none());
        assert_eq!(actual.departed_at.as_deref(), Some("2024-05-02T14:00:00"));
    }

    #[test]
    fn test_both_present() {
        let record = RawRecord::from_cells([
            ("ORIGIN_ACTUAL_ARRIVED_AT", "2024-05-01T09:15:00"),
            ("ORIGIN_ACTUAL_DEPARTED_AT", "2024-05-01T11:30:00"),
        ]);
        let actual = build_actual(&record, "ORIGIN").unwrap();
        assert!(actual.arrived_at.is_some() && actual.departed_at.is_some());
    }

    #[test]
    fn test_blank_cells_count_as_absent() {
        let record = RawRecord::from_cells([
            ("ORIGIN_ACTUAL_ARRIVED_AT", "  "),
            ("ORIGIN_ACTUAL_DEPARTED_AT", ""),
        ]);
        assert!(build_actual(&record, "ORIGIN").is_none());
    }
}
