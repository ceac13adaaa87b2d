//! Location builder
//!
//! Assembles the address sub-object for a stop prefix. The primary address
//! line is the existence gate: no `{prefix}_LOCATION_ADDRESS1` means no
//! location at all, and therefore no stop.

use crate::domain::{Location, RawRecord};

/// Builds a location from `{prefix}_LOCATION_*` columns
///
/// Returns `None` when the cleaned `ADDRESS1` is absent. Otherwise every
/// field is defaulted independently: empty string for most, `"US"` for the
/// country code. The postal code is stringified even when the source stored
/// it as a number.
pub fn build_location(record: &RawRecord, prefix: &str) -> Option<Location> {
    let address1 = record.text(&format!("{prefix}_LOCATION_ADDRESS1"))?;

    Some(Location {
        name: record
            .text(&format!("{prefix}_LOCATION_NAME"))
            .unwrap_or_default(),
        location_code: record
            .text(&format!("{prefix}_LOCATION_CODE"))
            .unwrap_or_default(),
        address1,
        address2: record
            .text(&format!("{prefix}_LOCATION_ADDRESS2"))
            .unwrap_or_default(),
        city: record
            .text(&format!("{prefix}_LOCATION_CITY"))
            .unwrap_or_default(),
        state: record
            .text(&format!("{prefix}_LOCATION_STATE"))
            .unwrap_or_default(),
        postal_code: record
            .text(&format!("{prefix}_LOCATION_POSTAL_CODE"))
            .unwrap_or_default(),
        country_code: record
            .text(&format!("{prefix}_LOCATION_COUNTRY_CODE"))
            .unwrap_or_else(|| "US".to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_address1_gates_location() {
        let record = RawRecord::from_cells([
            ("ORIGIN_LOCATION_NAME", "Warehouse A"),
            ("ORIGIN_LOCATION_CITY", "Springfield"),
        ]);
        assert!(build_location(&record, "ORIGIN").is_none());
    }

    #[test]
    fn test_blank_address1_gates_location() {
        let record = RawRecord::from_cells([("ORIGIN_LOCATION_ADDRESS1", "   ")]);
        assert!(build_location(&record, "ORIGIN").is_none());
    }

    #[test]
    fn test_defaults_applied_independently() {
        let record = RawRecord::from_cells([("ORIGIN_LOCATION_ADDRESS1", "100 Main St")]);
        let location = build_location(&record, "ORIGIN").unwrap();

        assert_eq!(location.address1, "100 Main St");
        assert_eq!(location.name, "");
        assert_eq!(location.location_code, "");
        assert_eq!(location.city, "");
        assert_eq!(location.country_code, "US");
    }

    #[test]
    fn test_full_location() {
        let record = RawRecord::from_cells([
            ("DESTINATION_LOCATION_ADDRESS1", "200 Oak Ave"),
            ("DESTINATION_LOCATION_NAME", "DC 12"),
            ("DESTINATION_LOCATION_CODE", "DC12"),
            ("DESTINATION_LOCATION_ADDRESS2", "Dock 4"),
            ("DESTINATION_LOCATION_CITY", "Columbus"),
            ("DESTINATION_LOCATION_STATE", "OH"),
            ("DESTINATION_LOCATION_POSTAL_CODE", "43004"),
            ("DESTINATION_LOCATION_COUNTRY_CODE", "CA"),
        ]);
        let location = build_location(&record, "DESTINATION").unwrap();

        assert_eq!(location.name, "DC 12");
        assert_eq!(location.address2, "Dock 4");
        assert_eq!(location.state, "OH");
        // Numeric-looking postal codes come back as strings
        assert_eq!(location.postal_code, "43004");
        assert_eq!(location.country_code, "CA");
    }

    #[test]
    fn test_prefix_isolation() {
        // Origin columns must not leak into destination locations
        let record = RawRecord::from_cells([("ORIGIN_LOCATION_ADDRESS1", "100 Main St")]);
        assert!(build_location(&record, "DESTINATION").is_none());
    }
}
