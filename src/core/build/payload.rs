//! Load payload builder
//!
//! The top-level assembler: composes scalar fields, measurements, carrier,
//! stops, and the fixed tender/charges/references/metadata sections into one
//! payload per input row. Construction either fully succeeds or fails the
//! row; no partial payload is ever returned.

use crate::core::build::stop::build_stop;
use crate::domain::{BuildError, Carrier, Charges, LoadPayload, Measurement, Metadata, RawRecord, Tender};
use chrono::{DateTime, Utc};

/// Builds the complete load payload from one row
///
/// `created_at` stamps the tender and metadata timestamps; the batch runner
/// passes the current instant, tests pass a fixed one. Everything else is
/// derived from the row:
///
/// - seven top-level scalars take the cleaned value or a fixed default
/// - haul length and weight are included only when their `_VALUE` column is
///   present (units default to MI and LB independently)
/// - the carrier section is gated on `CARRIER_NAME`
/// - stops are attempted for ORIGIN then DESTINATION; zero, one, or two
///   stops are all valid
///
/// # Errors
///
/// Returns [`BuildError::MalformedNumeric`] when a present numeric column
/// (measurement value or stop sequence number) cannot be parsed.
pub fn build_load_payload(
    record: &RawRecord,
    created_at: DateTime<Utc>,
) -> Result<LoadPayload, BuildError> {
    let mut stops = Vec::with_capacity(2);
    for prefix in ["ORIGIN", "DESTINATION"] {
        if let Some(stop) = build_stop(record, prefix)? {
            stops.push(stop);
        }
    }

    Ok(LoadPayload {
        external_shipment_id: record.text("EXTERNAL_SHIPMENT_ID").unwrap_or_default(),
        external_tender_id: record.text("EXTERNAL_TENDER_ID").unwrap_or_default(),
        load_type: record
            .text("TYPE")
            .unwrap_or_else(|| "SHIPMENT".to_string()),
        status: record
            .text("STATUS")
            .unwrap_or_else(|| "TENDERED".to_string()),
        contract_type: record
            .text("CONTRACT_TYPE")
            .unwrap_or_else(|| "UNKNOWN".to_string()),
        mode: record
            .text("MODE")
            .unwrap_or_else(|| "TRUCKLOAD".to_string()),
        equipment_type: record.text("EQUIPMENT_TYPE").unwrap_or_default(),
        length_of_haul: build_measurement(record, "LENGTH_OF_HAUL", "MI")?,
        weight: build_measurement(record, "WEIGHT", "LB")?,
        tender: Tender::pending(created_at),
        carrier: build_carrier(record),
        stops,
        charges: Charges::default(),
        references: Vec::new(),
        metadata: Metadata::stamped(created_at),
    })
}

/// Builds a measurement from `{section}_VALUE` / `{section}_UNIT`
///
/// The value column is the existence gate; the unit defaults independently.
fn build_measurement(
    record: &RawRecord,
    section: &str,
    default_unit: &str,
) -> Result<Option<Measurement>, BuildError> {
    let value = match record.number(&format!("{section}_VALUE"))? {
        Some(value) => value,
        None => return Ok(None),
    };

    Ok(Some(Measurement {
        value,
        unit: record
            .text(&format!("{section}_UNIT"))
            .unwrap_or_else(|| default_unit.to_string()),
    }))
}

/// Builds the carrier section, gated on `CARRIER_NAME`
fn build_carrier(record: &RawRecord) -> Option<Carrier> {
    let name = record.text("CARRIER_NAME")?;

    Some(Carrier {
        name,
        external_reference: record.text("CARRIER_EXTERNAL_REFERENCE").unwrap_or_default(),
        scac: record.text("CARRIER_SCAC").unwrap_or_default(),
        dot: record.text("CARRIER_DOT").unwrap_or_default(),
        docket: record.text("CARRIER_DOCKET").unwrap_or_default(),
    })
}
