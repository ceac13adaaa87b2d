//! Load payload model
//!
//! Strictly-typed representation of the load-creation API's request body.
//! Every optional sub-object is either fully present with defaults applied
//! or entirely absent (`Option` + `skip_serializing_if`), never present with
//! null fields. Field declaration order matches the wire schema.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel appointment type meaning "no scheduling requirement"
pub const APPOINTMENT_TYPE_NONE: &str = "NONE";

/// A physical address, gated on `address1`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub location_code: String,
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub state: String,
    /// Stringified even when the source stored it as a number
    pub postal_code: String,
    /// Defaults to "US"
    pub country_code: String,
}

/// A scheduled time window for a stop
///
/// Either the sentinel `{type: "NONE"}` or a real type with only the
/// timestamp fields that were present. Absent timestamps are omitted from
/// the wire payload, never serialized as null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(rename = "type")]
    pub appointment_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_earliest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_latest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_earliest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_latest: Option<String>,
}

impl Appointment {
    /// The "no appointment" sentinel
    pub fn none() -> Self {
        Self {
            appointment_type: APPOINTMENT_TYPE_NONE.to_string(),
            scheduled_earliest: None,
            scheduled_latest: None,
            original_earliest: None,
            original_latest: None,
        }
    }

    /// Returns true if this is the sentinel appointment
    pub fn is_sentinel(&self) -> bool {
        self.appointment_type == APPOINTMENT_TYPE_NONE
    }
}

/// Recorded real-world arrival/departure for a stop
///
/// Exists only when at least one timestamp is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActualEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrived_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departed_at: Option<String>,
}

/// A pickup or delivery event within a load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub sequence_number: i64,
    pub stop_type: String,
    pub loading_type: String,
    pub location: Location,
    /// Always attached: the sentinel is meaningful output
    pub appointment: Appointment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<ActualEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A value with a unit (haul length in MI, weight in LB by default)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub value: f64,
    pub unit: String,
}

/// Carrier identity, gated on `name`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Carrier {
    pub name: String,
    pub external_reference: String,
    pub scac: String,
    pub dot: String,
    pub docket: String,
}

/// Tender lifecycle block; both timestamps reflect payload construction time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tender {
    pub status: String,
    pub tender_created_at: String,
    pub tendered_at: String,
}

impl Tender {
    /// A PENDING tender stamped at `created_at`
    pub fn pending(created_at: DateTime<Utc>) -> Self {
        let stamp = format_utc(created_at);
        Self {
            status: "PENDING".to_string(),
            tender_created_at: stamp.clone(),
            tendered_at: stamp,
        }
    }
}

/// Charges container; line items are not populated by this tool
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Charges {
    pub line_items: Vec<serde_json::Value>,
}

/// Customer/division reference inside the metadata block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyRef {
    pub external_id: String,
    pub name: String,
}

/// Fixed-shape metadata block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub shipment_created_at: String,
    pub source_system: String,
    pub commodity: String,
    pub customer: PartyRef,
    pub division: PartyRef,
    pub oversize: bool,
    pub temperature_controlled: bool,
    pub hazmat: bool,
}

impl Metadata {
    /// Default metadata stamped at `created_at`
    pub fn stamped(created_at: DateTime<Utc>) -> Self {
        Self {
            shipment_created_at: format_utc(created_at),
            source_system: "test".to_string(),
            commodity: String::new(),
            customer: PartyRef::default(),
            division: PartyRef::default(),
            oversize: false,
            temperature_controlled: false,
            hazmat: false,
        }
    }
}

/// The top-level load-creation request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadPayload {
    pub external_shipment_id: String,
    pub external_tender_id: String,
    #[serde(rename = "type")]
    pub load_type: String,
    pub status: String,
    pub contract_type: String,
    pub mode: String,
    pub equipment_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_of_haul: Option<Measurement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Measurement>,
    pub tender: Tender,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier: Option<Carrier>,
    pub stops: Vec<Stop>,
    pub charges: Charges,
    pub references: Vec<serde_json::Value>,
    pub metadata: Metadata,
}

/// Renders a UTC instant the way the API expects (ISO 8601 with a `Z`
/// suffix and microsecond precision)
pub fn format_utc(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}
