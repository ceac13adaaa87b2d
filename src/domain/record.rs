//! Raw input records
//!
//! A `RawRecord` is one row of the input table: a mapping from column name
//! to a loosely-typed [`RawValue`]. It is the source of truth for one test
//! case and is never mutated during processing. Columns are optional; a
//! missing column behaves exactly like an absent value.

use crate::domain::errors::BuildError;
use crate::domain::value::RawValue;
use std::collections::BTreeMap;

/// One input row, keyed by column name
#[derive(Debug, Clone, Default)]
pub struct RawRecord {
    fields: BTreeMap<String, RawValue>,
}

impl RawRecord {
    /// Creates an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from (column, cell) pairs, inferring cell types
    pub fn from_cells<'a>(cells: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let fields = cells
            .into_iter()
            .map(|(name, cell)| (name.to_string(), RawValue::infer(cell)))
            .collect();
        Self { fields }
    }

    /// Sets a field value, replacing any previous value
    pub fn set(&mut self, name: impl Into<String>, value: RawValue) {
        self.fields.insert(name.into(), value);
    }

    /// Raw value for a column; `Absent` when the column does not exist
    pub fn get(&self, name: &str) -> &RawValue {
        self.fields.get(name).unwrap_or(&RawValue::Absent)
    }

    /// Cleaned string value for a column
    ///
    /// Returns `None` for missing columns, blank cells, and the missing-data
    /// sentinel. Numeric cells are stringified (postal codes stored as
    /// numbers come back without a trailing `.0`).
    pub fn text(&self, name: &str) -> Option<String> {
        self.get(name).cleaned_text()
    }

    /// Cleaned numeric value for a column
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MalformedNumeric`] when the cell is present but
    /// cannot be read as a number. Absence is not an error.
    pub fn number(&self, name: &str) -> Result<Option<f64>, BuildError> {
        match self.get(name).cleaned() {
            None => Ok(None),
            Some(RawValue::Number(n)) => Ok(Some(*n)),
            Some(RawValue::Text(s)) => {
                s.trim()
                    .parse::<f64>()
                    .map(Some)
                    .map_err(|_| BuildError::MalformedNumeric {
                        field: name.to_string(),
                        value: s.trim().to_string(),
                    })
            }
            Some(other) => Err(BuildError::MalformedNumeric {
                field: name.to_string(),
                value: other.to_string(),
            }),
        }
    }

    /// Cleaned integer value for a column
    ///
    /// Numeric cells truncate toward zero; text cells must parse as a whole
    /// number.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MalformedNumeric`] when the cell is present but
    /// not a usable integer.
    pub fn integer(&self, name: &str) -> Result<Option<i64>, BuildError> {
        match self.get(name).cleaned() {
            None => Ok(None),
            Some(RawValue::Number(n)) => Ok(Some(*n as i64)),
            Some(RawValue::Text(s)) => {
                s.trim()
                    .parse::<i64>()
                    .map(Some)
                    .map_err(|_| BuildError::MalformedNumeric {
                        field: name.to_string(),
                        value: s.trim().to_string(),
                    })
            }
            Some(other) => Err(BuildError::MalformedNumeric {
                field: name.to_string(),
                value: other.to_string(),
            }),
        }
    }

    /// Number of populated columns
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no columns
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
