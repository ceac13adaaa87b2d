//! Input table reading
//!
//! Reads a CSV of test cases into [`RawRecord`]s. Column presence is
//! optional per row; cell types are inferred so numeric and date-like
//! columns behave the way the mapping engine expects.

use crate::domain::{LoadsendError, RawRecord, RawValue, Result};
use std::path::Path;

/// Reads all rows of the input table
///
/// # Errors
///
/// An unreadable file or malformed CSV is a fatal setup error; no row
/// processing starts.
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<RawRecord>> {
    let path = path.as_ref();

    let mut reader = csv::Reader::from_path(path).map_err(|e| {
        LoadsendError::Input(format!("Failed to open input table {}: {e}", path.display()))
    })?;

    let headers = reader
        .headers()
        .map_err(|e| LoadsendError::Input(format!("Failed to read header row: {e}")))?
        .clone();

    let mut records = Vec::new();
    for (row_index, row) in reader.records().enumerate() {
        let row = row.map_err(|e| {
            LoadsendError::Input(format!("Failed to read row {}: {e}", row_index + 1))
        })?;

        let mut record = RawRecord::new();
        for (name, cell) in headers.iter().zip(row.iter()) {
            if !name.trim().is_empty() {
                record.set(name.trim(), RawValue::infer(cell));
            }
        }
        records.push(record);
    }

    if records.is_empty() {
        tracing::warn!(path = %path.display(), "Input table has no data rows");
    } else {
        tracing::info!(
            path = %path.display(),
            rows = records.len(),
            columns = headers.len(),
            "Read input table"
        );
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_read_simple_table() {
        let file = write_csv(
            "TEST_CASE_ID,ORIGIN_LOCATION_ADDRESS1,WEIGHT_VALUE\n\
             TC-1,100 Main St,500\n\
             TC-2,,\n",
        );
        let records = read_records(file.path()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].text("TEST_CASE_ID").as_deref(), Some("TC-1"));
        assert_eq!(records[0].get("WEIGHT_VALUE"), &RawValue::Number(500.0));
        // Empty cells behave as absent values
        assert!(records[1].text("ORIGIN_LOCATION_ADDRESS1").is_none());
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let result = read_records("/nonexistent/test_cases.csv");
        assert!(matches!(result, Err(LoadsendError::Input(_))));
    }

    #[test]
    fn test_empty_table_is_not_fatal() {
        let file = write_csv("TEST_CASE_ID,WEIGHT_VALUE\n");
        let records = read_records(file.path()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_type_inference_per_cell() {
        let file = write_csv(
            "A,B,C\n\
             hello,2024-05-01T08:00:00,12.5\n",
        );
        let records = read_records(file.path()).unwrap();
        assert!(matches!(records[0].get("A"), RawValue::Text(_)));
        assert!(matches!(records[0].get("B"), RawValue::DateTime(_)));
        assert_eq!(records[0].get("C"), &RawValue::Number(12.5));
    }
}
