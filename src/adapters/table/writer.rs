//! Result persistence
//!
//! Writes the batch's submission results as a flat CSV, one row per input
//! row, after the batch completes.

use crate::domain::{LoadsendError, Result, SubmissionResult};
use std::path::Path;

/// Writes the full result set to `path`
///
/// Columns: test_case_id, external_shipment_id, status_code (blank when the
/// row never reached the server), success, response (already truncated by
/// the batch layer), response_json (compact JSON).
pub fn write_results(path: impl AsRef<Path>, results: &[SubmissionResult]) -> Result<()> {
    let path = path.as_ref();

    let mut writer = csv::Writer::from_path(path).map_err(|e| {
        LoadsendError::Output(format!(
            "Failed to create results file {}: {e}",
            path.display()
        ))
    })?;

    writer.write_record([
        "test_case_id",
        "external_shipment_id",
        "status_code",
        "success",
        "response",
        "response_json",
    ])?;

    for result in results {
        let status = result
            .status_code
            .map(|s| s.to_string())
            .unwrap_or_default();
        let response_json = serde_json::to_string(&result.response_json)?;

        writer.write_record([
            result.test_case_id.as_str(),
            result.external_shipment_id.as_str(),
            status.as_str(),
            if result.success { "true" } else { "false" },
            result.response.as_str(),
            response_json.as_str(),
        ])?;
    }

    writer
        .flush()
        .map_err(|e| LoadsendError::Output(format!("Failed to flush results file: {e}")))?;

    tracing::info!(path = %path.display(), rows = results.len(), "Wrote results file");

    Ok(())
}
