//! Batch runner - drives one submission per input row
//!
//! The runner walks the input rows in order, builds a load payload for
//! each, submits it, and records exactly one [`SubmissionResult`] per row.
//! A row failure (malformed cell, rejection, transport error) never aborts
//! the batch; only setup errors are fatal and those are handled before the
//! runner starts.

use crate::adapters::api::LoadApi;
use crate::core::batch::summary::BatchSummary;
use crate::core::build::build_load_payload;
use crate::domain::{RawRecord, SubmissionResult};
use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;

/// Batch runner
pub struct BatchRunner {
    api: Arc<dyn LoadApi + Send + Sync>,
    id_column: String,
    truncate_chars: usize,
}

impl BatchRunner {
    /// Create a new batch runner
    pub fn new(
        api: Arc<dyn LoadApi + Send + Sync>,
        id_column: impl Into<String>,
        truncate_chars: usize,
    ) -> Self {
        Self {
            api,
            id_column: id_column.into(),
            truncate_chars,
        }
    }

    /// Process every row, returning one result per row in input order
    ///
    /// Console output is the user-facing progress report; diagnostics go
    /// through `tracing`.
    pub async fn run(&self, records: &[RawRecord]) -> BatchSummary {
        let start_time = Instant::now();
        let mut summary = BatchSummary::new();

        tracing::info!(
            rows = records.len(),
            endpoint = %self.api.endpoint(),
            "Starting batch submission"
        );

        for (idx, record) in records.iter().enumerate() {
            let test_case_id = record
                .text(&self.id_column)
                .unwrap_or_else(|| format!("ROW_{}", idx + 1));
            let external_shipment_id = record
                .text("EXTERNAL_SHIPMENT_ID")
                .unwrap_or_default();

            println!("Processing {test_case_id} ({external_shipment_id})...");

            let result = self
                .submit_row(record, test_case_id.clone(), external_shipment_id)
                .await;
            report_row(&result);
            summary.record(result);

            println!();
        }

        summary = summary.with_duration(start_time.elapsed());
        summary.log_summary();
        summary
    }

    /// Build and submit one row
    async fn submit_row(
        &self,
        record: &RawRecord,
        test_case_id: String,
        external_shipment_id: String,
    ) -> SubmissionResult {
        let payload = match build_load_payload(record, Utc::now()) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(
                    test_case_id = %test_case_id,
                    error = %e,
                    "Failed to build payload"
                );
                return SubmissionResult::from_error(test_case_id, external_shipment_id, e);
            }
        };

        match self.api.submit_load(&payload).await {
            Ok(response) => SubmissionResult::from_response(
                test_case_id,
                external_shipment_id,
                response.status,
                &response.body,
                response.json,
                self.truncate_chars,
            ),
            Err(e) => {
                tracing::warn!(
                    test_case_id = %test_case_id,
                    error = %e,
                    "Submission failed"
                );
                SubmissionResult::from_error(test_case_id, external_shipment_id, e)
            }
        }
    }
}

/// Console preview length for response bodies
const PREVIEW_CHARS: usize = 200;

fn report_row(result: &SubmissionResult) {
    match result.status_code {
        Some(status) if result.success => {
            println!("  \u{2713} Success (Status: {status})");
            if let Some(preview) = pretty_preview(&result.response_json, PREVIEW_CHARS) {
                println!("    Response: {preview}");
            }
        }
        Some(status) => {
            println!("  \u{2717} Failed (Status: {status})");
            if let Some(preview) = pretty_preview(&result.response_json, usize::MAX) {
                println!("    Response: {preview}");
            } else if !result.response.is_empty() {
                println!(
                    "    Response: {}",
                    crate::domain::outcome::truncate(&result.response, PREVIEW_CHARS)
                );
            } else {
                println!("    Response: (empty)");
            }
        }
        None => {
            println!("  \u{2717} Error: {}", result.response);
        }
    }
}

/// Pretty-printed JSON preview, `None` when the parsed body is empty
fn pretty_preview(json: &Value, max_chars: usize) -> Option<String> {
    if json.as_object().is_some_and(|o| o.is_empty()) {
        return None;
    }
    let rendered = serde_json::to_string_pretty(json).ok()?;
    Some(crate::domain::outcome::truncate(&rendered, max_chars))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::api::models::ApiResponse;
    use crate::domain::{ApiError, LoadPayload, LoadsendError, Result};
    use async_trait::async_trait;

    /// Canned-response stand-in for the HTTP client
    struct StubApi {
        responses: Vec<Result<ApiResponse>>,
        calls: std::sync::Mutex<usize>,
    }

    impl StubApi {
        fn new(responses: Vec<Result<ApiResponse>>) -> Self {
            Self {
                responses,
                calls: std::sync::Mutex::new(0),
            }
        }
    }

    #[async_trait]
    impl LoadApi for StubApi {
        async fn submit_load(&self, _payload: &LoadPayload) -> Result<ApiResponse> {
            let mut calls = self.calls.lock().unwrap();
            let response = match &self.responses[*calls] {
                Ok(r) => Ok(r.clone()),
                Err(_) => Err(LoadsendError::Api(ApiError::ConnectionFailed(
                    "connection refused".to_string(),
                ))),
            };
            *calls += 1;
            response
        }

        fn endpoint(&self) -> &str {
            "http://stub.local/api/v1/loads"
        }
    }

    fn record_with_id(id: &str) -> RawRecord {
        RawRecord::from_cells([
            ("TEST_CASE_ID", id),
            ("EXTERNAL_SHIPMENT_ID", "SHIP-1"),
            ("ORIGIN_LOCATION_ADDRESS1", "100 Main St"),
        ])
    }

    #[tokio::test]
    async fn test_run_records_one_result_per_row() {
        let api = Arc::new(StubApi::new(vec![
            Ok(ApiResponse::new(201, r#"{"id":"L1"}"#.to_string())),
            Ok(ApiResponse::new(422, r#"{"error":"bad stop"}"#.to_string())),
        ]));
        let runner = BatchRunner::new(api, "TEST_CASE_ID", 500);

        let records = vec![record_with_id("TC-1"), record_with_id("TC-2")];
        let summary = runner.run(&records).await;

        assert_eq!(summary.total, 2);
        assert_eq!(summary.successful, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.results[0].test_case_id, "TC-1");
        assert_eq!(summary.results[1].status_code, Some(422));
    }

    #[tokio::test]
    async fn test_row_fallback_identifier() {
        let api = Arc::new(StubApi::new(vec![Ok(ApiResponse::new(
            201,
            String::new(),
        ))]));
        let runner = BatchRunner::new(api, "TEST_CASE_ID", 500);

        let records = vec![RawRecord::from_cells([(
            "ORIGIN_LOCATION_ADDRESS1",
            "100 Main St",
        )])];
        let summary = runner.run(&records).await;

        assert_eq!(summary.results[0].test_case_id, "ROW_1");
        assert_eq!(summary.results[0].external_shipment_id, "");
    }

    #[tokio::test]
    async fn test_transport_error_does_not_abort_batch() {
        let api = Arc::new(StubApi::new(vec![
            Err(LoadsendError::Api(ApiError::ConnectionFailed(
                "connection refused".to_string(),
            ))),
            Ok(ApiResponse::new(200, String::new())),
        ]));
        let runner = BatchRunner::new(api, "TEST_CASE_ID", 500);

        let records = vec![record_with_id("TC-1"), record_with_id("TC-2")];
        let summary = runner.run(&records).await;

        assert_eq!(summary.total, 2);
        assert_eq!(summary.results[0].status_code, None);
        assert!(summary.results[0].response.contains("connection refused"));
        assert!(summary.results[1].success);
    }

    #[tokio::test]
    async fn test_build_failure_produces_error_result_without_submit() {
        let api = Arc::new(StubApi::new(vec![]));
        let runner = BatchRunner::new(api.clone(), "TEST_CASE_ID", 500);

        let records = vec![RawRecord::from_cells([
            ("TEST_CASE_ID", "TC-BAD"),
            ("ORIGIN_LOCATION_ADDRESS1", "100 Main St"),
            ("ORIGIN_SEQUENCE_NUMBER", "abc"),
        ])];
        let summary = runner.run(&records).await;

        assert_eq!(summary.failed, 1);
        assert_eq!(summary.results[0].status_code, None);
        assert!(summary.results[0].response.contains("ORIGIN_SEQUENCE_NUMBER"));
        assert_eq!(*api.calls.lock().unwrap(), 0);
    }
}
