//! Per-row submission outcomes
//!
//! Exactly one `SubmissionResult` is produced per input row, success or
//! failure, and never mutated after creation. The ordered collection of
//! results is the batch's durable output.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of submitting one test case
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionResult {
    /// Display identifier (`TEST_CASE_ID` column or `ROW_{n}` fallback)
    pub test_case_id: String,

    /// External shipment id from the row, empty when absent
    pub external_shipment_id: String,

    /// HTTP status code; `None` when the row failed before or during
    /// transport
    pub status_code: Option<u16>,

    /// True iff the server answered 200 or 201
    pub success: bool,

    /// Response body or error text, truncated for persistence
    pub response: String,

    /// Parsed response body; `{}` when the body was empty or not JSON
    pub response_json: Value,
}

impl SubmissionResult {
    /// Records a completed HTTP exchange
    pub fn from_response(
        test_case_id: String,
        external_shipment_id: String,
        status: u16,
        body: &str,
        body_json: Value,
        truncate_chars: usize,
    ) -> Self {
        Self {
            test_case_id,
            external_shipment_id,
            status_code: Some(status),
            success: matches!(status, 200 | 201),
            response: truncate(body, truncate_chars),
            response_json: body_json,
        }
    }

    /// Records a row that failed before a response was received
    pub fn from_error(
        test_case_id: String,
        external_shipment_id: String,
        error: impl std::fmt::Display,
    ) -> Self {
        Self {
            test_case_id,
            external_shipment_id,
            status_code: None,
            success: false,
            response: error.to_string(),
            response_json: Value::Object(serde_json::Map::new()),
        }
    }
}

/// Truncates to at most `max_chars` characters, respecting char boundaries
pub fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_statuses() {
        for status in [200u16, 201] {
            let result = SubmissionResult::from_response(
                "TC-1".to_string(),
                "SHIP-1".to_string(),
                status,
                "{}",
                serde_json::json!({}),
                500,
            );
            assert!(result.success);
            assert_eq!(result.status_code, Some(status));
        }
    }

    #[test]
    fn test_non_success_status() {
        let result = SubmissionResult::from_response(
            "TC-1".to_string(),
            "SHIP-1".to_string(),
            422,
            r#"{"error":"bad stop"}"#,
            serde_json::json!({"error": "bad stop"}),
            500,
        );
        assert!(!result.success);
        assert_eq!(result.status_code, Some(422));
        assert_eq!(result.response_json["error"], "bad stop");
    }

    #[test]
    fn test_error_result_has_no_status() {
        let result = SubmissionResult::from_error(
            "TC-2".to_string(),
            String::new(),
            "field ORIGIN_SEQUENCE_NUMBER is not numeric: 'abc'",
        );
        assert!(!result.success);
        assert_eq!(result.status_code, None);
        assert!(result.response.contains("ORIGIN_SEQUENCE_NUMBER"));
        assert_eq!(result.response_json, serde_json::json!({}));
    }

    #[test]
    fn test_response_truncation() {
        let body = "x".repeat(600);
        let result = SubmissionResult::from_response(
            "TC-3".to_string(),
            String::new(),
            500,
            &body,
            serde_json::json!({}),
            500,
        );
        assert_eq!(result.response.chars().count(), 500);
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let text = "héllo wörld";
        assert_eq!(truncate(text, 4), "héll");
        assert_eq!(truncate(text, 100), text);
    }
}
