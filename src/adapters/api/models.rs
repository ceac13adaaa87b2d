//! Load API response types

use serde_json::Value;

/// Raw outcome of one submission request
///
/// The client records what the server said without interpreting it beyond
/// the status code; success classification happens in the batch layer.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,

    /// Response body text, possibly empty
    pub body: String,

    /// Parsed response body; `{}` when the body is empty or not valid JSON
    pub json: Value,
}

impl ApiResponse {
    /// Builds a response, parsing the body leniently
    ///
    /// A non-empty body that is not valid JSON yields an empty map, not an
    /// error. This is the explicit fallback for servers that answer with
    /// plain-text error pages.
    pub fn new(status: u16, body: String) -> Self {
        let json = if body.is_empty() {
            Value::Object(serde_json::Map::new())
        } else {
            serde_json::from_str(&body).unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
        };

        Self { status, body, json }
    }

    /// Returns true iff the server accepted the load (200 or 201)
    pub fn is_success(&self) -> bool {
        matches!(self.status, 200 | 201)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_body_parses() {
        let response = ApiResponse::new(201, r#"{"id": "load-1"}"#.to_string());
        assert_eq!(response.json["id"], "load-1");
        assert!(response.is_success());
    }

    #[test]
    fn test_empty_body_yields_empty_map() {
        let response = ApiResponse::new(200, String::new());
        assert_eq!(response.json, serde_json::json!({}));
        assert!(response.is_success());
    }

    #[test]
    fn test_non_json_body_yields_empty_map() {
        let response = ApiResponse::new(502, "<html>Bad Gateway</html>".to_string());
        assert_eq!(response.json, serde_json::json!({}));
        assert_eq!(response.body, "<html>Bad Gateway</html>");
        assert!(!response.is_success());
    }

    #[test]
    fn test_422_is_not_success() {
        let response = ApiResponse::new(422, r#"{"errors":["bad stop"]}"#.to_string());
        assert!(!response.is_success());
        assert_eq!(response.json["errors"][0], "bad stop");
    }
}
