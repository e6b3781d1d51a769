//! Response shape normalization.
//!
//! The backend is inconsistent: list endpoints answer either with a bare
//! JSON array or with `{"success": bool, "data": ..., "error": ...}`, while
//! computed endpoints always use the envelope.

use crate::error::{DashboardError, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    success: bool,
    #[serde(default)]
    data: Option<T>,
    #[serde(default)]
    error: Option<String>,
}

/// Decode a list from either a bare array or an envelope.
pub fn decode_list<T: DeserializeOwned>(endpoint: &str, body: Value) -> Result<Vec<T>> {
    match body {
        Value::Array(_) => serde_json::from_value(body).map_err(|e| decode_error(endpoint, e)),
        Value::Object(_) => decode_envelope(endpoint, body),
        other => Err(DashboardError::Decode {
            endpoint: endpoint.to_string(),
            reason: format!("expected an array or an envelope, got {}", kind(&other)),
        }),
    }
}

/// Decode the `data` of a `{success, data, error}` envelope.
///
/// `success: false` becomes [`DashboardError::Envelope`] carrying the
/// server's `error` text.
pub fn decode_envelope<T: DeserializeOwned>(endpoint: &str, body: Value) -> Result<T> {
    let envelope: Envelope<Value> =
        serde_json::from_value(body).map_err(|e| decode_error(endpoint, e))?;

    if !envelope.success {
        return Err(DashboardError::Envelope {
            endpoint: endpoint.to_string(),
            message: envelope
                .error
                .unwrap_or_else(|| "unknown error".to_string()),
        });
    }

    let data = envelope.data.ok_or_else(|| DashboardError::Decode {
        endpoint: endpoint.to_string(),
        reason: "successful envelope without data".to_string(),
    })?;
    serde_json::from_value(data).map_err(|e| decode_error(endpoint, e))
}

/// The `error` field of a rejection body, if it has one.
pub fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("error")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}

fn decode_error(endpoint: &str, error: serde_json::Error) -> DashboardError {
    DashboardError::Decode {
        endpoint: endpoint.to_string(),
        reason: error.to_string(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: u32,
    }

    #[test]
    fn test_bare_array() {
        let items: Vec<Item> = decode_list("/x", json!([{"id": 1}, {"id": 2}])).unwrap();
        assert_eq!(items, vec![Item { id: 1 }, Item { id: 2 }]);
    }

    #[test]
    fn test_enveloped_list() {
        let items: Vec<Item> =
            decode_list("/x", json!({"success": true, "data": [{"id": 7}]})).unwrap();
        assert_eq!(items, vec![Item { id: 7 }]);
    }

    #[test]
    fn test_failed_envelope_carries_message() {
        let err = decode_list::<Item>("/x", json!({"success": false, "error": "boom"})).unwrap_err();
        assert!(matches!(err, DashboardError::Envelope { ref message, .. } if message == "boom"));
        assert_eq!(err.server_message(), Some("boom"));
    }

    #[test]
    fn test_failed_envelope_without_message() {
        let err = decode_envelope::<Item>("/x", json!({"success": false})).unwrap_err();
        assert_eq!(err.server_message(), Some("unknown error"));
    }

    #[test]
    fn test_envelope_without_data_is_decode_error() {
        let err = decode_envelope::<Item>("/x", json!({"success": true})).unwrap_err();
        assert!(matches!(err, DashboardError::Decode { .. }));
    }

    #[test]
    fn test_scalar_body_is_decode_error() {
        let err = decode_list::<Item>("/x", json!("nope")).unwrap_err();
        assert!(err.to_string().contains("a string"));
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            error_message(r#"{"error": "merchant_id is required"}"#).as_deref(),
            Some("merchant_id is required")
        );
        assert_eq!(error_message(r#"{"error": ""}"#), None);
        assert_eq!(error_message("<html>502</html>"), None);
        assert_eq!(error_message(r#"{"detail": "x"}"#), None);
    }
}
