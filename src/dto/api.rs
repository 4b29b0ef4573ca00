//! JSON envelope shared by every backend endpoint.

use serde::Deserialize;

/// `responseCode` value the backend uses for successful calls.
pub const RESPONSE_OK: &str = "OK";

/// `{responseCode, result?, message?}` wrapper around every response body.
#[derive(Clone, Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    #[serde(rename = "responseCode")]
    pub response_code: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub result: Option<T>,
}

impl<T> ApiEnvelope<T> {
    pub fn is_ok(&self) -> bool {
        self.response_code == RESPONSE_OK
    }
}

/// Payload of the paginated listing endpoints.
#[derive(Clone, Debug, Deserialize)]
pub struct ListResult<T> {
    pub data: Vec<T>,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::organization::Organization;

    #[test]
    fn test_envelope_parses_list_payload() {
        let raw = r#"{
            "responseCode": "OK",
            "result": {"data": [{"id": 1, "name": "Acme", "code": "ACM"}], "count": 12}
        }"#;
        let envelope: ApiEnvelope<ListResult<Organization>> = serde_json::from_str(raw).unwrap();
        assert!(envelope.is_ok());
        assert!(envelope.message.is_none());
        let result = envelope.result.unwrap();
        assert_eq!(result.count, 12);
        assert_eq!(result.data[0].name, "Acme");
        assert_eq!(result.data[0].description, None);
    }

    #[test]
    fn test_envelope_parses_error_without_result() {
        let raw = r#"{"responseCode": "ERROR", "message": "boom"}"#;
        let envelope: ApiEnvelope<ListResult<Organization>> = serde_json::from_str(raw).unwrap();
        assert!(!envelope.is_ok());
        assert_eq!(envelope.message.as_deref(), Some("boom"));
        assert!(envelope.result.is_none());
    }
}
