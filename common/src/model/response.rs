//! The `{ Status, Message?, Data? }` envelope returned by both collaborator
//! operations. Every field defaults so a malformed body deserializes into a
//! reportable failure instead of a crash.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(rename = "Status", default)]
    pub status: bool,
    #[serde(rename = "Message", default)]
    pub message: Option<String>,
    #[serde(rename = "Data", default)]
    pub data: Option<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default() {
        let response: ApiResponse<Vec<String>> = serde_json::from_str("{}").unwrap();
        assert!(!response.status);
        assert_eq!(response.message, None);
        assert_eq!(response.data, None);
    }

    #[test]
    fn full_envelope_roundtrips() {
        let json = r#"{"Status": true, "Message": "ok", "Data": ["a"]}"#;
        let response: ApiResponse<Vec<String>> = serde_json::from_str(json).unwrap();
        assert!(response.status);
        assert_eq!(response.message.as_deref(), Some("ok"));
        assert_eq!(response.data, Some(vec!["a".to_string()]));
    }
}
