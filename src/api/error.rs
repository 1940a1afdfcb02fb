//! API Error Types
//!
//! The backend reports failures FastAPI-style: a JSON body with a `detail`
//! field that is either a message string or a list of field errors. These
//! types keep that structure so pages can render it as-is.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Generic message for network-level failures
pub const NETWORK_MESSAGE: &str = "Something went wrong. Please try again.";

/// A single field validation error
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FieldError {
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub loc: Vec<Value>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl FieldError {
    /// Display text: the message, or the raw JSON when the entry has none
    fn display(&self, raw: &Value) -> String {
        if self.msg.is_empty() {
            raw.to_string()
        } else {
            self.msg.clone()
        }
    }
}

/// Parsed `detail` of an error response
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorDetail {
    /// `detail` was a string (or an object carrying `msg`)
    Message(String),
    /// `detail` was a list; one display line per entry
    Fields(Vec<String>),
    /// Body missing, not JSON, or no usable `detail`
    Unknown,
}

impl ErrorDetail {
    /// Parse an error response body
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(value) => Self::from_value(&value),
            Err(_) => ErrorDetail::Unknown,
        }
    }

    /// Parse an already-decoded JSON body
    pub fn from_value(value: &Value) -> Self {
        match value.get("detail") {
            Some(Value::String(s)) => ErrorDetail::Message(s.clone()),
            Some(Value::Array(entries)) => ErrorDetail::Fields(
                entries
                    .iter()
                    .map(|raw| match serde_json::from_value::<FieldError>(raw.clone()) {
                        Ok(field) => field.display(raw),
                        Err(_) => match raw {
                            Value::String(s) => s.clone(),
                            other => other.to_string(),
                        },
                    })
                    .collect(),
            ),
            Some(Value::Object(obj)) => match obj.get("msg") {
                Some(Value::String(msg)) => ErrorDetail::Message(msg.clone()),
                _ => ErrorDetail::Unknown,
            },
            _ => ErrorDetail::Unknown,
        }
    }

    /// Lines to render: one per list entry, one for a message, none otherwise
    pub fn items(&self) -> Vec<String> {
        match self {
            ErrorDetail::Message(msg) => vec![msg.clone()],
            ErrorDetail::Fields(fields) => fields.clone(),
            ErrorDetail::Unknown => Vec::new(),
        }
    }

    /// `detail` arrived as a list, so it renders as a list even with one entry
    pub fn is_list(&self) -> bool {
        matches!(self, ErrorDetail::Fields(_))
    }

    /// Everything joined into one line, or `None` when there is nothing to say
    pub fn summary(&self) -> Option<String> {
        match self {
            ErrorDetail::Message(msg) => Some(msg.clone()),
            ErrorDetail::Fields(fields) if !fields.is_empty() => Some(fields.join(", ")),
            _ => None,
        }
    }
}

fn detail_text(detail: &ErrorDetail) -> String {
    detail.summary().unwrap_or_else(|| "no detail".to_string())
}

/// Errors from talking to the backend
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Non-2xx response
    #[error("API error {status}: {}", detail_text(.detail))]
    Http { status: u16, detail: ErrorDetail },

    /// Request never produced a response (offline, DNS, CORS, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// Response arrived but did not match the expected shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// The request could not be built
    #[error("Request error: {0}")]
    Request(String),
}

impl ApiError {
    pub fn http(status: u16, body: &str) -> Self {
        ApiError::Http {
            status,
            detail: ErrorDetail::from_body(body),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text shown to the user. Backend detail is shown verbatim; anything
    /// without a backend message falls back to `fallback`, and network
    /// failures get the generic message.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Http { detail, .. } => detail.summary().unwrap_or_else(|| fallback.to_string()),
            ApiError::Network(_) => NETWORK_MESSAGE.to_string(),
            ApiError::Decode(_) | ApiError::Request(_) => fallback.to_string(),
        }
    }

    /// True when the backend sent a list-typed `detail`
    pub fn is_list(&self) -> bool {
        matches!(self, ApiError::Http { detail, .. } if detail.is_list())
    }

    /// Lines for list-style rendering (one per backend field error)
    pub fn items(&self, fallback: &str) -> Vec<String> {
        match self {
            ApiError::Http { detail, .. } => {
                let items = detail.items();
                if items.is_empty() {
                    vec![fallback.to_string()]
                } else {
                    items
                }
            }
            other => vec![other.user_message(fallback)],
        }
    }
}

/// Result type for API calls
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_detail() {
        let detail = ErrorDetail::from_body(r#"{"detail": "Invalid playlist URL"}"#);
        assert_eq!(detail, ErrorDetail::Message("Invalid playlist URL".into()));
        assert_eq!(detail.items(), vec!["Invalid playlist URL".to_string()]);
    }

    #[test]
    fn test_list_detail_one_item_per_entry() {
        let body = r#"{"detail": [
            {"loc": ["body", "youtube_url"], "msg": "field required", "type": "value_error.missing"},
            {"loc": ["body", "other"], "msg": "bad value", "type": "value_error"}
        ]}"#;
        let detail = ErrorDetail::from_body(body);
        assert_eq!(detail.items(), vec!["field required", "bad value"]);
        assert_eq!(detail.summary().as_deref(), Some("field required, bad value"));
    }

    #[test]
    fn test_single_entry_list_keeps_list_shape() {
        let list = ApiError::http(422, r#"{"detail": [{"msg": "field required"}]}"#);
        let message = ApiError::http(422, r#"{"detail": "field required"}"#);

        assert_eq!(list.items("x"), message.items("x"));
        assert!(list.is_list());
        assert!(!message.is_list());
        assert!(!ApiError::Network("offline".into()).is_list());
    }

    #[test]
    fn test_list_entry_without_msg_renders_raw_json() {
        let detail = ErrorDetail::from_body(r#"{"detail": [{"code": 3}]}"#);
        assert_eq!(detail.items(), vec![r#"{"code":3}"#.to_string()]);
    }

    #[test]
    fn test_object_detail_with_msg() {
        let detail = ErrorDetail::from_body(r#"{"detail": {"msg": "Video not found"}}"#);
        assert_eq!(detail, ErrorDetail::Message("Video not found".into()));
    }

    #[test]
    fn test_unusable_bodies() {
        assert_eq!(ErrorDetail::from_body("<html>502</html>"), ErrorDetail::Unknown);
        assert_eq!(ErrorDetail::from_body(r#"{"error": "x"}"#), ErrorDetail::Unknown);
        assert!(ErrorDetail::Unknown.items().is_empty());
    }

    #[test]
    fn test_user_message_taxonomy() {
        let http = ApiError::http(400, r#"{"detail": "Email already registered"}"#);
        assert_eq!(http.status(), Some(400));
        assert_eq!(http.user_message("Registration failed."), "Email already registered");

        let bare = ApiError::http(500, "");
        assert_eq!(bare.user_message("Registration failed."), "Registration failed.");
        assert_eq!(bare.items("Failed"), vec!["Failed".to_string()]);

        let network = ApiError::Network("connection refused".into());
        assert_eq!(network.user_message("ignored"), NETWORK_MESSAGE);
        assert_eq!(network.status(), None);
    }
}
