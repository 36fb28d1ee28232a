//! The single error shape surfaced by `RequestClient`.
//!
//! # Design
//! Transport failures, non-2xx statuses and undecodable bodies all collapse
//! into `ApiError`. Each variant keeps its origin for callers that want to
//! branch on it, but `Display` and `message()` yield only the normalized
//! message so a UI layer can render any of them the same way.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Errors returned by `RequestClient`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The round trip did not complete (DNS, refused connection, reset, ...).
    #[error("{message}")]
    Transport { message: String },

    /// The server answered with a status outside 200..=299.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// A success response whose body is not valid JSON, or not the expected shape.
    #[error("{message}")]
    Decode { message: String },

    /// The request payload could not be serialized to JSON.
    #[error("{message}")]
    Serialization { message: String },
}

impl ApiError {
    pub fn message(&self) -> &str {
        match self {
            ApiError::Transport { message }
            | ApiError::Http { message, .. }
            | ApiError::Decode { message }
            | ApiError::Serialization { message } => message,
        }
    }

    /// HTTP status for `Http` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Build the `Http` variant from a failed response's status and raw body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = ErrorBody::parse(body)
            .and_then(ErrorBody::into_message)
            .unwrap_or_else(|| format!("HTTP Error: {status}"));
        ApiError::Http { status, message }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode {
            message: e.to_string(),
        }
    }
}

/// Error payload the backend sends alongside a non-2xx status.
///
/// Both fields are optional; `error` takes precedence over `message`.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
}

impl ErrorBody {
    /// `None` for non-JSON bodies and JSON values that are not objects.
    pub fn parse(body: &str) -> Option<Self> {
        match serde_json::from_str::<Value>(body).ok()? {
            obj @ Value::Object(_) => serde_json::from_value(obj).ok(),
            _ => None,
        }
    }

    pub fn into_message(self) -> Option<String> {
        field_text(self.error).or_else(|| field_text(self.message))
    }
}

/// Falsy values (null, `false`, zero, empty string) count as absent; other
/// non-string values are rendered as compact JSON.
fn field_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_field_is_used_verbatim() {
        let err = ApiError::from_status(400, r#"{"error":"Missing required fields: lat"}"#);
        assert_eq!(err.to_string(), "Missing required fields: lat");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn message_field_is_used_when_error_absent() {
        let err = ApiError::from_status(404, r#"{"message":"not here"}"#);
        assert_eq!(err.message(), "not here");
    }

    #[test]
    fn error_takes_precedence_over_message() {
        let err = ApiError::from_status(500, r#"{"message":"second","error":"first"}"#);
        assert_eq!(err.message(), "first");
    }

    #[test]
    fn empty_error_falls_through_to_message() {
        let err = ApiError::from_status(500, r#"{"error":"","message":"fallback"}"#);
        assert_eq!(err.message(), "fallback");
    }

    #[test]
    fn falsy_error_flags_fall_through_to_message() {
        for body in [
            r#"{"error":false,"message":"Invalid input"}"#,
            r#"{"error":0,"message":"Invalid input"}"#,
            r#"{"error":0.0,"message":"Invalid input"}"#,
        ] {
            let err = ApiError::from_status(400, body);
            assert_eq!(err.message(), "Invalid input", "{body}");
        }
    }

    #[test]
    fn falsy_fields_alone_synthesize_status_message() {
        let err = ApiError::from_status(400, r#"{"error":false,"message":0}"#);
        assert_eq!(err.message(), "HTTP Error: 400");
    }

    #[test]
    fn truthy_non_string_error_is_kept() {
        assert_eq!(ApiError::from_status(400, r#"{"error":true}"#).message(), "true");
        assert_eq!(ApiError::from_status(400, r#"{"error":42}"#).message(), "42");
    }

    #[test]
    fn non_string_error_is_rendered_as_json() {
        let err = ApiError::from_status(422, r#"{"error":{"field":"lat"}}"#);
        assert_eq!(err.message(), r#"{"field":"lat"}"#);
    }

    #[test]
    fn non_json_body_synthesizes_status_message() {
        let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
        assert_eq!(err.message(), "HTTP Error: 502");
    }

    #[test]
    fn fieldless_object_synthesizes_status_message() {
        let err = ApiError::from_status(400, r#"{"success":false}"#);
        assert_eq!(err.message(), "HTTP Error: 400");
    }

    #[test]
    fn non_object_json_synthesizes_status_message() {
        assert_eq!(ApiError::from_status(500, r#""boom""#).message(), "HTTP Error: 500");
        assert_eq!(ApiError::from_status(500, "[1,2]").message(), "HTTP Error: 500");
        assert_eq!(ApiError::from_status(500, "").message(), "HTTP Error: 500");
    }

    #[test]
    fn null_fields_are_absent() {
        let err = ApiError::from_status(503, r#"{"error":null,"message":null}"#);
        assert_eq!(err.message(), "HTTP Error: 503");
    }

    #[test]
    fn decode_error_from_serde() {
        let serde_err = serde_json::from_str::<Value>("not json").unwrap_err();
        let err = ApiError::from(serde_err);
        assert!(matches!(err, ApiError::Decode { .. }));
        assert!(!err.message().is_empty());
        assert_eq!(err.status(), None);
    }
}
