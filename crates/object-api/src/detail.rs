//! Error Detail Payloads
//!
//! Failure bodies carry `detail` as either a plain message or a list of
//! field-level validation errors (`{loc: [...], msg}`).

use std::fmt;

use serde::Deserialize;
use serde_json::Value;

/// One field-level validation error
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FieldError {
    #[serde(default)]
    pub loc: Vec<Value>,
    pub msg: String,
}

impl FieldError {
    /// Location path joined with dots, e.g. `body.name` or `body.items.0`
    pub fn path(&self) -> String {
        self.loc
            .iter()
            .map(|segment| match segment {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.path(), self.msg)
    }
}

/// The `detail` member of a failure body
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DetailPayload {
    Message(String),
    Fields(Vec<FieldError>),
    Other(Value),
}

impl fmt::Display for DetailPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetailPayload::Message(msg) => f.write_str(msg),
            DetailPayload::Fields(errors) => {
                let joined = errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                f.write_str(&joined)
            }
            DetailPayload::Other(value) => write!(f, "{}", value),
        }
    }
}

/// Failure body wrapper
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<DetailPayload>,
}

impl ErrorBody {
    /// Extract `detail` from a failure body.
    ///
    /// The body must be JSON; JSON of any other shape carries no detail,
    /// and neither does an empty message.
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(body)?;
        let mut parsed: ErrorBody = serde_json::from_value(value).unwrap_or_default();
        if matches!(&parsed.detail, Some(DetailPayload::Message(msg)) if msg.is_empty()) {
            parsed.detail = None;
        }
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_message() {
        let body = ErrorBody::parse(r#"{"detail": "Object not found"}"#).unwrap();
        assert_eq!(body.detail, Some(DetailPayload::Message("Object not found".into())));
        assert_eq!(body.detail.unwrap().to_string(), "Object not found");
    }

    #[test]
    fn test_field_errors_joined() {
        let body = ErrorBody::parse(
            r#"{"detail": [
                {"loc": ["body", "name"], "msg": "required", "type": "missing"},
                {"loc": ["body", "attributes", 0], "msg": "bad item"}
            ]}"#,
        )
        .unwrap();
        let text = body.detail.unwrap().to_string();
        assert_eq!(text, "body.name - required, body.attributes.0 - bad item");
    }

    #[test]
    fn test_unexpected_detail_shape() {
        let body = ErrorBody::parse(r#"{"detail": {"code": 3}}"#).unwrap();
        assert_eq!(body.detail.unwrap().to_string(), r#"{"code":3}"#);
    }

    #[test]
    fn test_missing_or_empty_detail() {
        assert_eq!(ErrorBody::parse(r#"{"error": "x"}"#).unwrap().detail, None);
        assert_eq!(ErrorBody::parse(r#"{"detail": null}"#).unwrap().detail, None);
        assert_eq!(ErrorBody::parse(r#"{"detail": ""}"#).unwrap().detail, None);
        assert_eq!(ErrorBody::parse(r#""plain string""#).unwrap().detail, None);
    }

    #[test]
    fn test_non_json_body_is_an_error() {
        assert!(ErrorBody::parse("<html>502 Bad Gateway</html>").is_err());
        assert!(ErrorBody::parse("").is_err());
    }
}
