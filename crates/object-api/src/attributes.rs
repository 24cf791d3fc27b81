//! Attributes Field Validation
//!
//! The create form takes attributes as free text. Blank means an empty
//! mapping; anything else must be a JSON object.

use serde_json::Value;

use crate::error::AttributesError;
use crate::model::Attributes;

/// Parse the attributes text field into a mapping
pub fn parse_attributes(input: &str) -> Result<Attributes, AttributesError> {
    if input.trim().is_empty() {
        return Ok(Attributes::new());
    }
    match serde_json::from_str::<Value>(input)? {
        Value::Object(map) => Ok(map),
        _ => Err(AttributesError::NotAnObject),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blank_defaults_to_empty() {
        assert!(parse_attributes("").unwrap().is_empty());
        assert!(parse_attributes("  \n\t ").unwrap().is_empty());
    }

    #[test]
    fn test_object_accepted() {
        let attrs = parse_attributes(r#" {"color": "red", "size": 3} "#).unwrap();
        assert_eq!(attrs.get("color"), Some(&json!("red")));
        assert_eq!(attrs.len(), 2);
    }

    #[test]
    fn test_not_json_rejected() {
        let err = parse_attributes("not json").unwrap_err();
        assert!(matches!(err, AttributesError::InvalidJson(_)));
    }

    #[test]
    fn test_non_objects_rejected() {
        for input in ["[1,2]", "null", "42", r#""text""#, "true"] {
            let err = parse_attributes(input).unwrap_err();
            assert!(matches!(err, AttributesError::NotAnObject), "accepted {}", input);
        }
    }
}
