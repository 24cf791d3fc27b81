//! API Models
//!
//! Data structures matching the server's object schema.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Opaque attribute mapping, kept in server order
pub type Attributes = Map<String, Value>;

/// Shown in place of a missing description
pub const DESCRIPTION_PLACEHOLDER: &str = "-";

/// Server-assigned object identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ObjectId {
    Int(i64),
    Text(String),
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectId::Int(id) => write!(f, "{}", id),
            ObjectId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for ObjectId {
    fn from(id: i64) -> Self {
        ObjectId::Int(id)
    }
}

/// Object as returned by the server (matches backend schema)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagedObject {
    pub id: ObjectId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub attributes: Attributes,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// POST body for object creation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewObject {
    pub name: String,
    pub description: Option<String>,
    pub attributes: Attributes,
}

/// Success body of a create call; only the id is relied upon
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatedObject {
    pub id: ObjectId,
    #[serde(default)]
    pub name: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Attributes, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Attributes>::deserialize(deserializer)?.unwrap_or_default())
}

/// Description text for display, falling back to the placeholder
pub fn describe(description: Option<&str>) -> &str {
    match description {
        Some(text) if !text.is_empty() => text,
        _ => DESCRIPTION_PLACEHOLDER,
    }
}

/// Two-space indented JSON, as shown in the attributes column
pub fn pretty_attributes(attributes: &Attributes) -> String {
    serde_json::to_string_pretty(attributes).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_server_object() {
        let raw = json!({
            "id": 7,
            "name": "pump",
            "description": null,
            "attributes": {"zeta": 1, "alpha": {"nested": true}},
            "created_at": "2024-05-01T10:00:00.123456",
            "updated_at": "2024-05-01T10:00:00.123456"
        });

        let obj: ManagedObject = serde_json::from_value(raw).unwrap();
        assert_eq!(obj.id, ObjectId::Int(7));
        assert_eq!(obj.description, None);
        // Server order survives
        let keys: Vec<&String> = obj.attributes.keys().collect();
        assert_eq!(keys, ["zeta", "alpha"]);
    }

    #[test]
    fn test_null_attributes_become_empty() {
        let obj: ManagedObject =
            serde_json::from_value(json!({"id": "abc", "name": "n", "attributes": null})).unwrap();
        assert!(obj.attributes.is_empty());
        assert_eq!(obj.id.to_string(), "abc");
        assert_eq!(obj.created_at, "");
    }

    #[test]
    fn test_new_object_sends_null_description() {
        let body = NewObject {
            name: "valve".to_string(),
            description: None,
            attributes: Attributes::new(),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value, json!({"name": "valve", "description": null, "attributes": {}}));
    }

    #[test]
    fn test_describe_placeholder() {
        assert_eq!(describe(None), "-");
        assert_eq!(describe(Some("")), "-");
        assert_eq!(describe(Some("main line")), "main line");
    }

    #[test]
    fn test_pretty_attributes_reparses() {
        let attrs = json!({"a": [1, 2], "b": {"c": null}}).as_object().cloned().unwrap();
        let text = pretty_attributes(&attrs);
        assert!(text.contains("\n  \"a\""));
        let back: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(back, Value::Object(attrs));
    }
}
