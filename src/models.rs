//! View Models
//!
//! Display-ready shapes produced by the controllers and rendered by
//! the components.

use object_api::{describe, format_timestamp, pretty_attributes, ApiConfig, ManagedObject};

/// Number of columns in the objects table
pub const TABLE_COLUMNS: usize = 7;

pub const NO_OBJECTS_TEXT: &str = "No objects found.";
pub const LOAD_FAILED_TEXT: &str = "Error loading data.";

/// One formatted table row
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub attributes_json: String,
    pub created_at: String,
    pub updated_at: String,
    pub edit_href: String,
}

impl ObjectRow {
    pub fn from_object(object: &ManagedObject, config: &ApiConfig) -> Self {
        Self {
            id: object.id.to_string(),
            name: object.name.clone(),
            description: describe(object.description.as_deref()).to_string(),
            attributes_json: pretty_attributes(&object.attributes),
            created_at: format_timestamp(&object.created_at),
            updated_at: format_timestamp(&object.updated_at),
            edit_href: config.edit_href(&object.id),
        }
    }
}

/// Contents of the table body
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TableBody {
    /// Nothing fetched yet
    #[default]
    Loading,
    Rows(Vec<ObjectRow>),
    /// Single "no objects" row
    Empty,
    /// Single error row
    Failed,
}

impl TableBody {
    pub fn from_rows(rows: Vec<ObjectRow>) -> Self {
        if rows.is_empty() {
            TableBody::Empty
        } else {
            TableBody::Rows(rows)
        }
    }

    /// Number of `<tr>` elements this body renders
    #[cfg(test)]
    pub fn row_count(&self) -> usize {
        match self {
            TableBody::Loading => 0,
            TableBody::Rows(rows) => rows.len(),
            TableBody::Empty | TableBody::Failed => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    pub fn css_class(self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

/// Message shown under the create form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Error, text: text.into() }
    }
}
