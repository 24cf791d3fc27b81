//! UI Components
//!
//! Leptos views that bind the controllers to signals.

mod create_object_form;
mod objects_table;

pub use create_object_form::CreateObjectForm;
pub use objects_table::ObjectsTable;
