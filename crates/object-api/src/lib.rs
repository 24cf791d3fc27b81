//! Managed Objects API
//!
//! Target-independent half of the admin UI:
//! - model: ManagedObject and request/response bodies
//! - detail: structured `detail` error payloads
//! - attributes: client-side validation of the attributes text field
//! - timestamp: local display formatting
//! - transport / client: HTTP seam and the typed API over it

mod attributes;
mod client;
mod config;
mod detail;
mod error;
mod model;
mod timestamp;
mod transport;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use attributes::parse_attributes;
pub use client::ApiClient;
pub use config::{ApiConfig, ListQuery};
pub use detail::{DetailPayload, ErrorBody, FieldError};
pub use error::{ApiError, AttributesError, TransportError};
pub use model::{
    describe, pretty_attributes, Attributes, CreatedObject, ManagedObject, NewObject, ObjectId,
    DESCRIPTION_PLACEHOLDER,
};
pub use timestamp::{format_timestamp, INVALID_DATE};
pub use transport::{HttpClient, HttpRequest, HttpResponse, Method};
