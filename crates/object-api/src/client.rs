//! Objects API Client
//!
//! Typed calls over an `HttpClient`. Each call is a single attempt: no
//! retry, no timeout, no cancellation.

use serde::de::DeserializeOwned;

use crate::config::{ApiConfig, ListQuery};
use crate::detail::ErrorBody;
use crate::error::ApiError;
use crate::model::{CreatedObject, ManagedObject, NewObject, ObjectId};
use crate::transport::{HttpClient, HttpRequest, HttpResponse};

#[derive(Debug, Clone)]
pub struct ApiClient<C> {
    http: C,
    config: ApiConfig,
}

impl<C: HttpClient> ApiClient<C> {
    pub fn new(http: C, config: ApiConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `GET /objects`
    pub async fn list_objects(&self, query: ListQuery) -> Result<Vec<ManagedObject>, ApiError> {
        let response = self.http.send(HttpRequest::get(self.config.list_url(query))).await?;
        decode(response)
    }

    /// `POST /objects`
    pub async fn create_object(&self, object: &NewObject) -> Result<CreatedObject, ApiError> {
        let body = serde_json::to_string(object)?;
        let request = HttpRequest::post_json(self.config.objects_url(), body);
        let response = self.http.send(request).await?;
        decode(response)
    }

    /// `GET /objects/{id}`
    pub async fn get_object(&self, id: &ObjectId) -> Result<ManagedObject, ApiError> {
        let response = self.http.send(HttpRequest::get(self.config.object_url(id))).await?;
        decode(response)
    }
}

fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    if !response.is_success() {
        log::debug!("[ApiClient] Rejected with status {}", response.status);
        let body = ErrorBody::parse(&response.body)?;
        return Err(ApiError::Rejected {
            status: response.status,
            status_text: response.status_text,
            detail: body.detail,
        });
    }
    Ok(serde_json::from_str(&response.body)?)
}
