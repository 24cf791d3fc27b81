//! Browser API Wiring
//!
//! `fetch`-backed transport and the client constructor used by pages.

mod fetch;

pub use fetch::FetchClient;

use object_api::{ApiClient, ApiConfig};

/// Objects API client over the browser's `fetch`
pub fn browser_client(config: ApiConfig) -> ApiClient<FetchClient> {
    ApiClient::new(FetchClient, config)
}
