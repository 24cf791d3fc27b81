//! Application Context
//!
//! API configuration shared with every page via Leptos Context API.

use leptos::prelude::*;
use object_api::ApiConfig;

#[derive(Clone)]
pub struct AppContext {
    pub config: ApiConfig,
}

impl AppContext {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

/// Config from context, falling back to defaults outside `App`
pub fn use_api_config() -> ApiConfig {
    use_context::<AppContext>()
        .map(|ctx| ctx.config)
        .unwrap_or_default()
}
