//! Fetch Transport
//!
//! `HttpClient` over `window.fetch`. Only JS rejections (network down,
//! CORS, aborted) become errors; any HTTP status is a response.

use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use object_api::{HttpClient, HttpRequest, HttpResponse, TransportError};

#[derive(Debug, Clone, Copy, Default)]
pub struct FetchClient;

#[async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let window = web_sys::window().ok_or_else(|| TransportError::new("no window available"))?;

        let init = RequestInit::new();
        init.set_method(request.method.as_str());
        if let Some(body) = &request.body {
            init.set_body(&JsValue::from_str(body));
        }

        let js_request = Request::new_with_str_and_init(&request.url, &init).map_err(js_error)?;
        let headers = js_request.headers();
        headers.set("Accept", "application/json").map_err(js_error)?;
        if request.body.is_some() {
            headers.set("Content-Type", "application/json").map_err(js_error)?;
        }

        let value = JsFuture::from(window.fetch_with_request(&js_request))
            .await
            .map_err(js_error)?;
        let response: Response = value.dyn_into().map_err(js_error)?;
        let text = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;

        Ok(HttpResponse {
            status: response.status(),
            status_text: response.status_text(),
            body: text.as_string().unwrap_or_default(),
        })
    }
}

/// Readable message from a rejected JS promise
fn js_error(value: JsValue) -> TransportError {
    let message = match value.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => value.as_string().unwrap_or_else(|| format!("{:?}", value)),
    };
    TransportError::new(message)
}
