//! Test Doubles
//!
//! `StubClient` replays scripted responses in order and records every
//! request it was asked to send. Clones share the same script and log.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::TransportError;
use crate::transport::{HttpClient, HttpRequest, HttpResponse};

#[derive(Default)]
struct StubState {
    script: VecDeque<Result<HttpResponse, TransportError>>,
    requests: Vec<HttpRequest>,
}

#[derive(Clone, Default)]
pub struct StubClient {
    state: Rc<RefCell<StubState>>,
}

impl StubClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON response with the canonical reason phrase
    pub fn push_json(&self, status: u16, body: Value) {
        self.push_raw(status, reason_phrase(status), &body.to_string());
    }

    pub fn push_raw(&self, status: u16, status_text: &str, body: &str) {
        self.state.borrow_mut().script.push_back(Ok(HttpResponse {
            status,
            status_text: status_text.to_string(),
            body: body.to_string(),
        }));
    }

    /// Queue a transport-level failure (network down, CORS, ...)
    pub fn push_failure(&self, message: &str) {
        self.state
            .borrow_mut()
            .script
            .push_back(Err(TransportError::new(message)));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.state.borrow().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.borrow().requests.len()
    }
}

#[async_trait(?Send)]
impl HttpClient for StubClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut state = self.state.borrow_mut();
        state.requests.push(request);
        state
            .script
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::new("no scripted response")))
    }
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        400 => "Bad Request",
        404 => "Not Found",
        409 => "Conflict",
        422 => "Unprocessable Entity",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        _ => "",
    }
}
