//! In-memory transport for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::error::{Error, Result};
use crate::http::{HttpRequest, HttpResponse, Transport};

/// Replays queued responses in order and records every request it sees.
#[derive(Default)]
pub(crate) struct RecordingTransport {
    requests: Mutex<Vec<HttpRequest>>,
    responses: Mutex<VecDeque<HttpResponse>>,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push(&self, response: HttpResponse) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last(&self) -> HttpRequest {
        self.requests.lock().unwrap().last().cloned().expect("no request recorded")
    }
}

impl Transport for RecordingTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| Error::Transport("no response queued".to_string()))
    }
}

pub(crate) fn ok(body: &str) -> HttpResponse {
    HttpResponse {
        status: 200,
        headers: Vec::new(),
        body: body.to_string(),
    }
}

pub(crate) fn created(location: &str) -> HttpResponse {
    HttpResponse {
        status: 201,
        headers: vec![("Location".to_string(), location.to_string())],
        body: String::new(),
    }
}

pub(crate) fn status(code: u16) -> HttpResponse {
    HttpResponse {
        status: code,
        headers: Vec::new(),
        body: String::new(),
    }
}

pub(crate) const BASE: &str = "https://acme.harvestapp.com";

/// An `Api` for account `acme` with basic credentials over `transport`.
pub(crate) fn api(transport: Arc<RecordingTransport>) -> Arc<crate::api::Api> {
    let config = crate::config::Config::basic("acme", "jane", "secret");
    let creds = crate::credentials::Credentials::resolve(&config).unwrap();
    Arc::new(crate::api::Api::new(creds, &config, transport))
}
