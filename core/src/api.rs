//! Request plumbing shared by every resource handler.
//!
//! # Design
//! `Api` owns the resolved credentials and the transport. Handlers describe a
//! call as method + path + query (+ body); `Api` turns that into an
//! authenticated `HttpRequest`, executes it, maps the status to `Error`, and
//! peels the vendor's `{"<root>": ...}` envelopes off the JSON.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, warn};
use url::Url;

use crate::config::Config;
use crate::credentials::Credentials;
use crate::error::{Error, Result};
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::types::Model;

pub(crate) type Query = Vec<(&'static str, String)>;

pub(crate) struct Api {
    credentials: Credentials,
    base_url: String,
    user_agent: String,
    transport: Arc<dyn Transport>,
}

impl Api {
    pub fn new(credentials: Credentials, config: &Config, transport: Arc<dyn Transport>) -> Self {
        let base_url = match &config.host {
            Some(host) => host.trim_end_matches('/').to_string(),
            None => credentials.host(),
        };
        Self {
            credentials,
            base_url,
            user_agent: config.user_agent.clone(),
            transport,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build(&self, method: HttpMethod, path: &str, query: &[(&str, String)], body: Option<String>) -> Result<HttpRequest> {
        let raw = format!("{}{}", self.base_url, path);
        let mut url = Url::parse(&raw).map_err(|e| Error::InvalidUrl {
            reason: e.to_string(),
            url: raw,
        })?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(key, value)| (*key, value.as_str())));
        }

        let mut headers = vec![
            ("Accept".to_string(), "application/json".to_string()),
            ("User-Agent".to_string(), self.user_agent.clone()),
            ("Authorization".to_string(), self.credentials.authorization()),
        ];
        if body.is_some() {
            headers.push(("Content-Type".to_string(), "application/json; charset=utf-8".to_string()));
        }

        Ok(HttpRequest {
            method,
            url: url.into(),
            headers,
            body,
        })
    }

    pub fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let method = request.method;
        let url = request.url.clone();
        debug!(method = method.as_str(), %url, "harvest request");

        let response = self.transport.execute(request)?;
        debug!(method = method.as_str(), %url, status = response.status, "harvest response");

        check_status(&response)?;
        Ok(response)
    }

    pub fn call(&self, method: HttpMethod, path: &str, query: &[(&str, String)], body: Option<String>) -> Result<HttpResponse> {
        let request = self.build(method, path, query, body)?;
        self.send(request)
    }

    pub fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let response = self.call(HttpMethod::Get, path, query, None)?;
        decode(&response.body)
    }

    pub fn find<M: Model>(&self, path: &str, query: &[(&str, String)]) -> Result<M> {
        let value: Value = self.get_json(path, query)?;
        unwrap_one(value)
    }

    pub fn list<M: Model>(&self, path: &str, query: &[(&str, String)]) -> Result<Vec<M>> {
        let value: Value = self.get_json(path, query)?;
        unwrap_many(value)
    }

    /// POST `body` and return the id named by the `Location` header.
    pub fn create(&self, path: &str, query: &[(&str, String)], body: &Value) -> Result<u64> {
        let response = self.call(HttpMethod::Post, path, query, Some(encode(body)?))?;
        id_from_location(&response)
    }

    pub fn put(&self, path: &str, query: &[(&str, String)], body: &Value) -> Result<HttpResponse> {
        self.call(HttpMethod::Put, path, query, Some(encode(body)?))
    }

    pub fn post(&self, path: &str, query: &[(&str, String)], body: Option<&Value>) -> Result<HttpResponse> {
        let body = body.map(encode).transpose()?;
        self.call(HttpMethod::Post, path, query, body)
    }

    pub fn delete(&self, path: &str, query: &[(&str, String)]) -> Result<()> {
        self.call(HttpMethod::Delete, path, query, None)?;
        Ok(())
    }
}

/// Map non-success status codes to the matching `Error` variant.
pub(crate) fn check_status(response: &HttpResponse) -> Result<()> {
    if response.is_success() {
        return Ok(());
    }
    let body = response.body.clone();
    Err(match response.status {
        400 => Error::BadRequest { body },
        401 => Error::AuthenticationFailed,
        404 => Error::NotFound,
        500 => Error::Server { body },
        502 => Error::Unavailable,
        503 => {
            let retry_after = response.header("retry-after").and_then(|v| v.trim().parse().ok());
            warn!(?retry_after, "harvest rate limit reached");
            Error::RateLimited { retry_after }
        }
        status => Error::Http { status, body },
    })
}

/// The last numeric path segment of the `Location` header.
pub(crate) fn id_from_location(response: &HttpResponse) -> Result<u64> {
    let location = response
        .header("location")
        .ok_or(Error::MissingLocation(None))?;
    let path = location.split(['?', '#']).next().unwrap_or_default();
    path.rsplit('/')
        .find_map(|segment| segment.parse::<u64>().ok())
        .ok_or_else(|| Error::MissingLocation(Some(location.to_string())))
}

pub(crate) fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| Error::Deserialization(e.to_string()))
}

pub(crate) fn encode(value: &Value) -> Result<String> {
    serde_json::to_string(value).map_err(|e| Error::Serialization(e.to_string()))
}

pub(crate) fn to_value<T: serde::Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| Error::Serialization(e.to_string()))
}

/// `{"<root>": value}`
pub(crate) fn envelope(root: &str, value: Value) -> Value {
    let mut map = Map::new();
    map.insert(root.to_string(), value);
    Value::Object(map)
}

pub(crate) fn wrap<M: Model>(model: &M) -> Result<Value> {
    Ok(envelope(M::ROOT, to_value(model)?))
}

fn peel(root: &str, value: Value) -> Value {
    match value {
        Value::Object(mut map) if map.len() == 1 && map.contains_key(root) => map.remove(root).unwrap_or_default(),
        other => other,
    }
}

pub(crate) fn unwrap_one<M: Model>(value: Value) -> Result<M> {
    serde_json::from_value(peel(M::ROOT, value)).map_err(|e| Error::Deserialization(e.to_string()))
}

pub(crate) fn unwrap_many<M: Model>(value: Value) -> Result<Vec<M>> {
    match value {
        Value::Array(items) => items.into_iter().map(unwrap_one).collect(),
        other => Err(Error::Deserialization(format!("expected a JSON array, got {other}"))),
    }
}

pub(crate) fn of_user(user_id: Option<u64>) -> Query {
    user_id
        .map(|id| vec![("of_user", id.to_string())])
        .unwrap_or_default()
}

/// Report ranges use `YYYYMMDD`.
pub(crate) fn compact_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

pub(crate) fn timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}
