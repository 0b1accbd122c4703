//! Error types for the Harvest API client.
//!
//! # Design
//! Status codes the vendor documents get their own variant so callers can
//! react to "rate limited" or "bad credentials" without parsing bodies. Any
//! other non-2xx response lands in `Http` with the raw status and body.

use thiserror::Error;

/// Errors returned by `Harvest` and its resource handlers.
#[derive(Debug, Error)]
pub enum Error {
    /// Neither a complete basic-auth triple nor an access token was supplied.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The base URL and path did not form a valid absolute URL, usually a
    /// bad `host` override.
    #[error("invalid request URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// 400: the request was malformed or failed validation.
    #[error("bad request: {body}")]
    BadRequest { body: String },

    /// 401: the credentials were rejected.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// 404: the requested resource does not exist.
    #[error("resource not found")]
    NotFound,

    /// 500: the vendor reported an internal error.
    #[error("server error: {body}")]
    Server { body: String },

    /// 502: the vendor is down for maintenance or overloaded.
    #[error("service unavailable")]
    Unavailable,

    /// 503: the account exceeded its request quota.
    #[error("rate limited (retry after {retry_after:?}s)")]
    RateLimited { retry_after: Option<u64> },

    /// Any other non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// A creation response did not say where the new resource lives.
    #[error("missing or malformed Location header: {0:?}")]
    MissingLocation(Option<String>),

    /// The HTTP round-trip itself failed (DNS, TLS, timeout, ...).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, Error>;
