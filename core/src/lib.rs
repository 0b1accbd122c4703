//! Blocking client for the Harvest time-tracking and invoicing API.
//!
//! # Overview
//! `Harvest` resolves credentials (basic auth against an account subdomain,
//! or an OAuth access token) and exposes one handler per vendor resource:
//! clients, contacts, projects, tasks, people, assignments, expenses, time
//! entries, reports, invoices and their payments and messages.
//!
//! # Design
//! - Requests and responses are plain data (`HttpRequest` / `HttpResponse`);
//!   the network sits behind the `Transport` trait, `ureq` by default.
//! - Handlers are built once per `Harvest` and share one `Arc`'d request core.
//! - DTOs mirror the vendor JSON field-for-field. Nothing is cached, retried
//!   or paginated behind the caller's back.

pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod http;
pub mod resources;
pub mod types;

mod api;
#[cfg(test)]
mod testing;

pub use client::Harvest;
pub use config::Config;
pub use credentials::Credentials;
pub use error::{Error, Result};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, UreqTransport};
pub use resources::{InvoiceFilter, ReportFilter};
pub use types::*;
