//! Invoices, their item categories, payments and messages.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::{json, Value};

use crate::api::{compact_date, envelope, timestamp, wrap, Api, Query};
use crate::error::Result;
use crate::types::{Invoice, InvoiceCategory, InvoiceMessage, InvoicePayment, InvoiceState};

/// `/invoice_item_categories`
pub struct InvoiceCategories {
    api: Arc<Api>,
}

impl InvoiceCategories {
    pub(crate) fn new(api: Arc<Api>) -> Self {
        Self { api }
    }

    pub fn all(&self) -> Result<Vec<InvoiceCategory>> {
        self.api.list("/invoice_item_categories", &[])
    }

    pub fn find(&self, id: u64) -> Result<InvoiceCategory> {
        self.api.find(&format!("/invoice_item_categories/{id}"), &[])
    }

    pub fn create(&self, category: &InvoiceCategory) -> Result<InvoiceCategory> {
        let id = self.api.create("/invoice_item_categories", &[], &wrap(category)?)?;
        self.find(id)
    }

    pub fn update(&self, id: u64, category: &InvoiceCategory) -> Result<InvoiceCategory> {
        self.api
            .put(&format!("/invoice_item_categories/{id}"), &[], &wrap(category)?)?;
        self.find(id)
    }

    pub fn delete(&self, id: u64) -> Result<()> {
        self.api.delete(&format!("/invoice_item_categories/{id}"), &[])
    }
}

/// Narrowing for `Invoices::all`. The vendor pages results 50 at a time;
/// `page` starts at 1.
#[derive(Debug, Clone, Default)]
pub struct InvoiceFilter {
    pub page: Option<u32>,
    pub status: Option<InvoiceState>,
    pub client_id: Option<u64>,
    pub updated_since: Option<DateTime<Utc>>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl InvoiceFilter {
    fn query(&self) -> Query {
        let mut query = Query::new();
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(status) = self.status {
            query.push(("status", status.as_str().to_string()));
        }
        if let Some(client_id) = self.client_id {
            query.push(("client", client_id.to_string()));
        }
        if let Some(since) = self.updated_since {
            query.push(("updated_since", timestamp(since)));
        }
        if let Some(from) = self.from {
            query.push(("from", compact_date(from)));
        }
        if let Some(to) = self.to {
            query.push(("to", compact_date(to)));
        }
        query
    }
}

/// `/invoices`
pub struct Invoices {
    api: Arc<Api>,
}

impl Invoices {
    pub(crate) fn new(api: Arc<Api>) -> Self {
        Self { api }
    }

    pub fn all(&self, filter: &InvoiceFilter) -> Result<Vec<Invoice>> {
        self.api.list("/invoices", &filter.query())
    }

    pub fn find(&self, id: u64) -> Result<Invoice> {
        self.api.find(&format!("/invoices/{id}"), &[])
    }

    pub fn create(&self, invoice: &Invoice) -> Result<Invoice> {
        let id = self.api.create("/invoices", &[], &wrap(invoice)?)?;
        self.find(id)
    }

    pub fn update(&self, id: u64, invoice: &Invoice) -> Result<Invoice> {
        self.api.put(&format!("/invoices/{id}"), &[], &wrap(invoice)?)?;
        self.find(id)
    }

    pub fn delete(&self, id: u64) -> Result<()> {
        self.api.delete(&format!("/invoices/{id}"), &[])
    }
}

/// `/invoices/{invoice_id}/payments`
pub struct InvoicePayments {
    api: Arc<Api>,
}

impl InvoicePayments {
    pub(crate) fn new(api: Arc<Api>) -> Self {
        Self { api }
    }

    pub fn all(&self, invoice_id: u64) -> Result<Vec<InvoicePayment>> {
        self.api.list(&format!("/invoices/{invoice_id}/payments"), &[])
    }

    pub fn find(&self, invoice_id: u64, id: u64) -> Result<InvoicePayment> {
        self.api.find(&format!("/invoices/{invoice_id}/payments/{id}"), &[])
    }

    pub fn create(&self, payment: &InvoicePayment) -> Result<InvoicePayment> {
        let invoice_id = payment.invoice_id;
        let id = self
            .api
            .create(&format!("/invoices/{invoice_id}/payments"), &[], &wrap(payment)?)?;
        self.find(invoice_id, id)
    }

    pub fn delete(&self, invoice_id: u64, id: u64) -> Result<()> {
        self.api.delete(&format!("/invoices/{invoice_id}/payments/{id}"), &[])
    }
}

/// `/invoices/{invoice_id}/messages`
///
/// Creating a message emails the invoice. The state actions (`mark_as_sent`,
/// `mark_as_closed`, `re_open`) record a message without emailing anyone and
/// return the invoice in its new state.
pub struct InvoiceMessages {
    api: Arc<Api>,
}

impl InvoiceMessages {
    pub(crate) fn new(api: Arc<Api>) -> Self {
        Self { api }
    }

    pub fn all(&self, invoice_id: u64) -> Result<Vec<InvoiceMessage>> {
        self.api.list(&format!("/invoices/{invoice_id}/messages"), &[])
    }

    pub fn find(&self, invoice_id: u64, id: u64) -> Result<InvoiceMessage> {
        self.api.find(&format!("/invoices/{invoice_id}/messages/{id}"), &[])
    }

    pub fn create(&self, message: &InvoiceMessage) -> Result<InvoiceMessage> {
        let invoice_id = message.invoice_id;
        let id = self
            .api
            .create(&format!("/invoices/{invoice_id}/messages"), &[], &wrap(message)?)?;
        self.find(invoice_id, id)
    }

    pub fn delete(&self, invoice_id: u64, id: u64) -> Result<()> {
        self.api.delete(&format!("/invoices/{invoice_id}/messages/{id}"), &[])
    }

    /// Record `message` as sent by other means. Every set field travels.
    pub fn mark_as_sent(&self, message: &InvoiceMessage) -> Result<Invoice> {
        self.action(message.invoice_id, "mark_as_sent", Some(wrap(message)?))
    }

    pub fn mark_as_closed(&self, invoice_id: u64, body: Option<&str>) -> Result<Invoice> {
        let payload = body.map(|text| envelope("invoice_message", json!({ "body": text })));
        self.action(invoice_id, "mark_as_closed", payload)
    }

    pub fn re_open(&self, invoice_id: u64) -> Result<Invoice> {
        self.action(invoice_id, "re_open", None)
    }

    fn action(&self, invoice_id: u64, action: &str, payload: Option<Value>) -> Result<Invoice> {
        self.api.post(
            &format!("/invoices/{invoice_id}/messages/{action}"),
            &[],
            payload.as_ref(),
        )?;
        self.api.find(&format!("/invoices/{invoice_id}"), &[])
    }
}
