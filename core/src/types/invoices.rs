use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::Model;

/// Invoice line-item category ("Service", "Product", ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InvoiceCategory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_as_service: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_as_expense: Option<bool>,
    #[serde(default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Model for InvoiceCategory {
    const ROOT: &'static str = "invoice_item_category";
}

/// Invoice lifecycle state.
///
/// `Unpaid` and `PastDue` never appear on an invoice; they only exist as
/// listing filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceState {
    Draft,
    Open,
    Partial,
    Paid,
    Closed,
    Unpaid,
    #[serde(rename = "pastdue")]
    PastDue,
}

impl InvoiceState {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceState::Draft => "draft",
            InvoiceState::Open => "open",
            InvoiceState::Partial => "partial",
            InvoiceState::Paid => "paid",
            InvoiceState::Closed => "closed",
            InvoiceState::Unpaid => "unpaid",
            InvoiceState::PastDue => "pastdue",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub client_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_order: Option<String>,
    /// `"free_form"`, `"project"`, `"task"`, `"people"` or `"detailed"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_at: Option<NaiveDate>,
    /// `"upon receipt"`, `"net 15"`, `"N30"`, ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_at_human_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_start: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_end: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    /// Project ids to pull hours from, comma separated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects_to_invoice: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import_hours: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import_expense: Option<String>,
    /// Line items as the vendor's CSV block
    /// (`kind,description,quantity,unit_price,amount,taxed,taxed2,project_id`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csv_line_items: Option<String>,
    #[serde(default, skip_serializing)]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing)]
    pub due_amount: Option<f64>,
    #[serde(default, skip_serializing)]
    pub tax_amount: Option<f64>,
    #[serde(default, skip_serializing)]
    pub tax2_amount: Option<f64>,
    #[serde(default, skip_serializing)]
    pub discount_amount: Option<f64>,
    #[serde(default, skip_serializing)]
    pub state: Option<InvoiceState>,
    #[serde(default, skip_serializing)]
    pub client_key: Option<String>,
    #[serde(default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Model for Invoice {
    const ROOT: &'static str = "invoice";
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InvoicePayment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub invoice_id: u64,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing)]
    pub recorded_by: Option<String>,
    #[serde(default, skip_serializing)]
    pub recorded_by_email: Option<String>,
    #[serde(default, skip_serializing)]
    pub pay_pal_transaction_id: Option<String>,
    #[serde(default, skip_serializing)]
    pub authorization: Option<String>,
    #[serde(default, skip_serializing)]
    pub payment_gateway_id: Option<u64>,
    #[serde(default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Model for InvoicePayment {
    const ROOT: &'static str = "payment";
}

/// An email sent (or recorded as sent) for an invoice.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InvoiceMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub invoice_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Comma-separated addresses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipients: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attach_pdf: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_me_a_copy: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_pay_pal_link: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thank_you: Option<bool>,
    #[serde(default, skip_serializing)]
    pub full_recipient_list: Option<String>,
    #[serde(default, skip_serializing)]
    pub sent_by: Option<String>,
    #[serde(default, skip_serializing)]
    pub sent_by_email: Option<String>,
    #[serde(default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Model for InvoiceMessage {
    const ROOT: &'static str = "invoice_message";
}
