use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Model;

/// A customer the account bills.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Client {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_symbol: Option<String>,
    /// Free-form address block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highrise_id: Option<u64>,
    #[serde(default, skip_serializing)]
    pub cache_version: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_invoice_timeframe: Option<String>,
    #[serde(default, skip_serializing)]
    pub last_invoice_kind: Option<String>,
    #[serde(default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Client {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// The vendor omits `active` for some legacy records; those are active.
    pub fn is_active(&self) -> bool {
        self.active.unwrap_or(true)
    }
}

impl Model for Client {
    const ROOT: &'static str = "client";
}

/// A person at a client company.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub client_id: u64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_office: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,
    #[serde(default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Model for Contact {
    const ROOT: &'static str = "contact";
}
