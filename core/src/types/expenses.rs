use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::Model;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExpenseCategory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    /// Set for per-unit categories such as mileage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deactivated: Option<bool>,
    #[serde(default, skip_serializing)]
    pub cache_version: Option<u64>,
    #[serde(default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Model for ExpenseCategory {
    const ROOT: &'static str = "expense_category";
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub project_id: u64,
    pub expense_category_id: u64,
    pub spent_at: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    #[serde(default, skip_serializing)]
    pub is_closed: Option<bool>,
    #[serde(default, skip_serializing)]
    pub invoice_id: Option<u64>,
    #[serde(default, skip_serializing)]
    pub has_receipt: Option<bool>,
    #[serde(default, skip_serializing)]
    pub receipt_url: Option<String>,
    #[serde(default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Expense {
    pub fn new(project_id: u64, expense_category_id: u64, spent_at: NaiveDate) -> Self {
        Self {
            id: None,
            project_id,
            expense_category_id,
            spent_at,
            user_id: None,
            total_cost: None,
            units: None,
            notes: None,
            billable: None,
            is_closed: None,
            invoice_id: None,
            has_receipt: None,
            receipt_url: None,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Model for Expense {
    const ROOT: &'static str = "expense";
}
