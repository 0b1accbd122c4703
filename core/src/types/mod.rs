//! Domain DTOs for the Harvest API.
//!
//! # Design
//! Field names match the vendor JSON one-to-one. Server-managed fields
//! (`id`, timestamps) are skipped or omitted when serializing, so the same
//! struct works as a response type and as a create/update payload. Most
//! fields are optional because the vendor omits what is unset.

mod account;
mod clients;
mod expenses;
mod invoices;
mod projects;
mod time;
mod users;

use serde::de::DeserializeOwned;
use serde::Serialize;

pub use account::{Company, RateLimitStatus, WhoAmI, WhoAmIUser};
pub use clients::{Client, Contact};
pub use expenses::{Expense, ExpenseCategory};
pub use invoices::{Invoice, InvoiceCategory, InvoiceMessage, InvoicePayment, InvoiceState};
pub use projects::{Project, Task, TaskAssignment, UserAssignment};
pub use time::{DailyTimesheet, TimeEntry, TrackableProject, TrackableTask};
pub use users::User;

/// A vendor object that travels wrapped as `{"<ROOT>": {...}}`.
pub trait Model: Serialize + DeserializeOwned {
    const ROOT: &'static str;
}

/// Ids the vendor sometimes renders as JSON strings (`"project_id": "42"`).
pub(crate) mod flexible_id {
    use serde::de::{self, Deserializer};
    use serde::Deserialize;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Raw>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Raw::Number(n)) => Ok(Some(n)),
            Some(Raw::Text(s)) if s.trim().is_empty() => Ok(None),
            Some(Raw::Text(s)) => s.trim().parse().map(Some).map_err(de::Error::custom),
        }
    }
}
