//! Resource handlers, one per vendor resource.
//!
//! Each handler is a thin struct over the shared `Api`: it knows its paths
//! and verbs and nothing else.

mod account;
mod assignments;
mod clients;
mod contacts;
mod expenses;
mod invoices;
mod projects;
mod reports;
mod tasks;
mod time;
mod users;

pub use account::Account;
pub use assignments::{TaskAssignments, UserAssignments};
pub use clients::Clients;
pub use contacts::Contacts;
pub use expenses::{ExpenseCategories, Expenses};
pub use invoices::{InvoiceCategories, InvoiceFilter, InvoiceMessages, InvoicePayments, Invoices};
pub use projects::Projects;
pub use reports::{ReportFilter, Reports};
pub use tasks::Tasks;
pub use time::Time;
pub use users::Users;
