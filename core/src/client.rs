//! The `Harvest` facade.
//!
//! # Design
//! Credentials are resolved once in the constructor, which also builds every
//! resource handler up front. Accessors hand out references to those
//! handlers, so repeated access returns the same instance and two `Harvest`
//! values never share one. All handlers of a facade hold the same `Arc<Api>`,
//! and with it the same credentials and transport.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::api::Api;
use crate::config::Config;
use crate::credentials::Credentials;
use crate::error::Result;
use crate::http::{Transport, UreqTransport};
use crate::resources::{
    Account, Clients, Contacts, ExpenseCategories, Expenses, InvoiceCategories, InvoiceMessages, InvoicePayments,
    Invoices, Projects, Reports, TaskAssignments, Tasks, Time, UserAssignments, Users,
};

/// Entry point to the Harvest API.
pub struct Harvest {
    api: Arc<Api>,
    clients: Clients,
    contacts: Contacts,
    projects: Projects,
    tasks: Tasks,
    users: Users,
    task_assignments: TaskAssignments,
    user_assignments: UserAssignments,
    expense_categories: ExpenseCategories,
    expenses: Expenses,
    time: Time,
    reports: Reports,
    invoice_categories: InvoiceCategories,
    invoices: Invoices,
    invoice_payments: InvoicePayments,
    invoice_messages: InvoiceMessages,
    account: Account,
}

impl Harvest {
    /// Build a client that talks HTTP through `ureq`.
    ///
    /// Fails with `Error::Configuration` unless `config` holds a complete
    /// subdomain/username/password triple or an access token.
    pub fn new(config: Config) -> Result<Self> {
        let transport = Arc::new(UreqTransport::new(config.timeout));
        Self::with_transport(config, transport)
    }

    pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> Result<Self> {
        let credentials = Credentials::resolve(&config)?;
        let api = Arc::new(Api::new(credentials, &config, transport));
        debug!(base_url = api.base_url(), basic = api.credentials().is_basic(), "harvest client ready");

        Ok(Self {
            clients: Clients::new(api.clone()),
            contacts: Contacts::new(api.clone()),
            projects: Projects::new(api.clone()),
            tasks: Tasks::new(api.clone()),
            users: Users::new(api.clone()),
            task_assignments: TaskAssignments::new(api.clone()),
            user_assignments: UserAssignments::new(api.clone()),
            expense_categories: ExpenseCategories::new(api.clone()),
            expenses: Expenses::new(api.clone()),
            time: Time::new(api.clone()),
            reports: Reports::new(api.clone()),
            invoice_categories: InvoiceCategories::new(api.clone()),
            invoices: Invoices::new(api.clone()),
            invoice_payments: InvoicePayments::new(api.clone()),
            invoice_messages: InvoiceMessages::new(api.clone()),
            account: Account::new(api.clone()),
            api,
        })
    }

    pub fn basic(subdomain: &str, username: &str, password: &str) -> Result<Self> {
        Self::new(Config::basic(subdomain, username, password))
    }

    pub fn oauth(access_token: &str) -> Result<Self> {
        Self::new(Config::oauth(access_token))
    }

    pub fn credentials(&self) -> &Credentials {
        self.api.credentials()
    }

    /// Scheme and host every request goes to.
    pub fn base_url(&self) -> &str {
        self.api.base_url()
    }

    pub fn clients(&self) -> &Clients {
        &self.clients
    }

    pub fn contacts(&self) -> &Contacts {
        &self.contacts
    }

    pub fn projects(&self) -> &Projects {
        &self.projects
    }

    pub fn tasks(&self) -> &Tasks {
        &self.tasks
    }

    pub fn users(&self) -> &Users {
        &self.users
    }

    pub fn task_assignments(&self) -> &TaskAssignments {
        &self.task_assignments
    }

    pub fn user_assignments(&self) -> &UserAssignments {
        &self.user_assignments
    }

    pub fn expense_categories(&self) -> &ExpenseCategories {
        &self.expense_categories
    }

    pub fn expenses(&self) -> &Expenses {
        &self.expenses
    }

    /// Timesheet entries.
    pub fn time(&self) -> &Time {
        &self.time
    }

    pub fn reports(&self) -> &Reports {
        &self.reports
    }

    pub fn invoice_categories(&self) -> &InvoiceCategories {
        &self.invoice_categories
    }

    pub fn invoices(&self) -> &Invoices {
        &self.invoices
    }

    pub fn invoice_payments(&self) -> &InvoicePayments {
        &self.invoice_payments
    }

    pub fn invoice_messages(&self) -> &InvoiceMessages {
        &self.invoice_messages
    }

    pub fn account(&self) -> &Account {
        &self.account
    }
}

impl fmt::Debug for Harvest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Harvest")
            .field("base_url", &self.api.base_url())
            .field("credentials", self.api.credentials())
            .finish_non_exhaustive()
    }
}
