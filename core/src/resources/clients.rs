use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::api::{timestamp, wrap, Api};
use crate::error::Result;
use crate::types::Client;

/// `/clients`
pub struct Clients {
    api: Arc<Api>,
}

impl Clients {
    pub(crate) fn new(api: Arc<Api>) -> Self {
        Self { api }
    }

    pub fn all(&self) -> Result<Vec<Client>> {
        self.api.list("/clients", &[])
    }

    /// Clients changed after `since`.
    pub fn all_since(&self, since: DateTime<Utc>) -> Result<Vec<Client>> {
        self.api.list("/clients", &[("updated_since", timestamp(since))])
    }

    pub fn find(&self, id: u64) -> Result<Client> {
        self.api.find(&format!("/clients/{id}"), &[])
    }

    pub fn create(&self, client: &Client) -> Result<Client> {
        let id = self.api.create("/clients", &[], &wrap(client)?)?;
        self.find(id)
    }

    pub fn update(&self, id: u64, client: &Client) -> Result<Client> {
        self.api.put(&format!("/clients/{id}"), &[], &wrap(client)?)?;
        self.find(id)
    }

    pub fn delete(&self, id: u64) -> Result<()> {
        self.api.delete(&format!("/clients/{id}"), &[])
    }

    /// Flip the client between active and inactive.
    pub fn toggle(&self, id: u64) -> Result<Client> {
        self.api.post(&format!("/clients/{id}/toggle"), &[], None)?;
        self.find(id)
    }

    pub fn activate(&self, id: u64) -> Result<Client> {
        let client = self.find(id)?;
        if client.is_active() {
            return Ok(client);
        }
        self.toggle(id)
    }

    pub fn deactivate(&self, id: u64) -> Result<Client> {
        let client = self.find(id)?;
        if !client.is_active() {
            return Ok(client);
        }
        self.toggle(id)
    }
}
