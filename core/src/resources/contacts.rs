use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::api::{timestamp, wrap, Api};
use crate::error::Result;
use crate::types::Contact;

/// `/contacts`, plus the per-client listing under `/clients/{id}/contacts`.
pub struct Contacts {
    api: Arc<Api>,
}

impl Contacts {
    pub(crate) fn new(api: Arc<Api>) -> Self {
        Self { api }
    }

    pub fn all(&self) -> Result<Vec<Contact>> {
        self.api.list("/contacts", &[])
    }

    pub fn all_since(&self, since: DateTime<Utc>) -> Result<Vec<Contact>> {
        self.api.list("/contacts", &[("updated_since", timestamp(since))])
    }

    pub fn all_for_client(&self, client_id: u64) -> Result<Vec<Contact>> {
        self.api.list(&format!("/clients/{client_id}/contacts"), &[])
    }

    pub fn find(&self, id: u64) -> Result<Contact> {
        self.api.find(&format!("/contacts/{id}"), &[])
    }

    pub fn create(&self, contact: &Contact) -> Result<Contact> {
        let id = self.api.create("/contacts", &[], &wrap(contact)?)?;
        self.find(id)
    }

    pub fn update(&self, id: u64, contact: &Contact) -> Result<Contact> {
        self.api.put(&format!("/contacts/{id}"), &[], &wrap(contact)?)?;
        self.find(id)
    }

    pub fn delete(&self, id: u64) -> Result<()> {
        self.api.delete(&format!("/contacts/{id}"), &[])
    }
}
