use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::api::{timestamp, wrap, Api};
use crate::error::Result;
use crate::types::User;

/// `/people`
pub struct Users {
    api: Arc<Api>,
}

impl Users {
    pub(crate) fn new(api: Arc<Api>) -> Self {
        Self { api }
    }

    pub fn all(&self) -> Result<Vec<User>> {
        self.api.list("/people", &[])
    }

    pub fn all_since(&self, since: DateTime<Utc>) -> Result<Vec<User>> {
        self.api.list("/people", &[("updated_since", timestamp(since))])
    }

    pub fn find(&self, id: u64) -> Result<User> {
        self.api.find(&format!("/people/{id}"), &[])
    }

    pub fn create(&self, user: &User) -> Result<User> {
        let id = self.api.create("/people", &[], &wrap(user)?)?;
        self.find(id)
    }

    pub fn update(&self, id: u64, user: &User) -> Result<User> {
        self.api.put(&format!("/people/{id}"), &[], &wrap(user)?)?;
        self.find(id)
    }

    pub fn delete(&self, id: u64) -> Result<()> {
        self.api.delete(&format!("/people/{id}"), &[])
    }

    pub fn toggle(&self, id: u64) -> Result<User> {
        self.api.post(&format!("/people/{id}/toggle"), &[], None)?;
        self.find(id)
    }

    pub fn activate(&self, id: u64) -> Result<User> {
        let user = self.find(id)?;
        if user.is_active() {
            return Ok(user);
        }
        self.toggle(id)
    }

    pub fn deactivate(&self, id: u64) -> Result<User> {
        let user = self.find(id)?;
        if !user.is_active() {
            return Ok(user);
        }
        self.toggle(id)
    }

    /// Email the user a password reset link.
    pub fn reset_password(&self, id: u64) -> Result<()> {
        self.api.post(&format!("/people/{id}/reset_password"), &[], None)?;
        Ok(())
    }
}
