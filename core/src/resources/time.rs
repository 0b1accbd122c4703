//! Timesheet entries via the `/daily` endpoints.
//!
//! Unlike the rest of the API, `/daily` sends and returns day entries without
//! a `{"day_entry": ...}` envelope and answers writes with the entry itself
//! instead of a `Location` header.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use serde_json::Value;

use crate::api::{decode, of_user, to_value, unwrap_one, Api};
use crate::error::Result;
use crate::http::HttpResponse;
use crate::types::{DailyTimesheet, TimeEntry, TrackableProject};

pub struct Time {
    api: Arc<Api>,
}

impl Time {
    pub(crate) fn new(api: Arc<Api>) -> Self {
        Self { api }
    }

    /// Entries and trackable projects for `date`.
    pub fn daily(&self, date: NaiveDate, user_id: Option<u64>) -> Result<DailyTimesheet> {
        let path = format!("/daily/{}/{}", date.ordinal(), date.year());
        self.api.get_json(&path, &of_user(user_id))
    }

    pub fn all(&self, date: NaiveDate, user_id: Option<u64>) -> Result<Vec<TimeEntry>> {
        Ok(self.daily(date, user_id)?.day_entries)
    }

    pub fn trackable_projects(&self, date: NaiveDate, user_id: Option<u64>) -> Result<Vec<TrackableProject>> {
        Ok(self.daily(date, user_id)?.projects)
    }

    pub fn find(&self, id: u64, user_id: Option<u64>) -> Result<TimeEntry> {
        self.api.find(&format!("/daily/show/{id}"), &of_user(user_id))
    }

    /// Start the timer on `id`, or stop it if it is running.
    pub fn toggle(&self, id: u64, user_id: Option<u64>) -> Result<TimeEntry> {
        self.api.find(&format!("/daily/timer/{id}"), &of_user(user_id))
    }

    pub fn create(&self, entry: &TimeEntry, user_id: Option<u64>) -> Result<TimeEntry> {
        let response = self.api.post("/daily/add", &of_user(user_id), Some(&to_value(entry)?))?;
        entry_from(&response)
    }

    pub fn update(&self, id: u64, entry: &TimeEntry, user_id: Option<u64>) -> Result<TimeEntry> {
        let response = self
            .api
            .post(&format!("/daily/update/{id}"), &of_user(user_id), Some(&to_value(entry)?))?;
        entry_from(&response)
    }

    pub fn delete(&self, id: u64, user_id: Option<u64>) -> Result<()> {
        self.api.delete(&format!("/daily/delete/{id}"), &of_user(user_id))
    }
}

fn entry_from(response: &HttpResponse) -> Result<TimeEntry> {
    let value: Value = decode(&response.body)?;
    unwrap_one(value)
}
