use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};

use crate::api::{compact_date, timestamp, Api, Query};
use crate::error::Result;
use crate::types::{Expense, Project, TimeEntry};

/// Optional narrowing for report queries. Unset fields are not sent.
#[derive(Debug, Clone, Default)]
pub struct ReportFilter {
    pub user_id: Option<u64>,
    pub billable: Option<bool>,
    pub only_billed: bool,
    pub only_unbilled: bool,
    pub is_closed: Option<bool>,
    pub updated_since: Option<DateTime<Utc>>,
}

impl ReportFilter {
    fn query(&self, from: NaiveDate, to: NaiveDate) -> Query {
        let mut query = vec![("from", compact_date(from)), ("to", compact_date(to))];
        if let Some(user_id) = self.user_id {
            query.push(("user_id", user_id.to_string()));
        }
        if let Some(billable) = self.billable {
            query.push(("billable", yes_no(billable)));
        }
        if self.only_billed {
            query.push(("only_billed", yes_no(true)));
        }
        if self.only_unbilled {
            query.push(("only_unbilled", yes_no(true)));
        }
        if let Some(is_closed) = self.is_closed {
            query.push(("is_closed", yes_no(is_closed)));
        }
        if let Some(since) = self.updated_since {
            query.push(("updated_since", timestamp(since)));
        }
        query
    }
}

fn yes_no(value: bool) -> String {
    let flag = if value { "yes" } else { "no" };
    flag.to_string()
}

/// Time and expense reports over a date range.
pub struct Reports {
    api: Arc<Api>,
}

impl Reports {
    pub(crate) fn new(api: Arc<Api>) -> Self {
        Self { api }
    }

    pub fn time_by_project(
        &self,
        project_id: u64,
        from: NaiveDate,
        to: NaiveDate,
        filter: &ReportFilter,
    ) -> Result<Vec<TimeEntry>> {
        self.api
            .list(&format!("/projects/{project_id}/entries"), &filter.query(from, to))
    }

    pub fn time_by_user(&self, user_id: u64, from: NaiveDate, to: NaiveDate, filter: &ReportFilter) -> Result<Vec<TimeEntry>> {
        self.api.list(&format!("/people/{user_id}/entries"), &filter.query(from, to))
    }

    pub fn expenses_by_project(
        &self,
        project_id: u64,
        from: NaiveDate,
        to: NaiveDate,
        filter: &ReportFilter,
    ) -> Result<Vec<Expense>> {
        self.api
            .list(&format!("/projects/{project_id}/expenses"), &filter.query(from, to))
    }

    pub fn expenses_by_user(&self, user_id: u64, from: NaiveDate, to: NaiveDate, filter: &ReportFilter) -> Result<Vec<Expense>> {
        self.api.list(&format!("/people/{user_id}/expenses"), &filter.query(from, to))
    }

    pub fn projects_by_client(&self, client_id: u64) -> Result<Vec<Project>> {
        self.api.list("/projects", &[("client", client_id.to_string())])
    }
}
