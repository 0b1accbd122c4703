use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::Model;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Project {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub client_id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    /// `"Project"`, `"Tasks"`, `"People"` or `"none"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bill_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
    /// `"project"`, `"project_cost"`, `"task"`, `"person"` or `"none"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_budget: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_budget_include_expenses: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify_when_over_budget: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub over_budget_notification_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_budget_to_all: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimate_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starts_on: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ends_on: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing)]
    pub hint_earliest_record_at: Option<NaiveDate>,
    #[serde(default, skip_serializing)]
    pub hint_latest_record_at: Option<NaiveDate>,
    #[serde(default, skip_serializing)]
    pub cache_version: Option<u64>,
    #[serde(default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Project {
    pub fn new(client_id: u64, name: &str) -> Self {
        Self {
            client_id,
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.unwrap_or(true)
    }
}

impl Model for Project {
    const ROOT: &'static str = "project";
}

/// A kind of work that can be assigned to projects.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Task {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billable_by_default: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_hourly_rate: Option<f64>,
    /// Added to every new project automatically.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deactivated: Option<bool>,
    #[serde(default, skip_serializing)]
    pub cache_version: Option<u64>,
    #[serde(default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }
}

impl Model for Task {
    const ROOT: &'static str = "task";
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TaskAssignment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub project_id: u64,
    pub task_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deactivated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimate: Option<f64>,
    #[serde(default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Model for TaskAssignment {
    const ROOT: &'static str = "task_assignment";
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserAssignment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub project_id: u64,
    pub user_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_project_manager: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deactivated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimate: Option<f64>,
    #[serde(default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Model for UserAssignment {
    const ROOT: &'static str = "user_assignment";
}
