use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{flexible_id, Model};

/// One timesheet row ("day entry").
///
/// The daily endpoints render some ids as strings and send `started_at` /
/// `ended_at` as wall-clock text such as `"8:00am"`, so those stay loose.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TimeEntry {
    #[serde(
        default,
        deserialize_with = "flexible_id::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<u64>,
    #[serde(
        default,
        deserialize_with = "flexible_id::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub project_id: Option<u64>,
    #[serde(
        default,
        deserialize_with = "flexible_id::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub task_id: Option<u64>,
    #[serde(
        default,
        deserialize_with = "flexible_id::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spent_at: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<String>,
    #[serde(default, skip_serializing)]
    pub hours_without_timer: Option<f64>,
    /// Set while the timer is running.
    #[serde(default, skip_serializing)]
    pub timer_started_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing)]
    pub project: Option<String>,
    #[serde(default, skip_serializing)]
    pub task: Option<String>,
    #[serde(default, skip_serializing)]
    pub client: Option<String>,
    #[serde(default, skip_serializing)]
    pub is_billed: Option<bool>,
    #[serde(default, skip_serializing)]
    pub is_closed: Option<bool>,
    #[serde(default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl TimeEntry {
    pub fn new(project_id: u64, task_id: u64, spent_at: NaiveDate, hours: f64) -> Self {
        Self {
            project_id: Some(project_id),
            task_id: Some(task_id),
            spent_at: Some(spent_at),
            hours: Some(hours),
            ..Self::default()
        }
    }

    pub fn is_running(&self) -> bool {
        self.timer_started_at.is_some()
    }
}

impl Model for TimeEntry {
    const ROOT: &'static str = "day_entry";
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TrackableTask {
    #[serde(default, deserialize_with = "flexible_id::deserialize")]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub billable: Option<bool>,
}

/// A project the user may log time against on a given day.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TrackableProject {
    #[serde(default, deserialize_with = "flexible_id::deserialize")]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub billable: Option<bool>,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default, deserialize_with = "flexible_id::deserialize")]
    pub client_id: Option<u64>,
    #[serde(default)]
    pub tasks: Vec<TrackableTask>,
}

/// Response of `GET /daily/{day}/{year}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DailyTimesheet {
    #[serde(default)]
    pub for_day: Option<NaiveDate>,
    #[serde(default)]
    pub day_entries: Vec<TimeEntry>,
    #[serde(default)]
    pub projects: Vec<TrackableProject>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daily_payload_with_string_ids() {
        let sheet: DailyTimesheet = serde_json::from_str(
            r#"{
                "for_day": "2024-03-01",
                "day_entries": [{
                    "id": "195168", "project_id": "3", "task_id": "14", "user_id": 8,
                    "spent_at": "2024-03-01", "hours": 0.8, "notes": "Planning",
                    "project": "Site redesign", "task": "Design", "client": "Acme",
                    "started_at": "8:00am", "ended_at": "8:48am",
                    "timer_started_at": "2024-03-01T08:00:00Z"
                }],
                "projects": [{
                    "id": 3, "name": "Site redesign", "client": "Acme", "client_id": "1",
                    "tasks": [{"id": 14, "name": "Design", "billable": true}]
                }]
            }"#,
        )
        .unwrap();

        let entry = &sheet.day_entries[0];
        assert_eq!(entry.id, Some(195168));
        assert_eq!(entry.project_id, Some(3));
        assert_eq!(entry.started_at.as_deref(), Some("8:00am"));
        assert!(entry.is_running());
        assert_eq!(sheet.projects[0].client_id, Some(1));
        assert_eq!(sheet.projects[0].tasks[0].name, "Design");
    }

    #[test]
    fn new_entry_body_has_only_writable_fields() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let json = serde_json::to_value(TimeEntry::new(3, 14, date, 1.5)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "project_id": 3, "task_id": 14, "spent_at": "2024-03-01", "hours": 1.5 })
        );
    }
}
