use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::api::{timestamp, wrap, Api};
use crate::error::Result;
use crate::types::{Project, TaskAssignment};

/// `/projects`
pub struct Projects {
    api: Arc<Api>,
}

impl Projects {
    pub(crate) fn new(api: Arc<Api>) -> Self {
        Self { api }
    }

    pub fn all(&self) -> Result<Vec<Project>> {
        self.api.list("/projects", &[])
    }

    pub fn all_since(&self, since: DateTime<Utc>) -> Result<Vec<Project>> {
        self.api.list("/projects", &[("updated_since", timestamp(since))])
    }

    pub fn find(&self, id: u64) -> Result<Project> {
        self.api.find(&format!("/projects/{id}"), &[])
    }

    pub fn create(&self, project: &Project) -> Result<Project> {
        let id = self.api.create("/projects", &[], &wrap(project)?)?;
        self.find(id)
    }

    pub fn update(&self, id: u64, project: &Project) -> Result<Project> {
        self.api.put(&format!("/projects/{id}"), &[], &wrap(project)?)?;
        self.find(id)
    }

    pub fn delete(&self, id: u64) -> Result<()> {
        self.api.delete(&format!("/projects/{id}"), &[])
    }

    /// Projects toggle with PUT, unlike clients and people.
    pub fn toggle(&self, id: u64) -> Result<Project> {
        self.api.put(&format!("/projects/{id}/toggle"), &[], &json!({}))?;
        self.find(id)
    }

    pub fn activate(&self, id: u64) -> Result<Project> {
        let project = self.find(id)?;
        if project.is_active() {
            return Ok(project);
        }
        self.toggle(id)
    }

    pub fn deactivate(&self, id: u64) -> Result<Project> {
        let project = self.find(id)?;
        if !project.is_active() {
            return Ok(project);
        }
        self.toggle(id)
    }

    /// Create a task named `task_name` and assign it to the project in one call.
    pub fn create_task(&self, project_id: u64, task_name: &str) -> Result<TaskAssignment> {
        let body = json!({ "task": { "name": task_name } });
        let id = self.api.create(
            &format!("/projects/{project_id}/task_assignments/add_with_create_new_task"),
            &[],
            &body,
        )?;
        self.api.find(&format!("/projects/{project_id}/task_assignments/{id}"), &[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;
    use crate::testing::{api, created, ok, RecordingTransport, BASE};

    #[test]
    fn toggle_uses_put() {
        let transport = RecordingTransport::new();
        transport.push(ok(""));
        transport.push(ok(r#"{"project":{"id":4,"client_id":1,"name":"Site","active":false}}"#));

        let project = Projects::new(api(transport.clone())).toggle(4).unwrap();
        assert!(!project.is_active());
        let toggle = &transport.requests()[0];
        assert_eq!(toggle.method, HttpMethod::Put);
        assert_eq!(toggle.url, format!("{BASE}/projects/4/toggle"));
    }

    #[test]
    fn create_task_returns_new_assignment() {
        let transport = RecordingTransport::new();
        transport.push(created("/projects/4/task_assignments/99"));
        transport.push(ok(r#"{"task_assignment":{"id":99,"project_id":4,"task_id":17,"billable":true}}"#));

        let assignment = Projects::new(api(transport.clone())).create_task(4, "Research").unwrap();
        assert_eq!(assignment.id, Some(99));
        assert_eq!(assignment.task_id, 17);

        let requests = transport.requests();
        assert_eq!(
            requests[0].url,
            format!("{BASE}/projects/4/task_assignments/add_with_create_new_task")
        );
        let body: serde_json::Value = serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({ "task": { "name": "Research" } }));
        assert_eq!(requests[1].url, format!("{BASE}/projects/4/task_assignments/99"));
    }

    #[test]
    fn create_sends_project_envelope() {
        let transport = RecordingTransport::new();
        transport.push(created("/projects/8"));
        transport.push(ok(r#"{"project":{"id":8,"client_id":1,"name":"Site"}}"#));

        let project = Projects::new(api(transport.clone()))
            .create(&Project::new(1, "Site"))
            .unwrap();
        assert_eq!(project.id, Some(8));
        let body: serde_json::Value =
            serde_json::from_str(transport.requests()[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({ "project": { "client_id": 1, "name": "Site" } }));
    }
}
