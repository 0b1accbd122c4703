//! Task and user assignments, both nested under a project.

use std::sync::Arc;

use serde_json::json;

use crate::api::{wrap, Api};
use crate::error::Result;
use crate::types::{TaskAssignment, UserAssignment};

/// `/projects/{project_id}/task_assignments`
pub struct TaskAssignments {
    api: Arc<Api>,
}

impl TaskAssignments {
    pub(crate) fn new(api: Arc<Api>) -> Self {
        Self { api }
    }

    pub fn all(&self, project_id: u64) -> Result<Vec<TaskAssignment>> {
        self.api.list(&format!("/projects/{project_id}/task_assignments"), &[])
    }

    pub fn find(&self, project_id: u64, id: u64) -> Result<TaskAssignment> {
        self.api.find(&format!("/projects/{project_id}/task_assignments/{id}"), &[])
    }

    /// Assign an existing task. Only the ids travel; rates are set with `update`.
    pub fn create(&self, assignment: &TaskAssignment) -> Result<TaskAssignment> {
        let project_id = assignment.project_id;
        let body = json!({ "task": { "id": assignment.task_id } });
        let id = self
            .api
            .create(&format!("/projects/{project_id}/task_assignments"), &[], &body)?;
        self.find(project_id, id)
    }

    pub fn update(&self, project_id: u64, id: u64, assignment: &TaskAssignment) -> Result<TaskAssignment> {
        self.api.put(
            &format!("/projects/{project_id}/task_assignments/{id}"),
            &[],
            &wrap(assignment)?,
        )?;
        self.find(project_id, id)
    }

    pub fn delete(&self, project_id: u64, id: u64) -> Result<()> {
        self.api
            .delete(&format!("/projects/{project_id}/task_assignments/{id}"), &[])
    }
}

/// `/projects/{project_id}/user_assignments`
pub struct UserAssignments {
    api: Arc<Api>,
}

impl UserAssignments {
    pub(crate) fn new(api: Arc<Api>) -> Self {
        Self { api }
    }

    pub fn all(&self, project_id: u64) -> Result<Vec<UserAssignment>> {
        self.api.list(&format!("/projects/{project_id}/user_assignments"), &[])
    }

    pub fn find(&self, project_id: u64, id: u64) -> Result<UserAssignment> {
        self.api.find(&format!("/projects/{project_id}/user_assignments/{id}"), &[])
    }

    pub fn create(&self, assignment: &UserAssignment) -> Result<UserAssignment> {
        let project_id = assignment.project_id;
        let body = json!({ "user": { "id": assignment.user_id } });
        let id = self
            .api
            .create(&format!("/projects/{project_id}/user_assignments"), &[], &body)?;
        self.find(project_id, id)
    }

    pub fn update(&self, project_id: u64, id: u64, assignment: &UserAssignment) -> Result<UserAssignment> {
        self.api.put(
            &format!("/projects/{project_id}/user_assignments/{id}"),
            &[],
            &wrap(assignment)?,
        )?;
        self.find(project_id, id)
    }

    pub fn delete(&self, project_id: u64, id: u64) -> Result<()> {
        self.api
            .delete(&format!("/projects/{project_id}/user_assignments/{id}"), &[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;
    use crate::testing::{api, created, ok, RecordingTransport, BASE};

    #[test]
    fn task_assignment_create_sends_task_id_only() {
        let transport = RecordingTransport::new();
        transport.push(created("/projects/3/task_assignments/50"));
        transport.push(ok(r#"{"task_assignment":{"id":50,"project_id":3,"task_id":9}}"#));

        let input = TaskAssignment {
            project_id: 3,
            task_id: 9,
            hourly_rate: Some(120.0),
            ..TaskAssignment::default()
        };
        let assignment = TaskAssignments::new(api(transport.clone())).create(&input).unwrap();
        assert_eq!(assignment.id, Some(50));

        let requests = transport.requests();
        assert_eq!(requests[0].url, format!("{BASE}/projects/3/task_assignments"));
        let body: serde_json::Value = serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({ "task": { "id": 9 } }));
    }

    #[test]
    fn user_assignment_create_sends_user_id_only() {
        let transport = RecordingTransport::new();
        transport.push(created("/projects/3/user_assignments/61"));
        transport.push(ok(r#"{"user_assignment":{"id":61,"project_id":3,"user_id":4,"is_project_manager":false}}"#));

        let input = UserAssignment {
            project_id: 3,
            user_id: 4,
            ..UserAssignment::default()
        };
        let assignment = UserAssignments::new(api(transport.clone())).create(&input).unwrap();
        assert_eq!(assignment.user_id, 4);

        let body: serde_json::Value =
            serde_json::from_str(transport.requests()[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({ "user": { "id": 4 } }));
    }

    #[test]
    fn update_and_delete_are_project_scoped() {
        let transport = RecordingTransport::new();
        transport.push(ok(""));
        transport.push(ok(r#"{"user_assignment":{"id":61,"project_id":3,"user_id":4,"is_project_manager":true}}"#));
        transport.push(ok(""));

        let handler = UserAssignments::new(api(transport.clone()));
        let input = UserAssignment {
            project_id: 3,
            user_id: 4,
            is_project_manager: Some(true),
            ..UserAssignment::default()
        };
        let updated = handler.update(3, 61, &input).unwrap();
        assert_eq!(updated.is_project_manager, Some(true));
        handler.delete(3, 61).unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].method, HttpMethod::Put);
        assert_eq!(requests[0].url, format!("{BASE}/projects/3/user_assignments/61"));
        assert_eq!(requests[2].method, HttpMethod::Delete);
        assert_eq!(requests[2].url, format!("{BASE}/projects/3/user_assignments/61"));
    }
}
