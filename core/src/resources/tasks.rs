use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::api::{timestamp, wrap, Api};
use crate::error::Result;
use crate::types::Task;

/// `/tasks`
pub struct Tasks {
    api: Arc<Api>,
}

impl Tasks {
    pub(crate) fn new(api: Arc<Api>) -> Self {
        Self { api }
    }

    pub fn all(&self) -> Result<Vec<Task>> {
        self.api.list("/tasks", &[])
    }

    pub fn all_since(&self, since: DateTime<Utc>) -> Result<Vec<Task>> {
        self.api.list("/tasks", &[("updated_since", timestamp(since))])
    }

    pub fn find(&self, id: u64) -> Result<Task> {
        self.api.find(&format!("/tasks/{id}"), &[])
    }

    pub fn create(&self, task: &Task) -> Result<Task> {
        let id = self.api.create("/tasks", &[], &wrap(task)?)?;
        self.find(id)
    }

    pub fn update(&self, id: u64, task: &Task) -> Result<Task> {
        self.api.put(&format!("/tasks/{id}"), &[], &wrap(task)?)?;
        self.find(id)
    }

    /// Deleting a task that has logged time archives it instead.
    pub fn delete(&self, id: u64) -> Result<()> {
        self.api.delete(&format!("/tasks/{id}"), &[])
    }

    /// Restore an archived task.
    pub fn activate(&self, id: u64) -> Result<Task> {
        self.api.post(&format!("/tasks/{id}/activate"), &[], None)?;
        self.find(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;
    use crate::testing::{api, ok, RecordingTransport, BASE};

    #[test]
    fn activate_posts_then_refetches() {
        let transport = RecordingTransport::new();
        transport.push(ok(""));
        transport.push(ok(r#"{"task":{"id":6,"name":"Design","deactivated":false}}"#));

        let task = Tasks::new(api(transport.clone())).activate(6).unwrap();
        assert_eq!(task.deactivated, Some(false));
        let activate = &transport.requests()[0];
        assert_eq!(activate.method, HttpMethod::Post);
        assert_eq!(activate.url, format!("{BASE}/tasks/6/activate"));
        assert!(activate.body.is_none());
    }
}
