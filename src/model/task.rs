//! Task records and their options

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::StatusValue;

/// Task lifecycle status
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum TaskStatus {
    #[default]
    Unspecified = 0,
    Creating = 1,
    Submitted = 2,
    Dispatched = 3,
    Completed = 4,
    Error = 5,
    Timeout = 6,
    Cancelling = 7,
    Cancelled = 8,
    Processing = 9,
    Processed = 10,
    Retried = 11,
    Pending = 12,
    Paused = 13,
}

impl StatusValue for TaskStatus {
    fn ordinal(self) -> i32 {
        self as i32
    }
}

/// Execution options attached to a task (and, as defaults, to a session)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskOptions {
    /// Free-form options transmitted to the worker
    pub options: BTreeMap<String, String>,
    pub max_duration: Duration,
    pub max_retries: i32,
    pub priority: i32,
    pub partition_id: String,
    pub application_name: String,
    pub application_version: String,
    pub application_namespace: String,
    pub application_service: String,
    pub engine_type: String,
}

impl TaskOptions {
    /// Returns a copy with one generic option set
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Application tuple named by these options
    pub fn application(&self) -> Application {
        Application {
            name: self.application_name.clone(),
            version: self.application_version.clone(),
            namespace: self.application_namespace.clone(),
            service: self.application_service.clone(),
        }
    }
}

/// Outcome reported by the worker
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Output {
    pub success: bool,
    pub error: String,
}

/// A task as stored in the task collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskData {
    pub session_id: String,
    pub task_id: String,
    pub owner_pod_id: String,
    pub owner_pod_name: String,
    pub initial_task_id: String,
    pub payload_id: String,
    pub parent_task_ids: Vec<String>,
    pub data_dependencies: Vec<String>,
    pub expected_output_ids: Vec<String>,
    pub retry_of_ids: Vec<String>,
    pub status: TaskStatus,
    pub options: TaskOptions,
    pub output: Output,
    pub creation_date: Option<DateTime<Utc>>,
    pub submitted_date: Option<DateTime<Utc>>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub reception_date: Option<DateTime<Utc>>,
    pub acquisition_date: Option<DateTime<Utc>>,
    pub processed_date: Option<DateTime<Utc>>,
    pub fetched_date: Option<DateTime<Utc>>,
    pub pod_ttl: Option<DateTime<Utc>>,
    pub creation_to_end_duration: Option<Duration>,
    pub processing_to_end_duration: Option<Duration>,
    pub received_to_end_duration: Option<Duration>,
}

impl TaskData {
    /// Creates a task in the `Creating` state
    pub fn new(session_id: impl Into<String>, task_id: impl Into<String>) -> Self {
        let task_id = task_id.into();
        Self {
            session_id: session_id.into(),
            initial_task_id: task_id.clone(),
            task_id,
            status: TaskStatus::Creating,
            ..Default::default()
        }
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_options(mut self, options: TaskOptions) -> Self {
        self.options = options;
        self
    }
}

/// A distinct application, derived from task options
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub name: String,
    pub version: String,
    pub namespace: String,
    pub service: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_ordinals_are_wire_numbers() {
        assert_eq!(TaskStatus::Unspecified.ordinal(), 0);
        assert_eq!(TaskStatus::Completed.ordinal(), 4);
        assert_eq!(TaskStatus::Paused.ordinal(), 13);
    }

    #[test]
    fn test_new_task_defaults() {
        let task = TaskData::new("session", "task");
        assert_eq!(task.initial_task_id, "task");
        assert_eq!(task.status, TaskStatus::Creating);
        assert!(task.start_date.is_none());
    }

    #[test]
    fn test_task_deserializes_with_missing_fields() {
        let task: TaskData = serde_json::from_str(
            r#"{"sessionId": "s1", "taskId": "t1", "status": "Completed",
                "options": {"priority": 3, "options": {"key1": "value1"}}}"#,
        )
        .unwrap();

        assert_eq!(task.status, TaskStatus::Completed);
        assert_eq!(task.options.priority, 3);
        assert_eq!(task.options.options.get("key1").map(String::as_str), Some("value1"));
    }

    #[test]
    fn test_application_from_options() {
        let options = TaskOptions {
            application_name: "app".into(),
            application_version: "1.0".into(),
            ..Default::default()
        };
        let app = options.application();
        assert_eq!(app.name, "app");
        assert_eq!(app.version, "1.0");
        assert_eq!(app.service, "");
    }
}
