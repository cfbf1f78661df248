//! Result records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::StatusValue;

/// Result lifecycle status
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum ResultStatus {
    #[default]
    Unspecified = 0,
    Created = 1,
    Completed = 2,
    Aborted = 3,
    Deleted = 4,
}

impl StatusValue for ResultStatus {
    fn ordinal(self) -> i32 {
        self as i32
    }
}

/// A result (task output or input data) as stored in the result collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResultData {
    pub session_id: String,
    pub result_id: String,
    pub name: String,
    pub owner_task_id: String,
    pub status: ResultStatus,
    pub dependent_tasks: Vec<String>,
    pub creation_date: Option<DateTime<Utc>>,
    pub completion_date: Option<DateTime<Utc>>,
    /// Size in bytes
    pub size: i64,
}

impl ResultData {
    pub fn new(
        session_id: impl Into<String>,
        result_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            result_id: result_id.into(),
            name: name.into(),
            status: ResultStatus::Created,
            ..Default::default()
        }
    }
}
