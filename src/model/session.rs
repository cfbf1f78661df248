//! Session records

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::task::TaskOptions;
use super::StatusValue;

/// Session lifecycle status
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum SessionStatus {
    #[default]
    Unspecified = 0,
    Running = 1,
    Cancelled = 2,
    Paused = 3,
    Closed = 4,
    Purged = 5,
    Deleted = 6,
}

impl StatusValue for SessionStatus {
    fn ordinal(self) -> i32 {
        self as i32
    }
}

/// A session as stored in the session collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionData {
    pub session_id: String,
    pub status: SessionStatus,
    pub client_submission: bool,
    pub worker_submission: bool,
    pub partition_ids: Vec<String>,
    /// Default options for tasks submitted in this session
    pub options: TaskOptions,
    pub creation_date: Option<DateTime<Utc>>,
    pub cancellation_date: Option<DateTime<Utc>>,
    pub closure_date: Option<DateTime<Utc>>,
    pub purge_date: Option<DateTime<Utc>>,
    pub deletion_date: Option<DateTime<Utc>>,
    pub duration: Option<Duration>,
}

impl SessionData {
    /// Creates a running session accepting client and worker submissions
    pub fn new(session_id: impl Into<String>, partition_ids: Vec<String>) -> Self {
        Self {
            session_id: session_id.into(),
            status: SessionStatus::Running,
            client_submission: true,
            worker_submission: true,
            partition_ids,
            ..Default::default()
        }
    }
}
