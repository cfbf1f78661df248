//! Inclusion/exclusion filters from the first API revision
//!
//! Still accepted by the task and session tables; each selects entities
//! whose field value is (or is not) in a literal set.

use serde::{Deserialize, Serialize};

use crate::model::{SessionStatus, TaskStatus};

/// Which identifiers a legacy task filter selects on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskIds {
    Session(Vec<String>),
    Task(Vec<String>),
}

/// Whitelist or blacklist of statuses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatusSelection<S> {
    Included(Vec<S>),
    Excluded(Vec<S>),
}

impl<S> StatusSelection<S> {
    /// Statuses listed and whether they are included
    pub fn parts(&self) -> (&[S], bool) {
        match self {
            StatusSelection::Included(statuses) => (statuses, true),
            StatusSelection::Excluded(statuses) => (statuses, false),
        }
    }
}

/// Legacy task filter: ids are mandatory, statuses optional
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFilter {
    pub ids: Option<TaskIds>,
    pub statuses: Option<StatusSelection<TaskStatus>>,
}

impl TaskFilter {
    pub fn sessions(ids: Vec<String>) -> Self {
        Self {
            ids: Some(TaskIds::Session(ids)),
            statuses: None,
        }
    }

    pub fn tasks(ids: Vec<String>) -> Self {
        Self {
            ids: Some(TaskIds::Task(ids)),
            statuses: None,
        }
    }

    pub fn with_statuses(mut self, statuses: StatusSelection<TaskStatus>) -> Self {
        self.statuses = Some(statuses);
        self
    }
}

/// Legacy session filter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionFilter {
    #[serde(default)]
    pub sessions: Vec<String>,
    pub statuses: Option<StatusSelection<SessionStatus>>,
}
