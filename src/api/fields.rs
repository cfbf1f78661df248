//! Field selectors for each collection
//!
//! Every raw enum ends with an `Unspecified` variant that doubles as the
//! default and as the catch-all for unknown tags. Resolving it always fails.

use serde::{Deserialize, Serialize};

/// First-class task columns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskSummaryEnumField {
    TaskId,
    SessionId,
    OwnerPodId,
    InitialTaskId,
    Status,
    CreatedAt,
    SubmittedAt,
    StartedAt,
    EndedAt,
    CreationToEndDuration,
    ProcessingToEndDuration,
    PodTtl,
    PodHostname,
    ReceivedAt,
    AcquiredAt,
    Error,
    ReceivedToEndDuration,
    ProcessedAt,
    FetchedAt,
    #[default]
    #[serde(other)]
    Unspecified,
}

/// Fixed fields of the task option record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskOptionEnumField {
    MaxDuration,
    MaxRetries,
    Priority,
    PartitionId,
    ApplicationName,
    ApplicationVersion,
    ApplicationNamespace,
    ApplicationService,
    EngineType,
    #[default]
    #[serde(other)]
    Unspecified,
}

/// First-class session columns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionRawEnumField {
    SessionId,
    Status,
    ClientSubmission,
    WorkerSubmission,
    PartitionIds,
    Options,
    CreatedAt,
    CancelledAt,
    ClosedAt,
    PurgedAt,
    DeletedAt,
    Duration,
    #[default]
    #[serde(other)]
    Unspecified,
}

/// First-class result columns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResultRawEnumField {
    SessionId,
    Name,
    OwnerTaskId,
    Status,
    CreatedAt,
    CompletedAt,
    ResultId,
    Size,
    #[default]
    #[serde(other)]
    Unspecified,
}

/// First-class partition columns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartitionRawEnumField {
    Id,
    ParentPartitionIds,
    PodReserved,
    PodMax,
    PreemptionPercentage,
    Priority,
    #[default]
    #[serde(other)]
    Unspecified,
}

/// Application columns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationRawEnumField {
    Name,
    Version,
    Namespace,
    Service,
    #[default]
    #[serde(other)]
    Unspecified,
}

/// Field selector for tasks
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskField {
    TaskSummaryField(TaskSummaryEnumField),
    TaskOptionField(TaskOptionEnumField),
    /// Entry of the free-form option map, by key
    TaskOptionGenericField(String),
}

/// Field selector for sessions
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionField {
    SessionRawField(SessionRawEnumField),
    TaskOptionField(TaskOptionEnumField),
    TaskOptionGenericField(String),
}

/// Field selector for results
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResultField {
    ResultRawField(ResultRawEnumField),
}

/// Field selector for partitions
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PartitionField {
    PartitionRawField(PartitionRawEnumField),
}

/// Field selector for applications
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ApplicationField {
    ApplicationField(ApplicationRawEnumField),
}

impl From<TaskSummaryEnumField> for TaskField {
    fn from(field: TaskSummaryEnumField) -> Self {
        TaskField::TaskSummaryField(field)
    }
}

impl From<TaskOptionEnumField> for TaskField {
    fn from(field: TaskOptionEnumField) -> Self {
        TaskField::TaskOptionField(field)
    }
}

impl From<SessionRawEnumField> for SessionField {
    fn from(field: SessionRawEnumField) -> Self {
        SessionField::SessionRawField(field)
    }
}

impl From<TaskOptionEnumField> for SessionField {
    fn from(field: TaskOptionEnumField) -> Self {
        SessionField::TaskOptionField(field)
    }
}

impl From<ResultRawEnumField> for ResultField {
    fn from(field: ResultRawEnumField) -> Self {
        ResultField::ResultRawField(field)
    }
}

impl From<PartitionRawEnumField> for PartitionField {
    fn from(field: PartitionRawEnumField) -> Self {
        PartitionField::PartitionRawField(field)
    }
}

impl From<ApplicationRawEnumField> for ApplicationField {
    fn from(field: ApplicationRawEnumField) -> Self {
        ApplicationField::ApplicationField(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_wire_shape() {
        let field: TaskField = serde_json::from_str(r#"{"taskSummaryField": "TaskId"}"#).unwrap();
        assert_eq!(field, TaskField::TaskSummaryField(TaskSummaryEnumField::TaskId));

        let field: TaskField =
            serde_json::from_str(r#"{"taskOptionGenericField": "key1"}"#).unwrap();
        assert_eq!(field, TaskField::TaskOptionGenericField("key1".into()));

        let field: ApplicationField =
            serde_json::from_str(r#"{"applicationField": "Version"}"#).unwrap();
        assert_eq!(field, ApplicationRawEnumField::Version.into());
    }

    #[test]
    fn test_unknown_tag_falls_back_to_unspecified() {
        let field: SessionField =
            serde_json::from_str(r#"{"sessionRawField": "NoSuchColumn"}"#).unwrap();
        assert_eq!(field, SessionRawEnumField::Unspecified.into());
    }
}
