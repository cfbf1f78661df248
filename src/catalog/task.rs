//! Task field catalog

use crate::api::{TaskField, TaskFilter, TaskIds, TaskSummaryEnumField};
use crate::compiler::{
    field_filter, Accessor, CompileError, CompileResult, FieldValue, Predicate, ValueKind,
};
use crate::model::{TaskData, TaskStatus};

use super::options::{option_entry, option_field};
use super::FieldCatalog;

/// Catalog of the task collection
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskCatalog;

fn member(name: &'static str, kind: ValueKind, get: fn(&TaskData) -> FieldValue) -> Accessor<TaskData> {
    Accessor::member(name, kind, get)
}

impl TaskCatalog {
    fn summary_field(field: TaskSummaryEnumField) -> CompileResult<Accessor<TaskData>> {
        use TaskSummaryEnumField as F;
        use ValueKind as K;

        let accessor = match field {
            F::TaskId => member("task_id", K::String, |t| t.task_id.as_str().into()),
            F::SessionId => member("session_id", K::String, |t| t.session_id.as_str().into()),
            F::OwnerPodId => member("owner_pod_id", K::String, |t| t.owner_pod_id.as_str().into()),
            F::InitialTaskId => {
                member("initial_task_id", K::String, |t| t.initial_task_id.as_str().into())
            }
            F::Status => member("status", K::Status, |t| FieldValue::status(t.status)),
            F::CreatedAt => member("creation_date", K::Date, |t| t.creation_date.into()),
            F::SubmittedAt => member("submitted_date", K::Date, |t| t.submitted_date.into()),
            F::StartedAt => member("start_date", K::Date, |t| t.start_date.into()),
            F::EndedAt => member("end_date", K::Date, |t| t.end_date.into()),
            F::CreationToEndDuration => member("creation_to_end_duration", K::Duration, |t| {
                t.creation_to_end_duration.into()
            }),
            F::ProcessingToEndDuration => member("processing_to_end_duration", K::Duration, |t| {
                t.processing_to_end_duration.into()
            }),
            F::PodTtl => member("pod_ttl", K::Date, |t| t.pod_ttl.into()),
            F::PodHostname => member("owner_pod_name", K::String, |t| t.owner_pod_name.as_str().into()),
            F::ReceivedAt => member("reception_date", K::Date, |t| t.reception_date.into()),
            F::AcquiredAt => member("acquisition_date", K::Date, |t| t.acquisition_date.into()),
            F::Error => member("output.error", K::String, |t| t.output.error.as_str().into()),
            F::ReceivedToEndDuration => member("received_to_end_duration", K::Duration, |t| {
                t.received_to_end_duration.into()
            }),
            F::ProcessedAt => member("processed_date", K::Date, |t| t.processed_date.into()),
            F::FetchedAt => member("fetched_date", K::Date, |t| t.fetched_date.into()),
            F::Unspecified => {
                return Err(CompileError::invalid_field(format!(
                    "task summary field {:?}",
                    field
                )))
            }
        };
        Ok(accessor)
    }

    /// Compiles a legacy inclusion/exclusion filter.
    ///
    /// The id selection is mandatory; an empty id or status list matches
    /// every task.
    pub fn legacy_filter(filter: &TaskFilter) -> CompileResult<Predicate<TaskData>> {
        let ids = match &filter.ids {
            Some(TaskIds::Session(ids)) => field_filter(
                Self::summary_field(TaskSummaryEnumField::SessionId)?,
                ids.iter().map(|id| FieldValue::from(id.as_str())).collect(),
                true,
            )?,
            Some(TaskIds::Task(ids)) => field_filter(
                Self::summary_field(TaskSummaryEnumField::TaskId)?,
                ids.iter().map(|id| FieldValue::from(id.as_str())).collect(),
                true,
            )?,
            None => {
                return Err(CompileError::invalid_field(
                    "task filter must select session or task ids",
                ))
            }
        };

        let statuses = match &filter.statuses {
            Some(selection) => {
                let (statuses, include) = selection.parts();
                field_filter(
                    Self::summary_field(TaskSummaryEnumField::Status)?,
                    statuses.iter().map(|s| FieldValue::status(*s)).collect(),
                    include,
                )?
            }
            None => Predicate::always_true(),
        };

        Ok(ids.and(statuses))
    }
}

impl FieldCatalog for TaskCatalog {
    type Entity = TaskData;
    type Field = TaskField;
    type Status = TaskStatus;

    const COLLECTION: &'static str = "tasks";

    fn resolve(field: &TaskField) -> CompileResult<Accessor<TaskData>> {
        match field {
            TaskField::TaskSummaryField(field) => Self::summary_field(*field),
            TaskField::TaskOptionField(field) => option_field(*field),
            TaskField::TaskOptionGenericField(key) => Ok(option_entry(key)),
        }
    }
}
