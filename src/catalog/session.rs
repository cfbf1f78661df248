//! Session field catalog
//!
//! Sessions also accept task option selectors, resolved against the
//! session's default task options.

use crate::api::{SessionField, SessionFilter, SessionRawEnumField};
use crate::compiler::{
    field_filter, Accessor, CompileError, CompileResult, FieldValue, Predicate, ValueKind,
};
use crate::model::{SessionData, SessionStatus};

use super::options::{option_entry, option_field};
use super::FieldCatalog;

/// Catalog of the session collection
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionCatalog;

fn member(
    name: &'static str,
    kind: ValueKind,
    get: fn(&SessionData) -> FieldValue,
) -> Accessor<SessionData> {
    Accessor::member(name, kind, get)
}

impl SessionCatalog {
    fn raw_field(field: SessionRawEnumField) -> CompileResult<Accessor<SessionData>> {
        use SessionRawEnumField as F;
        use ValueKind as K;

        let accessor = match field {
            F::SessionId => member("session_id", K::String, |s| s.session_id.as_str().into()),
            F::Status => member("status", K::Status, |s| FieldValue::status(s.status)),
            F::ClientSubmission => {
                member("client_submission", K::Boolean, |s| s.client_submission.into())
            }
            F::WorkerSubmission => {
                member("worker_submission", K::Boolean, |s| s.worker_submission.into())
            }
            F::PartitionIds => {
                member("partition_ids", K::Array, |s| s.partition_ids.clone().into())
            }
            F::CreatedAt => member("creation_date", K::Date, |s| s.creation_date.into()),
            F::CancelledAt => member("cancellation_date", K::Date, |s| s.cancellation_date.into()),
            F::ClosedAt => member("closure_date", K::Date, |s| s.closure_date.into()),
            F::PurgedAt => member("purge_date", K::Date, |s| s.purge_date.into()),
            F::DeletedAt => member("deletion_date", K::Date, |s| s.deletion_date.into()),
            F::Duration => member("duration", K::Duration, |s| s.duration.into()),
            // The whole option record has no comparable value
            F::Options | F::Unspecified => {
                return Err(CompileError::invalid_field(format!(
                    "session raw field {:?}",
                    field
                )))
            }
        };
        Ok(accessor)
    }

    /// Compiles a legacy inclusion/exclusion filter
    pub fn legacy_filter(filter: &SessionFilter) -> CompileResult<Predicate<SessionData>> {
        let sessions = field_filter(
            Self::raw_field(SessionRawEnumField::SessionId)?,
            filter
                .sessions
                .iter()
                .map(|id| FieldValue::from(id.as_str()))
                .collect(),
            true,
        )?;

        let statuses = match &filter.statuses {
            Some(selection) => {
                let (statuses, include) = selection.parts();
                field_filter(
                    Self::raw_field(SessionRawEnumField::Status)?,
                    statuses.iter().map(|s| FieldValue::status(*s)).collect(),
                    include,
                )?
            }
            None => Predicate::always_true(),
        };

        Ok(sessions.and(statuses))
    }
}

impl FieldCatalog for SessionCatalog {
    type Entity = SessionData;
    type Field = SessionField;
    type Status = SessionStatus;

    const COLLECTION: &'static str = "sessions";

    fn resolve(field: &SessionField) -> CompileResult<Accessor<SessionData>> {
        match field {
            SessionField::SessionRawField(field) => Self::raw_field(*field),
            SessionField::TaskOptionField(field) => option_field(*field),
            SessionField::TaskOptionGenericField(key) => Ok(option_entry(key)),
        }
    }
}
