//! Result field catalog
//!
//! `CompletedAt` resolves to the result's completion date. Earlier servers
//! rejected this selector as out of range; here it is filterable and
//! sortable like `CreatedAt`.

use crate::api::{ResultField, ResultRawEnumField};
use crate::compiler::{Accessor, CompileError, CompileResult, FieldValue, ValueKind};
use crate::model::{ResultData, ResultStatus};

use super::FieldCatalog;

/// Catalog of the result collection
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultCatalog;

fn member(
    name: &'static str,
    kind: ValueKind,
    get: fn(&ResultData) -> FieldValue,
) -> Accessor<ResultData> {
    Accessor::member(name, kind, get)
}

impl FieldCatalog for ResultCatalog {
    type Entity = ResultData;
    type Field = ResultField;
    type Status = ResultStatus;

    const COLLECTION: &'static str = "results";

    fn resolve(field: &ResultField) -> CompileResult<Accessor<ResultData>> {
        use ResultRawEnumField as F;
        use ValueKind as K;

        let ResultField::ResultRawField(raw) = field;
        let accessor = match raw {
            F::SessionId => member("session_id", K::String, |r| r.session_id.as_str().into()),
            F::Name => member("name", K::String, |r| r.name.as_str().into()),
            F::OwnerTaskId => member("owner_task_id", K::String, |r| r.owner_task_id.as_str().into()),
            F::Status => member("status", K::Status, |r| FieldValue::status(r.status)),
            F::CreatedAt => member("creation_date", K::Date, |r| r.creation_date.into()),
            F::CompletedAt => member("completion_date", K::Date, |r| r.completion_date.into()),
            F::ResultId => member("result_id", K::String, |r| r.result_id.as_str().into()),
            F::Size => member("size", K::Number, |r| r.size.into()),
            F::Unspecified => {
                return Err(CompileError::invalid_field(format!(
                    "result raw field {:?}",
                    raw
                )))
            }
        };
        Ok(accessor)
    }
}
