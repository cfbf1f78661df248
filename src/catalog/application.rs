//! Application field catalog
//!
//! Applications are read straight from task options, so predicates and
//! sort keys run over `TaskData`.

use crate::api::{ApplicationField, ApplicationRawEnumField};
use crate::compiler::{Accessor, CompileError, CompileResult, FieldValue, ValueKind};
use crate::model::{NoStatus, TaskData};

use super::FieldCatalog;

/// Catalog of the application view
#[derive(Debug, Clone, Copy, Default)]
pub struct ApplicationCatalog;

fn member(name: &'static str, get: fn(&TaskData) -> FieldValue) -> Accessor<TaskData> {
    Accessor::member(name, ValueKind::String, get)
}

impl FieldCatalog for ApplicationCatalog {
    type Entity = TaskData;
    type Field = ApplicationField;
    type Status = NoStatus;

    const COLLECTION: &'static str = "applications";

    fn resolve(field: &ApplicationField) -> CompileResult<Accessor<TaskData>> {
        let ApplicationField::ApplicationField(raw) = field;
        let accessor = match raw {
            ApplicationRawEnumField::Name => member("options.application_name", |t| {
                t.options.application_name.as_str().into()
            }),
            ApplicationRawEnumField::Version => member("options.application_version", |t| {
                t.options.application_version.as_str().into()
            }),
            ApplicationRawEnumField::Namespace => member("options.application_namespace", |t| {
                t.options.application_namespace.as_str().into()
            }),
            ApplicationRawEnumField::Service => member("options.application_service", |t| {
                t.options.application_service.as_str().into()
            }),
            ApplicationRawEnumField::Unspecified => {
                return Err(CompileError::invalid_field(format!(
                    "application field {:?}",
                    raw
                )))
            }
        };
        Ok(accessor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TaskOptions;

    #[test]
    fn test_application_fields_read_task_options() {
        let task = TaskData::new("s1", "t1").with_options(TaskOptions {
            application_name: "render".into(),
            application_version: "2.1".into(),
            ..Default::default()
        });

        let name = ApplicationCatalog::resolve(&ApplicationRawEnumField::Name.into()).unwrap();
        assert_eq!(name.get(&task), FieldValue::from("render"));

        let version = ApplicationCatalog::resolve(&ApplicationRawEnumField::Version.into()).unwrap();
        assert_eq!(version.get(&task), FieldValue::from("2.1"));

        assert!(ApplicationCatalog::resolve(&ApplicationRawEnumField::Unspecified.into()).is_err());
    }
}
