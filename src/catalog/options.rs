//! Task option fields, shared by the task and session catalogs

use std::collections::BTreeMap;

use crate::api::TaskOptionEnumField;
use crate::compiler::{Accessor, CompileError, CompileResult, FieldValue, ValueKind};
use crate::model::{SessionData, TaskData, TaskOptions};

/// An entity carrying a task option record
pub trait HasTaskOptions {
    fn task_options(&self) -> &TaskOptions;
}

impl HasTaskOptions for TaskData {
    fn task_options(&self) -> &TaskOptions {
        &self.options
    }
}

impl HasTaskOptions for SessionData {
    fn task_options(&self) -> &TaskOptions {
        &self.options
    }
}

fn option_map<E: HasTaskOptions>(entity: &E) -> &BTreeMap<String, String> {
    &entity.task_options().options
}

/// Accessor for one fixed field of the option record
pub fn option_field<E: HasTaskOptions>(field: TaskOptionEnumField) -> CompileResult<Accessor<E>> {
    let accessor = match field {
        TaskOptionEnumField::MaxDuration => {
            Accessor::member("options.max_duration", ValueKind::Duration, |e: &E| {
                FieldValue::Duration(e.task_options().max_duration)
            })
        }
        TaskOptionEnumField::MaxRetries => {
            Accessor::member("options.max_retries", ValueKind::Number, |e: &E| {
                e.task_options().max_retries.into()
            })
        }
        TaskOptionEnumField::Priority => {
            Accessor::member("options.priority", ValueKind::Number, |e: &E| {
                e.task_options().priority.into()
            })
        }
        TaskOptionEnumField::PartitionId => {
            Accessor::member("options.partition_id", ValueKind::String, |e: &E| {
                e.task_options().partition_id.as_str().into()
            })
        }
        TaskOptionEnumField::ApplicationName => {
            Accessor::member("options.application_name", ValueKind::String, |e: &E| {
                e.task_options().application_name.as_str().into()
            })
        }
        TaskOptionEnumField::ApplicationVersion => {
            Accessor::member("options.application_version", ValueKind::String, |e: &E| {
                e.task_options().application_version.as_str().into()
            })
        }
        TaskOptionEnumField::ApplicationNamespace => {
            Accessor::member("options.application_namespace", ValueKind::String, |e: &E| {
                e.task_options().application_namespace.as_str().into()
            })
        }
        TaskOptionEnumField::ApplicationService => {
            Accessor::member("options.application_service", ValueKind::String, |e: &E| {
                e.task_options().application_service.as_str().into()
            })
        }
        TaskOptionEnumField::EngineType => {
            Accessor::member("options.engine_type", ValueKind::String, |e: &E| {
                e.task_options().engine_type.as_str().into()
            })
        }
        TaskOptionEnumField::Unspecified => {
            return Err(CompileError::invalid_field(format!(
                "task option field {:?}",
                field
            )))
        }
    };
    Ok(accessor)
}

/// Accessor for an entry of the free-form option map
///
/// The key is not checked; a missing entry reads as null.
pub fn option_entry<E: HasTaskOptions>(key: &str) -> Accessor<E> {
    Accessor::option_entry(key, option_map::<E>)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn task() -> TaskData {
        let options = TaskOptions {
            max_duration: Duration::from_secs(60),
            priority: 2,
            engine_type: "python".into(),
            ..Default::default()
        }
        .with_option("key1", "value1");
        TaskData::new("s1", "t1").with_options(options)
    }

    #[test]
    fn test_fixed_option_fields() {
        let task = task();
        let priority = option_field::<TaskData>(TaskOptionEnumField::Priority).unwrap();
        assert_eq!(priority.get(&task), FieldValue::Number(2));
        assert_eq!(priority.kind(), ValueKind::Number);

        let max_duration = option_field::<TaskData>(TaskOptionEnumField::MaxDuration).unwrap();
        assert_eq!(
            max_duration.get(&task),
            FieldValue::Duration(Duration::from_secs(60))
        );

        let engine = option_field::<TaskData>(TaskOptionEnumField::EngineType).unwrap();
        assert_eq!(engine.get(&task), FieldValue::from("python"));
    }

    #[test]
    fn test_unspecified_option_field() {
        let err = option_field::<TaskData>(TaskOptionEnumField::Unspecified).unwrap_err();
        assert_eq!(err.code(), "TASKGRID_INVALID_FIELD");
    }

    #[test]
    fn test_generic_option_entries() {
        let task = task();
        assert_eq!(
            option_entry::<TaskData>("key1").get(&task),
            FieldValue::from("value1")
        );
        assert!(option_entry::<TaskData>("missing").get(&task).is_null());

        let session = SessionData::new("s1", vec![]);
        assert!(option_entry::<SessionData>("key1").get(&session).is_null());
    }
}
