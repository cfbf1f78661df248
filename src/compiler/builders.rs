//! Expression builders
//!
//! Primitive constructors turning (accessor, literal, comparison) into a
//! single-entity predicate. Literals are coerced to the accessor's declared
//! type here, once, so evaluation never converts.

use super::accessor::Accessor;
use super::errors::{CompileError, CompileResult};
use super::predicate::{BinaryOp, Comparison, Predicate, StringMethod};
use super::value::{FieldValue, ValueKind};

/// `accessor <op> literal`
pub fn binary<E>(
    accessor: Accessor<E>,
    literal: impl Into<FieldValue>,
    op: BinaryOp,
) -> CompileResult<Predicate<E>> {
    let literal: FieldValue = literal.into();
    let literal = literal
        .coerce_to(accessor.kind())
        .map_err(|literal_kind| {
            CompileError::incompatible(accessor.name(), accessor.kind(), literal_kind)
        })?;

    Ok(Predicate::condition(
        accessor,
        Comparison::Binary { op, literal },
    ))
}

/// `accessor <op> literal` where the condition itself is typed.
///
/// The accessor must be of `kind` even when the literal is null.
pub fn typed_binary<E>(
    accessor: Accessor<E>,
    literal: impl Into<FieldValue>,
    kind: ValueKind,
    op: BinaryOp,
) -> CompileResult<Predicate<E>> {
    expect_kind(&accessor, kind, kind)?;
    binary(accessor, literal, op)
}

/// List-valued `accessor` contains `literal` (or not, if `negate`)
pub fn membership<E>(
    accessor: Accessor<E>,
    literal: impl Into<String>,
    negate: bool,
) -> CompileResult<Predicate<E>> {
    expect_kind(&accessor, ValueKind::Array, ValueKind::String)?;

    Ok(Predicate::condition(
        accessor,
        Comparison::Membership {
            literal: literal.into(),
            negate,
        },
    ))
}

/// String-valued `accessor` satisfies `method(literal)` (or not, if `negate`)
pub fn string_call<E>(
    accessor: Accessor<E>,
    literal: impl Into<String>,
    method: StringMethod,
    negate: bool,
) -> CompileResult<Predicate<E>> {
    expect_kind(&accessor, ValueKind::String, ValueKind::String)?;

    Ok(Predicate::condition(
        accessor,
        Comparison::StringCall {
            method,
            literal: literal.into(),
            negate,
        },
    ))
}

fn expect_kind<E>(
    accessor: &Accessor<E>,
    expected: ValueKind,
    literal_kind: ValueKind,
) -> CompileResult<()> {
    if accessor.kind() == expected {
        Ok(())
    } else {
        Err(CompileError::incompatible(
            accessor.name(),
            accessor.kind(),
            literal_kind,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Job {
        priority: i32,
        queue: String,
        labels: Vec<String>,
    }

    fn priority() -> Accessor<Job> {
        Accessor::member("priority", ValueKind::Number, |job: &Job| {
            FieldValue::from(job.priority)
        })
    }

    fn queue() -> Accessor<Job> {
        Accessor::member("queue", ValueKind::String, |job: &Job| {
            FieldValue::String(job.queue.clone())
        })
    }

    fn labels() -> Accessor<Job> {
        Accessor::member("labels", ValueKind::Array, |job: &Job| {
            FieldValue::Array(job.labels.clone())
        })
    }

    fn job() -> Job {
        Job {
            priority: 0,
            queue: "default".into(),
            labels: vec!["gpu".into()],
        }
    }

    #[test]
    fn test_binary_on_narrow_integer_field() {
        let p = binary(priority(), 0_i64, BinaryOp::Equal).unwrap();
        assert!(p.matches(&job()));
    }

    #[test]
    fn test_binary_rejects_incompatible_literal() {
        let err = binary(queue(), 3_i64, BinaryOp::Equal).unwrap_err();
        assert_eq!(
            err,
            CompileError::incompatible("queue", ValueKind::String, ValueKind::Number)
        );
    }

    #[test]
    fn test_typed_binary_checks_kind_of_null_literal() {
        let err = typed_binary(queue(), FieldValue::Null, ValueKind::Date, BinaryOp::NotEqual)
            .unwrap_err();
        assert_eq!(
            err,
            CompileError::incompatible("queue", ValueKind::String, ValueKind::Date)
        );

        let p = typed_binary(priority(), FieldValue::Null, ValueKind::Number, BinaryOp::NotEqual)
            .unwrap();
        assert!(p.matches(&job()));
    }

    #[test]
    fn test_membership_requires_list_field() {
        assert!(membership(labels(), "gpu", false).unwrap().matches(&job()));
        assert!(membership(queue(), "gpu", false).is_err());
    }

    #[test]
    fn test_string_call_requires_string_field() {
        let p = string_call(queue(), "def", StringMethod::StartsWith, false).unwrap();
        assert!(p.matches(&job()));
        assert!(string_call(priority(), "0", StringMethod::Contains, false).is_err());
    }
}
