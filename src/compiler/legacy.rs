//! Inclusion/exclusion filters
//!
//! The coarse filter form still accepted by older clients: one literal set
//! per field, matched as membership. An empty set matches everything,
//! whatever the `include` flag says.

use super::accessor::Accessor;
use super::builders::binary;
use super::errors::{CompileError, CompileResult};
use super::predicate::{BinaryOp, Comparison, Predicate};
use super::value::{FieldValue, ValueKind};

/// `value in values` when `include`, `value not in values` otherwise
pub fn field_filter<E>(
    accessor: Accessor<E>,
    values: Vec<FieldValue>,
    include: bool,
) -> CompileResult<Predicate<E>> {
    match values.len() {
        0 => Ok(Predicate::always_true()),
        1 => {
            let op = if include {
                BinaryOp::Equal
            } else {
                BinaryOp::NotEqual
            };
            let value = values.into_iter().next().unwrap_or(FieldValue::Null);
            binary(accessor, value, op)
        }
        _ => {
            let kind = accessor.kind();
            let values = values
                .into_iter()
                .map(|value| {
                    value
                        .coerce_to(kind)
                        .map_err(|literal| CompileError::incompatible(accessor.name(), kind, literal))
                })
                .collect::<CompileResult<Vec<_>>>()?;

            Ok(Predicate::condition(
                accessor,
                Comparison::AnyOf { values, include },
            ))
        }
    }
}

/// List-valued field holds every one of `values` (or does not, when
/// excluding)
pub fn collection_filter<E>(
    accessor: Accessor<E>,
    values: Vec<String>,
    include: bool,
) -> CompileResult<Predicate<E>> {
    if accessor.kind() != ValueKind::Array {
        return Err(CompileError::incompatible(
            accessor.name(),
            accessor.kind(),
            ValueKind::Array,
        ));
    }
    if values.is_empty() {
        return Ok(Predicate::always_true());
    }

    Ok(Predicate::condition(
        accessor,
        Comparison::AllOf { values, include },
    ))
}
