//! Boolean combinator
//!
//! Assembles field conditions into disjunctive normal form:
//! `(c1 AND c2 ...) OR (c1 AND c2 ...) OR ...`.
//!
//! Field resolution is supplied by the caller, so the same fold serves
//! every entity kind.

use crate::api::{FilterField, Filters, FiltersAnd};
use crate::model::StatusValue;

use super::accessor::Accessor;
use super::errors::{CompileError, CompileResult};
use super::operators::value_filter;
use super::predicate::Predicate;

/// Compiles one field condition.
///
/// Both halves must be present; an empty selector or condition is an
/// invalid field, never a no-op.
pub fn compile_condition<E, F, S, R>(
    condition: &FilterField<F, S>,
    resolve: &R,
) -> CompileResult<Predicate<E>>
where
    S: StatusValue,
    R: Fn(&F) -> CompileResult<Accessor<E>>,
{
    let field = condition
        .field
        .as_ref()
        .ok_or_else(|| CompileError::invalid_field("field selector is not set"))?;
    let value = condition
        .condition
        .as_ref()
        .ok_or_else(|| CompileError::invalid_field("filter condition is not set"))?;

    let accessor = resolve(field)?;
    value_filter(accessor, value)
}

/// Conjunction of a group's conditions; an empty group matches everything
pub fn compile_group<E, F, S, R>(group: &FiltersAnd<F, S>, resolve: &R) -> CompileResult<Predicate<E>>
where
    S: StatusValue,
    R: Fn(&F) -> CompileResult<Accessor<E>>,
{
    group
        .and
        .iter()
        .try_fold(Predicate::always_true(), |acc, condition| {
            Ok(acc.and(compile_condition(condition, resolve)?))
        })
}

/// Disjunction of the filter's groups.
///
/// An absent filter, or one with no groups, matches everything.
pub fn compile_filters<E, F, S, R>(
    filters: Option<&Filters<F, S>>,
    resolve: &R,
) -> CompileResult<Predicate<E>>
where
    S: StatusValue,
    R: Fn(&F) -> CompileResult<Accessor<E>>,
{
    let filters = match filters {
        Some(filters) if !filters.is_vacuous() => filters,
        _ => return Ok(Predicate::always_true()),
    };

    filters
        .or
        .iter()
        .try_fold(Predicate::always_false(), |acc, group| {
            Ok(acc.or(compile_group(group, resolve)?))
        })
}
