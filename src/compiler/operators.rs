//! Operator tables
//!
//! One exhaustive table per value kind, mapping a wire operator to a
//! builder call. `Unspecified` (also the catch-all for unknown tags) is
//! always an error, never a no-op.

use crate::api::{
    FilterArray, FilterArrayOperator, FilterBoolean, FilterBooleanOperator, FilterDate,
    FilterDateOperator, FilterDuration, FilterDurationOperator, FilterNumber, FilterNumberOperator,
    FilterStatus, FilterStatusOperator, FilterString, FilterStringOperator, ValueCondition,
};
use crate::model::StatusValue;

use super::accessor::Accessor;
use super::builders::{binary, membership, string_call, typed_binary};
use super::errors::{CompileError, CompileResult};
use super::predicate::{BinaryOp, Predicate, StringMethod};
use super::value::{FieldValue, ValueKind};

pub fn string_filter<E>(accessor: Accessor<E>, filter: &FilterString) -> CompileResult<Predicate<E>> {
    let value = filter.value.as_str();
    match filter.operator {
        FilterStringOperator::Equal => binary(accessor, value, BinaryOp::Equal),
        FilterStringOperator::NotEqual => binary(accessor, value, BinaryOp::NotEqual),
        FilterStringOperator::Contains => {
            string_call(accessor, value, StringMethod::Contains, false)
        }
        FilterStringOperator::NotContains => {
            string_call(accessor, value, StringMethod::Contains, true)
        }
        FilterStringOperator::StartsWith => {
            string_call(accessor, value, StringMethod::StartsWith, false)
        }
        FilterStringOperator::EndsWith => {
            string_call(accessor, value, StringMethod::EndsWith, false)
        }
        FilterStringOperator::Unspecified => {
            Err(CompileError::invalid_operator("string", filter.operator))
        }
    }
}

pub fn number_filter<E>(accessor: Accessor<E>, filter: &FilterNumber) -> CompileResult<Predicate<E>> {
    let op = match filter.operator {
        FilterNumberOperator::LessThan => BinaryOp::LessThan,
        FilterNumberOperator::LessOrEqual => BinaryOp::LessThanOrEqual,
        FilterNumberOperator::Equal => BinaryOp::Equal,
        FilterNumberOperator::NotEqual => BinaryOp::NotEqual,
        FilterNumberOperator::GreaterOrEqual => BinaryOp::GreaterThanOrEqual,
        FilterNumberOperator::GreaterThan => BinaryOp::GreaterThan,
        FilterNumberOperator::Unspecified => {
            return Err(CompileError::invalid_operator("number", filter.operator))
        }
    };
    binary(accessor, filter.value, op)
}

pub fn date_filter<E>(accessor: Accessor<E>, filter: &FilterDate) -> CompileResult<Predicate<E>> {
    let op = match filter.operator {
        FilterDateOperator::Before => BinaryOp::LessThan,
        FilterDateOperator::BeforeOrEqual => BinaryOp::LessThanOrEqual,
        FilterDateOperator::Equal => BinaryOp::Equal,
        FilterDateOperator::AfterOrEqual => BinaryOp::GreaterThanOrEqual,
        FilterDateOperator::After => BinaryOp::GreaterThan,
        FilterDateOperator::NotEqual => BinaryOp::NotEqual,
        FilterDateOperator::Unspecified => {
            return Err(CompileError::invalid_operator("date", filter.operator))
        }
    };
    typed_binary(accessor, FieldValue::from(filter.value), ValueKind::Date, op)
}

pub fn duration_filter<E>(
    accessor: Accessor<E>,
    filter: &FilterDuration,
) -> CompileResult<Predicate<E>> {
    let op = match filter.operator {
        FilterDurationOperator::Before => BinaryOp::LessThan,
        FilterDurationOperator::BeforeOrEqual => BinaryOp::LessThanOrEqual,
        FilterDurationOperator::Equal => BinaryOp::Equal,
        FilterDurationOperator::AfterOrEqual => BinaryOp::GreaterThanOrEqual,
        FilterDurationOperator::After => BinaryOp::GreaterThan,
        FilterDurationOperator::NotEqual => BinaryOp::NotEqual,
        FilterDurationOperator::Unspecified => {
            return Err(CompileError::invalid_operator("duration", filter.operator))
        }
    };
    typed_binary(accessor, FieldValue::from(filter.value), ValueKind::Duration, op)
}

pub fn status_filter<E, S: StatusValue>(
    accessor: Accessor<E>,
    filter: &FilterStatus<S>,
) -> CompileResult<Predicate<E>> {
    let op = match filter.operator {
        FilterStatusOperator::Equal => BinaryOp::Equal,
        FilterStatusOperator::NotEqual => BinaryOp::NotEqual,
        FilterStatusOperator::Unspecified => {
            return Err(CompileError::invalid_operator("status", filter.operator))
        }
    };
    binary(accessor, FieldValue::status(filter.value), op)
}

pub fn array_filter<E>(accessor: Accessor<E>, filter: &FilterArray) -> CompileResult<Predicate<E>> {
    match filter.operator {
        FilterArrayOperator::Contains => membership(accessor, filter.value.as_str(), false),
        FilterArrayOperator::NotContains => membership(accessor, filter.value.as_str(), true),
        FilterArrayOperator::Unspecified => {
            Err(CompileError::invalid_operator("array", filter.operator))
        }
    }
}

pub fn boolean_filter<E>(
    accessor: Accessor<E>,
    filter: &FilterBoolean,
) -> CompileResult<Predicate<E>> {
    let op = match filter.operator {
        FilterBooleanOperator::Equal => BinaryOp::Equal,
        FilterBooleanOperator::NotEqual => BinaryOp::NotEqual,
        FilterBooleanOperator::Unspecified => {
            return Err(CompileError::invalid_operator("boolean", filter.operator))
        }
    };
    binary(accessor, filter.value, op)
}

/// Dispatches a value condition to its kind's table
pub fn value_filter<E, S: StatusValue>(
    accessor: Accessor<E>,
    condition: &ValueCondition<S>,
) -> CompileResult<Predicate<E>> {
    match condition {
        ValueCondition::FilterString(filter) => string_filter(accessor, filter),
        ValueCondition::FilterNumber(filter) => number_filter(accessor, filter),
        ValueCondition::FilterDate(filter) => date_filter(accessor, filter),
        ValueCondition::FilterDuration(filter) => duration_filter(accessor, filter),
        ValueCondition::FilterStatus(filter) => status_filter(accessor, filter),
        ValueCondition::FilterArray(filter) => array_filter(accessor, filter),
        ValueCondition::FilterBoolean(filter) => boolean_filter(accessor, filter),
    }
}
