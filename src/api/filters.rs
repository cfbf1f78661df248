//! Structured filter messages
//!
//! A filter is a disjunction of conjunctions of field conditions:
//! `{"or": [{"and": [FilterField, ...]}, ...]}`.
//!
//! `F` is the collection's field selector, `S` its status enum.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Operators for string-valued fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterStringOperator {
    Equal,
    NotEqual,
    Contains,
    NotContains,
    StartsWith,
    EndsWith,
    #[default]
    #[serde(other)]
    Unspecified,
}

/// Operators for integer-valued fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterNumberOperator {
    LessThan,
    #[serde(alias = "LessThanOrEqual")]
    LessOrEqual,
    Equal,
    NotEqual,
    #[serde(alias = "GreaterThanOrEqual")]
    GreaterOrEqual,
    GreaterThan,
    #[default]
    #[serde(other)]
    Unspecified,
}

/// Operators for timestamp fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterDateOperator {
    Before,
    BeforeOrEqual,
    Equal,
    AfterOrEqual,
    After,
    NotEqual,
    #[default]
    #[serde(other)]
    Unspecified,
}

/// Operators for duration fields (same set as dates)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterDurationOperator {
    #[serde(alias = "LessThan")]
    Before,
    #[serde(alias = "LessThanOrEqual")]
    BeforeOrEqual,
    Equal,
    #[serde(alias = "GreaterThanOrEqual")]
    AfterOrEqual,
    #[serde(alias = "GreaterThan")]
    After,
    NotEqual,
    #[default]
    #[serde(other)]
    Unspecified,
}

/// Operators for status fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterStatusOperator {
    Equal,
    NotEqual,
    #[default]
    #[serde(other)]
    Unspecified,
}

/// Operators for list-valued fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterArrayOperator {
    Contains,
    NotContains,
    #[default]
    #[serde(other)]
    Unspecified,
}

/// Operators for boolean fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterBooleanOperator {
    #[serde(alias = "Is")]
    Equal,
    NotEqual,
    #[default]
    #[serde(other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterString {
    pub operator: FilterStringOperator,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterNumber {
    pub operator: FilterNumberOperator,
    pub value: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterDate {
    pub operator: FilterDateOperator,
    pub value: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterDuration {
    pub operator: FilterDurationOperator,
    pub value: Option<Duration>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterStatus<S> {
    #[serde(default)]
    pub operator: FilterStatusOperator,
    pub value: S,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterArray {
    pub operator: FilterArrayOperator,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterBoolean {
    pub operator: FilterBooleanOperator,
    pub value: bool,
}

/// The comparison half of a field condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueCondition<S> {
    FilterString(FilterString),
    FilterNumber(FilterNumber),
    FilterDate(FilterDate),
    FilterDuration(FilterDuration),
    FilterStatus(FilterStatus<S>),
    FilterArray(FilterArray),
    FilterBoolean(FilterBoolean),
}

impl<S> ValueCondition<S> {
    pub fn string(operator: FilterStringOperator, value: impl Into<String>) -> Self {
        ValueCondition::FilterString(FilterString {
            operator,
            value: value.into(),
        })
    }

    pub fn number(operator: FilterNumberOperator, value: i64) -> Self {
        ValueCondition::FilterNumber(FilterNumber { operator, value })
    }

    pub fn date(operator: FilterDateOperator, value: Option<DateTime<Utc>>) -> Self {
        ValueCondition::FilterDate(FilterDate { operator, value })
    }

    pub fn duration(operator: FilterDurationOperator, value: Option<Duration>) -> Self {
        ValueCondition::FilterDuration(FilterDuration { operator, value })
    }

    pub fn status(operator: FilterStatusOperator, value: S) -> Self {
        ValueCondition::FilterStatus(FilterStatus { operator, value })
    }

    pub fn array(operator: FilterArrayOperator, value: impl Into<String>) -> Self {
        ValueCondition::FilterArray(FilterArray {
            operator,
            value: value.into(),
        })
    }

    pub fn boolean(operator: FilterBooleanOperator, value: bool) -> Self {
        ValueCondition::FilterBoolean(FilterBoolean { operator, value })
    }
}

/// One field/operator/value triple
///
/// Both halves are optional on the wire; an empty half is rejected by the
/// compiler rather than ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterField<F, S> {
    pub field: Option<F>,
    pub condition: Option<ValueCondition<S>>,
}

impl<F, S> FilterField<F, S> {
    pub fn new(field: impl Into<F>, condition: ValueCondition<S>) -> Self {
        Self {
            field: Some(field.into()),
            condition: Some(condition),
        }
    }
}

/// Conjunction of field conditions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiltersAnd<F, S> {
    #[serde(default = "Vec::new")]
    pub and: Vec<FilterField<F, S>>,
}

impl<F, S> FiltersAnd<F, S> {
    pub fn new(and: Vec<FilterField<F, S>>) -> Self {
        Self { and }
    }
}

impl<F, S> Default for FiltersAnd<F, S> {
    fn default() -> Self {
        Self { and: Vec::new() }
    }
}

/// Disjunction of conjunctions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filters<F, S> {
    #[serde(default = "Vec::new")]
    pub or: Vec<FiltersAnd<F, S>>,
}

impl<F, S> Filters<F, S> {
    pub fn new(or: Vec<FiltersAnd<F, S>>) -> Self {
        Self { or }
    }

    /// A filter made of a single condition
    pub fn single(condition: FilterField<F, S>) -> Self {
        Self::new(vec![FiltersAnd::new(vec![condition])])
    }

    /// Returns true if this filter matches everything by construction
    pub fn is_vacuous(&self) -> bool {
        self.or.is_empty()
    }
}

impl<F, S> Default for Filters<F, S> {
    fn default() -> Self {
        Self { or: Vec::new() }
    }
}
