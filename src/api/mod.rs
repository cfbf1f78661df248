//! Wire messages of the list API
//!
//! Clients describe what they want with structured filter and sort
//! messages; the store and its schema stay internal. All messages are
//! serde types with camelCase JSON shapes.

mod fields;
mod filters;
mod legacy;
mod request;
mod sort;

pub use fields::{
    ApplicationField, ApplicationRawEnumField, PartitionField, PartitionRawEnumField, ResultField,
    ResultRawEnumField, SessionField, SessionRawEnumField, TaskField, TaskOptionEnumField,
    TaskSummaryEnumField,
};
pub use filters::{
    FilterArray, FilterArrayOperator, FilterBoolean, FilterBooleanOperator, FilterDate,
    FilterDateOperator, FilterDuration, FilterDurationOperator, FilterField, FilterNumber,
    FilterNumberOperator, FilterStatus, FilterStatusOperator, FilterString, FilterStringOperator,
    Filters, FiltersAnd, ValueCondition,
};
pub use legacy::{SessionFilter, StatusSelection, TaskFilter, TaskIds};
pub use request::{ListRequest, ListResponse};
pub use sort::{Sort, SortDirection};

use crate::model::{NoStatus, ResultStatus, SessionStatus, TaskStatus};

pub type TaskFilters = Filters<TaskField, TaskStatus>;
pub type SessionFilters = Filters<SessionField, SessionStatus>;
pub type ResultFilters = Filters<ResultField, ResultStatus>;
pub type PartitionFilters = Filters<PartitionField, NoStatus>;
pub type ApplicationFilters = Filters<ApplicationField, NoStatus>;

pub type ListTasksRequest = ListRequest<TaskField, TaskStatus>;
pub type ListSessionsRequest = ListRequest<SessionField, SessionStatus>;
pub type ListResultsRequest = ListRequest<ResultField, ResultStatus>;
pub type ListPartitionsRequest = ListRequest<PartitionField, NoStatus>;
pub type ListApplicationsRequest = ListRequest<ApplicationField, NoStatus>;
