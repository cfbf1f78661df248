//! Filter compiler
//!
//! Turns wire filters into predicates over an entity type:
//!
//! - `value`: typed field values and the coercion rules for literals
//! - `accessor`: field extraction, shared by filtering and sorting
//! - `builders`: binary / membership / string-method comparisons
//! - `operators`: one exhaustive table per value kind
//! - `combinator`: DNF assembly with the vacuous-match rule
//! - `legacy`: inclusion/exclusion value sets
//!
//! The compiler is pure. It holds no state, performs no I/O and does not
//! log; callers report errors.

mod accessor;
mod builders;
mod combinator;
mod errors;
mod legacy;
mod operators;
mod predicate;
mod value;

pub use accessor::Accessor;
pub use builders::{binary, membership, string_call, typed_binary};
pub use combinator::{compile_condition, compile_group, compile_filters};
pub use errors::{CompileError, CompileResult};
pub use legacy::{collection_filter, field_filter};
pub use operators::{
    array_filter, boolean_filter, date_filter, duration_filter, number_filter, status_filter,
    string_filter, value_filter,
};
pub use predicate::{BinaryOp, Comparison, Condition, Predicate, StringMethod};
pub use value::{FieldValue, ValueKind};
