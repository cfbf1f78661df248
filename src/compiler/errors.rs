//! Compile error types
//!
//! Error codes:
//! - TASKGRID_INVALID_FIELD
//! - TASKGRID_INVALID_OPERATOR
//! - TASKGRID_INCOMPATIBLE_VALUE
//!
//! All of them are client input errors: deterministic for a given
//! filter, never retried.

use thiserror::Error;

use super::value::ValueKind;

/// Result type for compile operations
pub type CompileResult<T> = Result<T, CompileError>;

/// Errors raised while turning a wire filter or sort into a predicate/accessor
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// Unspecified or unknown field selector, or an empty field/condition oneof
    #[error("Invalid field: {0}")]
    InvalidField(String),

    /// Unspecified or unmapped operator for the condition's value kind
    #[error("Invalid operator {operator} for {kind} filter")]
    InvalidOperator {
        kind: &'static str,
        operator: String,
    },

    /// Literal cannot be coerced to the field's declared type
    #[error("Field '{field}' of type {field_kind} cannot be compared with a {literal_kind} value")]
    IncompatibleValue {
        field: String,
        field_kind: ValueKind,
        literal_kind: ValueKind,
    },
}

impl CompileError {
    pub fn invalid_field(reason: impl Into<String>) -> Self {
        CompileError::InvalidField(reason.into())
    }

    pub fn invalid_operator(kind: &'static str, operator: impl std::fmt::Debug) -> Self {
        CompileError::InvalidOperator {
            kind,
            operator: format!("{:?}", operator),
        }
    }

    pub fn incompatible(field: impl Into<String>, field_kind: ValueKind, literal_kind: ValueKind) -> Self {
        CompileError::IncompatibleValue {
            field: field.into(),
            field_kind,
            literal_kind,
        }
    }

    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            CompileError::InvalidField(_) => "TASKGRID_INVALID_FIELD",
            CompileError::InvalidOperator { .. } => "TASKGRID_INVALID_OPERATOR",
            CompileError::IncompatibleValue { .. } => "TASKGRID_INCOMPATIBLE_VALUE",
        }
    }
}
