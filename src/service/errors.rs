//! List service errors
//!
//! Every compile error is a client input error and maps to
//! `InvalidArgument`; only configuration failures are internal.

use thiserror::Error;

use crate::compiler::CompileError;

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Client-facing status of a failed request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    InvalidArgument,
    Internal,
}

impl StatusCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCode::InvalidArgument => "INVALID_ARGUMENT",
            StatusCode::Internal => "INTERNAL",
        }
    }
}

/// List service errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    // ==================
    // Client errors
    // ==================
    /// Filter or sort could not be compiled
    #[error("{0}")]
    Compile(#[from] CompileError),

    /// Page size above the configured maximum
    #[error("Page size {requested} exceeds maximum {max}")]
    PageSizeExceeded { requested: usize, max: usize },

    /// Page index out of the addressable range
    #[error("Invalid page {page} for page size {page_size}")]
    InvalidPage { page: usize, page_size: usize },

    // ==================
    // Server errors
    // ==================
    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ServiceError {
    pub fn config(message: impl Into<String>) -> Self {
        ServiceError::Config(message.into())
    }

    /// Status reported to the client
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Compile(_) => StatusCode::InvalidArgument,
            ServiceError::PageSizeExceeded { .. } => StatusCode::InvalidArgument,
            ServiceError::InvalidPage { .. } => StatusCode::InvalidArgument,
            ServiceError::Config(_) => StatusCode::Internal,
        }
    }

    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::Compile(err) => err.code(),
            ServiceError::PageSizeExceeded { .. } => "TASKGRID_PAGE_SIZE_EXCEEDED",
            ServiceError::InvalidPage { .. } => "TASKGRID_INVALID_PAGE",
            ServiceError::Config(_) => "TASKGRID_CONFIG_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let err = ServiceError::from(CompileError::invalid_field("Unspecified"));
        assert_eq!(err.status_code(), StatusCode::InvalidArgument);
        assert_eq!(err.code(), "TASKGRID_INVALID_FIELD");

        let err = ServiceError::PageSizeExceeded {
            requested: 5000,
            max: 1000,
        };
        assert_eq!(err.status_code(), StatusCode::InvalidArgument);
        assert_eq!(err.to_string(), "Page size 5000 exceeds maximum 1000");

        assert_eq!(
            ServiceError::config("missing file").status_code(),
            StatusCode::Internal
        );
    }

    #[test]
    fn test_compile_error_message_passes_through() {
        let err = ServiceError::from(CompileError::invalid_operator(
            "string",
            crate::api::FilterStringOperator::Unspecified,
        ));
        assert_eq!(err.to_string(), "Invalid operator Unspecified for string filter");
        assert_eq!(StatusCode::InvalidArgument.as_str(), "INVALID_ARGUMENT");
    }
}
