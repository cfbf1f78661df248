//! CLI-specific error types
//!
//! Configuration and I/O errors are fatal. A rejected request carries the
//! service's own error code and is also reported on stdout.

use std::fmt;
use std::io;

use crate::service::ServiceError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdin/stdout/files)
    IoError,
    /// Malformed input JSON
    InvalidInput,
    /// Request rejected by the list service, with the service code
    Rejected(&'static str),
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "TASKGRID_CLI_CONFIG_ERROR",
            Self::IoError => "TASKGRID_CLI_IO_ERROR",
            Self::InvalidInput => "TASKGRID_CLI_INVALID_INPUT",
            Self::Rejected(code) => code,
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Malformed input
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::InvalidInput, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns true if the error is a request-level rejection
    pub fn is_rejection(&self) -> bool {
        matches!(self.code, CliErrorCode::Rejected(_))
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::invalid_input(format!("JSON error: {}", e))
    }
}

impl From<ServiceError> for CliError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Config(message) => Self::config_error(message),
            other => Self::new(CliErrorCode::Rejected(other.code()), other.to_string()),
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::CompileError;

    #[test]
    fn test_service_errors_keep_their_code() {
        let err = CliError::from(ServiceError::from(CompileError::invalid_field("x")));
        assert!(err.is_rejection());
        assert_eq!(err.code_str(), "TASKGRID_INVALID_FIELD");
        assert_eq!(err.to_string(), "TASKGRID_INVALID_FIELD: Invalid field: x");
    }

    #[test]
    fn test_config_errors_are_fatal() {
        let err = CliError::from(ServiceError::config("bad limits"));
        assert!(!err.is_rejection());
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
        assert_eq!(err.message(), "bad limits");
    }

    #[test]
    fn test_json_errors() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = CliError::from(json_err);
        assert_eq!(err.code_str(), "TASKGRID_CLI_INVALID_INPUT");
    }
}
