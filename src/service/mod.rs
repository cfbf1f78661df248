//! List services
//!
//! The boundary where wire requests meet the compiler: paging is checked
//! against `ServiceConfig`, filters and sorts are compiled per collection,
//! and compile failures surface as `InvalidArgument`.
//!
//! Logging happens here, never in the compiler.

mod config;
mod errors;
mod handler;

pub use config::ServiceConfig;
pub use errors::{ServiceError, ServiceResult, StatusCode};
pub use handler::{Dataset, QueryService};
