//! Entity records for the orchestrator collections
//!
//! These are the storage-side shapes the filter compiler resolves fields
//! against. Applications have no record of their own: an application is a
//! distinct `(name, version, namespace, service)` tuple of task options.

mod partition;
mod result;
mod session;
mod task;

pub use partition::PartitionData;
pub use result::{ResultData, ResultStatus};
pub use session::{SessionData, SessionStatus};
pub use task::{Application, Output, TaskData, TaskOptions, TaskStatus};

use serde::{Deserialize, Serialize};

/// A closed status enum with a stable wire ordinal.
pub trait StatusValue: Copy {
    /// Ordinal used for comparison (matches the wire enum number)
    fn ordinal(self) -> i32;
}

/// Status type for collections without a status column.
///
/// Uninhabited: a status condition cannot be built for these collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoStatus {}

impl StatusValue for NoStatus {
    fn ordinal(self) -> i32 {
        match self {}
    }
}
