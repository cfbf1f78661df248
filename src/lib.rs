//! taskgrid - structured filters for task orchestrator collections
//!
//! Clients describe list queries as typed filter and sort messages; this
//! crate compiles them into predicates and accessors over the task,
//! session, result, partition and application collections, and runs them
//! against in-memory tables.

pub mod api;
pub mod catalog;
pub mod cli;
pub mod compiler;
pub mod executor;
pub mod model;
pub mod service;
