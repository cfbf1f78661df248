//! List executor
//!
//! Consumes compiled predicates and sort accessors and produces
//! deterministic pages of rows.
//!
//! # Execution flow (strict order)
//!
//! 1. Filter rows strictly according to the predicate
//! 2. Apply sort (if specified), stable
//! 3. Count matches
//! 4. Return the requested page
//!
//! Applications are listed from the task table: one row per distinct
//! `(name, version, namespace, service)` among the matching tasks.

mod result;
mod sorter;
mod table;

pub use result::Page;
pub use sorter::RowSorter;
pub use table::{list_applications, SortKey, Table};
