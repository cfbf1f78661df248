//! CLI module for taskgrid
//!
//! Provides command-line interface for:
//! - explain: compile a filter and print its predicate
//! - list: run a list request against a dataset file

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Collection, Command};
pub use commands::{explain, explain_filter, list, list_collection, run, run_command};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{load_dataset, parse, read_input, write_error, write_response};
