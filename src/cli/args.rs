//! CLI argument definitions using clap
//!
//! Commands:
//! - taskgrid explain --collection <name> [--filter <path>]
//! - taskgrid list --collection <name> --data <path> [--config <path>] [--request <path>]
//!
//! Without a file argument the filter or request is read from stdin.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// taskgrid - compile and run structured list filters
#[derive(Parser, Debug)]
#[command(name = "taskgrid")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Collections a filter can target
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Tasks,
    Sessions,
    Results,
    Partitions,
    Applications,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compile a filter and print its predicate
    Explain {
        /// Collection the filter targets
        #[arg(long, value_enum)]
        collection: Collection,

        /// Path to the filter JSON (default: stdin)
        #[arg(long)]
        filter: Option<PathBuf>,
    },

    /// Run a list request against a JSON dataset
    List {
        /// Collection to list
        #[arg(long, value_enum)]
        collection: Collection,

        /// Path to the dataset JSON
        #[arg(long)]
        data: PathBuf,

        /// Path to the service configuration (default: built-in limits)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Path to the request JSON (default: stdin)
        #[arg(long)]
        request: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_explain() {
        let cli = Cli::try_parse_from(["taskgrid", "explain", "--collection", "tasks"]).unwrap();
        match cli.command {
            Command::Explain { collection, filter } => {
                assert_eq!(collection, Collection::Tasks);
                assert!(filter.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_list() {
        let cli = Cli::try_parse_from([
            "taskgrid",
            "list",
            "--collection",
            "applications",
            "--data",
            "data.json",
        ])
        .unwrap();
        match cli.command {
            Command::List {
                collection,
                data,
                config,
                request,
            } => {
                assert_eq!(collection, Collection::Applications);
                assert_eq!(data, PathBuf::from("data.json"));
                assert!(config.is_none());
                assert!(request.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_unknown_collection_is_rejected() {
        assert!(Cli::try_parse_from(["taskgrid", "explain", "--collection", "pods"]).is_err());
    }
}
