//! CLI command implementations
//!
//! `explain` compiles a filter and prints its predicate; `list` runs a
//! list request against a dataset file. Request-level failures are written
//! to stdout as error responses before the command fails.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::info;

use crate::api::Filters;
use crate::catalog::{
    ApplicationCatalog, FieldCatalog, FilterCompiler, PartitionCatalog, ResultCatalog,
    SessionCatalog, TaskCatalog,
};
use crate::service::{QueryService, ServiceConfig, ServiceError};

use super::args::{Cli, Collection, Command};
use super::errors::CliResult;
use super::io::{load_dataset, parse, read_input, write_error, write_response};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    let result = run_command(cli.command);

    if let Err(err) = &result {
        if err.is_rejection() {
            write_error(err.code_str(), err.message())?;
        }
    }

    result
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Explain { collection, filter } => explain(collection, filter.as_deref()),
        Command::List {
            collection,
            data,
            config,
            request,
        } => list(collection, &data, config.as_deref(), request.as_deref()),
    }
}

/// Compile a filter read from `filter_path` (or stdin) and print it
pub fn explain(collection: Collection, filter_path: Option<&Path>) -> CliResult<()> {
    let input = read_input(filter_path)?;
    write_response(explain_filter(collection, &input)?)
}

/// Run a list request read from `request_path` (or stdin) and print the page
pub fn list(
    collection: Collection,
    data_path: &Path,
    config_path: Option<&Path>,
    request_path: Option<&Path>,
) -> CliResult<()> {
    let config = match config_path {
        Some(path) => ServiceConfig::load(path)?,
        None => ServiceConfig::default(),
    };
    let data = load_dataset(data_path)?;
    info!(
        tasks = data.tasks.len(),
        sessions = data.sessions.len(),
        results = data.results.len(),
        partitions = data.partitions.len(),
        "dataset loaded"
    );

    let service = QueryService::new(config, data);
    let input = read_input(request_path)?;
    write_response(list_collection(&service, collection, &input)?)
}

/// Compiles a JSON filter for `collection` into an explain document
pub fn explain_filter(collection: Collection, input: &str) -> CliResult<Value> {
    match collection {
        Collection::Tasks => explain_with::<TaskCatalog>(input),
        Collection::Sessions => explain_with::<SessionCatalog>(input),
        Collection::Results => explain_with::<ResultCatalog>(input),
        Collection::Partitions => explain_with::<PartitionCatalog>(input),
        Collection::Applications => explain_with::<ApplicationCatalog>(input),
    }
}

/// Runs a JSON list request for `collection` and returns the response
pub fn list_collection(
    service: &QueryService,
    collection: Collection,
    input: &str,
) -> CliResult<Value> {
    let response = match collection {
        Collection::Tasks => serde_json::to_value(service.list_tasks(&parse(input)?)?)?,
        Collection::Sessions => serde_json::to_value(service.list_sessions(&parse(input)?)?)?,
        Collection::Results => serde_json::to_value(service.list_results(&parse(input)?)?)?,
        Collection::Partitions => serde_json::to_value(service.list_partitions(&parse(input)?)?)?,
        Collection::Applications => {
            serde_json::to_value(service.list_applications(&parse(input)?)?)?
        }
    };
    Ok(response)
}

fn explain_with<C>(input: &str) -> CliResult<Value>
where
    C: FieldCatalog,
    C::Field: DeserializeOwned,
    C::Status: DeserializeOwned,
{
    let filters: Filters<C::Field, C::Status> = parse(input)?;
    let predicate = FilterCompiler::<C>::new()
        .to_filter(Some(&filters))
        .map_err(ServiceError::from)?;

    Ok(json!({
        "collection": C::COLLECTION,
        "groups": filters.or.len(),
        "conditions": predicate.condition_count(),
        "matchesAll": predicate.is_always_true(),
        "predicate": predicate.to_string(),
    }))
}
