//! JSON I/O handling for CLI
//!
//! - Input: one JSON document, from a file or stdin
//! - Output: one JSON object per command on stdout
//! - UTF-8 only

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::service::Dataset;

use super::errors::{CliError, CliResult};

/// Read a whole JSON document from `path`, or from stdin when absent
pub fn read_input(path: Option<&Path>) -> CliResult<String> {
    let input = match path {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| CliError::io_error(format!("Failed to read {:?}: {}", path, e)))?,
        None => {
            let mut input = String::new();
            io::stdin().lock().read_to_string(&mut input)?;
            input
        }
    };

    if input.trim().is_empty() {
        return Err(CliError::io_error("Empty input"));
    }

    Ok(input)
}

/// Parse a JSON document into a wire message
pub fn parse<T: DeserializeOwned>(input: &str) -> CliResult<T> {
    Ok(serde_json::from_str(input)?)
}

/// Load a dataset file
pub fn load_dataset(path: &Path) -> CliResult<Dataset> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::io_error(format!("Failed to read dataset: {}", e)))?;

    serde_json::from_str(&content)
        .map_err(|e| CliError::invalid_input(format!("Invalid dataset JSON: {}", e)))
}

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "ok",
        "data": data
    });

    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, &response)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}

/// Write an error response to stdout
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    });

    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, &response)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}
