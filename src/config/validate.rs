//! Checking a loaded configuration table

use std::path::Path;

use toml::Value;
use url::Url;

use super::VisualizerConfig;
use crate::common::ConfigBuilder;
use crate::error::DebGraphError;

/// Keys every configuration must define, in the order they are checked
pub const REQUIRED_KEYS: [&str; 5] = [
    "visualizer_path",
    "package_name",
    "result_path",
    "max_depth",
    "repository_url",
];

const QUERY_COMMAND_KEY: &str = "query_command";

/// Validate a loaded configuration table.
///
/// All required keys are checked for presence before any value is inspected,
/// and only the first missing key is reported. The visualizer path is then
/// checked on disk, followed by `max_depth` and `repository_url`.
pub fn validate_config(table: &toml::Table) -> Result<VisualizerConfig, DebGraphError> {
    if let Some(key) = REQUIRED_KEYS.iter().find(|key| !table.contains_key(**key)) {
        return Err(DebGraphError::MissingKey {
            key: key.to_string(),
        });
    }

    let visualizer_path = string_value(table, "visualizer_path")?;
    if !Path::new(visualizer_path).exists() {
        return Err(DebGraphError::VisualizerNotFound {
            path: visualizer_path.into(),
        });
    }

    let max_depth = parse_depth(&table["max_depth"])?;
    let repository_url = parse_repository_url(&table["repository_url"])?;

    let mut builder = VisualizerConfig::builder()
        .with_visualizer_path(visualizer_path)
        .with_package_name(string_value(table, "package_name")?)
        .with_result_path(string_value(table, "result_path")?)
        .with_max_depth(max_depth)
        .with_repository_url(repository_url);

    if table.contains_key(QUERY_COMMAND_KEY) {
        builder = builder.with_query_command(string_value(table, QUERY_COMMAND_KEY)?);
    }

    builder.build()
}

fn string_value<'a>(table: &'a toml::Table, key: &str) -> Result<&'a str, DebGraphError> {
    table
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| DebGraphError::invalid_value(key, "must be a string"))
}

/// Accepts an integer, a float without a fractional part, or a string holding
/// an integer
fn parse_depth(value: &Value) -> Result<usize, DebGraphError> {
    let not_integer = || DebGraphError::invalid_value("max_depth", "Max depth must be an integer");

    let depth = match value {
        Value::Integer(depth) => *depth,
        Value::Float(depth) if depth.is_finite() && depth.fract() == 0.0 => *depth as i64,
        Value::String(text) => text.trim().parse::<i64>().map_err(|_| not_integer())?,
        _ => return Err(not_integer()),
    };

    usize::try_from(depth)
        .map_err(|_| DebGraphError::invalid_value("max_depth", "Max depth must not be negative"))
}

fn parse_repository_url(value: &Value) -> Result<Url, DebGraphError> {
    let invalid = || DebGraphError::invalid_value("repository_url", "Invalid repository URL");

    let text = value.as_str().ok_or_else(invalid)?;
    let url = Url::parse(text).map_err(|_| invalid())?;

    // The parser fills in a host for inputs like `http:///ubuntu`, so the
    // authority is also checked on the raw text.
    if url.scheme().is_empty() || !url.has_host() || !has_authority(text) {
        return Err(invalid());
    }

    Ok(url)
}

/// Whether `text` has a non-empty authority after `scheme://`
fn has_authority(text: &str) -> bool {
    text.split_once("://")
        .and_then(|(_, rest)| rest.split(['/', '?', '#']).next())
        .is_some_and(|authority| !authority.is_empty())
}
