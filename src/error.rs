use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid TOML syntax in '{file}'")]
#[diagnostic(
    code(debgraph::toml_parse_error),
    help("Check the TOML syntax near the highlighted position")
)]
pub struct TomlParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum DebGraphError {
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(debgraph::config_not_found),
        help("Pass the path of an existing TOML configuration file")
    )]
    ConfigNotFound { path: PathBuf },

    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(debgraph::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    TomlParseError(Box<TomlParseError>),

    #[error("Missing required configuration key: {key}")]
    #[diagnostic(
        code(debgraph::missing_key),
        help(
            "The configuration needs visualizer_path, package_name, result_path, max_depth \
             and repository_url"
        )
    )]
    MissingKey { key: String },

    #[error("Invalid value for '{key}': {reason}")]
    #[diagnostic(
        code(debgraph::invalid_value),
        help("Fix this value in the configuration file")
    )]
    InvalidValue { key: String, reason: String },

    #[error("Visualizer program not found: {path}")]
    #[diagnostic(
        code(debgraph::visualizer_not_found),
        help("Point visualizer_path at an installed PlantUML executable or jar")
    )]
    VisualizerNotFound { path: PathBuf },

    #[error("The '{program}' command is required but not available on this system")]
    #[diagnostic(
        code(debgraph::environment_unavailable),
        help("Install apt or set query_command to a compatible program")
    )]
    EnvironmentUnavailable { program: String },

    #[error("IO error")]
    #[diagnostic(
        code(debgraph::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(debgraph::config_error),
        help("Check your configuration file")
    )]
    ConfigurationError { message: String },
}

impl DebGraphError {
    pub(crate) fn invalid_value(key: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}
