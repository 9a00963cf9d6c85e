//! Reading the TOML configuration document

use std::path::Path;

use miette::{NamedSource, SourceSpan};

use crate::error::{DebGraphError, TomlParseError};

/// Parse the configuration file at `path` into a raw TOML table.
///
/// No keys are checked and no values are coerced here; see
/// [`validate_config`](super::validate_config) for that.
pub fn load_config(path: &Path) -> Result<toml::Table, DebGraphError> {
    if !path.exists() {
        return Err(DebGraphError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| DebGraphError::FileReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_config(&path.display().to_string(), &content)
}

/// Parse configuration text, labelling errors with `name`
pub fn parse_config(name: &str, content: &str) -> Result<toml::Table, DebGraphError> {
    toml::from_str(content).map_err(|e| {
        let span = e
            .span()
            .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));

        DebGraphError::TomlParseError(Box::new(TomlParseError {
            file: name.to_string(),
            source_code: NamedSource::new(name, content.to_string()),
            span,
            source: e,
        }))
    })
}
