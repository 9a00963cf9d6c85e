//! Validated run configuration

use std::path::PathBuf;

use url::Url;

use crate::constants::query::DEFAULT_COMMAND;
use crate::error::DebGraphError;

/// Settings for one crawl-render-write run, immutable once built
#[derive(Debug, Clone)]
pub struct VisualizerConfig {
    /// Diagram rendering program; checked for existence, never invoked
    pub visualizer_path: PathBuf,
    /// Root package of the crawl
    pub package_name: String,
    /// Result file the rendered document is merged into
    pub result_path: PathBuf,
    /// Deepest level that is still queried (root is depth 0)
    pub max_depth: usize,
    pub repository_url: Url,
    /// Program invoked as `<query_command> depends <package>`
    pub query_command: String,
}

impl VisualizerConfig {
    pub fn builder() -> VisualizerConfigBuilder {
        VisualizerConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct VisualizerConfigBuilder {
    visualizer_path: Option<PathBuf>,
    package_name: Option<String>,
    result_path: Option<PathBuf>,
    max_depth: Option<usize>,
    repository_url: Option<Url>,
    query_command: Option<String>,
}

impl VisualizerConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_visualizer_path(mut self, visualizer_path: impl Into<PathBuf>) -> Self {
        self.visualizer_path = Some(visualizer_path.into());
        self
    }

    pub fn with_package_name(mut self, package_name: impl Into<String>) -> Self {
        self.package_name = Some(package_name.into());
        self
    }

    pub fn with_result_path(mut self, result_path: impl Into<PathBuf>) -> Self {
        self.result_path = Some(result_path.into());
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn with_repository_url(mut self, repository_url: Url) -> Self {
        self.repository_url = Some(repository_url);
        self
    }

    pub fn with_query_command(mut self, query_command: impl Into<String>) -> Self {
        self.query_command = Some(query_command.into());
        self
    }
}

fn missing(field: &str) -> DebGraphError {
    DebGraphError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    }
}

impl crate::common::ConfigBuilder for VisualizerConfigBuilder {
    type Config = VisualizerConfig;

    fn build(self) -> Result<Self::Config, DebGraphError> {
        Ok(VisualizerConfig {
            visualizer_path: self
                .visualizer_path
                .ok_or_else(|| missing("visualizer_path"))?,
            package_name: self.package_name.ok_or_else(|| missing("package_name"))?,
            result_path: self.result_path.ok_or_else(|| missing("result_path"))?,
            max_depth: self.max_depth.ok_or_else(|| missing("max_depth"))?,
            repository_url: self
                .repository_url
                .ok_or_else(|| missing("repository_url"))?,
            query_command: self
                .query_command
                .unwrap_or_else(|| DEFAULT_COMMAND.to_string()),
        })
    }
}
