//! Command implementation for the debgraph CLI
//!
//! Turns parsed arguments into a validated configuration and hands it to the
//! executor.

use miette::{Result, WrapErr};

use crate::cli::Cli;
use crate::config::{VisualizerConfig, load_config, validate_config};
use crate::executors::CommandExecutor;
use crate::executors::visualize::VisualizeExecutor;

impl TryFrom<&Cli> for VisualizerConfig {
    type Error = crate::error::DebGraphError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        validate_config(&load_config(&cli.config)?)
    }
}

/// Execute a command based on CLI input
pub fn execute_command(cli: Cli) -> Result<()> {
    let config = VisualizerConfig::try_from(&cli).wrap_err_with(|| {
        format!("Failed to load configuration '{}'", cli.config.display())
    })?;

    VisualizeExecutor::execute(config)
}
