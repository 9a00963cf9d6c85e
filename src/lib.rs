//! # debgraph - Visualize Debian Package Dependencies
//!
//! debgraph walks the declared dependencies of a package, as reported by
//! `apt-cache depends`, down to a configured depth and merges the discovered
//! edges into a PlantUML document.
//!
//! ## Main Components
//!
//! - **Config**: loads and validates the TOML configuration
//! - **Query**: the [`DependencySource`](query::DependencySource) capability
//!   and its `apt-cache` implementation
//! - **Graph**: the depth-bounded crawler, the unique edge set and the
//!   PlantUML renderer
//! - **Output**: merges rendered lines into the result file without
//!   duplicating existing ones
//!
//! ## Usage
//!
//! A configuration file looks like this:
//!
//! ```toml
//! visualizer_path = "/usr/bin/plantuml"
//! package_name = "curl"
//! result_path = "./curl.puml"
//! max_depth = 2
//! repository_url = "http://archive.ubuntu.com/ubuntu"
//! ```
//!
//! ### Example: Running the whole pipeline
//!
//! ```no_run
//! use std::path::Path;
//!
//! use debgraph::config::{load_config, validate_config};
//! use debgraph::executors::visualize::visualize;
//! use debgraph::query::AptCacheSource;
//!
//! # fn main() -> miette::Result<()> {
//! let config = validate_config(&load_config(Path::new("debgraph.toml"))?)?;
//! let source = AptCacheSource::with_program(&config.query_command);
//!
//! let summary = visualize(&config, &source, None)?;
//! println!(
//!     "{} edges from {} queries, {} new lines",
//!     summary.edges,
//!     summary.queries,
//!     summary.appended.len()
//! );
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod error;
pub mod executors;
pub mod graph;
pub mod output;
pub mod progress;
pub mod query;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    execute_command(Cli::parse())
}
