//! # Configuration Module
//!
//! Loading and validation of the TOML document that drives a run.
//!
//! - **load_config**: reads the file into a raw [`toml::Table`]
//! - **validate_config**: checks required keys and values, producing a
//!   [`VisualizerConfig`]
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use debgraph::config::{load_config, validate_config};
//!
//! # fn main() -> miette::Result<()> {
//! let table = load_config(Path::new("debgraph.toml"))?;
//! let config = validate_config(&table)?;
//! println!("Crawling {} to depth {}", config.package_name, config.max_depth);
//! # Ok(())
//! # }
//! ```

mod loader;
mod validate;
mod visualizer;

pub use loader::{load_config, parse_config};
pub use validate::{REQUIRED_KEYS, validate_config};
pub use visualizer::{VisualizerConfig, VisualizerConfigBuilder};
