//! # Dependency Graph Module
//!
//! Crawling package dependencies into an edge set and rendering that set as a
//! PlantUML document.
//!
//! - **DependencyCrawler**: depth-bounded walk over a [`DependencySource`]
//! - **EdgeSet**: unique `(package, dependency)` pairs backed by a petgraph
//!   `DiGraph`
//! - **GraphRenderer**: turns an edge set into `@startuml ... @enduml` text
//!
//! ## Example
//!
//! ```
//! use debgraph::error::DebGraphError;
//! use debgraph::graph::{DependencyCrawler, GraphRenderer};
//! use debgraph::query::DependencySource;
//!
//! struct Fixed;
//!
//! impl DependencySource for Fixed {
//!     fn dependencies_of(&self, package: &str) -> Result<Vec<String>, DebGraphError> {
//!         Ok(match package {
//!             "curl" => vec!["libcurl4".to_string(), "openssl".to_string()],
//!             _ => Vec::new(),
//!         })
//!     }
//! }
//!
//! # fn main() -> Result<(), DebGraphError> {
//! let mut crawler = DependencyCrawler::new(Fixed);
//! crawler.fetch("curl", 0, 2)?;
//!
//! let document = GraphRenderer::new().render_to_string(crawler.edges())?;
//! assert!(document.starts_with("@startuml"));
//! assert!(document.contains(r#" "curl" -> "openssl""#));
//! # Ok(())
//! # }
//! ```
//!
//! [`DependencySource`]: crate::query::DependencySource

mod crawler;
mod renderer;
mod types;

pub use crawler::DependencyCrawler;
pub use renderer::GraphRenderer;
pub use types::{DependencyEdge, EdgeSet};
