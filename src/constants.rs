//! Configuration constants for debgraph
//!
//! Names of the external programs, the markers of the rendered document and
//! the progress spinner settings live here.

use std::time::Duration;

/// External package metadata query
pub mod query {
    /// Program queried for dependency metadata when the configuration does not
    /// name one
    pub const DEFAULT_COMMAND: &str = "apt-cache";

    /// Subcommand passed before the package name
    pub const SUBCOMMAND: &str = "depends";

    /// Lines starting with this prefix name exactly one dependency
    pub const DEPENDS_PREFIX: &str = "Depends:";
}

/// PlantUML document structure
pub mod plantuml {
    pub const START_MARKER: &str = "@startuml";
    pub const GRAPH_OPEN: &str = "digraph dependencies {";
    pub const GRAPH_CLOSE: &str = "}";
    pub const END_MARKER: &str = "@enduml";
    pub const EDGE_ARROW: &str = "->";
}

/// Progress spinner configuration
pub mod progress {
    use super::*;

    /// Duration between spinner updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames shown while packages are being queried
    pub const SPINNER_FRAMES: &[&str] = &["📦 ", "📦·", "📦∙", "📦•", "📦●", "📦•", "📦∙", "📦·"];
}
