use std::io::Write;

use crate::constants::plantuml::{EDGE_ARROW, END_MARKER, GRAPH_CLOSE, GRAPH_OPEN, START_MARKER};
use crate::error::DebGraphError;
use crate::graph::EdgeSet;

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(DebGraphError::from)
    };
}

/// Renders an edge set as a PlantUML `digraph` document
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphRenderer;

impl GraphRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Write the document, one edge line per unique edge.
    ///
    /// Package names are quoted but not escaped.
    pub fn render_plantuml(
        &self,
        edges: &EdgeSet,
        output: &mut dyn Write,
    ) -> Result<(), DebGraphError> {
        writeln_out!(output, "{START_MARKER}")?;
        writeln_out!(output, "{GRAPH_OPEN}")?;

        for edge in edges.edges() {
            writeln_out!(output, " \"{}\" {EDGE_ARROW} \"{}\"", edge.from, edge.to)?;
        }

        writeln_out!(output, "{GRAPH_CLOSE}")?;
        writeln_out!(output, "{END_MARKER}")?;

        Ok(())
    }

    pub fn render_to_string(&self, edges: &EdgeSet) -> Result<String, DebGraphError> {
        let mut output = Vec::new();
        self.render_plantuml(edges, &mut output)?;
        Ok(String::from_utf8_lossy(&output).into_owned())
    }
}
