//! Core graph types

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

/// A directed dependency relationship between two packages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DependencyEdge<'a> {
    pub from: &'a str,
    pub to: &'a str,
}

/// Unique set of dependency edges discovered during a crawl.
///
/// Packages are graph nodes and each ordered `(from, to)` pair is stored at
/// most once, however often it is inserted. Edges iterate in the order they
/// were first inserted.
#[derive(Debug, Clone, Default)]
pub struct EdgeSet {
    graph: DiGraph<String, ()>,
    indices: HashMap<String, NodeIndex>,
}

impl EdgeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `from -> to`, returning `false` if the edge was already present
    pub fn insert(&mut self, from: &str, to: &str) -> bool {
        let from_idx = self.node(from);
        let to_idx = self.node(to);

        if self.graph.contains_edge(from_idx, to_idx) {
            return false;
        }

        self.graph.add_edge(from_idx, to_idx, ());
        true
    }

    pub fn contains(&self, from: &str, to: &str) -> bool {
        match (self.indices.get(from), self.indices.get(to)) {
            (Some(&from_idx), Some(&to_idx)) => self.graph.contains_edge(from_idx, to_idx),
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.edge_count() == 0
    }

    /// Number of distinct packages appearing on either side of an edge
    pub fn package_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edges(&self) -> impl Iterator<Item = DependencyEdge<'_>> + '_ {
        self.graph.edge_references().map(|edge| DependencyEdge {
            from: &self.graph[edge.source()],
            to: &self.graph[edge.target()],
        })
    }

    fn node(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.indices.get(name) {
            return idx;
        }

        let idx = self.graph.add_node(name.to_string());
        self.indices.insert(name.to_string(), idx);
        idx
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for EdgeSet {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut edges = EdgeSet::new();
        for (from, to) in iter {
            edges.insert(from, to);
        }
        edges
    }
}
