use crate::error::DebGraphError;
use crate::graph::EdgeSet;
use crate::progress::ProgressReporter;
use crate::query::DependencySource;

/// Depth-bounded crawl over a package's declared dependencies
///
/// Packages are not deduplicated across branches: a package reachable through
/// several paths is queried once per path, and only `max_depth` bounds the
/// total work. The edge set itself never holds a pair twice.
pub struct DependencyCrawler<S> {
    source: S,
    edges: EdgeSet,
    queries: usize,
}

impl<S: DependencySource> DependencyCrawler<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            edges: EdgeSet::new(),
            queries: 0,
        }
    }

    /// Crawl from `package`, which sits at `current_depth`.
    ///
    /// Packages deeper than `max_depth` are not queried at all. The first
    /// query error aborts the crawl; edges recorded before it are kept.
    pub fn fetch(
        &mut self,
        package: &str,
        current_depth: usize,
        max_depth: usize,
    ) -> Result<(), DebGraphError> {
        self.fetch_with_progress(package, current_depth, max_depth, None)
    }

    pub fn fetch_with_progress(
        &mut self,
        package: &str,
        current_depth: usize,
        max_depth: usize,
        progress: Option<&ProgressReporter>,
    ) -> Result<(), DebGraphError> {
        // Children are pushed in reverse so packages are queried in the same
        // order a depth-first recursion would query them.
        let mut stack = vec![(package.to_string(), current_depth)];

        while let Some((package, depth)) = stack.pop() {
            if depth > max_depth {
                continue;
            }

            if let Some(p) = progress {
                p.querying_package(&package, depth);
            }

            let dependencies = self.source.dependencies_of(&package)?;
            self.queries += 1;

            for dependency in &dependencies {
                self.edges.insert(&package, dependency);
            }

            if depth < max_depth {
                stack.extend(
                    dependencies
                        .into_iter()
                        .rev()
                        .map(|dependency| (dependency, depth + 1)),
                );
            }
        }

        Ok(())
    }

    pub fn edges(&self) -> &EdgeSet {
        &self.edges
    }

    pub fn into_edges(self) -> EdgeSet {
        self.edges
    }

    /// Number of external queries issued so far
    pub fn queries(&self) -> usize {
        self.queries
    }
}
