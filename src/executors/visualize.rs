//! Visualize command executor

use console::style;
use miette::{Result, WrapErr};

use crate::config::VisualizerConfig;
use crate::error::DebGraphError;
use crate::executors::CommandExecutor;
use crate::graph::{DependencyCrawler, GraphRenderer};
use crate::output::ResultWriter;
use crate::progress::ProgressReporter;
use crate::query::{AptCacheSource, DependencySource};

/// Outcome of a single crawl-render-write run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualizeSummary {
    /// Unique edges found by the crawl
    pub edges: usize,
    /// External dependency queries issued
    pub queries: usize,
    /// Lines appended to the result file, in write order
    pub appended: Vec<String>,
}

/// Crawl from the configured root package, render the edges and merge them
/// into the result file.
///
/// A query failure aborts before anything is written.
pub fn visualize<S: DependencySource>(
    config: &VisualizerConfig,
    source: S,
    mut progress: Option<&mut ProgressReporter>,
) -> Result<VisualizeSummary, DebGraphError> {
    if let Some(p) = progress.as_deref_mut() {
        p.start_crawl(&config.package_name, config.max_depth);
    }

    let mut crawler = DependencyCrawler::new(source);
    crawler.fetch_with_progress(
        &config.package_name,
        0,
        config.max_depth,
        progress.as_deref(),
    )?;

    let queries = crawler.queries();
    let edges = crawler.into_edges();

    if let Some(p) = progress.as_deref_mut() {
        p.finish_crawl(edges.len(), queries);
    }

    let document = GraphRenderer::new().render_to_string(&edges)?;
    let appended = ResultWriter::new(&config.result_path)
        .save(&document)?
        .into_iter()
        .map(str::to_string)
        .collect();

    Ok(VisualizeSummary {
        edges: edges.len(),
        queries,
        appended,
    })
}

pub struct VisualizeExecutor;

impl CommandExecutor for VisualizeExecutor {
    type Config = VisualizerConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let source = AptCacheSource::with_program(&config.query_command);
        let mut progress = ProgressReporter::new();

        let summary = visualize(&config, &source, Some(&mut progress)).wrap_err_with(|| {
            format!(
                "Failed to visualize dependencies of '{}'",
                config.package_name
            )
        })?;

        if summary.appended.is_empty() {
            eprintln!(
                "{} {} already contains every line of this graph",
                style("ℹ").blue(),
                style(config.result_path.display()).bold()
            );
        }

        for line in &summary.appended {
            println!("{line}");
        }

        println!(
            "Dependency graph written to: {}",
            config.result_path.display()
        );

        Ok(())
    }
}
