use console::{Term, style};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};
use crate::utils::string::pluralize;

const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg} [{elapsed}]";

pub struct ProgressReporter {
    term: Term,
    multi_progress: MultiProgress,
    current_bar: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            multi_progress: MultiProgress::new(),
            current_bar: None,
        }
    }

    pub fn create_spinner(&mut self, message: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new_spinner());
        let mut frames = SPINNER_FRAMES.to_vec();
        frames.push("✓");
        pb.set_style(
            ProgressStyle::default_spinner()
                .template(SPINNER_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(&frames),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    pub fn start_crawl(&mut self, package: &str, max_depth: usize) {
        let _ = self.term.clear_line();
        eprintln!(
            "{} Crawling dependencies of {} (max depth {})...",
            style("📦").cyan(),
            style(package).green().bold(),
            style(max_depth).yellow()
        );
        let spinner = self.create_spinner(&format!("Querying {package}..."));
        self.current_bar = Some(spinner);
    }

    pub fn querying_package(&self, package: &str, depth: usize) {
        if let Some(ref pb) = self.current_bar {
            pb.set_message(format!("Querying {package} (depth {depth})..."));
        }
    }

    pub fn finish_crawl(&mut self, edges: usize, queries: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        let _ = self.term.clear_line();
        eprintln!(
            "{} Crawl complete: {} {} from {} {}",
            style("✓").green(),
            style(edges).yellow().bold(),
            pluralize("edge", edges),
            style(queries).yellow(),
            pluralize("query", queries)
        );
    }
}
