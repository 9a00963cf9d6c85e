use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "debgraph",
    about = "📦 Visualize Debian package dependency graphs",
    long_about = "debgraph reads a TOML configuration, walks the dependencies of the configured \
                  package with apt-cache up to max_depth levels, and merges the discovered \
                  edges into a PlantUML document at result_path. Lines already present in the \
                  result file are never written twice.",
    version
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,
}
