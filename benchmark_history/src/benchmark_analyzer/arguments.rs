//!
//! The benchmark analyzer arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The benchmark analyzer arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Suppresses the diagnostic output.
    #[arg(short, long)]
    pub quiet: bool,

    /// The history file.
    #[arg(long, default_value = "data.js")]
    pub data: PathBuf,

    /// Suite to analyze.
    #[arg(long, default_value = "Benchmark")]
    pub suite: String,

    /// Commit hash prefix of the reference run. Defaults to the run preceding the candidate.
    #[arg(long)]
    pub reference: Option<String>,

    /// Commit hash prefix of the candidate run. Defaults to the last run.
    #[arg(long)]
    pub candidate: Option<String>,

    /// Factor beyond which a regression raises an alert.
    #[arg(long, default_value_t = benchmark_history::analysis::DEFAULT_ALERT_THRESHOLD)]
    pub alert_threshold: f64,

    /// Fails if any alert is raised.
    #[arg(long)]
    pub fail_on_alert: bool,

    /// Maximum number of results displayed in a group.
    #[arg(long, default_value_t = 100)]
    pub group_max: usize,

    /// The output file. If unset, the result is printed to `stdout`.
    #[arg(short, long)]
    pub output_file: Option<PathBuf>,
}
