//!
//! The benchmark appender arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The benchmark appender arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Suppresses the terminal output.
    #[arg(short, long)]
    pub quiet: bool,

    /// The history file to append to. Created if missing.
    #[arg(long, default_value = "data.js")]
    pub data: PathBuf,

    /// The `go test -bench` output to record.
    #[arg(long)]
    pub report: PathBuf,

    /// JSON file with the commit record, e.g. the `head_commit` of a GitHub push event.
    #[arg(long)]
    pub commit: PathBuf,

    /// Suite to append the run to.
    #[arg(long, default_value = "Benchmark")]
    pub suite: String,

    /// Repository URL, stored in the history.
    #[arg(long)]
    pub repo_url: Option<String>,

    /// Recording time in milliseconds since the Unix epoch. Defaults to now.
    #[arg(long)]
    pub date: Option<i64>,

    /// Maximum number of runs kept in the suite. The oldest runs are dropped.
    #[arg(long)]
    pub max_items: Option<usize>,
}
