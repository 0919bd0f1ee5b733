//!
//! The benchmark converter arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The benchmark converter arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None, arg_required_else_help = true)]
pub struct Arguments {
    /// Suppresses the terminal output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Fails if the merged history is malformed.
    #[arg(long)]
    pub strict: bool,

    /// Input files.
    /// If only one path is provided and it is a directory, every `data.js` and JSON file inside is read.
    pub input_paths: Vec<PathBuf>,

    /// Benchmark output format: `data-js`, `json`, `csv`, or `xlsx`.
    #[arg(long = "output-format", default_value_t = benchmark_history::OutputFormat::Xlsx)]
    pub output_format: benchmark_history::OutputFormat,

    /// Output file.
    #[arg(long)]
    pub output_path: PathBuf,
}
