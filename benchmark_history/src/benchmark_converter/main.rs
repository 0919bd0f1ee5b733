//!
//! The benchmark converter binary.
//!

pub(crate) mod arguments;

use std::path::PathBuf;

use clap::Parser;

use self::arguments::Arguments;

///
/// Resolves the input paths, expanding a single directory into the history files inside.
///
fn resolve_input_paths(input_paths: Vec<PathBuf>) -> anyhow::Result<Vec<PathBuf>> {
    if input_paths.is_empty() {
        anyhow::bail!("No input files provided.");
    }
    if input_paths.len() > 1 || !input_paths[0].is_dir() {
        return Ok(input_paths);
    }

    let mut resolved = Vec::new();
    for pattern in ["**/data.js", "**/*.json"] {
        let resolution_pattern = format!("{}/{pattern}", input_paths[0].to_string_lossy());
        resolved.extend(glob::glob(resolution_pattern.as_str())?.filter_map(Result::ok));
    }
    resolved.sort();
    if resolved.is_empty() {
        anyhow::bail!(
            "No benchmark history files found in the directory {:?}",
            input_paths[0]
        );
    }
    Ok(resolved)
}

///
/// Reads and merges every input into a single history.
///
pub(crate) fn merge_inputs(
    input_paths: Vec<PathBuf>,
) -> anyhow::Result<benchmark_history::History> {
    let mut history = benchmark_history::History::default();
    for path in resolve_input_paths(input_paths)?.into_iter() {
        match benchmark_history::Input::try_from(path.as_path()) {
            Ok(input) => history.merge(input.project.as_str(), input.history),
            Err(benchmark_history::InputError::EmptyFile { path }) => {
                tracing::warn!(?path, "Input file is empty and will be skipped");
                continue;
            }
            Err(error) => Err(error)?,
        }
    }
    Ok(history)
}

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::try_parse()?;
    benchmark_history::initialize_logging(arguments.quiet);

    let history = merge_inputs(arguments.input_paths)?;
    tracing::info!(
        suites = history.entries.len(),
        runs = history.runs_count(),
        "Benchmark histories merged"
    );

    let validation = benchmark_history::Validation::from(&history);
    validation.log();
    if arguments.strict && !validation.is_valid() {
        anyhow::bail!(
            "The benchmark history has {} error(s)",
            validation.error_count()
        );
    }

    let output: benchmark_history::Output =
        (&history, arguments.output_format).try_into()?;
    output.write_to_file(arguments.output_path)?;

    Ok(())
}
