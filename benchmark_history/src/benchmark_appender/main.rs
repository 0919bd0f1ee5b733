//!
//! The benchmark appender binary.
//!

pub(crate) mod arguments;

use std::path::Path;

use clap::Parser;

use self::arguments::Arguments;

///
/// Reads the commit record the run was measured on.
///
fn read_commit(path: &Path) -> anyhow::Result<benchmark_history::Commit> {
    let text = std::fs::read_to_string(path)
        .map_err(|error| anyhow::anyhow!("Commit file {path:?} reading: {error}"))?;
    serde_json::from_str(text.as_str())
        .map_err(|error| anyhow::anyhow!("Commit file {path:?} parsing: {error}"))
}

///
/// Reads the history to append to, or starts a new one.
///
fn read_history(path: &Path) -> anyhow::Result<benchmark_history::History> {
    if !path.exists() {
        tracing::info!(?path, "Starting a new benchmark history");
        return Ok(benchmark_history::History::default());
    }
    match benchmark_history::Input::try_from(path) {
        Ok(input) => Ok(input.history),
        Err(benchmark_history::InputError::EmptyFile { path }) => {
            tracing::warn!(?path, "Benchmark history is empty, starting a new one");
            Ok(benchmark_history::History::default())
        }
        Err(error) => Err(error.into()),
    }
}

///
/// Appends the reported run to the history and writes it back.
///
/// The history file is left untouched if the appended history is malformed.
///
pub(crate) fn append(arguments: &Arguments) -> anyhow::Result<()> {
    let commit = read_commit(arguments.commit.as_path())?;
    let report = benchmark_history::GoBenchReport::try_from(arguments.report.as_path())?;
    let date = arguments
        .date
        .unwrap_or_else(|| chrono::Utc::now().timestamp_millis());

    let mut history = read_history(arguments.data.as_path())?;
    if let Some(repo_url) = arguments.repo_url.as_ref() {
        history.repo_url = repo_url.to_owned();
    }

    let run = report.into_run(commit, date);
    tracing::info!(
        suite = arguments.suite.as_str(),
        commit = run.commit.short_id(),
        benches = run.benches.len(),
        "Appending a benchmark run"
    );
    history.append(arguments.suite.as_str(), run, arguments.max_items)?;

    let validation = benchmark_history::Validation::from(&history);
    validation.log();
    if !validation.is_valid() {
        anyhow::bail!(
            "The benchmark history has {} error(s) and is left unchanged",
            validation.error_count()
        );
    }

    let output: benchmark_history::Output =
        (&history, benchmark_history::OutputFormat::DataJs).try_into()?;
    output.write_to_file(arguments.data.clone())?;

    Ok(())
}

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::try_parse()?;
    benchmark_history::initialize_logging(arguments.quiet);

    append(&arguments)
}
