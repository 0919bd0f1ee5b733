//!
//! The benchmark analyzer binary.
//!

pub(crate) mod arguments;
pub(crate) mod tests;

use std::io::Write;

use clap::Parser;

use self::arguments::Arguments;

///
/// Compares the selected runs and writes the reports.
///
/// Returns the number of alerts raised.
///
pub(crate) fn analyze<W>(arguments: &Arguments, writer: &mut W) -> anyhow::Result<usize>
where
    W: Write,
{
    let input = benchmark_history::Input::try_from(arguments.data.as_path())?;
    let validation = benchmark_history::Validation::from(&input.history);
    validation.log();
    if !validation.is_valid() {
        anyhow::bail!(
            "The benchmark history {:?} has {} error(s)",
            arguments.data,
            validation.error_count()
        );
    }

    let runs = input.history.suite(arguments.suite.as_str())?;
    let (reference, candidate) = benchmark_history::select_runs(
        runs,
        arguments.reference.as_deref(),
        arguments.candidate.as_deref(),
    )?;
    tracing::info!(%reference, %candidate, "Comparing benchmark runs");

    let groups_results = benchmark_history::compare(
        arguments.suite.as_str(),
        reference,
        candidate,
        arguments.alert_threshold,
    );

    let mut alerts = 0;
    for (metric, mut results) in groups_results.into_iter() {
        let group_name = metric.to_string();
        results.sort_worst();
        results.print_top_results(arguments.group_max, group_name.as_str());
        results.write_all(writer, group_name.as_str())?;
        writeln!(writer)?;
        alerts += results.alerts.len();
    }
    Ok(alerts)
}

///
/// Reports the raised alerts, failing under `--fail-on-alert`.
///
pub(crate) fn check_alerts(arguments: &Arguments, alerts: usize) -> anyhow::Result<()> {
    if alerts == 0 {
        return Ok(());
    }
    tracing::warn!(
        alerts,
        threshold = arguments.alert_threshold,
        "Performance regressions beyond the alert threshold"
    );
    if arguments.fail_on_alert {
        anyhow::bail!("{alerts} benchmark(s) regressed beyond the alert threshold");
    }
    Ok(())
}

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::try_parse()?;
    benchmark_history::initialize_logging(arguments.quiet);

    let mut writer: Box<dyn Write> = match arguments.output_file {
        Some(ref output_path) => Box::new(std::fs::File::create(output_path).map_err(
            |error| anyhow::anyhow!("Output file {output_path:?} creating: {error}"),
        )?),
        None => Box::new(std::io::stdout()),
    };

    let alerts = analyze(&arguments, &mut writer)?;
    check_alerts(&arguments, alerts)
}
