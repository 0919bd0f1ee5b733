//!
//! Tests for the benchmark analyzer.
//!

#![cfg(test)]

use std::path::Path;

use clap::Parser;

use crate::arguments::Arguments;

const SCYLLADB: &str = include_str!("../../tests/data/scylladb.js");

///
/// Writes a history whose last run triples the `Get` time of the recorded run.
///
fn write_regressed_history(path: &Path) {
    let mut history = benchmark_history::Input::parse(SCYLLADB).expect("Valid history");
    let mut candidate = history.suite("Benchmark").expect("Suite exists")[0].clone();
    candidate.commit.id = "0123456789abcdef0123456789abcdef01234567".to_owned();
    candidate.date += 60_000;
    for measurement in candidate.benches.iter_mut() {
        if measurement.name == "Benchmark_Scylla_Get"
            || measurement.name == "Benchmark_Scylla_Get - ns/op"
        {
            let value = measurement.value.as_u64().expect("Integer value");
            measurement.value = serde_json::Number::from(value * 3);
        }
    }
    history
        .append("Benchmark", candidate, None)
        .expect("Newer run is accepted");

    let output: benchmark_history::Output = (&history, benchmark_history::OutputFormat::DataJs)
        .try_into()
        .expect("Serializable history");
    output
        .write_to_file(path.to_path_buf())
        .expect("Writable history");
}

fn parse_arguments(data: &Path, extra: &[&str]) -> Arguments {
    let mut command_line = vec![
        "benchmark-analyzer".to_owned(),
        "--quiet".to_owned(),
        "--data".to_owned(),
        data.to_string_lossy().into_owned(),
    ];
    command_line.extend(extra.iter().map(|argument| (*argument).to_owned()));
    Arguments::try_parse_from(command_line).expect("Valid arguments")
}

#[test]
fn regression_raises_alert() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let data = directory.path().join("data.js");
    write_regressed_history(&data);

    let arguments = parse_arguments(&data, &[]);
    let mut report = Vec::new();
    let alerts = crate::analyze(&arguments, &mut report).expect("Comparable runs");
    assert_eq!(alerts, 1);

    let report = String::from_utf8(report).expect("UTF-8 report");
    assert!(report.contains("Alerts"));
    assert!(report.contains("Benchmark_Scylla_Get"));
    assert!(crate::check_alerts(&arguments, alerts).is_ok());
}

#[test]
fn fail_on_alert() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let data = directory.path().join("data.js");
    write_regressed_history(&data);

    let arguments = parse_arguments(&data, &["--fail-on-alert"]);
    let alerts = crate::analyze(&arguments, &mut std::io::sink()).expect("Comparable runs");
    let error = crate::check_alerts(&arguments, alerts).expect_err("Alert is a failure");
    assert!(error.to_string().contains("1 benchmark(s) regressed"));

    let arguments = parse_arguments(&data, &["--fail-on-alert", "--alert-threshold", "5.0"]);
    let alerts = crate::analyze(&arguments, &mut std::io::sink()).expect("Comparable runs");
    assert_eq!(alerts, 0);
    assert!(crate::check_alerts(&arguments, alerts).is_ok());
}

#[test]
fn single_run_and_unknown_suite() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let data = directory.path().join("data.js");
    std::fs::write(&data, SCYLLADB).expect("Fixture writing");

    assert!(crate::analyze(&parse_arguments(&data, &[]), &mut std::io::sink()).is_err());
    assert!(crate::analyze(
        &parse_arguments(&data, &["--suite", "Missing"]),
        &mut std::io::sink()
    )
    .is_err());
}
