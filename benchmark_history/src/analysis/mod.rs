//!
//! Provides tools for comparing benchmark runs.
//!

use std::collections::BTreeMap;

use crate::model::history::run::measurement::Measurement;
use crate::model::history::run::Run;
use crate::model::metric::Metric;
use crate::results::entry::Entry;
use crate::results::Results;
use crate::util::btreemap::intersect_map;

/// Default alert threshold: the candidate is twice as bad as the reference.
pub const DEFAULT_ALERT_THRESHOLD: f64 = 2.0;

///
/// Indexes the single-metric measurements of a run by name.
///
fn collect_measurements(run: &Run) -> BTreeMap<&str, &Measurement> {
    run.single_metric_benches()
        .map(|measurement| (measurement.name.as_str(), measurement))
        .collect()
}

///
/// Finds the run of a commit, by a commit identifier prefix, newest first.
///
fn find_run<'a>(runs: &'a [Run], commit: &str) -> anyhow::Result<(usize, &'a Run)> {
    runs.iter()
        .enumerate()
        .rev()
        .find(|(_, run)| run.commit.id.starts_with(commit))
        .ok_or_else(|| anyhow::anyhow!("No run of commit `{commit}` found"))
}

///
/// Selects the reference and the candidate run of a suite.
///
/// The candidate defaults to the last run. The reference defaults to the nearest earlier run
/// of another commit, so reruns of the same commit are not compared against each other.
///
pub fn select_runs<'a>(
    runs: &'a [Run],
    reference: Option<&str>,
    candidate: Option<&str>,
) -> anyhow::Result<(&'a Run, &'a Run)> {
    let (candidate_index, candidate) = match candidate {
        Some(commit) => find_run(runs, commit)?,
        None => runs
            .iter()
            .enumerate()
            .next_back()
            .ok_or_else(|| anyhow::anyhow!("The suite has no runs"))?,
    };
    let reference = match reference {
        Some(commit) => find_run(runs, commit)?.1,
        None => runs[..candidate_index]
            .iter()
            .rev()
            .find(|run| run.commit.id != candidate.commit.id)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "No run of another commit precedes commit {}",
                    candidate.commit.id
                )
            })?,
    };
    Ok((reference, candidate))
}

///
/// Compares two runs of a suite measurement by measurement, grouped by metric.
///
/// Composite measurements are skipped, since their decomposed entries carry the same values.
/// Measurements present in only one run, or with a zero denominator, are ignored.
///
pub fn compare<'a>(
    suite: &'a str,
    reference: &'a Run,
    candidate: &'a Run,
    alert_threshold: f64,
) -> BTreeMap<Metric, Results<'a>> {
    let pairs: Vec<(&Measurement, &Measurement)> = intersect_map(
        collect_measurements(reference),
        collect_measurements(candidate),
        |_name, reference, candidate| (reference, candidate),
    )
    .collect();

    let mut groups: BTreeMap<Metric, (Results<'a>, f64, f64)> = BTreeMap::new();
    for (reference_measurement, candidate_measurement) in pairs.into_iter() {
        let reference_value = reference_measurement.value();
        let candidate_value = candidate_measurement.value();
        if reference_value == 0.0 || !reference_value.is_finite() || !candidate_value.is_finite()
        {
            tracing::debug!(
                name = candidate_measurement.name.as_str(),
                "Skipping a measurement without a comparable value"
            );
            continue;
        }

        let is_bigger_better = candidate.is_bigger_better(candidate_measurement);
        let (numerator, denominator) = if is_bigger_better {
            (reference_value, candidate_value)
        } else {
            (candidate_value, reference_value)
        };
        if denominator == 0.0 {
            tracing::debug!(
                name = candidate_measurement.name.as_str(),
                "Skipping a bigger-is-better measurement which dropped to zero"
            );
            continue;
        }

        let (results, numerator_total, denominator_total) = groups
            .entry(candidate_measurement.metric())
            .or_insert_with(|| (Results::default(), 0.0, 0.0));
        *numerator_total += numerator;
        *denominator_total += denominator;
        results.push(
            numerator / denominator,
            Entry {
                suite,
                reference: reference_measurement,
                candidate: candidate_measurement,
            },
            alert_threshold,
        );
    }

    groups
        .into_iter()
        .map(|(metric, (mut results, numerator_total, denominator_total))| {
            results.total = numerator_total / denominator_total;
            (metric, results)
        })
        .collect()
}
