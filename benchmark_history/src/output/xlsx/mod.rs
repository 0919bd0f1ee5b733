//!
//! XLSX output format for benchmark history data.
//!

pub mod worksheet;

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::collections::HashSet;

use crate::model::history::run::Run;
use crate::model::history::History;
use crate::model::metric::Metric;

use self::worksheet::Worksheet;

///
/// XLSX output format for benchmark history data.
///
/// Every metric gets its own worksheet, with runs as columns in chronological order.
///
#[derive(Default)]
pub struct Xlsx {
    /// Worksheets by metric.
    pub worksheets: BTreeMap<Metric, Worksheet>,

    /// Run column labels.
    pub runs: Vec<String>,
    /// Run indexes used to allocate columns.
    pub run_ids: HashMap<String, u16>,
    /// Lowercase names of the created worksheets.
    pub sheet_names: HashSet<String>,
}

impl Xlsx {
    ///
    /// Allocates a new run ID or returns an existing one.
    ///
    pub fn get_run_id(&mut self, run: &Run) -> anyhow::Result<u16> {
        let key = format!("{}@{}", run.commit.id, run.date);
        if let Some(run_id) = self.run_ids.get(key.as_str()) {
            return Ok(*run_id);
        }

        let run_id = u16::try_from(self.run_ids.len())
            .ok()
            .filter(|run_id| *run_id < Worksheet::COLUMN_LIMIT)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Too many runs: {} runs do not fit into {} worksheet columns",
                    self.run_ids.len() + 1,
                    Worksheet::COLUMN_LIMIT
                )
            })?;
        self.run_ids.insert(key, run_id);
        self.runs.push(Self::run_label(run));
        Ok(run_id)
    }

    ///
    /// Returns the worksheet of a metric, creating it if needed.
    ///
    pub fn worksheet(&mut self, metric: Metric) -> anyhow::Result<&mut Worksheet> {
        if !self.worksheets.contains_key(&metric) {
            let name = Worksheet::unique_name(metric.to_string().as_str(), &self.sheet_names);
            self.sheet_names.insert(name.to_lowercase());
            let worksheet = Worksheet::new(name.as_str(), vec![("Suite", 24), ("Operation", 40)])?;
            self.worksheets.insert(metric.clone(), worksheet);
        }
        self.worksheets
            .get_mut(&metric)
            .ok_or_else(|| anyhow::anyhow!("Worksheet for `{metric}` is missing"))
    }

    ///
    /// Returns the final workbook with all worksheets.
    ///
    pub fn finalize(self) -> rust_xlsxwriter::Workbook {
        let mut workbook = rust_xlsxwriter::Workbook::new();
        for worksheet in self.worksheets.into_values() {
            workbook.push_worksheet(worksheet.into_inner());
        }
        workbook
    }

    ///
    /// Returns the column label of a run: the short commit hash and the recording date.
    ///
    fn run_label(run: &Run) -> String {
        match run.date_time() {
            Some(date_time) => format!(
                "{}\n{}",
                run.commit.short_id(),
                date_time.format("%Y-%m-%d")
            ),
            None => run.commit.short_id().to_owned(),
        }
    }
}

impl TryFrom<&History> for Xlsx {
    type Error = anyhow::Error;

    fn try_from(history: &History) -> Result<Self, Self::Error> {
        let mut xlsx = Self::default();

        let mut runs: Vec<(&str, &Run)> = history
            .entries
            .iter()
            .flat_map(|(suite, runs)| runs.iter().map(move |run| (suite.as_str(), run)))
            .collect();
        runs.sort_by_key(|(_, run)| run.date);
        for (_, run) in runs.iter() {
            xlsx.get_run_id(run)?;
        }

        for (suite, run) in runs.into_iter() {
            let run_id = xlsx.get_run_id(run)?;
            let run_label = xlsx.runs[run_id as usize].clone();
            for measurement in run.single_metric_benches() {
                let worksheet = xlsx.worksheet(measurement.metric())?;
                worksheet.add_run_column(run_label.as_str(), run_id)?;
                worksheet.write_operation_value(
                    suite,
                    measurement.operation(),
                    run_id,
                    measurement.value(),
                )?;
            }
        }

        let total_runs = u16::try_from(xlsx.runs.len())?;
        for worksheet in xlsx.worksheets.values_mut() {
            worksheet.set_totals(total_runs)?;
            if total_runs >= 2 {
                let reference_id = total_runs - 2;
                let candidate_id = total_runs - 1;
                worksheet.set_diffs(
                    reference_id,
                    xlsx.runs[reference_id as usize].as_str(),
                    candidate_id,
                    xlsx.runs[candidate_id as usize].as_str(),
                    total_runs,
                )?;
            }
        }

        Ok(xlsx)
    }
}

#[cfg(test)]
mod tests {
    use super::worksheet::Worksheet;
    use super::Xlsx;
    use crate::input::Input;
    use crate::model::history::run::measurement::Measurement;
    use crate::model::history::History;
    use crate::model::metric::Metric;

    #[test]
    fn worksheet_per_metric_and_column_per_run() {
        let mut history =
            Input::parse(include_str!("../../../tests/data/scylladb.js")).expect("Valid history");
        let mut next = history.suite("Benchmark").expect("Suite exists")[0].clone();
        next.commit.id = "0123456789abcdef".to_owned();
        next.date += 86_400_000;
        history
            .append("Benchmark", next, None)
            .expect("Newer run is accepted");

        let xlsx = Xlsx::try_from(&history).expect("Valid spreadsheet");
        assert_eq!(
            xlsx.worksheets.keys().cloned().collect::<Vec<Metric>>(),
            vec![
                Metric::NanosecondsPerOperation,
                Metric::BytesPerOperation,
                Metric::AllocationsPerOperation,
            ]
        );
        for worksheet in xlsx.worksheets.values() {
            assert_eq!(worksheet.rows.len(), 3);
            assert!(worksheet.rows.contains_key("Benchmark::Benchmark_Scylla_SetAndDelete"));
        }
        assert_eq!(xlsx.runs, vec!["7b1fdb7\n2025-03-26", "0123456\n2025-03-27"]);
    }

    #[test]
    fn colliding_sheet_names_are_made_unique() {
        let mut history =
            Input::parse(include_str!("../../../tests/data/scylladb.js")).expect("Valid history");
        let mut run = history.suite("Benchmark").expect("Suite exists")[0].clone();
        run.benches = ["MB/s", "MB per s"]
            .into_iter()
            .map(|unit| {
                Measurement::new(
                    Measurement::decomposed_name("Benchmark_Scylla_Scan", unit),
                    serde_json::Number::from(100_u64),
                    unit.to_owned(),
                    None,
                )
            })
            .collect();
        run.date += 1;
        history.append("Benchmark", run, None).expect("Newer run is accepted");

        let xlsx = Xlsx::try_from(&history).expect("Valid spreadsheet");
        assert_eq!(xlsx.worksheets.len(), 5);
        assert!(xlsx.sheet_names.contains("mb per s"));
        assert!(xlsx.sheet_names.contains("mb per s (2)"));

        let directory = tempfile::tempdir().expect("Temporary directory");
        xlsx.finalize()
            .save(directory.path().join("history.xlsx"))
            .expect("Unique worksheet names");
    }

    #[test]
    fn too_many_runs() {
        let history =
            Input::parse(include_str!("../../../tests/data/scylladb.js")).expect("Valid history");
        let run = &history.suite("Benchmark").expect("Suite exists")[0];

        let mut xlsx = Xlsx::default();
        for run_id in 0..Worksheet::COLUMN_LIMIT {
            xlsx.run_ids.insert(run_id.to_string(), run_id);
        }
        let error = xlsx.get_run_id(run).expect_err("Column limit exceeded");
        assert!(error.to_string().starts_with("Too many runs"));
        assert!(Xlsx::try_from(&History::default()).is_ok());
    }
}
