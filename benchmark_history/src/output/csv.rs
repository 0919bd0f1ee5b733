//!
//! Serializing benchmark history to CSV.
//!

use std::fmt::Write;

use crate::model::history::run::measurement::Measurement;
use crate::model::history::run::Run;
use crate::model::history::History;

///
/// Serialize the history to CSV in the following format:
/// "suite", "commit", "timestamp", "date", "tool", "name", "unit", "value", "extra"
///
/// Composite measurements are skipped, since their decomposed entries carry the same values.
///
#[derive(Default)]
pub struct Csv {
    /// The CSV string.
    pub content: String,
}

impl Csv {
    /// Estimated length of a line.
    const ESTIMATED_LINE_LENGTH: usize = 256;

    ///
    /// Quotes a free-text field, doubling inner quotes and flattening line breaks.
    ///
    fn quote(text: &str) -> String {
        let text = text.replace('"', "\"\"").replace(['\r', '\n'], " ");
        format!("\"{text}\"")
    }

    ///
    /// Writes a line for a single-metric measurement.
    ///
    fn write_line(content: &mut String, suite: &str, run: &Run, measurement: &Measurement) {
        writeln!(
            content,
            r#"{}, "{}", "{}", {}, "{}", {}, {}, {}, {}"#,
            Self::quote(suite),
            run.commit.id,
            run.commit.timestamp,
            run.date,
            run.tool,
            Self::quote(measurement.name.as_str()),
            Self::quote(measurement.unit.as_str()),
            measurement.value,
            Self::quote(measurement.extra.as_deref().unwrap_or_default()),
        )
        .expect("Always valid");
    }
}

impl From<&History> for Csv {
    fn from(history: &History) -> Csv {
        let lines_estimate = history
            .entries
            .values()
            .flatten()
            .map(|run| run.benches.len())
            .sum::<usize>()
            + 1;
        let mut content = String::with_capacity(lines_estimate * Self::ESTIMATED_LINE_LENGTH);
        content.push_str(
            r#""suite", "commit", "timestamp", "date", "tool", "name", "unit", "value", "extra""#,
        );
        content.push('\n');

        for (suite, runs) in history.entries.iter() {
            for run in runs.iter() {
                for measurement in run.single_metric_benches() {
                    Self::write_line(&mut content, suite.as_str(), run, measurement);
                }
            }
        }

        Self { content }
    }
}

#[cfg(test)]
mod tests {
    use super::Csv;
    use crate::input::Input;

    #[test]
    fn one_line_per_single_metric_measurement() {
        let history =
            Input::parse(include_str!("../../tests/data/scylladb.js")).expect("Valid history");
        let Csv { content } = Csv::from(&history);
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(lines.len(), 1 + 9);
        assert_eq!(
            lines[1],
            r#""Benchmark", "7b1fdb732555f6463aa61b39dbd8e26a57221bb7", "2025-03-26T20:45:24+01:00", 1743020702386, "go", "Benchmark_Scylla_Set - ns/op", "ns/op", 1345431, "861 times 4 procs""#
        );
        assert!(!content.contains("\t"));
    }

    #[test]
    fn quotes_are_doubled() {
        assert_eq!(Csv::quote(r#"say "hi""#), r#""say ""hi""""#);
    }
}
