//!
//! A benchmark run, recorded once per CI job.
//!

pub mod commit;
pub mod measurement;
pub mod tool;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use self::commit::Commit;
use self::measurement::Measurement;
use self::tool::Tool;

///
/// A benchmark run, recorded once per CI job.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    /// The commit the run was measured on.
    pub commit: Commit,
    /// Recording time in milliseconds since the Unix epoch.
    pub date: i64,
    /// Identifier of the producing tool.
    pub tool: String,
    /// Measurements in the order they were reported.
    pub benches: Vec<Measurement>,
}

impl Run {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(commit: Commit, date: i64, tool: String, benches: Vec<Measurement>) -> Self {
        Self {
            commit,
            date,
            tool,
            benches,
        }
    }

    ///
    /// The producing tool.
    ///
    pub fn tool(&self) -> Tool {
        Tool::from(self.tool.as_str())
    }

    ///
    /// The recording time, if representable.
    ///
    pub fn date_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.date)
    }

    ///
    /// Measurements carrying exactly one metric.
    ///
    pub fn single_metric_benches(&self) -> impl Iterator<Item = &Measurement> {
        self.benches
            .iter()
            .filter(|measurement| !measurement.is_composite())
    }

    ///
    /// Finds a measurement by its full name.
    ///
    pub fn find(&self, name: &str) -> Option<&Measurement> {
        self.benches
            .iter()
            .find(|measurement| measurement.name == name)
    }

    ///
    /// Whether a bigger value of the measurement is better.
    ///
    pub fn is_bigger_better(&self, measurement: &Measurement) -> bool {
        self.tool().is_bigger_better() || measurement.metric().is_bigger_better()
    }
}

impl std::fmt::Display for Run {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.date_time() {
            Some(date_time) => write!(
                f,
                "{} ({})",
                self.commit.short_id(),
                date_time.format("%Y-%m-%d %H:%M")
            ),
            None => write!(f, "{}", self.commit.short_id()),
        }
    }
}
