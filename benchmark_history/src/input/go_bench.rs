//!
//! `go test -bench` output report.
//!

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::model::history::run::commit::Commit;
use crate::model::history::run::measurement::Measurement;
use crate::model::history::run::tool::Tool;
use crate::model::history::run::Run;

///
/// `go test -bench` output report.
///
#[derive(Debug, Default)]
pub struct GoBenchReport {
    /// Measurements in the reported order, each composite entry followed by its decomposition.
    pub measurements: Vec<Measurement>,
}

impl GoBenchReport {
    /// Prefix of the package line preceding the benchmarks of a package.
    const PACKAGE_PREFIX: &'static str = "pkg:";

    ///
    /// Converts the report into a run of the given commit.
    ///
    pub fn into_run(self, commit: Commit, date: i64) -> Run {
        Run::new(commit, date, Tool::Go.to_string(), self.measurements)
    }

    ///
    /// The benchmark line pattern: name, optional GOMAXPROCS suffix, iterations, metrics.
    ///
    fn line_regex() -> &'static Regex {
        static REGEX: OnceLock<Regex> = OnceLock::new();
        REGEX.get_or_init(|| {
            Regex::new(r"^(Benchmark\S+?)(?:-(\d+))?\s+(\d+)\s+(.+)$").expect("Always valid")
        })
    }

    ///
    /// Parses a single benchmark line.
    ///
    fn parse_line(line: &str, package: Option<&str>) -> anyhow::Result<Option<Vec<Measurement>>> {
        let captures = match Self::line_regex().captures(line) {
            Some(captures) => captures,
            None => return Ok(None),
        };

        let mut name = captures[1].to_owned();
        if let Some(package) = package {
            name = format!("{name} ({package})");
        }
        let iterations = &captures[3];
        let extra = match captures.get(2) {
            Some(processors) => format!("{iterations} times\n{} procs", processors.as_str()),
            None => format!("{iterations} times"),
        };

        let metrics = captures[4].trim_end();
        let (value, unit) = metrics
            .split_once(char::is_whitespace)
            .ok_or_else(|| anyhow::anyhow!("Benchmark `{name}` has no unit: `{line}`"))?;
        let value: serde_json::Number = value
            .parse()
            .map_err(|error| anyhow::anyhow!("Benchmark `{name}` value `{value}` parsing: {error}"))?;

        let measurement = Measurement::new(name, value, unit.trim_start().to_owned(), Some(extra));
        let mut measurements = measurement.decompose()?;
        measurements.insert(0, measurement);
        Ok(Some(measurements))
    }
}

impl std::str::FromStr for GoBenchReport {
    type Err = anyhow::Error;

    fn from_str(output: &str) -> Result<Self, Self::Err> {
        let packages: BTreeSet<&str> = output
            .lines()
            .filter_map(|line| line.strip_prefix(Self::PACKAGE_PREFIX))
            .map(str::trim)
            .collect();
        let qualify_names = packages.len() > 1;

        let mut package = None;
        let mut measurements = Vec::new();
        for line in output.lines() {
            if let Some(name) = line.strip_prefix(Self::PACKAGE_PREFIX) {
                package = Some(name.trim());
                continue;
            }
            let qualifier = if qualify_names { package } else { None };
            if let Some(parsed) = Self::parse_line(line, qualifier)? {
                measurements.extend(parsed);
            }
        }

        if measurements.is_empty() {
            anyhow::bail!("No benchmark results found in the `go test -bench` output");
        }
        Ok(Self { measurements })
    }
}

impl TryFrom<&Path> for GoBenchReport {
    type Error = anyhow::Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path)
            .map_err(|error| anyhow::anyhow!("Go benchmark report {path:?} reading: {error}"))?;
        text.parse()
            .map_err(|error| anyhow::anyhow!("Go benchmark report {path:?} parsing: {error}"))
    }
}
