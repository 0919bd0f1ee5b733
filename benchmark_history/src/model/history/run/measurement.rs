//!
//! A single benchmark measurement.
//!

use serde::Deserialize;
use serde::Serialize;

use crate::model::metric::Metric;

///
/// A single benchmark measurement.
///
/// Go runs store every operation twice: once as a composite entry whose unit lists all metrics
/// separated by tabs, and once per metric as a decomposed entry named `<name> - <unit>`.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Benchmark name.
    pub name: String,
    /// Measured value. Kept as a JSON number so integers are written back without a fraction.
    pub value: serde_json::Number,
    /// Spread of the measured value, e.g. `± 12`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    /// Unit of the value, or the whole metric list for composite entries.
    pub unit: String,
    /// Free text, e.g. the iteration and processor count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
}

impl Measurement {
    /// Separator between a benchmark name and the unit of its decomposed entries.
    pub const DECOMPOSED_NAME_SEPARATOR: &'static str = " - ";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        name: String,
        value: serde_json::Number,
        unit: String,
        extra: Option<String>,
    ) -> Self {
        Self {
            name,
            value,
            range: None,
            unit,
            extra,
        }
    }

    ///
    /// The measured value as a float.
    ///
    pub fn value(&self) -> f64 {
        self.value.as_f64().unwrap_or(f64::NAN)
    }

    ///
    /// Whether the unit lists several metrics.
    ///
    pub fn is_composite(&self) -> bool {
        self.unit.contains('\t')
    }

    ///
    /// The metric of a single-metric entry.
    ///
    pub fn metric(&self) -> Metric {
        Metric::from(self.unit.as_str())
    }

    ///
    /// The benchmarked operation, that is the name without the decomposed unit suffix.
    ///
    pub fn operation(&self) -> &str {
        self.name
            .strip_suffix(self.unit.as_str())
            .and_then(|name| name.strip_suffix(Self::DECOMPOSED_NAME_SEPARATOR))
            .unwrap_or(self.name.as_str())
    }

    ///
    /// Returns the name of the decomposed entry of `name` for `unit`.
    ///
    pub fn decomposed_name(name: &str, unit: &str) -> String {
        format!("{name}{}{unit}", Self::DECOMPOSED_NAME_SEPARATOR)
    }

    ///
    /// Splits a composite entry into single-metric entries.
    ///
    /// The first unit token belongs to the entry's own value, the rest of the unit is a list of
    /// `<value> <unit>` pairs. Returns an empty vector for single-metric entries.
    ///
    pub fn decompose(&self) -> anyhow::Result<Vec<Measurement>> {
        if !self.is_composite() {
            return Ok(vec![]);
        }

        let mut tokens = self.unit.split_whitespace();
        let first_unit = tokens.next().ok_or_else(|| {
            anyhow::anyhow!("Benchmark `{}` has an empty composite unit", self.name)
        })?;

        let mut measurements = vec![self.decomposed(self.value.clone(), first_unit)];
        while let Some(value) = tokens.next() {
            let value: serde_json::Number = value.parse().map_err(|error| {
                anyhow::anyhow!(
                    "Benchmark `{}` composite unit value `{value}` parsing: {error}",
                    self.name
                )
            })?;
            let unit = tokens.next().ok_or_else(|| {
                anyhow::anyhow!(
                    "Benchmark `{}` composite unit value {value} has no unit",
                    self.name
                )
            })?;
            measurements.push(self.decomposed(value, unit));
        }
        Ok(measurements)
    }

    ///
    /// Creates a decomposed entry sharing the name and the extra text of this one.
    ///
    fn decomposed(&self, value: serde_json::Number, unit: &str) -> Measurement {
        Self {
            name: Self::decomposed_name(self.name.as_str(), unit),
            value,
            range: self.range.clone(),
            unit: unit.to_owned(),
            extra: self.extra.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Measurement;
    use crate::model::metric::Metric;

    fn composite() -> Measurement {
        Measurement::new(
            "Benchmark_Scylla_Set".to_owned(),
            serde_json::Number::from(1345431_u64),
            "ns/op\t    2900 B/op\t      42 allocs/op".to_owned(),
            Some("861 times\n4 procs".to_owned()),
        )
    }

    #[test]
    fn decompose_composite() {
        let decomposed = composite().decompose().expect("Always valid");
        let expected = [
            ("Benchmark_Scylla_Set - ns/op", 1345431, "ns/op"),
            ("Benchmark_Scylla_Set - B/op", 2900, "B/op"),
            ("Benchmark_Scylla_Set - allocs/op", 42, "allocs/op"),
        ];
        assert_eq!(decomposed.len(), expected.len());
        for (measurement, (name, value, unit)) in decomposed.iter().zip(expected) {
            assert_eq!(measurement.name, name);
            assert_eq!(measurement.value.as_u64(), Some(value));
            assert_eq!(measurement.unit, unit);
            assert_eq!(measurement.extra.as_deref(), Some("861 times\n4 procs"));
            assert_eq!(measurement.operation(), "Benchmark_Scylla_Set");
        }
    }

    #[test]
    fn single_metric_is_not_decomposed() {
        let measurement = Measurement::new(
            "Benchmark_Scylla_Get - B/op".to_owned(),
            serde_json::Number::from(2801_u64),
            "B/op".to_owned(),
            None,
        );
        assert!(!measurement.is_composite());
        assert!(measurement.decompose().expect("Always valid").is_empty());
        assert_eq!(measurement.metric(), Metric::BytesPerOperation);
        assert_eq!(measurement.operation(), "Benchmark_Scylla_Get");
    }

    #[test]
    fn malformed_composite() {
        let mut measurement = composite();
        measurement.unit = "ns/op\t    2900".to_owned();
        assert!(measurement.decompose().is_err());
        measurement.unit = "ns/op\t    many B/op".to_owned();
        assert!(measurement.decompose().is_err());
    }

    #[test]
    fn integers_stay_integers() {
        let json = serde_json::to_string(&composite()).expect("Always valid");
        assert!(json.contains(r#""value":1345431,"#));
        assert!(!json.contains("range"));
    }
}
