//!
//! The metric a single-metric measurement is expressed in.
//!

///
/// The metric a single-metric measurement is expressed in.
///
/// The variant order is the presentation order of the exports.
///
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Metric {
    /// Wall time per operation, `ns/op`.
    NanosecondsPerOperation,
    /// Heap bytes allocated per operation, `B/op`.
    BytesPerOperation,
    /// Heap allocations per operation, `allocs/op`.
    AllocationsPerOperation,
    /// Any other unit reported by a benchmark, kept verbatim.
    Other(String),
}

impl Metric {
    /// Rate suffixes, for which a bigger value is better.
    const RATE_SUFFIXES: [&'static str; 2] = ["/s", "/sec"];

    ///
    /// Whether a bigger value of this metric means a better result.
    ///
    pub fn is_bigger_better(&self) -> bool {
        match self {
            Self::Other(unit) => Self::RATE_SUFFIXES
                .iter()
                .any(|suffix| unit.ends_with(suffix)),
            _ => false,
        }
    }
}

impl From<&str> for Metric {
    fn from(unit: &str) -> Self {
        match unit.trim() {
            "ns/op" => Self::NanosecondsPerOperation,
            "B/op" => Self::BytesPerOperation,
            "allocs/op" => Self::AllocationsPerOperation,
            unit => Self::Other(unit.to_owned()),
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NanosecondsPerOperation => write!(f, "ns/op"),
            Self::BytesPerOperation => write!(f, "B/op"),
            Self::AllocationsPerOperation => write!(f, "allocs/op"),
            Self::Other(unit) => write!(f, "{unit}"),
        }
    }
}
