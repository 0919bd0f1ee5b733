//!
//! The tool which produced a benchmark run.
//!

///
/// The tool which produced a benchmark run.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tool {
    /// `go test -bench`.
    Go,
    /// `cargo bench`.
    Cargo,
    /// Benchmark.js.
    BenchmarkJs,
    /// pytest-benchmark.
    Pytest,
    /// Google Benchmark.
    GoogleCpp,
    /// Catch2.
    Catch2,
    /// BenchmarkTools.jl.
    Julia,
    /// Java Microbenchmark Harness.
    Jmh,
    /// BenchmarkDotNet.
    BenchmarkDotNet,
    /// Custom JSON where bigger values are better.
    CustomBiggerIsBetter,
    /// Custom JSON where smaller values are better.
    CustomSmallerIsBetter,
    /// Any other identifier, kept verbatim.
    Other(String),
}

impl Tool {
    ///
    /// Whether every value reported by the tool is bigger-is-better.
    ///
    pub fn is_bigger_better(&self) -> bool {
        matches!(self, Self::CustomBiggerIsBetter)
    }
}

impl From<&str> for Tool {
    fn from(identifier: &str) -> Self {
        match identifier {
            "go" => Self::Go,
            "cargo" => Self::Cargo,
            "benchmarkjs" => Self::BenchmarkJs,
            "pytest" => Self::Pytest,
            "googlecpp" => Self::GoogleCpp,
            "catch2" => Self::Catch2,
            "julia" => Self::Julia,
            "jmh" => Self::Jmh,
            "benchmarkdotnet" => Self::BenchmarkDotNet,
            "customBiggerIsBetter" => Self::CustomBiggerIsBetter,
            "customSmallerIsBetter" => Self::CustomSmallerIsBetter,
            identifier => Self::Other(identifier.to_owned()),
        }
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Go => write!(f, "go"),
            Self::Cargo => write!(f, "cargo"),
            Self::BenchmarkJs => write!(f, "benchmarkjs"),
            Self::Pytest => write!(f, "pytest"),
            Self::GoogleCpp => write!(f, "googlecpp"),
            Self::Catch2 => write!(f, "catch2"),
            Self::Julia => write!(f, "julia"),
            Self::Jmh => write!(f, "jmh"),
            Self::BenchmarkDotNet => write!(f, "benchmarkdotnet"),
            Self::CustomBiggerIsBetter => write!(f, "customBiggerIsBetter"),
            Self::CustomSmallerIsBetter => write!(f, "customSmallerIsBetter"),
            Self::Other(identifier) => write!(f, "{identifier}"),
        }
    }
}
