//!
//! A benchmark history well-formedness issue.
//!

///
/// Issue severity.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// The history is usable, but looks suspicious.
    Warning,
    /// The history is malformed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

///
/// A benchmark history well-formedness issue.
///
/// Runs are located by their suite and position, since commit identifiers may be empty or repeated.
///
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Issue {
    /// A suite has an empty name.
    #[error("Suite with an empty name")]
    EmptySuiteName,
    /// A suite has no runs.
    #[error("Suite `{suite}` has no runs")]
    EmptySuite {
        /// Suite name.
        suite: String,
    },
    /// A run has an empty commit identifier.
    #[error("Suite `{suite}` run #{run}: empty commit id")]
    EmptyCommitId {
        /// Suite name.
        suite: String,
        /// Run index.
        run: usize,
    },
    /// A commit timestamp is not RFC 3339.
    #[error("Suite `{suite}` run #{run}: invalid commit timestamp `{timestamp}`")]
    InvalidCommitTimestamp {
        /// Suite name.
        suite: String,
        /// Run index.
        run: usize,
        /// The offending timestamp.
        timestamp: String,
    },
    /// A run date is zero or negative.
    #[error("Suite `{suite}` run #{run}: non-positive date {date}")]
    NonPositiveDate {
        /// Suite name.
        suite: String,
        /// Run index.
        run: usize,
        /// The offending date.
        date: i64,
    },
    /// A run is dated before its predecessor.
    #[error("Suite `{suite}` run #{run}: dated {date}, before the previous run dated {previous}")]
    DatesOutOfOrder {
        /// Suite name.
        suite: String,
        /// Run index.
        run: usize,
        /// The run date.
        date: i64,
        /// The previous run date.
        previous: i64,
    },
    /// The last update time is older than the newest run.
    #[error("Last update {last_update} is older than the newest run dated {newest}")]
    LastUpdateBehind {
        /// The last update time.
        last_update: i64,
        /// The newest run date.
        newest: i64,
    },
    /// A measurement has an empty name.
    #[error("Suite `{suite}` run #{run} bench #{bench}: empty name")]
    EmptyBenchName {
        /// Suite name.
        suite: String,
        /// Run index.
        run: usize,
        /// Measurement index.
        bench: usize,
    },
    /// A measurement has an empty unit.
    #[error("Suite `{suite}` run #{run}: bench `{name}` has an empty unit")]
    EmptyUnit {
        /// Suite name.
        suite: String,
        /// Run index.
        run: usize,
        /// Measurement name.
        name: String,
    },
    /// A measurement value is negative or not finite.
    #[error("Suite `{suite}` run #{run}: bench `{name}` has an invalid value {value}")]
    InvalidValue {
        /// Suite name.
        suite: String,
        /// Run index.
        run: usize,
        /// Measurement name.
        name: String,
        /// The offending value.
        value: f64,
    },
    /// Two measurements of a run share a name.
    #[error("Suite `{suite}` run #{run}: bench `{name}` is reported more than once")]
    DuplicateBench {
        /// Suite name.
        suite: String,
        /// Run index.
        run: usize,
        /// Measurement name.
        name: String,
    },
    /// A composite unit cannot be decomposed.
    #[error("Suite `{suite}` run #{run}: {reason}")]
    MalformedCompositeUnit {
        /// Suite name.
        suite: String,
        /// Run index.
        run: usize,
        /// The decomposition error.
        reason: String,
    },
    /// A decomposed entry of a composite measurement is absent.
    #[error("Suite `{suite}` run #{run}: bench `{name}` is missing")]
    MissingDecomposition {
        /// Suite name.
        suite: String,
        /// Run index.
        run: usize,
        /// Expected measurement name.
        name: String,
    },
    /// A decomposed entry disagrees with its composite measurement.
    #[error("Suite `{suite}` run #{run}: bench `{name}` is {found}, but its composite entry reports {expected}")]
    MismatchedDecomposition {
        /// Suite name.
        suite: String,
        /// Run index.
        run: usize,
        /// Measurement name.
        name: String,
        /// Value derived from the composite entry.
        expected: f64,
        /// Value of the decomposed entry.
        found: f64,
    },
}

impl Issue {
    ///
    /// The issue severity.
    ///
    pub fn severity(&self) -> Severity {
        match self {
            Self::EmptySuite { .. }
            | Self::DatesOutOfOrder { .. }
            | Self::LastUpdateBehind { .. }
            | Self::DuplicateBench { .. }
            | Self::MissingDecomposition { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }
}
