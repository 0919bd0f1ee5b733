//!
//! The benchmark history library.
//!

pub mod analysis;
pub mod input;
pub mod logging;
pub mod model;
pub mod output;
pub mod results;
pub mod util;
pub mod validation;

pub use crate::analysis::compare;
pub use crate::analysis::select_runs;
pub use crate::input::error::Error as InputError;
pub use crate::input::go_bench::GoBenchReport;
pub use crate::input::Input;
pub use crate::logging::initialize as initialize_logging;
pub use crate::model::history::run::commit::Commit;
pub use crate::model::history::run::commit::person::Person;
pub use crate::model::history::run::measurement::Measurement;
pub use crate::model::history::run::tool::Tool;
pub use crate::model::history::run::Run;
pub use crate::model::history::History;
pub use crate::model::metric::Metric;
pub use crate::output::format::Format as OutputFormat;
pub use crate::output::Output;
pub use crate::results::Results;
pub use crate::validation::issue::Issue as ValidationIssue;
pub use crate::validation::issue::Severity as ValidationSeverity;
pub use crate::validation::Validation;
