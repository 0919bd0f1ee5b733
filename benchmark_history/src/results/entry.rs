//!
//! An entry in the benchmark comparison results table.
//!

use crate::model::history::run::measurement::Measurement;

///
/// An entry in the benchmark comparison results table.
///
#[derive(Clone, Debug)]
pub struct Entry<'a> {
    /// Suite both measurements belong to.
    pub suite: &'a str,
    /// Measurement of the reference run.
    pub reference: &'a Measurement,
    /// Measurement of the candidate run.
    pub candidate: &'a Measurement,
}

impl std::fmt::Display for Entry<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Entry {
            suite,
            reference,
            candidate,
        } = self;

        f.write_fmt(format_args!(
            "{suite}::{} {} -> {} {}",
            candidate.operation(),
            reference.value,
            candidate.value,
            candidate.unit
        ))
    }
}
