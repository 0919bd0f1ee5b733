//!
//! Benchmark history well-formedness checks.
//!

pub mod issue;

use std::collections::BTreeSet;

use crate::model::history::run::Run;
use crate::model::history::History;

use self::issue::Issue;
use self::issue::Severity;

///
/// The result of checking a benchmark history.
///
#[derive(Debug, Default)]
pub struct Validation {
    /// Issues in document order.
    pub issues: Vec<Issue>,
}

impl Validation {
    ///
    /// Whether no error-severity issue was found.
    ///
    pub fn is_valid(&self) -> bool {
        self.errors().next().is_none()
    }

    ///
    /// Error-severity issues.
    ///
    pub fn errors(&self) -> impl Iterator<Item = &Issue> {
        self.issues
            .iter()
            .filter(|issue| issue.severity() == Severity::Error)
    }

    ///
    /// Error-severity issue count.
    ///
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    ///
    /// Reports every issue through the logger.
    ///
    pub fn log(&self) {
        for issue in self.issues.iter() {
            match issue.severity() {
                Severity::Warning => tracing::warn!("{issue}"),
                Severity::Error => tracing::error!("{issue}"),
            }
        }
    }

    ///
    /// Checks a single run.
    ///
    fn check_run(&mut self, suite: &str, index: usize, run: &Run) {
        if run.commit.id.is_empty() {
            self.issues.push(Issue::EmptyCommitId {
                suite: suite.to_owned(),
                run: index,
            });
        }
        if run.commit.timestamp().is_err() {
            self.issues.push(Issue::InvalidCommitTimestamp {
                suite: suite.to_owned(),
                run: index,
                timestamp: run.commit.timestamp.clone(),
            });
        }
        if run.date <= 0 {
            self.issues.push(Issue::NonPositiveDate {
                suite: suite.to_owned(),
                run: index,
                date: run.date,
            });
        }

        let mut names = BTreeSet::new();
        for (bench, measurement) in run.benches.iter().enumerate() {
            if measurement.name.is_empty() {
                self.issues.push(Issue::EmptyBenchName {
                    suite: suite.to_owned(),
                    run: index,
                    bench,
                });
            } else if !names.insert(measurement.name.as_str()) {
                self.issues.push(Issue::DuplicateBench {
                    suite: suite.to_owned(),
                    run: index,
                    name: measurement.name.clone(),
                });
            }
            if measurement.unit.trim().is_empty() {
                self.issues.push(Issue::EmptyUnit {
                    suite: suite.to_owned(),
                    run: index,
                    name: measurement.name.clone(),
                });
            }
            let value = measurement.value();
            if !value.is_finite() || value < 0.0 {
                self.issues.push(Issue::InvalidValue {
                    suite: suite.to_owned(),
                    run: index,
                    name: measurement.name.clone(),
                    value,
                });
            }

            let decomposed = match measurement.decompose() {
                Ok(decomposed) => decomposed,
                Err(error) => {
                    self.issues.push(Issue::MalformedCompositeUnit {
                        suite: suite.to_owned(),
                        run: index,
                        reason: error.to_string(),
                    });
                    continue;
                }
            };
            for expected in decomposed.into_iter() {
                match run.find(expected.name.as_str()) {
                    None => self.issues.push(Issue::MissingDecomposition {
                        suite: suite.to_owned(),
                        run: index,
                        name: expected.name,
                    }),
                    Some(found) if found.value() != expected.value() => {
                        self.issues.push(Issue::MismatchedDecomposition {
                            suite: suite.to_owned(),
                            run: index,
                            name: expected.name.clone(),
                            expected: expected.value(),
                            found: found.value(),
                        })
                    }
                    Some(_) => {}
                }
            }
        }
    }
}

impl From<&History> for Validation {
    fn from(history: &History) -> Self {
        let mut validation = Self::default();

        let mut newest = None;
        for (suite, runs) in history.entries.iter() {
            if suite.is_empty() {
                validation.issues.push(Issue::EmptySuiteName);
            }
            if runs.is_empty() {
                validation.issues.push(Issue::EmptySuite {
                    suite: suite.to_owned(),
                });
            }

            let mut previous: Option<i64> = None;
            for (index, run) in runs.iter().enumerate() {
                validation.check_run(suite.as_str(), index, run);

                if let Some(previous) = previous {
                    if run.date < previous {
                        validation.issues.push(Issue::DatesOutOfOrder {
                            suite: suite.to_owned(),
                            run: index,
                            date: run.date,
                            previous,
                        });
                    }
                }
                previous = Some(run.date);
                newest = newest.max(Some(run.date));
            }
        }

        if let Some(newest) = newest {
            if history.last_update < newest {
                validation.issues.push(Issue::LastUpdateBehind {
                    last_update: history.last_update,
                    newest,
                });
            }
        }

        validation
    }
}

#[cfg(test)]
mod tests {
    use super::issue::Issue;
    use super::issue::Severity;
    use super::Validation;
    use crate::input::Input;
    use crate::model::history::History;

    fn history() -> History {
        Input::parse(include_str!("../../tests/data/scylladb.js")).expect("Valid history")
    }

    fn run_mut(history: &mut History) -> &mut crate::model::history::run::Run {
        &mut history
            .entries
            .get_mut("Benchmark")
            .expect("Suite exists")[0]
    }

    #[test]
    fn recorded_history_is_valid() {
        let validation = Validation::from(&history());
        assert!(validation.issues.is_empty(), "{:?}", validation.issues);
        assert!(validation.is_valid());
    }

    #[test]
    fn empty_name_and_unit() {
        let mut history = history();
        let run = run_mut(&mut history);
        run.benches[1].name = String::new();
        run.benches[2].unit = " ".to_owned();

        let validation = Validation::from(&history);
        assert!(!validation.is_valid());
        assert!(validation
            .issues
            .contains(&Issue::EmptyBenchName {
                suite: "Benchmark".to_owned(),
                run: 0,
                bench: 1,
            }));
        assert!(validation.issues.iter().any(|issue| matches!(
            issue,
            Issue::EmptyUnit { name, .. } if name == "Benchmark_Scylla_Set - B/op"
        )));
    }

    #[test]
    fn mismatched_and_missing_decomposition() {
        let mut history = history();
        let run = run_mut(&mut history);
        run.benches[2].value = serde_json::Number::from(2901_u64);
        run.benches.remove(3);

        let validation = Validation::from(&history);
        assert!(validation.issues.contains(&Issue::MismatchedDecomposition {
            suite: "Benchmark".to_owned(),
            run: 0,
            name: "Benchmark_Scylla_Set - B/op".to_owned(),
            expected: 2900.0,
            found: 2901.0,
        }));
        let missing = validation
            .issues
            .iter()
            .find(|issue| matches!(issue, Issue::MissingDecomposition { .. }))
            .expect("Missing decomposition reported");
        assert_eq!(missing.severity(), Severity::Warning);
        assert_eq!(validation.error_count(), 1);
    }

    #[test]
    fn negative_value_and_bad_dates() {
        let mut history = history();
        let run = run_mut(&mut history);
        run.benches[1].value = serde_json::Number::from(-1_i64);
        run.date = 0;
        run.commit.timestamp = "2025-03-26".to_owned();
        history.last_update = -5;

        let validation = Validation::from(&history);
        for expected in [
            "non-positive date 0",
            "invalid commit timestamp `2025-03-26`",
            "has an invalid value -1",
        ] {
            assert!(
                validation
                    .issues
                    .iter()
                    .any(|issue| issue.to_string().contains(expected)),
                "{expected}"
            );
        }
        assert!(validation
            .issues
            .iter()
            .any(|issue| matches!(issue, Issue::LastUpdateBehind { .. })));
    }

    #[test]
    fn dates_out_of_order() {
        let mut history = history();
        let mut older = history.suite("Benchmark").expect("Suite exists")[0].clone();
        older.date -= 1000;
        history
            .entries
            .get_mut("Benchmark")
            .expect("Suite exists")
            .push(older);

        let validation = Validation::from(&history);
        assert!(validation.is_valid());
        assert!(validation
            .issues
            .iter()
            .any(|issue| matches!(issue, Issue::DatesOutOfOrder { run: 1, .. })));
    }
}
