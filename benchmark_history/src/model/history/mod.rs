//!
//! The benchmark history, that is the whole `data.js` document.
//!

pub mod run;

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use self::run::Run;

///
/// The benchmark history, that is the whole `data.js` document.
///
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct History {
    /// Time of the last append in milliseconds since the Unix epoch.
    pub last_update: i64,
    /// Repository the benchmarks belong to.
    pub repo_url: String,
    /// Runs of every suite, oldest first.
    pub entries: BTreeMap<String, Vec<Run>>,
}

impl History {
    /// Separator between the project and the suite name of merged histories.
    pub const PROJECT_SEPARATOR: &'static str = "::";

    ///
    /// Creates an empty history of a repository.
    ///
    pub fn new(repo_url: String) -> Self {
        Self {
            last_update: 0,
            repo_url,
            entries: BTreeMap::new(),
        }
    }

    ///
    /// Returns the runs of a suite.
    ///
    pub fn suite(&self, name: &str) -> anyhow::Result<&[Run]> {
        self.entries
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Suite `{name}` not found. Available suites: {}",
                    self.entries
                        .keys()
                        .map(String::as_str)
                        .collect::<Vec<&str>>()
                        .join(", ")
                )
            })
    }

    ///
    /// Total number of runs across all suites.
    ///
    pub fn runs_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    ///
    /// Appends a run to the end of a suite.
    ///
    /// If `max_items` is set, the oldest runs beyond the cap are dropped.
    ///
    pub fn append(
        &mut self,
        suite: &str,
        run: Run,
        max_items: Option<usize>,
    ) -> anyhow::Result<()> {
        let runs = self.entries.entry(suite.to_owned()).or_default();
        if let Some(last) = runs.last() {
            if run.date < last.date {
                anyhow::bail!(
                    "Run of commit {} in suite `{suite}` is dated {}, which is older than the last run dated {}",
                    run.commit.id,
                    run.date,
                    last.date
                );
            }
            if run.commit.id == last.commit.id {
                tracing::warn!(
                    suite,
                    commit = run.commit.id.as_str(),
                    "Appending another run of the same commit"
                );
            }
        }

        self.last_update = self.last_update.max(run.date);
        runs.push(run);

        if let Some(max_items) = max_items {
            if runs.len() > max_items {
                let excess = runs.len() - max_items;
                runs.drain(..excess);
                tracing::info!(suite, excess, "Dropped the oldest runs");
            }
        }
        Ok(())
    }

    ///
    /// Merges another history, prefixing its suite names with `project`.
    ///
    pub fn merge(&mut self, project: &str, other: History) {
        if self.repo_url.is_empty() {
            self.repo_url = other.repo_url;
        }
        self.last_update = self.last_update.max(other.last_update);
        for (suite, runs) in other.entries.into_iter() {
            let name = format!("{project}{}{suite}", Self::PROJECT_SEPARATOR);
            self.entries.entry(name).or_default().extend(runs);
        }
    }
}
