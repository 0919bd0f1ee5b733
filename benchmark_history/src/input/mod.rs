//!
//! Benchmark history input.
//!

pub mod error;
pub mod go_bench;

use std::path::Path;

use crate::model::history::History;

use self::error::Error as InputError;

///
/// A benchmark history read from a file, together with the project it belongs to.
///
#[derive(Debug)]
pub struct Input {
    /// The history.
    pub history: History,
    /// Project identifier, by default the name of the directory holding the file.
    pub project: String,
}

impl Input {
    /// The assignment `data.js` files start with.
    pub const ASSIGNMENT_PREFIX: &'static str = "window.BENCHMARK_DATA =";

    /// Project name used when the path has no parent directory.
    pub const PROJECT_UNKNOWN: &'static str = "unknown";

    ///
    /// Parses the contents of a `data.js` file or a bare JSON history.
    ///
    pub fn parse(text: &str) -> Result<History, serde_json::Error> {
        let text = text.trim();
        let text = text
            .strip_prefix(Self::ASSIGNMENT_PREFIX)
            .unwrap_or(text)
            .trim_start();
        let text = text.strip_suffix(';').unwrap_or(text);
        serde_json::from_str(text)
    }

    ///
    /// Returns the project of a history file, that is the name of its directory.
    ///
    pub fn project_of(path: &Path) -> String {
        path.parent()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| Self::PROJECT_UNKNOWN.to_owned())
    }
}

impl TryFrom<&Path> for Input {
    type Error = InputError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| InputError::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        if text.trim().is_empty() {
            return Err(InputError::EmptyFile {
                path: path.to_path_buf(),
            });
        }
        let history = Self::parse(text.as_str()).map_err(|error| InputError::Parsing {
            error,
            path: path.to_path_buf(),
        })?;
        tracing::debug!(
            ?path,
            suites = history.entries.len(),
            runs = history.runs_count(),
            "Read benchmark history"
        );
        Ok(Self {
            history,
            project: Self::project_of(path),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::error::Error as InputError;
    use super::Input;

    const SCYLLADB: &str = include_str!("../../tests/data/scylladb.js");

    #[test]
    fn parse_data_js() {
        let history = Input::parse(SCYLLADB).expect("Valid history");
        assert_eq!(history.last_update, 1743020710633);
        assert_eq!(history.repo_url, "https://github.com/gofiber/storage");

        let runs = history.suite("Benchmark").expect("Suite exists");
        assert_eq!(runs.len(), 1);
        let run = &runs[0];
        assert_eq!(run.date, 1743020702386);
        assert_eq!(run.tool, "go");
        assert_eq!(run.commit.committer.username.as_deref(), Some("web-flow"));
        assert_eq!(run.benches.len(), 12);
        assert_eq!(run.benches[0].name, "Benchmark_Scylla_Set");
        assert_eq!(
            run.benches[0].unit,
            "ns/op\t    2900 B/op\t      42 allocs/op"
        );
        assert_eq!(run.benches[0].extra.as_deref(), Some("861 times\n4 procs"));
    }

    #[test]
    fn parse_bare_json_and_trailing_semicolon() {
        let json = r#"{ "lastUpdate": 1, "repoUrl": "", "entries": {} }"#;
        assert!(Input::parse(json).is_ok());
        assert!(Input::parse(format!("window.BENCHMARK_DATA = {json};").as_str()).is_ok());
        assert!(Input::parse("window.BENCHMARK_DATA = {").is_err());
    }

    #[test]
    fn read_file() {
        let directory = tempfile::tempdir().expect("Temporary directory");
        let project = directory.path().join("scylladb");
        std::fs::create_dir(&project).expect("Project directory");

        let path = project.join("data.js");
        std::fs::write(&path, SCYLLADB).expect("Fixture writing");
        let input = Input::try_from(path.as_path()).expect("Valid input");
        assert_eq!(input.project, "scylladb");
        assert_eq!(input.history.runs_count(), 1);

        let empty = project.join("empty.js");
        std::fs::write(&empty, "\n").expect("Fixture writing");
        assert!(matches!(
            Input::try_from(empty.as_path()),
            Err(InputError::EmptyFile { .. })
        ));

        assert!(matches!(
            Input::try_from(Path::new("/nonexistent/data.js")),
            Err(InputError::Reading { .. })
        ));
    }
}
