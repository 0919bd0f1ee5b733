//!
//! Benchmark history output.
//!

pub mod csv;
pub mod data_js;
pub mod format;
pub mod json;
pub mod xlsx;

use std::path::PathBuf;

use crate::model::history::History;

use self::csv::Csv;
use self::data_js::DataJs;
use self::format::Format;
use self::json::Json;
use self::xlsx::Xlsx;

///
/// Serialized benchmark history.
///
pub enum Output {
    /// Benchmark output is a single text file.
    SingleFile(String),
    /// Benchmark output is a single spreadsheet.
    SingleFileXlsx(rust_xlsxwriter::Workbook),
}

impl Output {
    ///
    /// Writes the serialized history to a file.
    ///
    pub fn write_to_file(self, path: PathBuf) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|error| {
                    anyhow::anyhow!("Benchmark directory {parent:?} creating: {error}")
                })?;
            }
        }
        match self {
            Output::SingleFile(content) => {
                std::fs::write(path.as_path(), content)
                    .map_err(|error| anyhow::anyhow!("Benchmark file {path:?} writing: {error}"))?;
            }
            Output::SingleFileXlsx(mut workbook) => {
                workbook
                    .save(path.as_path())
                    .map_err(|error| anyhow::anyhow!("Benchmark file {path:?} writing: {error}"))?;
            }
        }
        tracing::info!(?path, "Benchmark history written");
        Ok(())
    }
}

impl TryFrom<(&History, Format)> for Output {
    type Error = anyhow::Error;

    fn try_from((history, format): (&History, Format)) -> Result<Self, Self::Error> {
        Ok(match format {
            Format::DataJs => DataJs::from(history).into(),
            Format::Json => Json::from(history).into(),
            Format::Csv => Csv::from(history).into(),
            Format::Xlsx => Xlsx::try_from(history)?.into(),
        })
    }
}

impl From<DataJs> for Output {
    fn from(value: DataJs) -> Self {
        Output::SingleFile(value.content)
    }
}

impl From<Json> for Output {
    fn from(value: Json) -> Self {
        Output::SingleFile(value.content)
    }
}

impl From<Csv> for Output {
    fn from(value: Csv) -> Self {
        Output::SingleFile(value.content)
    }
}

impl From<Xlsx> for Output {
    fn from(value: Xlsx) -> Self {
        Output::SingleFileXlsx(value.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::format::Format;
    use super::Output;
    use crate::input::Input;

    #[test]
    fn write_every_format() {
        let history =
            Input::parse(include_str!("../../tests/data/scylladb.js")).expect("Valid history");
        let directory = tempfile::tempdir().expect("Temporary directory");

        for (format, file_name) in [
            (Format::DataJs, "data.js"),
            (Format::Json, "history.json"),
            (Format::Csv, "history.csv"),
            (Format::Xlsx, "history.xlsx"),
        ] {
            let path = directory.path().join("out").join(file_name);
            let output = Output::try_from((&history, format)).expect("Serializable history");
            output.write_to_file(path.clone()).expect("Writable file");
            let metadata = std::fs::metadata(&path).expect("File exists");
            assert!(metadata.len() > 0, "{file_name}");
        }

        let written = Input::try_from(directory.path().join("out").join("data.js").as_path())
            .expect("Readable history");
        assert_eq!(written.history, history);
        assert_eq!(written.project, "out");
    }
}
