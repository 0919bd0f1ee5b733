//!
//! Output benchmark history format.
//!

///
/// Output benchmark history format.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum Format {
    /// The `data.js` document consumed by the charting page.
    #[default]
    DataJs,
    /// The bare JSON history.
    Json,
    /// Flat CSV table with one line per single-metric measurement.
    Csv,
    /// Excel spreadsheet format.
    Xlsx,
}

impl std::str::FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "data-js" => Ok(Self::DataJs),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "xlsx" => Ok(Self::Xlsx),
            string => anyhow::bail!(
                "Unknown benchmark format `{string}`. Supported formats: {}",
                vec![Self::DataJs, Self::Json, Self::Csv, Self::Xlsx]
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::DataJs => write!(f, "data-js"),
            Format::Json => write!(f, "json"),
            Format::Csv => write!(f, "csv"),
            Format::Xlsx => write!(f, "xlsx"),
        }
    }
}
