//!
//! The `data.js` output consumed by the charting page.
//!

use crate::input::Input;
use crate::model::history::History;
use crate::output::json::Json;

///
/// The `data.js` output consumed by the charting page.
///
#[derive(Default)]
pub struct DataJs {
    /// The script text.
    pub content: String,
}

impl From<&History> for DataJs {
    fn from(history: &History) -> Self {
        let Json { content: json } = Json::from(history);
        let content = format!("{} {json}", Input::ASSIGNMENT_PREFIX);
        Self { content }
    }
}

#[cfg(test)]
mod tests {
    use super::DataJs;
    use crate::input::Input;

    const SCYLLADB: &str = include_str!("../../tests/data/scylladb.js");

    #[test]
    fn reproduces_recorded_document() {
        let history = Input::parse(SCYLLADB).expect("Valid history");
        let DataJs { content } = DataJs::from(&history);
        assert_eq!(content, SCYLLADB.trim_end());
    }
}
