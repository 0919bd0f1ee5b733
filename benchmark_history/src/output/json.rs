//!
//! Native JSON output, the bare history document.
//!

use crate::model::history::History;

///
/// Native JSON output, the bare history document.
///
#[derive(Default)]
pub struct Json {
    /// Serialized JSON.
    pub content: String,
}

impl From<&History> for Json {
    fn from(history: &History) -> Self {
        let content = serde_json::to_string_pretty(history).expect("Always valid");
        Self { content }
    }
}
