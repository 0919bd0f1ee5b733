//!
//! The commit a benchmark run was measured on.
//!

pub mod person;

use chrono::DateTime;
use chrono::FixedOffset;
use serde::Deserialize;
use serde::Serialize;

use self::person::Person;

///
/// The commit a benchmark run was measured on.
///
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// Commit author.
    pub author: Person,
    /// Commit committer, e.g. the merge bot.
    pub committer: Person,
    /// Whether the commit was distinct in the push that triggered the run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distinct: Option<bool>,
    /// Full commit hash.
    pub id: String,
    /// Full commit message.
    pub message: String,
    /// Commit time in RFC 3339 format with the committer's offset.
    pub timestamp: String,
    /// Hash of the commit tree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tree_id: Option<String>,
    /// Link to the commit page.
    pub url: String,
}

impl Commit {
    /// Length of the abbreviated commit hash.
    pub const SHORT_ID_LENGTH: usize = 7;

    ///
    /// Parses the commit timestamp.
    ///
    pub fn timestamp(&self) -> anyhow::Result<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(self.timestamp.as_str()).map_err(|error| {
            anyhow::anyhow!(
                "Commit {} timestamp `{}` parsing: {error}",
                self.id,
                self.timestamp
            )
        })
    }

    ///
    /// Returns the abbreviated commit hash.
    ///
    pub fn short_id(&self) -> &str {
        match self.id.char_indices().nth(Self::SHORT_ID_LENGTH) {
            Some((index, _)) => &self.id[..index],
            None => self.id.as_str(),
        }
    }

    ///
    /// Returns the first line of the commit message.
    ///
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::Commit;

    fn commit() -> Commit {
        serde_json::from_str(
            r#"{
                "author": { "email": "rene@gofiber.io", "name": "RW", "username": "ReneWerner87" },
                "committer": { "email": "noreply@github.com", "name": "GitHub", "username": "web-flow" },
                "distinct": true,
                "id": "7b1fdb732555f6463aa61b39dbd8e26a57221bb7",
                "message": "Merge pull request #1603\n\nchore(deps): bump testify",
                "timestamp": "2025-03-26T20:45:24+01:00",
                "tree_id": "c596315163f2fea9988ae825fbe3614fd5c85958",
                "url": "https://github.com/gofiber/storage/commit/7b1fdb732555f6463aa61b39dbd8e26a57221bb7"
            }"#,
        )
        .expect("Always valid")
    }

    #[test]
    fn timestamp_keeps_offset() {
        let timestamp = commit().timestamp().expect("Valid timestamp");
        assert_eq!(timestamp.offset().local_minus_utc(), 3600);
        assert_eq!(timestamp.timestamp(), 1743018324);
    }

    #[test]
    fn short_id_and_summary() {
        let commit = commit();
        assert_eq!(commit.short_id(), "7b1fdb7");
        assert_eq!(commit.summary(), "Merge pull request #1603");
        assert_eq!(commit.author.to_string(), "RW (@ReneWerner87)");
    }

    #[test]
    fn optional_fields_are_omitted() {
        let mut commit = commit();
        commit.distinct = None;
        commit.tree_id = None;
        commit.author.email = None;
        let json = serde_json::to_string(&commit).expect("Always valid");
        assert!(!json.contains("distinct"));
        assert!(!json.contains("tree_id"));
        assert!(!json.contains("rene@gofiber.io"));
    }

    #[test]
    fn invalid_timestamp() {
        let mut commit = commit();
        commit.timestamp = "yesterday".to_owned();
        assert!(commit.timestamp().is_err());
    }
}
