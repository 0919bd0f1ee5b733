//!
//! A commit author or committer.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// A commit author or committer.
///
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// E-mail address, if published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Display name.
    pub name: String,
    /// Hosting service login, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.username.as_deref() {
            Some(username) => write!(f, "{} (@{username})", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}
