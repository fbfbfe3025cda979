//! Attribute record for a single account.

use serde::Serialize;

/// A registered account: the attributes read from one well-formed dataset line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwitterUser {
    /// Screen name; also the user's vertex value in the graph.
    pub name: String,
    /// External account id, kept as text.
    pub id: String,
    /// Number of tweets the account posted.
    pub tweet_count: i64,
    /// Number of stories the dataset associates with the account.
    pub story_count: i64,
}

impl TwitterUser {
    /// Create a new user record.
    pub fn new(
        name: impl Into<String>,
        id: impl Into<String>,
        tweet_count: i64,
        story_count: i64,
    ) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            tweet_count,
            story_count,
        }
    }
}

impl std::fmt::Display for TwitterUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (id {}): {} tweets, {} stories",
            self.name, self.id, self.tweet_count, self.story_count
        )
    }
}
