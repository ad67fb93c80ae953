use serde::{Deserialize, Serialize};

/// A short text post shown on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Hyphenated UUID string, assigned at creation and never reused.
    pub id: String,
    pub username: String,
    pub content: String,
}

/// Input for creating a post, as submitted by a client.
///
/// Fields are raw and untrimmed; the store validates them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewPost {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub content: String,
}

/// Input for replacing the content of an existing post.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostUpdate {
    #[serde(default)]
    pub content: String,
}
