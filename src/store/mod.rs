//! In-memory post store.
//!
//! The store is the only place posts are created, changed or removed. It keeps
//! posts in a `Vec` ordered most-recent-first and looks them up by linear scan,
//! which is fine for a board of this size.

mod models;
mod seed;

pub use models::*;
pub use seed::SEED_POSTS;

use std::sync::{Arc, RwLock};

use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0}")]
    Validation(&'static str),
    #[error("Post not found")]
    NotFound,
}

/// Store handle shared between request handlers.
pub type SharedStore = Arc<RwLock<PostStore>>;

#[derive(Debug, Default)]
pub struct PostStore {
    posts: Vec<Post>,
}

impl PostStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the example posts from [`SEED_POSTS`].
    #[must_use]
    pub fn with_seed() -> Self {
        let posts = SEED_POSTS
            .iter()
            .map(|(username, content)| Post {
                id: new_post_id(),
                username: (*username).to_string(),
                content: (*content).to_string(),
            })
            .collect();
        Self { posts }
    }

    /// Wrap the store for sharing across handlers.
    #[must_use]
    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    /// All posts, most recent first.
    #[must_use]
    pub fn list(&self) -> &[Post] {
        &self.posts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Create a post and place it at the head of the board.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] if the username or content is empty
    /// after trimming. The store is left unchanged in that case.
    pub fn create(&mut self, username: &str, content: &str) -> Result<Post, StoreError> {
        let username = username.trim();
        let content = content.trim();
        if username.is_empty() || content.is_empty() {
            return Err(StoreError::Validation("Username and content are required"));
        }

        let post = Post {
            id: new_post_id(),
            username: username.to_string(),
            content: content.to_string(),
        };
        self.posts.insert(0, post.clone());

        info!(post_id = %post.id, username = %post.username, "Post created");
        Ok(post)
    }

    /// Look up a post by its identifier.
    ///
    /// Identifiers are compared as opaque strings, so a malformed id is simply
    /// absent.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Replace the content of an existing post, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no post has `id` (checked first),
    /// or [`StoreError::Validation`] if `content` is empty after trimming.
    pub fn update(&mut self, id: &str, content: &str) -> Result<Post, StoreError> {
        let post = self
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound)?;

        let content = content.trim();
        if content.is_empty() {
            return Err(StoreError::Validation("Content cannot be empty"));
        }

        content.clone_into(&mut post.content);
        info!(post_id = %post.id, "Post updated");
        Ok(post.clone())
    }

    /// Remove a post from the board.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no post has `id`.
    pub fn delete(&mut self, id: &str) -> Result<Post, StoreError> {
        let index = self
            .posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::NotFound)?;

        // `remove` shifts the tail down, keeping the remaining order intact.
        let post = self.posts.remove(index);
        info!(post_id = %post.id, remaining = self.posts.len(), "Post deleted");
        Ok(post)
    }
}

fn new_post_id() -> String {
    let id = Uuid::new_v4().to_string();
    debug!(post_id = %id, "Generated post id");
    id
}
