//! Card components for displaying posts.

use maud::{html, Markup, Render};

use crate::store::Post;

/// A card showing one post with links to view and edit it.
///
/// # Example
///
/// ```ignore
/// use crate::components::card::PostCard;
///
/// let card = PostCard::new(&post).with_permalink();
/// ```
#[derive(Debug, Clone)]
pub struct PostCard<'a> {
    pub post: &'a Post,
    pub show_permalink: bool,
}

impl<'a> PostCard<'a> {
    /// Create a new post card.
    #[must_use]
    pub const fn new(post: &'a Post) -> Self {
        Self {
            post,
            show_permalink: false,
        }
    }

    /// Link the card to the post's own page.
    #[must_use]
    pub const fn with_permalink(mut self) -> Self {
        self.show_permalink = true;
        self
    }
}

impl Render for PostCard<'_> {
    fn render(&self) -> Markup {
        let post = self.post;
        let href = format!("/posts/{}", post.id);

        html! {
            article class="post-card" id=(format!("post-{}", post.id)) {
                header {
                    strong class="post-author" { "@" (post.username) }
                }
                p class="post-content" { (post.content) }
                @if self.show_permalink {
                    footer class="post-actions" {
                        a href=(href) { "View" }
                        " · "
                        a href=(format!("{href}/edit")) { "Edit" }
                    }
                }
            }
        }
    }
}

/// A list container for post cards.
#[derive(Debug, Clone)]
pub struct PostList<'a> {
    pub posts: &'a [Post],
}

impl<'a> PostList<'a> {
    #[must_use]
    pub const fn new(posts: &'a [Post]) -> Self {
        Self { posts }
    }
}

impl Render for PostList<'_> {
    fn render(&self) -> Markup {
        html! {
            div class="post-list" {
                @for post in self.posts {
                    (PostCard::new(post).with_permalink())
                }
            }
        }
    }
}

/// An empty state component for when there is nothing to show.
#[derive(Debug, Clone)]
pub struct EmptyState<'a> {
    pub message: &'a str,
}

impl EmptyState<'_> {
    /// Create a default "no posts" empty state.
    #[must_use]
    pub const fn no_posts() -> Self {
        Self {
            message: "No posts yet. Be the first to share something!",
        }
    }
}

impl Render for EmptyState<'_> {
    fn render(&self) -> Markup {
        html! {
            p class="empty-state" { (self.message) }
        }
    }
}
