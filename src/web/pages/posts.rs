//! Post listing and detail pages.

use maud::{html, Markup};

use crate::components::{BaseLayout, Button, EmptyState, Form, PostCard, PostList};
use crate::store::Post;

/// Render the board: every post, most recent first.
#[must_use]
pub fn render_post_list_page(posts: &[Post]) -> Markup {
    let content = html! {
        hgroup {
            h1 { "All Posts" }
            p { (posts.len()) " post(s), newest first." }
        }

        p {
            (Button::primary("New Post").href("/posts/new"))
        }

        @if posts.is_empty() {
            (EmptyState::no_posts())
        } @else {
            (PostList::new(posts))
        }
    };

    BaseLayout::new("All Posts").render(content)
}

/// Render a single post with edit and delete controls.
#[must_use]
pub fn render_post_detail_page(post: &Post) -> Markup {
    let post_url = format!("/posts/{}", post.id);
    let edit_url = format!("{post_url}/edit");
    // The delete form names its verb in the query string rather than a hidden field.
    let delete_url = format!("{post_url}?_method=DELETE");

    let content = html! {
        h1 { "Post by " (post.username) }

        (PostCard::new(post))

        div class="post-controls" {
            (Button::secondary("Edit").href(&edit_url))
            " "
            (Form::post(&delete_url, html! {
                (Button::danger("Delete")
                    .r#type("submit")
                    .onclick("return confirm('Delete this post?')"))
            }).class("inline-form"))
            " "
            (Button::outline("Back to all posts").href("/posts"))
        }
    };

    BaseLayout::new(&format!("Post by {}", post.username)).render(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> Post {
        Post {
            id: "5f0c0d4e-6b47-4b8e-9a39-0d7f1c2b3a4d".to_string(),
            username: "Ada".to_string(),
            content: "Hello".to_string(),
        }
    }

    #[test]
    fn test_post_list_page_with_posts() {
        let posts = vec![sample_post()];
        let html = render_post_list_page(&posts).into_string();

        assert!(html.contains("<h1>All Posts</h1>"));
        assert!(html.contains("1 post(s), newest first."));
        assert!(html.contains("@Ada"));
        assert!(html.contains("post-list"));
        assert!(html.contains(r#"href="/posts/new""#));
    }

    #[test]
    fn test_post_list_page_empty() {
        let html = render_post_list_page(&[]).into_string();

        assert!(html.contains("No posts yet."));
        assert!(!html.contains("post-list"));
    }

    #[test]
    fn test_post_detail_page() {
        let post = sample_post();
        let html = render_post_detail_page(&post).into_string();

        assert!(html.contains("<title>Post by Ada - Postboard</title>"));
        assert!(html.contains("Hello"));
        assert!(html.contains(r#"href="/posts/5f0c0d4e-6b47-4b8e-9a39-0d7f1c2b3a4d/edit""#));
        assert!(html.contains(
            r#"action="/posts/5f0c0d4e-6b47-4b8e-9a39-0d7f1c2b3a4d?_method=DELETE""#
        ));
    }

    #[test]
    fn test_post_detail_page_escapes_username() {
        let mut post = sample_post();
        post.username = "<script>alert(1)</script>".to_string();
        let html = render_post_detail_page(&post).into_string();

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }
}
