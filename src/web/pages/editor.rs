//! Create and edit form pages.
//!
//! Both pages can be re-rendered after a rejected submission, in which case
//! they show the error and keep what the user typed.

use maud::{html, Markup};

use crate::components::{Alert, BaseLayout, Button, Form, FormGroup, Input, TextArea};
use crate::store::Post;

/// Parameters for rendering the new post form.
#[derive(Debug, Clone, Default)]
pub struct NewPostFormParams<'a> {
    /// Error message from a rejected submission.
    pub error: Option<&'a str>,
    /// Previously submitted username.
    pub username: Option<&'a str>,
    /// Previously submitted content.
    pub content: Option<&'a str>,
}

impl<'a> NewPostFormParams<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the error message.
    #[must_use]
    pub fn error(mut self, error: &'a str) -> Self {
        self.error = Some(error);
        self
    }

    /// Pre-fill the fields with a previous submission.
    #[must_use]
    pub fn submitted(mut self, username: &'a str, content: &'a str) -> Self {
        self.username = Some(username);
        self.content = Some(content);
        self
    }
}

/// Render the empty (or re-filled) form for creating a post.
#[must_use]
pub fn render_new_post_page(params: &NewPostFormParams<'_>) -> Markup {
    let fields = html! {
        (FormGroup::new(
            "Username",
            "username",
            html! {
                (Input::text("username")
                    .id("username")
                    .value_opt(params.username)
                    .placeholder("Who is posting?")
                    .autocomplete("nickname")
                    .required())
            },
        ))
        (FormGroup::new(
            "Content",
            "content",
            html! {
                (TextArea::new("content")
                    .id("content")
                    .rows(5)
                    .value_opt(params.content)
                    .placeholder("What's on your mind?")
                    .required())
            },
        ).help("Leading and trailing whitespace is removed."))
        (Button::primary("Publish").r#type("submit"))
        " "
        (Button::outline("Cancel").href("/posts"))
    };

    let content = html! {
        h1 { "New Post" }

        @if let Some(err) = params.error {
            (Alert::error(err).with_title("Error creating post:"))
        }

        (Form::post("/posts", fields))
    };

    BaseLayout::new("New Post").render(content)
}

/// Parameters for rendering the edit form.
#[derive(Debug, Clone)]
pub struct EditPostFormParams<'a> {
    pub post: &'a Post,
    /// Error message from a rejected update.
    pub error: Option<&'a str>,
    /// Rejected content to show instead of the stored content.
    pub content: Option<&'a str>,
}

impl<'a> EditPostFormParams<'a> {
    #[must_use]
    pub fn new(post: &'a Post) -> Self {
        Self {
            post,
            error: None,
            content: None,
        }
    }

    /// Show a rejected update: the error plus the content that was submitted.
    #[must_use]
    pub fn rejected(mut self, error: &'a str, content: &'a str) -> Self {
        self.error = Some(error);
        self.content = Some(content);
        self
    }
}

/// Render the edit form, pre-filled with the post's current content.
#[must_use]
pub fn render_edit_post_page(params: &EditPostFormParams<'_>) -> Markup {
    let post = params.post;
    let action = format!("/posts/{}", post.id);
    let current = params.content.unwrap_or(post.content.as_str());

    let fields = html! {
        (FormGroup::new(
            "Username",
            "username",
            html! { (Input::text("username").id("username").value(&post.username).readonly()) },
        ).help("The author of a post cannot be changed."))
        (FormGroup::new(
            "Content",
            "content",
            html! {
                (TextArea::new("content")
                    .id("content")
                    .rows(5)
                    .value_opt(Some(current))
                    .required())
            },
        ))
        (Button::primary("Save changes").r#type("submit"))
        " "
        (Button::outline("Cancel").href(&action))
    };

    let content = html! {
        h1 { "Edit Post" }

        @if let Some(err) = params.error {
            (Alert::error(err).with_title("Error updating post:"))
        }

        (Form::post(&action, fields).method_override("PATCH"))
    };

    BaseLayout::new("Edit Post").render(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> Post {
        Post {
            id: "9d7e4a52-3c1b-4f0a-8e6d-2b5c7a9f1e30".to_string(),
            username: "Grace".to_string(),
            content: "Original content".to_string(),
        }
    }

    #[test]
    fn test_new_post_page_empty() {
        let html = render_new_post_page(&NewPostFormParams::new()).into_string();

        assert!(html.contains("<h1>New Post</h1>"));
        assert!(html.contains(r#"action="/posts""#));
        assert!(html.contains(r#"method="post""#));
        assert!(html.contains(r#"name="username""#));
        assert!(html.contains(r#"name="content""#));
        assert!(!html.contains(r#"class="error""#));
        assert!(!html.contains("_method"));
    }

    #[test]
    fn test_new_post_page_with_error_keeps_input() {
        let params = NewPostFormParams::new()
            .error("Username and content are required")
            .submitted("Ada", "");
        let html = render_new_post_page(&params).into_string();

        assert!(html.contains(r#"class="error""#));
        assert!(html.contains("Username and content are required"));
        assert!(html.contains(r#"value="Ada""#));
    }

    #[test]
    fn test_edit_post_page_prefilled() {
        let post = sample_post();
        let html = render_edit_post_page(&EditPostFormParams::new(&post)).into_string();

        assert!(html.contains("<h1>Edit Post</h1>"));
        assert!(html.contains(r#"action="/posts/9d7e4a52-3c1b-4f0a-8e6d-2b5c7a9f1e30""#));
        assert!(html.contains(r#"<input type="hidden" name="_method" value="PATCH">"#));
        assert!(html.contains(">Original content</textarea>"));
        assert!(html.contains(r#"value="Grace""#));
        assert!(html.contains("readonly"));
    }

    #[test]
    fn test_edit_post_page_rejected_shows_submitted_content() {
        let post = sample_post();
        let params = EditPostFormParams::new(&post).rejected("Content cannot be empty", "  ");
        let html = render_edit_post_page(&params).into_string();

        assert!(html.contains("Content cannot be empty"));
        assert!(!html.contains("Original content"));
    }
}
