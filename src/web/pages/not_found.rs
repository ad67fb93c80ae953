//! Error pages.

use maud::{html, Markup};

use crate::components::{Alert, BaseLayout, Button};

/// Render the 404 page with the given message.
#[must_use]
pub fn render_not_found_page(message: &str) -> Markup {
    let content = html! {
        h1 { "404" }
        (Alert::info(message))
        p {
            (Button::outline("Back to all posts").href("/posts"))
        }
    };

    BaseLayout::new("Not Found").render(content)
}

/// Render the generic 500 page. Never shows error details.
#[must_use]
pub fn render_server_error_page() -> Markup {
    let content = html! {
        h1 { "Something broke!" }
        (Alert::error("The server hit an unexpected error. Please try again."))
        p {
            (Button::outline("Back to all posts").href("/posts"))
        }
    };

    BaseLayout::new("Server Error").render(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_page() {
        let html = render_not_found_page("Page not found").into_string();
        assert!(html.contains("<title>Not Found - Postboard</title>"));
        assert!(html.contains("Page not found"));
        assert!(html.contains(r#"href="/posts""#));
    }

    #[test]
    fn test_server_error_page() {
        let html = render_server_error_page().into_string();
        assert!(html.contains("Something broke!"));
        assert!(html.contains(r#"class="error""#));
    }
}
