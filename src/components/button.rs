//! Button component for the web UI.
//!
//! Provides a configurable button component that renders as either
//! a `<button>` or `<a>` element based on whether an href is provided.

use maud::{html, Markup, Render};

/// Button style variants matching CSS classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary button (default) - `.btn-primary`
    #[default]
    Primary,
    /// Outline button - `.btn.outline`
    Outline,
    /// Danger button - `.btn-danger`
    Danger,
    /// Secondary button - `.btn-secondary`
    Secondary,
}

impl ButtonVariant {
    /// Returns the CSS class(es) for this variant.
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self {
            Self::Primary => "btn btn-primary",
            Self::Outline => "btn outline",
            Self::Danger => "btn btn-danger",
            Self::Secondary => "btn btn-secondary",
        }
    }
}

/// A configurable button component.
///
/// # Example
///
/// ```ignore
/// use crate::components::button::Button;
///
/// let save = Button::primary("Save").r#type("submit");
/// let back = Button::outline("Back").href("/posts");
/// ```
#[derive(Debug, Clone)]
pub struct Button<'a> {
    /// Button label text
    pub label: &'a str,
    /// Button style variant
    pub variant: ButtonVariant,
    /// Optional href (renders as `<a>` if present)
    pub href: Option<&'a str>,
    /// Button type attribute (for `<button>` elements)
    pub r#type: Option<&'a str>,
    /// JavaScript onclick handler
    pub onclick: Option<&'a str>,
}

impl<'a> Button<'a> {
    /// Creates a new button with the given label and variant.
    #[must_use]
    pub fn new(label: &'a str, variant: ButtonVariant) -> Self {
        Self {
            label,
            variant,
            href: None,
            r#type: None,
            onclick: None,
        }
    }

    #[must_use]
    pub fn primary(label: &'a str) -> Self {
        Self::new(label, ButtonVariant::Primary)
    }

    #[must_use]
    pub fn outline(label: &'a str) -> Self {
        Self::new(label, ButtonVariant::Outline)
    }

    #[must_use]
    pub fn danger(label: &'a str) -> Self {
        Self::new(label, ButtonVariant::Danger)
    }

    #[must_use]
    pub fn secondary(label: &'a str) -> Self {
        Self::new(label, ButtonVariant::Secondary)
    }

    /// Sets the href, rendering the button as an `<a>` element.
    #[must_use]
    pub fn href(mut self, href: &'a str) -> Self {
        self.href = Some(href);
        self
    }

    /// Sets the button type attribute.
    #[must_use]
    pub fn r#type(mut self, r#type: &'a str) -> Self {
        self.r#type = Some(r#type);
        self
    }

    /// Sets the onclick handler.
    #[must_use]
    pub fn onclick(mut self, onclick: &'a str) -> Self {
        self.onclick = Some(onclick);
        self
    }
}

impl Render for Button<'_> {
    fn render(&self) -> Markup {
        let classes = self.variant.class();

        if let Some(href) = self.href {
            html! {
                a class=(classes) href=(href) role="button" onclick=[self.onclick] {
                    (self.label)
                }
            }
        } else {
            html! {
                button
                    class=(classes)
                    type=(self.r#type.unwrap_or("button"))
                    onclick=[self.onclick]
                {
                    (self.label)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_button() {
        let html = Button::primary("Click me").render().into_string();
        assert!(html.contains("btn btn-primary"));
        assert!(html.contains("Click me"));
        assert!(html.contains(r#"type="button""#));
    }

    #[test]
    fn test_submit_button() {
        let html = Button::primary("Save").r#type("submit").render().into_string();
        assert!(html.contains(r#"type="submit""#));
    }

    #[test]
    fn test_link_button() {
        let html = Button::outline("Back").href("/posts").render().into_string();
        assert!(html.starts_with("<a "));
        assert!(html.contains(r#"href="/posts""#));
        assert!(html.contains("btn outline"));
    }

    #[test]
    fn test_danger_button_with_confirm() {
        let html = Button::danger("Delete")
            .r#type("submit")
            .onclick("return confirm('Delete this post?')")
            .render()
            .into_string();
        assert!(html.contains("btn-danger"));
        assert!(html.contains("onclick="));
    }

    #[test]
    fn test_secondary_variant_class() {
        assert_eq!(ButtonVariant::Secondary.class(), "btn btn-secondary");
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }
}
