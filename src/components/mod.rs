//! Maud HTML template components for the web UI.
//!
//! Components are organized into submodules by functionality:
//!
//! - `layout`: Base page layout and navigation
//! - `button`: Configurable button and link-button components
//! - `alert`: Alert messages
//! - `card`: Post cards and lists
//! - `form`: Form elements, including the method override hidden field
//!
//! # Example
//!
//! ```ignore
//! use maud::{html, Markup};
//! use crate::components::{Alert, BaseLayout, Button};
//!
//! fn my_page() -> Markup {
//!     let content = html! {
//!         h1 { "Hello World" }
//!         (Alert::info("Page loaded!"))
//!         (Button::primary("Click me"))
//!     };
//!     BaseLayout::new("My Page").render(content)
//! }
//! ```

pub mod alert;
pub mod button;
pub mod card;
pub mod form;
pub mod layout;

pub use alert::{Alert, AlertVariant};
pub use button::{Button, ButtonVariant};
pub use card::{EmptyState, PostCard, PostList};
pub use form::{
    Form, FormGroup, HiddenInput, Input, TextArea, METHOD_OVERRIDE_FIELD,
};
pub use layout::BaseLayout;
