//! Maud-based page templates for the web UI.
//!
//! Each page module exports a render function that produces the complete HTML.

pub mod editor;
pub mod not_found;
pub mod posts;

pub use editor::{
    render_edit_post_page, render_new_post_page, EditPostFormParams, NewPostFormParams,
};
pub use not_found::{render_not_found_page, render_server_error_page};
pub use posts::{render_post_detail_page, render_post_list_page};
