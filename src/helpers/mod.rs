//! Helper functions shared by the renderer

mod date;
mod url;

pub use date::format_date;
pub use url::{encode_uri_component, post_link};
