//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left alone by JavaScript's `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Encode a single path segment
///
/// # Examples
/// ```ignore
/// encode_uri_component("hello world") // -> "hello%20world"
/// ```
pub fn encode_uri_component(segment: &str) -> String {
    utf8_percent_encode(segment, URI_COMPONENT).to_string()
}

/// Link to a post page, relative to the `{{root}}` token
pub fn post_link(slug: &str) -> String {
    format!("{{{{root}}}}blogs/{}/", encode_uri_component(slug))
}
