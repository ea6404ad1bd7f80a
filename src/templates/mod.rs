//! Page templates and token substitution
//!
//! Templates are plain HTML files with `{{token}}` placeholders that are
//! replaced literally. There is no escaping syntax for a literal `{{`.

mod render;

use std::fs;
use std::path::Path;

pub use render::{render_index_page, render_post_page};

pub const TOKEN_TITLE: &str = "{{title}}";
pub const TOKEN_DATE: &str = "{{date}}";
pub const TOKEN_CONTENT: &str = "{{content}}";
pub const TOKEN_LIST: &str = "{{list}}";
pub const TOKEN_ROOT: &str = "{{root}}";

/// Post page template file name
pub const POST_TEMPLATE: &str = "post.html";
/// Blog index template file name
pub const INDEX_TEMPLATE: &str = "blogs.html";

/// The two templates a build renders with
#[derive(Debug, Clone, Default)]
pub struct Templates {
    pub post: String,
    pub index: String,
}

impl Templates {
    /// Load templates from a directory.
    ///
    /// A missing or unreadable template becomes an empty string so the build
    /// can still run with degraded output.
    pub fn load<P: AsRef<Path>>(templates_dir: P) -> Self {
        let dir = templates_dir.as_ref();
        Self {
            post: load_or_empty(&dir.join(POST_TEMPLATE)),
            index: load_or_empty(&dir.join(INDEX_TEMPLATE)),
        }
    }
}

fn load_or_empty(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(content) => {
            tracing::debug!("Loaded template {:?}", path);
            content
        }
        Err(e) => {
            tracing::warn!("Failed to load template {:?}: {}, using empty template", path, e);
            String::new()
        }
    }
}
