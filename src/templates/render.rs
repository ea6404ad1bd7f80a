//! Renderer

use super::{TOKEN_CONTENT, TOKEN_DATE, TOKEN_LIST, TOKEN_TITLE};
use crate::content::Post;
use crate::helpers::{format_date, post_link};

/// Placeholder item for an empty post list
const EMPTY_LIST_ITEM: &str = r#"<li class="muted">no posts</li>"#;

/// Render a single post page. Every occurrence of each token is replaced.
pub fn render_post_page(template: &str, post: &Post) -> String {
    template
        .replace(TOKEN_TITLE, &post.title)
        .replace(TOKEN_DATE, &format_date(&post.published_at))
        .replace(TOKEN_CONTENT, &post.content_html)
}

/// Render the blog index: one `<li>` per post, in the given order.
///
/// Only the first `{{list}}` is substituted. Links still carry the
/// `{{root}}` token and need the base path injected afterwards.
pub fn render_index_page(template: &str, posts: &[Post]) -> String {
    let items: String = posts.iter().map(render_list_item).collect();

    if items.is_empty() {
        template.replacen(TOKEN_LIST, EMPTY_LIST_ITEM, 1)
    } else {
        template.replacen(TOKEN_LIST, &items, 1)
    }
}

fn render_list_item(post: &Post) -> String {
    format!(
        r#"<li><i class="muted">{} </i><a href="{}">{}</a></li>"#,
        format_date(&post.published_at),
        post_link(&post.slug),
        post.title
    )
}
