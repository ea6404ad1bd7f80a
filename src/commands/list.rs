//! List posts available from the content API

use crate::content::ContentSource;
use crate::error::Result;
use crate::helpers::format_date;
use crate::Site;

/// Print every post with its date and slug
pub async fn run(site: &Site) -> Result<()> {
    let source = site.content_source()?;
    let posts = source.fetch_posts().await?;

    println!("Posts ({}):", posts.len());
    for post in posts {
        println!(
            "  {} - {} [{}]",
            format_date(&post.published_at),
            post.title,
            post.slug
        );
    }

    Ok(())
}
