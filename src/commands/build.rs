//! Build the site from the content API

use crate::error::Result;
use crate::generator::{BuildReport, Generator};
use crate::Site;

/// Fetch posts and write the output directory
pub async fn run(site: &Site) -> Result<BuildReport> {
    // Credentials are checked before anything is fetched or written
    let source = site.content_source()?;

    tracing::info!("Building site from {}...", source.posts_url());
    let report = Generator::new(&site.build).build(&source).await?;

    tracing::info!(
        "Build complete -> {:?} ({} posts, {} assets, base path {}) in {:.2}s",
        site.build.out_dir,
        report.posts,
        report.assets,
        site.build.mode.base_path(),
        report.elapsed.as_secs_f64()
    );

    Ok(report)
}
