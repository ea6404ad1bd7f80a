//! Clean the output directory

use std::fs;

use crate::cache;
use crate::error::{BuildError, Result};
use crate::Site;

/// Remove the output directory and the post cache
pub fn run(site: &Site) -> Result<()> {
    let out_dir = &site.build.out_dir;
    if out_dir.exists() {
        fs::remove_dir_all(out_dir).map_err(|e| BuildError::io(out_dir, e))?;
        tracing::info!("Deleted: {:?}", out_dir);
    }

    cache::clear(&site.build.cache_dir)
}
