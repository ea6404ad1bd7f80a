//! Post cache keyed by the content API's ETag
//!
//! The last successful response is kept next to its validator so a
//! `304 Not Modified` can be answered from disk.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::content::Post;
use crate::error::{BuildError, Result};

/// Cache file name inside the cache directory
const CACHE_FILE: &str = "posts.json";

/// Cached response from the content API
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PostCache {
    /// Version of the cache format
    pub version: u32,
    /// Request URL the response belongs to
    pub url: String,
    /// Validator returned with the response
    pub etag: String,
    /// Posts in response order
    pub posts: Vec<Post>,
}

impl PostCache {
    /// Current cache format version
    const VERSION: u32 = 1;

    pub fn new(url: &str, etag: &str, posts: Vec<Post>) -> Self {
        Self {
            version: Self::VERSION,
            url: url.to_string(),
            etag: etag.to_string(),
            posts,
        }
    }

    /// Load the cache for `url`, if one exists and is usable
    pub fn load(cache_dir: &Path, url: &str) -> Option<Self> {
        let cache_path = cache_dir.join(CACHE_FILE);
        let content = fs::read_to_string(&cache_path).ok()?;

        match serde_json::from_str::<PostCache>(&content) {
            Ok(cache) if cache.version == Self::VERSION && cache.url == url => Some(cache),
            Ok(_) => {
                tracing::info!("Post cache is stale, ignoring");
                None
            }
            Err(e) => {
                tracing::warn!("Failed to read post cache {:?}: {}", cache_path, e);
                None
            }
        }
    }

    /// Save cache to disk
    pub fn save(&self, cache_dir: &Path) -> Result<()> {
        fs::create_dir_all(cache_dir).map_err(|e| BuildError::io(cache_dir, e))?;

        let cache_path = cache_dir.join(CACHE_FILE);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&cache_path, content).map_err(|e| BuildError::io(&cache_path, e))?;
        Ok(())
    }

    /// Path of the cache file
    pub fn path(cache_dir: &Path) -> PathBuf {
        cache_dir.join(CACHE_FILE)
    }
}

/// Remove the cache directory
pub fn clear(cache_dir: &Path) -> Result<()> {
    if cache_dir.exists() {
        fs::remove_dir_all(cache_dir).map_err(|e| BuildError::io(cache_dir, e))?;
        tracing::info!("Deleted: {:?}", cache_dir);
    }
    Ok(())
}
