//! Site configuration (blogpress.yml)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{BuildError, Result};

/// Optional on-disk configuration. Every field has a default so the file
/// may be absent or partial; credentials never live here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory holding static assets and the templates directory
    pub source_dir: String,
    /// Templates directory, relative to `source_dir`
    pub templates_dir: String,
    /// Output directory (overridden by `OUT_DIR`)
    pub out_dir: String,
    /// Base path used for sub-path deployments (overridden by `BASE_PATH`)
    pub sub_path: String,
    /// Supabase table holding the posts
    pub table: String,
    /// Directory for the ETag cache, relative to the base directory
    pub cache_dir: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            source_dir: "src".to_string(),
            templates_dir: "templates".to_string(),
            out_dir: "site".to_string(),
            sub_path: "/ezkl.sh/".to_string(),
            table: "blogs".to_string(),
            cache_dir: ".blogpress-cache".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| BuildError::io(path, e))?;
        serde_yaml::from_str(&content).map_err(|source| BuildError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
