//! Resolved build configuration
//!
//! Combines `blogpress.yml` with the process environment into one explicit
//! value that is handed to the builder.

use std::path::{Path, PathBuf};

use super::SiteConfig;
use crate::error::{BuildError, Result};

pub const ENV_API_URL: &str = "SUPABASE_URL";
pub const ENV_API_KEY: &str = "SUPABASE_ANON_KEY";
pub const ENV_OUT_DIR: &str = "OUT_DIR";
pub const ENV_BASE_PATH: &str = "BASE_PATH";

/// Output directory name that selects a sub-path deployment
const SUB_PATH_OUT_DIR: &str = "public";

/// Where the generated site will be hosted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployMode {
    /// Served from the domain root
    Root,
    /// Served under a path prefix such as `/project/`
    SubPath(String),
}

impl DeployMode {
    /// Pick the mode from the output directory's name
    pub fn for_out_dir(out_dir: &Path, sub_path: &str) -> Self {
        let is_public = out_dir
            .file_name()
            .map(|name| name == SUB_PATH_OUT_DIR)
            .unwrap_or(false);

        if is_public {
            Self::SubPath(normalize_base_path(sub_path))
        } else {
            Self::Root
        }
    }

    /// The string substituted for `{{root}}`
    pub fn base_path(&self) -> &str {
        match self {
            Self::Root => "/",
            Self::SubPath(path) => path,
        }
    }

    pub fn is_root(&self) -> bool {
        matches!(self, Self::Root)
    }
}

/// Ensure a base path starts and ends with a single slash
pub fn normalize_base_path(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}

/// Connection details for the content API
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Project URL without trailing slash
    pub url: String,
    pub key: String,
    pub table: String,
}

/// Everything the build pipeline needs, resolved up front
#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub api_url: Option<String>,
    pub api_key: Option<String>,
    pub table: String,
    pub source_dir: PathBuf,
    pub templates_dir: PathBuf,
    pub out_dir: PathBuf,
    pub cache_dir: PathBuf,
    pub mode: DeployMode,
}

impl BuildConfig {
    /// Resolve with an arbitrary variable lookup. Empty values count as unset.
    pub fn resolve<F>(base_dir: &Path, site: &SiteConfig, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let out_dir = base_dir.join(var(ENV_OUT_DIR).unwrap_or_else(|| site.out_dir.clone()));
        let sub_path = var(ENV_BASE_PATH).unwrap_or_else(|| site.sub_path.clone());
        let mode = DeployMode::for_out_dir(&out_dir, &sub_path);
        let source_dir = base_dir.join(&site.source_dir);
        let templates_dir = source_dir.join(&site.templates_dir);

        Self {
            api_url: var(ENV_API_URL).map(|url| url.trim_end_matches('/').to_string()),
            api_key: var(ENV_API_KEY),
            table: site.table.clone(),
            source_dir,
            templates_dir,
            out_dir,
            cache_dir: base_dir.join(&site.cache_dir),
            mode,
        }
    }

    /// Credentials for the content API, failing if either is missing
    pub fn api(&self) -> Result<ApiConfig> {
        let url = self
            .api_url
            .clone()
            .ok_or(BuildError::MissingConfig(ENV_API_URL))?;
        let key = self
            .api_key
            .clone()
            .ok_or(BuildError::MissingConfig(ENV_API_KEY))?;

        Ok(ApiConfig {
            url,
            key,
            table: self.table.clone(),
        })
    }
}
