//! blogpress: a small static blog builder
//!
//! Posts are fetched from a Supabase table, rendered into two plain HTML
//! templates by token substitution and written next to the site's static
//! assets. The same output can be deployed at the domain root or under a
//! sub-path.

pub mod cache;
pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod server;
pub mod templates;

use std::path::{Path, PathBuf};

use content::SupabaseSource;
use error::Result;

/// Name of the optional site configuration file
pub const CONFIG_FILE: &str = "blogpress.yml";

/// The blog being built
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Configuration resolved against the environment
    pub build: config::BuildConfig,
    /// Base directory
    pub base_dir: PathBuf,
}

impl Site {
    /// Load a site from a directory, reading the process environment
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        Self::with_env(base_dir, |key| std::env::var(key).ok())
    }

    /// Load a site with an explicit environment lookup
    pub fn with_env<P, F>(base_dir: P, lookup: F) -> Result<Self>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let build = config::BuildConfig::resolve(&base_dir, &config, lookup);

        Ok(Self {
            config,
            build,
            base_dir,
        })
    }

    /// HTTP content source with the ETag cache enabled
    pub fn content_source(&self) -> Result<SupabaseSource> {
        let api = self.build.api()?;
        Ok(SupabaseSource::new(api)?.with_cache(&self.build.cache_dir))
    }

    /// Build the static site
    pub async fn build(&self) -> Result<generator::BuildReport> {
        commands::build::run(self).await
    }

    /// Clean the output directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
