//! Configuration module

mod build;
mod site;

pub use build::{normalize_base_path, ApiConfig, BuildConfig, DeployMode};
pub use build::{ENV_API_KEY, ENV_API_URL, ENV_BASE_PATH, ENV_OUT_DIR};
pub use site::SiteConfig;
