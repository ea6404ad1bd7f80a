//! Error types for the build pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors raised while configuring, fetching or emitting a site
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Missing required environment variable: {0}")]
    MissingConfig(&'static str),

    #[error("Failed to parse config file {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Content source returned {status} for {url}")]
    FetchStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid post data: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BuildError {
    /// Wrap an IO error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, BuildError>;
