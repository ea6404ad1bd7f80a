//! Supabase REST content source

use reqwest::header::{ACCEPT, ETAG, IF_NONE_MATCH};
use reqwest::{Client, StatusCode};
use std::path::{Path, PathBuf};

use super::{ContentSource, Post};
use crate::cache::PostCache;
use crate::config::ApiConfig;
use crate::error::{BuildError, Result};

/// Columns requested for each post
const SELECT_COLUMNS: &str = "id,title,slug,content_html,published_at";

/// Fetches posts from a PostgREST table, newest first
pub struct SupabaseSource {
    client: Client,
    api: ApiConfig,
    cache_dir: Option<PathBuf>,
}

impl SupabaseSource {
    pub fn new(api: ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("blogpress/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            api,
            cache_dir: None,
        })
    }

    /// Keep the last response on disk and revalidate it with `If-None-Match`
    pub fn with_cache(mut self, cache_dir: &Path) -> Self {
        self.cache_dir = Some(cache_dir.to_path_buf());
        self
    }

    /// Full request URL for the posts query
    pub fn posts_url(&self) -> String {
        format!(
            "{}/rest/v1/{}?select={}&order=published_at.desc",
            self.api.url, self.api.table, SELECT_COLUMNS
        )
    }

    fn store(&self, url: &str, etag: Option<String>, posts: &[Post]) {
        let (Some(cache_dir), Some(etag)) = (&self.cache_dir, etag) else {
            return;
        };

        if let Err(e) = PostCache::new(url, &etag, posts.to_vec()).save(cache_dir) {
            tracing::warn!("Failed to write post cache: {}", e);
        }
    }
}

impl ContentSource for SupabaseSource {
    async fn fetch_posts(&self) -> Result<Vec<Post>> {
        let url = self.posts_url();
        let cached = self
            .cache_dir
            .as_deref()
            .and_then(|dir| PostCache::load(dir, &url));

        let mut request = self
            .client
            .get(&url)
            .header("apikey", &self.api.key)
            .bearer_auth(&self.api.key)
            .header(ACCEPT, "application/json");

        if let Some(cache) = &cached {
            request = request.header(IF_NONE_MATCH, &cache.etag);
        }

        tracing::debug!("GET {}", url);
        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::NOT_MODIFIED {
            if let Some(cache) = cached {
                tracing::info!("Posts not modified, using {} cached posts", cache.posts.len());
                return Ok(cache.posts);
            }
        }

        if !status.is_success() {
            return Err(BuildError::FetchStatus { status, url });
        }

        let etag = response
            .headers()
            .get(ETAG)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?;
        let posts: Vec<Post> = serde_json::from_slice(&body)?;

        tracing::info!("Fetched {} posts", posts.len());
        self.store(&url, etag, &posts);

        Ok(posts)
    }
}
