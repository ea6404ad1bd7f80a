//! Generator module - turns fetched posts into the output directory

mod rewrite;

use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use walkdir::WalkDir;

use crate::config::BuildConfig;
use crate::content::{ContentSource, Post};
use crate::error::{BuildError, Result};
use crate::templates::{render_index_page, render_post_page, Templates};

pub use rewrite::{inject_base_path, rewrite_html_files};

/// Directory under the output root holding the blog
const BLOG_DIR: &str = "blogs";

/// Summary of a finished build
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    /// Posts rendered
    pub posts: usize,
    /// Static files copied from the source directory
    pub assets: usize,
    /// Top-level pages rewritten in the second pass
    pub rewritten: usize,
    pub elapsed: Duration,
}

/// Static site generator
pub struct Generator {
    config: BuildConfig,
}

impl Generator {
    /// Create a new generator
    pub fn new(config: &BuildConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Run the whole pipeline: templates, fetch, then emit the tree.
    ///
    /// The output directory is only touched once the fetch has succeeded.
    pub async fn build<S: ContentSource>(&self, source: &S) -> Result<BuildReport> {
        let start = Instant::now();

        let templates = Templates::load(&self.config.templates_dir);
        let posts = source.fetch_posts().await?;

        let mut report = self.generate(&templates, &posts)?;
        report.elapsed = start.elapsed();
        Ok(report)
    }

    /// Write the output tree for an already fetched post list
    pub fn generate(&self, templates: &Templates, posts: &[Post]) -> Result<BuildReport> {
        let out_dir = &self.config.out_dir;
        let base_path = self.config.mode.base_path();

        self.reset_out_dir()?;

        for post in posts {
            self.generate_post_page(templates, post, base_path)?;
        }
        self.generate_index_page(templates, posts, base_path)?;

        let assets = self.copy_source_assets()?;

        let rewritten = if self.config.mode.is_root() {
            0
        } else {
            rewrite_html_files(out_dir, base_path)?
        };

        Ok(BuildReport {
            posts: posts.len(),
            assets,
            rewritten,
            elapsed: Duration::ZERO,
        })
    }

    /// Remove any previous output so no stale pages survive
    fn reset_out_dir(&self) -> Result<()> {
        let out_dir = &self.config.out_dir;

        if out_dir.exists() {
            fs::remove_dir_all(out_dir).map_err(|e| BuildError::io(out_dir, e))?;
            tracing::debug!("Deleted: {:?}", out_dir);
        }

        let blog_dir = out_dir.join(BLOG_DIR);
        fs::create_dir_all(&blog_dir).map_err(|e| BuildError::io(&blog_dir, e))?;
        Ok(())
    }

    fn generate_post_page(
        &self,
        templates: &Templates,
        post: &Post,
        base_path: &str,
    ) -> Result<()> {
        let dir = self.config.out_dir.join(BLOG_DIR).join(&post.slug);
        fs::create_dir_all(&dir).map_err(|e| BuildError::io(&dir, e))?;

        let html = inject_base_path(&render_post_page(&templates.post, post), base_path);
        write_file(&dir.join("index.html"), &html)?;

        tracing::info!("✓ {}", post.slug);
        Ok(())
    }

    fn generate_index_page(
        &self,
        templates: &Templates,
        posts: &[Post],
        base_path: &str,
    ) -> Result<()> {
        let html = inject_base_path(&render_index_page(&templates.index, posts), base_path);
        write_file(&self.config.out_dir.join(BLOG_DIR).join("index.html"), &html)
    }

    /// Copy everything under the source directory except templates.
    ///
    /// The output directory is skipped too when it lives inside the source.
    fn copy_source_assets(&self) -> Result<usize> {
        let source_dir = &self.config.source_dir;
        let out_dir = &self.config.out_dir;
        let templates_dir = &self.config.templates_dir;
        let mut copied = 0;

        let walker = WalkDir::new(source_dir)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| {
                !e.path().starts_with(templates_dir) && !e.path().starts_with(out_dir)
            });

        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(source_dir.as_path()).to_path_buf();
                BuildError::io(path, e.into())
            })?;
            let path = entry.path();

            let Ok(relative) = path.strip_prefix(source_dir) else {
                continue;
            };
            let dest = out_dir.join(relative);

            if entry.file_type().is_dir() {
                fs::create_dir_all(&dest).map_err(|e| BuildError::io(&dest, e))?;
            } else {
                fs::copy(path, &dest).map_err(|e| BuildError::io(path, e))?;
                tracing::debug!("Copied: {:?} -> {:?}", path, dest);
                copied += 1;
            }
        }

        Ok(copied)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| BuildError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DeployMode, SiteConfig};
    use std::path::PathBuf;

    struct StaticSource(Vec<Post>);

    impl ContentSource for StaticSource {
        async fn fetch_posts(&self) -> Result<Vec<Post>> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    impl ContentSource for FailingSource {
        async fn fetch_posts(&self) -> Result<Vec<Post>> {
            Err(BuildError::FetchStatus {
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                url: "http://localhost/rest/v1/blogs".to_string(),
            })
        }
    }

    /// A source tree with templates, a static page and a stylesheet
    fn fixture(out_dir: &str) -> (tempfile::TempDir, BuildConfig) {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path();
        fs::create_dir_all(base.join("src/templates")).unwrap();
        fs::create_dir_all(base.join("src/css")).unwrap();
        fs::write(
            base.join("src/templates/post.html"),
            r#"<h1>{{title}}</h1><time>{{date}}</time>{{content}}<a href="{{root}}">home</a>"#,
        )
        .unwrap();
        fs::write(
            base.join("src/templates/blogs.html"),
            r#"<link href="{{root}}css/site.css"><ul>{{list}}</ul>"#,
        )
        .unwrap();
        fs::write(base.join("src/index.html"), r#"<a href="{{root}}blogs/">blog</a>"#).unwrap();
        fs::write(base.join("src/css/site.css"), "body {}").unwrap();

        let vars = [
            ("OUT_DIR", out_dir.to_string()),
            ("BASE_PATH", "/sub/".to_string()),
        ];
        let config = BuildConfig::resolve(base, &SiteConfig::default(), |key| {
            vars.iter().find(|(k, _)| *k == key).map(|(_, v)| v.clone())
        });
        (dir, config)
    }

    fn two_posts() -> Vec<Post> {
        vec![
            Post::new("B", "b", "<p>b</p>", "2024-03-06T00:00:00Z"),
            Post::new("A", "a", "<p>a</p>", "2024-03-05T00:00:00Z"),
        ]
    }

    fn post_dirs(out_dir: &Path) -> Vec<String> {
        let mut dirs: Vec<String> = fs::read_dir(out_dir.join(BLOG_DIR))
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_dir())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        dirs.sort();
        dirs
    }

    #[tokio::test]
    async fn test_build_writes_post_tree() {
        let (_dir, config) = fixture("site");
        let report = Generator::new(&config)
            .build(&StaticSource(two_posts()))
            .await
            .unwrap();

        let out = &config.out_dir;
        assert_eq!(report.posts, 2);
        assert!(out.join("blogs/a/index.html").is_file());
        assert!(out.join("blogs/b/index.html").is_file());
        assert!(out.join("blogs/index.html").is_file());
        assert_eq!(post_dirs(out), ["a", "b"]);

        let page = fs::read_to_string(out.join("blogs/a/index.html")).unwrap();
        assert_eq!(
            page,
            r#"<h1>A</h1><time>Mar 5, 2024</time><p>a</p><a href="/">home</a>"#
        );

        let index = fs::read_to_string(out.join("blogs/index.html")).unwrap();
        assert!(index.find("/blogs/b/").unwrap() < index.find("/blogs/a/").unwrap());
        assert!(!index.contains("{{root}}"));
    }

    #[tokio::test]
    async fn test_build_copies_assets_without_templates() {
        let (_dir, config) = fixture("site");
        let report = Generator::new(&config)
            .build(&StaticSource(two_posts()))
            .await
            .unwrap();

        let out = &config.out_dir;
        assert_eq!(report.assets, 2);
        assert!(out.join("css/site.css").is_file());
        assert!(out.join("index.html").is_file());
        assert!(!out.join("templates").exists());
        // root deployments skip the second pass
        assert_eq!(report.rewritten, 0);
        assert_eq!(
            fs::read_to_string(out.join("index.html")).unwrap(),
            r#"<a href="{{root}}blogs/">blog</a>"#
        );
    }

    #[tokio::test]
    async fn test_sub_path_build_rewrites_static_pages() {
        let (_dir, config) = fixture("public");
        assert_eq!(config.mode, DeployMode::SubPath("/sub/".to_string()));

        let report = Generator::new(&config)
            .build(&StaticSource(two_posts()))
            .await
            .unwrap();

        let out = &config.out_dir;
        assert_eq!(report.rewritten, 1);
        assert_eq!(
            fs::read_to_string(out.join("index.html")).unwrap(),
            r#"<a href="/sub/blogs/">blog</a>"#
        );
        let index = fs::read_to_string(out.join("blogs/index.html")).unwrap();
        assert!(index.contains(r#"href="/sub/css/site.css""#));
        assert!(index.contains(r#"href="/sub/blogs/a/""#));
        let page = fs::read_to_string(out.join("blogs/b/index.html")).unwrap();
        assert!(page.ends_with(r#"<a href="/sub/">home</a>"#));
    }

    #[tokio::test]
    async fn test_rebuild_removes_stale_posts() {
        let (_dir, config) = fixture("site");
        let generator = Generator::new(&config);
        generator.build(&StaticSource(two_posts())).await.unwrap();
        fs::write(config.out_dir.join("leftover.txt"), "old").unwrap();

        let renamed = vec![Post::new("A", "a-renamed", "", "2024-03-05T00:00:00Z")];
        generator.build(&StaticSource(renamed)).await.unwrap();

        assert_eq!(post_dirs(&config.out_dir), ["a-renamed"]);
        assert!(!config.out_dir.join("leftover.txt").exists());
    }

    #[tokio::test]
    async fn test_fetch_failure_writes_nothing() {
        let (_dir, config) = fixture("site");
        let result = Generator::new(&config).build(&FailingSource).await;

        assert!(matches!(result, Err(BuildError::FetchStatus { .. })));
        assert!(!config.out_dir.join(BLOG_DIR).exists());
    }

    #[tokio::test]
    async fn test_empty_post_list() {
        let (_dir, config) = fixture("site");
        Generator::new(&config)
            .build(&StaticSource(Vec::new()))
            .await
            .unwrap();

        let index = fs::read_to_string(config.out_dir.join("blogs/index.html")).unwrap();
        assert!(index.contains(r#"<li class="muted">no posts</li>"#));
        assert!(post_dirs(&config.out_dir).is_empty());
    }

    #[tokio::test]
    async fn test_missing_templates_still_builds() {
        let (dir, config) = fixture("site");
        fs::remove_dir_all(dir.path().join("src/templates")).unwrap();

        Generator::new(&config)
            .build(&StaticSource(two_posts()))
            .await
            .unwrap();

        assert_eq!(
            fs::read_to_string(config.out_dir.join("blogs/a/index.html")).unwrap(),
            ""
        );
        assert_eq!(
            fs::read_to_string(config.out_dir.join("blogs/index.html")).unwrap(),
            ""
        );
    }

    #[tokio::test]
    async fn test_out_dir_inside_source_is_not_copied() {
        let (_dir, mut config) = fixture("site");
        config.out_dir = config.source_dir.join("dist");

        Generator::new(&config)
            .build(&StaticSource(two_posts()))
            .await
            .unwrap();

        assert!(config.out_dir.join("css/site.css").is_file());
        assert!(!config.out_dir.join("dist").exists());
    }

    #[test]
    fn test_missing_source_dir_is_fatal() {
        let (_dir, mut config) = fixture("site");
        config.source_dir = PathBuf::from("/nonexistent/blogpress/src");

        let result = Generator::new(&config).generate(&Templates::default(), &two_posts());
        assert!(matches!(result, Err(BuildError::Io { .. })));
    }
}
