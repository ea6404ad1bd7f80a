//! Development server for the output directory

use anyhow::Result;
use axum::{handler::HandlerWithoutStateExt, http::StatusCode, Router};
use std::net::SocketAddr;
use std::path::Path;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::config::DeployMode;
use crate::Site;

/// Build the router serving `out_dir`.
///
/// `/` and directory paths resolve to `index.html`. For sub-path deployments
/// the tree is also mounted under the base path so rewritten links work.
pub fn router(out_dir: &Path, mode: &DeployMode) -> Router {
    let serve_dir = ServeDir::new(out_dir)
        .append_index_html_on_directories(true)
        .not_found_service(not_found.into_service());

    let mut app = Router::new();
    if let DeployMode::SubPath(base_path) = mode {
        let prefix = base_path.trim_end_matches('/');
        if !prefix.is_empty() {
            app = app.nest_service(prefix, serve_dir.clone());
        }
    }

    app.fallback_service(serve_dir)
        .layer(TraceLayer::new_for_http())
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}

/// Start the development server
pub async fn start(site: &Site, ip: &str, port: u16) -> Result<()> {
    let app = router(&site.build.out_dir, &site.build.mode);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    if !site.build.out_dir.exists() {
        tracing::warn!(
            "Output directory {:?} does not exist, run `blogpress build` first",
            site.build.out_dir
        );
    }

    println!("Static dev server: http://{}:{}", ip, port);
    if let DeployMode::SubPath(base_path) = &site.build.mode {
        println!("Also serving under http://{}:{}{}", ip, port, base_path);
    }
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
