//! # bee Docs HTTP Server
//!
//! File: cli/src/commands/rundocs/server_logic.rs
//! Author: bee Contributors
//!
//! ## Overview
//!
//! Serves the installed `swagger/` directory as static files:
//! - Refuses to start when the docs directory is missing (`DocsError::DocsDirMissing`,
//!   exit status 2), since there is nothing meaningful to serve.
//! - Binds `0.0.0.0:<port>`; a bind failure is returned as a fatal error.
//! - Every request is a static lookup through `tower_http::services::ServeDir`:
//!   `index.html` for directory requests, 404 for anything missing.
//! - Runs until the given `CancellationToken` is cancelled, then shuts down
//!   gracefully.
//!
//! ## Examples
//!
//! ```rust
//! let cancel = CancellationToken::new();
//! server_logic::serve(&config, cancel.clone()).await?;
//! ```
//!
use super::config::DocsConfig;
use super::utils;
use crate::core::error::{DocsError, Result};
use anyhow::Context;
use axum::Router;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower::ServiceBuilder;
use tower_http::{
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, Level};

/// # Serve Docs (`serve`)
///
/// Checks that the docs directory exists, binds the configured port on all
/// interfaces and serves the directory until `cancel` fires.
///
/// ## Arguments
///
/// * `config` - Provides the docs directory and the port.
/// * `cancel` - Triggers a graceful shutdown when cancelled.
///
/// ## Returns
///
/// * `Result<()>` - `Ok(())` once the server has shut down gracefully.
///
/// ## Errors
///
/// - `DocsError::DocsDirMissing` if `config.docs_dir()` is not a directory.
/// - `DocsError::InvalidPort` if the port is not a number in `0..=65535`.
/// - A bind error (e.g., port already in use) or a fatal server error.
pub async fn serve(config: &DocsConfig, cancel: CancellationToken) -> Result<()> {
    // Preconditions first, so nothing is bound when there is nothing to serve.
    let docs_dir = ensure_docs_dir(config)?;
    let port = config.port_number()?;

    // All interfaces, like the historical `:<port>` listen address.
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind docs server to {}", addr))?;
    // Port 0 binds an ephemeral port; report the real one.
    let bound = listener
        .local_addr()
        .context("Failed to read docs server address")?;

    utils::warn_if_incomplete(&docs_dir);

    println!("\n=================================================================");
    println!("📂 Serving docs from: {}", docs_dir.display());
    println!("🌐 Docs URL:          http://127.0.0.1:{}", bound.port());
    println!("⚙️  Binding to address: {}", bound);
    println!("=================================================================\n");
    info!("Starting docs server on {} for {}", bound, docs_dir.display());

    serve_listener(listener, &docs_dir, cancel).await
}

/// # Serve On Listener (`serve_listener`)
///
/// Serves `docs_dir` on an already-bound listener until `cancel` fires.
///
/// ## Arguments
///
/// * `listener` - A bound TCP listener.
/// * `docs_dir` - Root of the static files.
/// * `cancel` - Triggers a graceful shutdown when cancelled.
pub async fn serve_listener(
    listener: TcpListener,
    docs_dir: &Path,
    cancel: CancellationToken,
) -> Result<()> {
    let app = create_app(docs_dir);

    // In-flight requests finish before this returns.
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async move { cancel.cancelled().await })
        .await
        .context("Docs server failed")?;

    println!("\nDocs server stopped.");
    Ok(())
}

/// Returns the docs directory, or `DocsDirMissing` when it is not there.
pub fn ensure_docs_dir(config: &DocsConfig) -> Result<PathBuf> {
    let docs_dir = config.docs_dir();
    if docs_dir.is_dir() {
        Ok(docs_dir)
    } else {
        Err(DocsError::DocsDirMissing { dir: docs_dir }.into())
    }
}

/// Builds the router: static files from `docs_dir` for every path, with
/// request tracing.
fn create_app(docs_dir: &Path) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::default().include_headers(true))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // No explicit routes: every path is a file lookup below `docs_dir`.
    Router::new()
        .fallback_service(ServeDir::new(docs_dir))
        .layer(ServiceBuilder::new().layer(trace_layer))
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn docs_fixture() -> Result<(tempfile::TempDir, DocsConfig)> {
        let work = tempdir()?;
        let config = DocsConfig::new(work.path());
        fs::create_dir_all(config.docs_dir().join("css"))?;
        fs::write(config.docs_dir().join("index.html"), "<html>swagger ui</html>")?;
        fs::write(config.docs_dir().join("css/style.css"), "body {}")?;
        Ok((work, config))
    }

    #[tokio::test]
    async fn test_serve_requires_docs_dir() -> Result<()> {
        let work = tempdir()?;
        let config = DocsConfig::new(work.path());

        let err = serve(&config, CancellationToken::new()).await.unwrap_err();

        let docs_err = err.downcast_ref::<DocsError>().expect("typed error");
        assert!(matches!(docs_err, DocsError::DocsDirMissing { .. }));
        assert_eq!(docs_err.exit_code(), 2);
        assert!(err.to_string().contains("-isDownload=true"));
        assert_eq!(fs::read_dir(work.path())?.count(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_serve_rejects_invalid_port() -> Result<()> {
        let (_work, mut config) = docs_fixture()?;
        config.port = "docs".into();

        let err = serve(&config, CancellationToken::new()).await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<DocsError>(),
            Some(DocsError::InvalidPort(_))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_serve_fails_when_port_taken() -> Result<()> {
        let (_work, mut config) = docs_fixture()?;
        let occupied = std::net::TcpListener::bind((Ipv4Addr::UNSPECIFIED, 0))?;
        config.port = occupied.local_addr()?.port().to_string();

        let err = serve(&config, CancellationToken::new()).await.unwrap_err();

        assert!(err.to_string().contains("Failed to bind docs server"));
        Ok(())
    }

    #[tokio::test]
    async fn test_serve_stops_when_cancelled() -> Result<()> {
        let (_work, mut config) = docs_fixture()?;
        config.port = "0".into();
        let cancel = CancellationToken::new();
        cancel.cancel();

        serve(&config, cancel).await
    }

    #[tokio::test]
    async fn test_serves_index_and_files() -> Result<()> {
        let (_work, config) = docs_fixture()?;
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let cancel = CancellationToken::new();
        let docs_dir = config.docs_dir();
        let server = tokio::spawn({
            let cancel = cancel.clone();
            async move { serve_listener(listener, &docs_dir, cancel).await }
        });

        let client = reqwest::Client::new();

        let index = client.get(format!("http://{}/", addr)).send().await?;
        assert_eq!(index.status(), reqwest::StatusCode::OK);
        assert_eq!(index.text().await?, "<html>swagger ui</html>");

        let css = client
            .get(format!("http://{}/css/style.css", addr))
            .send()
            .await?;
        assert_eq!(css.status(), reqwest::StatusCode::OK);
        assert_eq!(css.text().await?, "body {}");

        let missing = client
            .get(format!("http://{}/nope.html", addr))
            .send()
            .await?;
        assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);

        cancel.cancel();
        server.await??;
        Ok(())
    }

    /// Drives `serve` end to end: the configured port is really bound and
    /// `GET /` answers with the installed index page.
    #[tokio::test]
    async fn test_serve_answers_on_configured_port() -> Result<()> {
        let (_work, mut config) = docs_fixture()?;
        // Reserve a free port, then hand it to `serve`.
        let port = std::net::TcpListener::bind("127.0.0.1:0")?
            .local_addr()?
            .port();
        config.port = port.to_string();
        let cancel = CancellationToken::new();

        let server = tokio::spawn({
            let config = config.clone();
            let cancel = cancel.clone();
            async move { serve(&config, cancel).await }
        });

        let client = reqwest::Client::new();
        let url = format!("http://127.0.0.1:{}/", port);
        let mut body = None;
        // The server binds asynchronously; retry until it accepts.
        for _ in 0..50 {
            if let Ok(response) = client.get(&url).send().await {
                assert_eq!(response.status(), reqwest::StatusCode::OK);
                body = Some(response.text().await?);
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        }
        assert_eq!(body.as_deref(), Some("<html>swagger ui</html>"));

        cancel.cancel();
        server.await??;
        Ok(())
    }
}
