//! # bee Test Fixtures
//!
//! File: cli/src/test_support.rs
//! Author: bee Contributors
//!
//! Shared fixtures for unit tests: in-memory zip bundles, a local HTTP server
//! that counts the requests it answers, and a listener that never answers.

use crate::core::error::Result;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Router;
use std::io::{Cursor, Write};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// One entry of a fixture archive. Directory names end with `/`.
pub enum ZipEntry<'a> {
    Dir(&'a str, u32),
    File(&'a str, &'a [u8], u32),
}

pub fn build_zip(entries: &[ZipEntry<'_>]) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for entry in entries {
        match entry {
            ZipEntry::Dir(name, mode) => {
                let options = SimpleFileOptions::default().unix_permissions(*mode);
                writer.add_directory(*name, options)?;
            }
            ZipEntry::File(name, body, mode) => {
                let options = SimpleFileOptions::default().unix_permissions(*mode);
                writer.start_file(*name, options)?;
                writer.write_all(body)?;
            }
        }
    }
    Ok(writer.finish()?.into_inner())
}

pub fn write_zip(path: &Path, entries: &[ZipEntry<'_>]) -> Result<()> {
    std::fs::write(path, build_zip(entries)?)?;
    Ok(())
}

/// The bundle layout published upstream: everything under `swagger-<version>/`.
pub fn docs_bundle(version: &str) -> Result<Vec<u8>> {
    let root = format!("swagger-{}/", version);
    let index = format!("{}index.html", root);
    let css_dir = format!("{}css/", root);
    let css = format!("{}css/style.css", root);
    build_zip(&[
        ZipEntry::Dir(&root, 0o755),
        ZipEntry::File(&index, b"<html>swagger ui</html>", 0o644),
        ZipEntry::Dir(&css_dir, 0o755),
        ZipEntry::File(&css, b"body { margin: 0 }", 0o644),
    ])
}

#[derive(Clone)]
struct FixtureState {
    hits: Arc<AtomicUsize>,
    status: StatusCode,
    body: Arc<Vec<u8>>,
}

async fn respond(State(state): State<FixtureState>) -> (StatusCode, Vec<u8>) {
    state.hits.fetch_add(1, Ordering::SeqCst);
    (state.status, state.body.as_ref().clone())
}

/// Answers every request with the same status and body.
pub struct FixtureServer {
    addr: SocketAddr,
    hits: Arc<AtomicUsize>,
    cancel: CancellationToken,
}

impl FixtureServer {
    pub async fn start(status: StatusCode, body: Vec<u8>) -> Result<Self> {
        let hits = Arc::new(AtomicUsize::new(0));
        let state = FixtureState {
            hits: hits.clone(),
            status,
            body: Arc::new(body),
        };
        let app = Router::new().fallback(respond).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async move { token.cancelled().await })
                .await;
        });

        Ok(Self { addr, hits, cancel })
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Drop for FixtureServer {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Accepts TCP connections and never writes a byte back, so clients hang
/// waiting for response headers until they give up on their own.
pub struct StalledServer {
    addr: SocketAddr,
    cancel: CancellationToken,
}

impl StalledServer {
    pub async fn start() -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        tokio::spawn(async move {
            // Held open until the server is dropped.
            let mut open = Vec::new();
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    accepted = listener.accept() => match accepted {
                        Ok((socket, _)) => open.push(socket),
                        Err(_) => break,
                    },
                }
            }
        });

        Ok(Self { addr, cancel })
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for StalledServer {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
