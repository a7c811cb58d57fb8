//! # bee HTTP Download (`common::network::download`)
//!
//! File: cli/src/common/network/download.rs
//! Author: bee Contributors
//!
//! ## Overview
//!
//! One-shot download of a remote file to disk. Used by `bee rundocs` to fetch
//! the docs archive.
//!
//! - A non-empty file already at the destination is kept and no request is made.
//! - Otherwise the destination is created (or truncated), a single GET is
//!   issued and the body is streamed into the file chunk by chunk.
//! - Non-success HTTP statuses are rejected so an error page never ends up
//!   looking like a valid archive.
//! - The request and every chunk read race a `CancellationToken`, so Ctrl+C
//!   stops a stalled transfer.
//! - If anything fails (or is cancelled) after the file was created, the
//!   partial file is removed so the next run downloads again instead of
//!   skipping a truncated file.
//!
//! No retries and no timeouts are configured.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::network::download::{self, DownloadOutcome};
//! use std::path::Path;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn run() -> crate::core::error::Result<()> {
//! let cancel = CancellationToken::new();
//! match download::fetch("https://example.com/v2.zip", Path::new("swagger.zip"), &cancel).await? {
//!     DownloadOutcome::Skipped { existing_bytes } => println!("kept {} bytes", existing_bytes),
//!     DownloadOutcome::Downloaded { bytes } => println!("fetched {}", download::format_size(bytes)),
//! }
//! # Ok(())
//! # }
//! ```
//!
use crate::common::fs::io::nonempty_file_len;
use crate::core::error::{DocsError, Result};
use anyhow::Context;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// User agent sent with every download request.
const USER_AGENT: &str = concat!("bee/", env!("CARGO_PKG_VERSION"));

/// What [`fetch`] did to the destination file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// A non-empty file was already present; nothing was requested.
    Skipped { existing_bytes: u64 },
    /// The remote body was written in full.
    Downloaded { bytes: u64 },
}

/// # Fetch Remote File (`fetch`)
///
/// Downloads `url` into `dest` unless `dest` already holds data.
///
/// ## Arguments
///
/// * `url` - The resource to GET.
/// * `dest` - The file to write. Its parent directory must exist.
/// * `cancel` - Aborts the request or the body transfer when cancelled.
///
/// ## Returns
///
/// * `Result<DownloadOutcome>` - `Skipped` when an existing non-empty file was
///   kept, `Downloaded` with the byte count otherwise.
///
/// ## Errors
///
/// Returns an `Err` if the destination cannot be created, the request fails,
/// the server answers with a non-success status, writing the body fails, or
/// `cancel` fires first (`DocsError::Cancelled`). In every case after the file
/// was created, the file is removed again.
pub async fn fetch(url: &str, dest: &Path, cancel: &CancellationToken) -> Result<DownloadOutcome> {
    // Existing data wins; the network is never touched.
    if let Some(existing_bytes) = nonempty_file_len(dest) {
        info!("File {:?} already exists, skipping download", dest);
        return Ok(DownloadOutcome::Skipped { existing_bytes });
    }

    info!("Downloading {} to {:?}", url, dest);
    // Create (or truncate an empty) destination before any request goes out.
    let mut file = File::create(dest)
        .await
        .with_context(|| format!("Failed to create {:?}", dest))?;

    match stream_to_file(url, &mut file, cancel).await {
        Ok(bytes) => {
            info!("{} downloaded to {:?}", format_size(bytes), dest);
            Ok(DownloadOutcome::Downloaded { bytes })
        }
        Err(e) => {
            // Close the handle first so removal also works on Windows.
            drop(file);
            if let Err(remove_err) = tokio::fs::remove_file(dest).await {
                warn!("Could not remove partial download {:?}: {}", dest, remove_err);
            }
            Err(e)
        }
    }
}

/// Issues the GET and copies the response body into `file`, giving up as
/// soon as `cancel` fires.
async fn stream_to_file(url: &str, file: &mut File, cancel: &CancellationToken) -> Result<u64> {
    let cancelled = || DocsError::Cancelled(format!("Download of {}", url));

    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .context("Failed to build HTTP client")?;

    // Waiting for the response headers can stall just like the body.
    let mut response = tokio::select! {
        biased;
        _ = cancel.cancelled() => return Err(cancelled().into()),
        sent = client.get(url).send() => {
            sent.with_context(|| format!("Failed to download {}", url))?
        }
    };

    let status = response.status();
    if !status.is_success() {
        return Err(DocsError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        }
        .into());
    }

    let mut written: u64 = 0;
    loop {
        // One chunk at a time, so cancellation is seen between reads.
        let chunk = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(cancelled().into()),
            next = response.chunk() => {
                next.with_context(|| format!("Failed while reading the body of {}", url))?
            }
        };
        let Some(chunk) = chunk else { break };

        file.write_all(&chunk)
            .await
            .context("Failed to write downloaded data")?;
        written += chunk.len() as u64;
    }
    file.flush().await.context("Failed to flush downloaded data")?;

    Ok(written)
}

/// # Format Byte Count (`format_size`)
///
/// Renders a byte count with binary units for download reports: plain bytes
/// below 1 KiB (`"512 B"`), one decimal above (`"1.2 MB"`).
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["KB", "MB", "GB", "TB", "PB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    // Divide down until the value fits the unit, stopping at the largest one.
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}
