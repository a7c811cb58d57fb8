//! # bee Rundocs Command
//!
//! File: cli/src/commands/rundocs/mod.rs
//! Author: bee Contributors
//!
//! ## Overview
//!
//! `bee rundocs` serves the Swagger UI bundle for a project's API docs:
//! - With `-isDownload=true` it first downloads `swagger.zip`, extracts it and
//!   installs it as `swagger/` in the working directory.
//! - It then serves `swagger/` over HTTP on `-docport` (default `8089`).
//!
//! ## Architecture
//!
//! - `config.rs`: Flags, `.bee-docs.toml` and the resulting `DocsConfig`
//! - `install.rs`: Extraction, rename and archive cleanup
//! - `server_logic.rs`: The axum static file server
//! - `utils.rs`: Diagnostics for the served directory
//!
//! The download itself lives in `common::network::download`.
//!
//! ## Examples
//!
//! ```bash
//! # Serve previously installed docs on the default port
//! bee rundocs
//!
//! # Fetch the bundle first, then serve on 9000
//! bee rundocs -isDownload=true -docport=9000
//! ```
//!
//! Flow:
//! 1. Resolve `DocsConfig` from flags, environment and config file
//! 2. Optionally download and install the bundle (failures are logged only)
//! 3. Serve the docs directory until Ctrl+C / SIGTERM
//!
//! Ctrl+C / SIGTERM is honored in every phase: during the download it aborts
//! the transfer and the command exits without serving.
//!
use crate::common::network::download::{self, DownloadOutcome};
use crate::core::error::Result;
use anyhow::Context;
use std::env;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

pub use config::{normalize_go_style_flags, DocsConfig, RundocsArgs};
pub use install::InstallOutcome;

/// Flags, config file and the effective `DocsConfig`.
pub mod config;

/// Installation of the downloaded bundle.
pub mod install;

/// The axum-based docs server.
pub mod server_logic;

/// Directory diagnostics for the server.
pub mod utils;

/// Result of the optional download-and-install phase. `None` marks a step
/// that failed; its error has already been logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupReport {
    pub download: Option<DownloadOutcome>,
    pub install: Option<InstallOutcome>,
}

/// # Handle Rundocs Command (`handle_rundocs`)
///
/// Entry point for `bee rundocs`: resolves the configuration against the
/// current directory, wires Ctrl+C / SIGTERM to a cancellation token and runs
/// the command.
pub async fn handle_rundocs(args: RundocsArgs) -> Result<()> {
    info!("Handling rundocs command with args: {:?}", args);

    let work_dir = env::current_dir().context("Failed to get current working directory")?;
    let config = config::load_config(args, &work_dir)?;
    info!("Effective docs config: {:?}", config);

    // One token for the whole command: signals cancel download and server alike.
    let cancel = CancellationToken::new();
    tokio::spawn(cancel_on_shutdown_signal(cancel.clone()));

    run(&config, cancel).await
}

/// # Run Docs Command (`run`)
///
/// Downloads and installs the bundle when `config.download` is set, then
/// serves the docs until `cancel` fires. Download and install failures are
/// logged and do not stop the server from being attempted.
///
/// ## Arguments
///
/// * `config` - The effective docs configuration.
/// * `cancel` - Aborts the download (skipping the install) or stops the server.
///
/// ## Returns
///
/// * `Result<()>` - `Ok(())` after a graceful shutdown, including a shutdown
///   requested while the bundle was still being fetched.
///
/// ## Errors
///
/// Errors come only from the serve step: a missing docs directory, an invalid
/// port, or a bind/server failure.
pub async fn run(config: &DocsConfig, cancel: CancellationToken) -> Result<()> {
    if config.download {
        let report = download_and_install(config, &cancel).await;
        info!("Docs setup finished: {:?}", report);
    }

    // A shutdown during setup ends the command; nothing is served.
    if cancel.is_cancelled() {
        info!("Docs setup cancelled, not starting the server");
        return Ok(());
    }

    server_logic::serve(config, cancel).await
}

/// # Download and Install Docs (`download_and_install`)
///
/// Fetches the archive and installs it, logging (not returning) failures.
/// The install step runs even when the download failed; it then reports the
/// missing or unusable archive itself.
///
/// ## Arguments
///
/// * `config` - Supplies the URL, archive path and target directories.
/// * `cancel` - Aborts the download; when set, installation is skipped.
///
/// ## Returns
///
/// * `SetupReport` - One entry per step, `None` for a step that failed or
///   did not run.
pub async fn download_and_install(config: &DocsConfig, cancel: &CancellationToken) -> SetupReport {
    let archive_path = config.archive_path();
    let download = match download::fetch(&config.download_url, &archive_path, cancel).await {
        Ok(outcome) => {
            // The user asked for a download, so say what happened even at the
            // default log level.
            match outcome {
                DownloadOutcome::Skipped { existing_bytes } => println!(
                    "Using existing {} ({}), skipping download",
                    archive_path.display(),
                    download::format_size(existing_bytes)
                ),
                DownloadOutcome::Downloaded { bytes } => println!(
                    "Downloaded {} from {} to {}",
                    download::format_size(bytes),
                    config.download_url,
                    archive_path.display()
                ),
            }
            Some(outcome)
        }
        Err(e) => {
            error!("Downloading docs from {} failed: {:#}", config.download_url, e);
            None
        }
    };

    // Nothing to install from if the transfer was interrupted.
    if cancel.is_cancelled() {
        return SetupReport {
            download,
            install: None,
        };
    }

    // Extraction is blocking file I/O; keep it off the async workers.
    let install_config = config.clone();
    let install = match tokio::task::spawn_blocking(move || install::install(&install_config))
        .await
        .context("Docs install task did not complete")
        .and_then(|result| result)
    {
        Ok(outcome) => Some(outcome),
        Err(e) => {
            error!("Installing docs failed: {:#}", e);
            None
        }
    };

    SetupReport { download, install }
}

/// Cancels `cancel` on Ctrl+C or, on unix, SIGTERM.
async fn cancel_on_shutdown_signal(cancel: CancellationToken) {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down docs server..."),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received SIGTERM, shutting down docs server...");
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    // Returning early when the command already finished lets the task end.
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
        _ = cancel.cancelled() => return,
    }
    cancel.cancel();
}
