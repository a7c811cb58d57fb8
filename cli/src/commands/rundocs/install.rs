//! # bee Docs Bundle Installation
//!
//! File: cli/src/commands/rundocs/install.rs
//! Author: bee Contributors
//!
//! ## Overview
//!
//! Turns a downloaded `swagger.zip` into the served `swagger/` directory:
//! 1. Extract every entry into the working directory (fatal on failure).
//! 2. Remove any previous `swagger/` directory.
//! 3. Rename the extracted `swagger-<version>/` directory to `swagger/`.
//!    A failed rename is logged and reported in the outcome, not raised.
//! 4. Delete the archive. A failed delete is returned as an error.
//!
//! This is blocking filesystem work; async callers run it through
//! `tokio::task::spawn_blocking`.
//!
use super::config::DocsConfig;
use crate::common::archive::zip;
use crate::common::fs::io;
use crate::core::error::Result;
use anyhow::Context;
use std::fs;
use tracing::{error, info, warn};

/// What [`install`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallOutcome {
    /// Archive entries written to disk.
    pub entries: usize,
    /// Archive entries ignored because of unsafe paths.
    pub skipped: usize,
    /// Whether the versioned directory now sits at the canonical name.
    pub renamed: bool,
}

/// # Install Docs Bundle (`install`)
///
/// Extracts `config.archive_path()` into `config.work_dir` and moves the
/// versioned directory to `config.docs_dir()`.
///
/// ## Arguments
///
/// * `config` - Supplies the archive path, working directory and the
///   versioned and canonical directory names.
///
/// ## Returns
///
/// * `Result<InstallOutcome>` - Entry counts and whether the rename worked.
///
/// ## Errors
///
/// Returns an `Err` if the archive cannot be opened or any entry fails to
/// extract (nothing is renamed or deleted in that case), or if the archive
/// cannot be deleted at the end.
pub fn install(config: &DocsConfig) -> Result<InstallOutcome> {
    let archive_path = config.archive_path();
    info!("Installing docs from {}", archive_path.display());

    // Step 1: extraction errors abort before anything is removed.
    let summary = zip::extract_all(&archive_path, &config.work_dir)?;

    // Step 2: a stale `swagger/` would make the rename fail.
    let docs_dir = config.docs_dir();
    if let Err(e) = io::remove_dir_all_if_exists(&docs_dir) {
        warn!("Could not clear previous docs: {:#}", e);
    }

    // Step 3: the rename is best effort; callers see it in the outcome.
    let versioned_dir = config.versioned_dir();
    let renamed = match fs::rename(&versioned_dir, &docs_dir) {
        Ok(()) => {
            info!(
                "Moved {} to {}",
                versioned_dir.display(),
                docs_dir.display()
            );
            true
        }
        Err(e) => {
            error!(
                "Failed to rename {} to {}: {}",
                versioned_dir.display(),
                docs_dir.display(),
                e
            );
            false
        }
    };

    // Step 4: the archive goes either way, so the next download is fresh.
    info!("Deleting archive {}", archive_path.display());
    fs::remove_file(&archive_path)
        .with_context(|| format!("Failed to delete archive {}", archive_path.display()))?;

    Ok(InstallOutcome {
        entries: summary.entries,
        skipped: summary.skipped,
        renamed,
    })
}
