//! # bee ZIP Archive Extraction (`common::archive::zip`)
//!
//! File: cli/src/common/archive/zip.rs
//! Author: bee Contributors
//!
//! ## Overview
//!
//! Unpacks `.zip` bundles (such as the Swagger docs archive) onto disk. Every
//! entry keeps its relative path and, on unix, the permission mode stored in
//! the archive.
//!
//! ## Architecture
//!
//! The module is a thin layer over the `zip` crate:
//!
//! - Entries are visited in archive order.
//! - Directory entries are created with `create_dir_all`; file entries get
//!   their parent directories created, are truncated and filled with the
//!   decompressed bytes.
//! - Entry names that would escape the destination (absolute paths or `..`
//!   components) are skipped with a warning instead of being written.
//! - The first failure to read, create or copy an entry aborts extraction.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::archive::zip;
//! use std::path::Path;
//!
//! # fn run() -> crate::core::error::Result<()> {
//! let summary = zip::extract_all(Path::new("swagger.zip"), Path::new("."))?;
//! println!("extracted {} entries", summary.entries);
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::Result;
use anyhow::Context;
use std::fs::{self, File};
use std::io;
use std::path::Path;
use tracing::{debug, info, warn};
use zip::ZipArchive;

/// Counts reported by [`extract_all`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExtractSummary {
    /// Entries written to disk (files and directories).
    pub entries: usize,
    /// Entries ignored because their names pointed outside the destination.
    pub skipped: usize,
}

/// # Extract ZIP Archive (`extract_all`)
///
/// Extracts every entry of the archive at `archive_path` beneath `dest`.
///
/// ## Arguments
///
/// * `archive_path` - The `.zip` file to read.
/// * `dest` - The directory entries are extracted relative to. It should exist.
///
/// ## Returns
///
/// * `Result<ExtractSummary>` - How many entries were written and skipped.
///
/// ## Errors
///
/// Returns an `Err` if the archive cannot be opened or parsed, or if any entry
/// cannot be read, created, copied or have its mode applied. Entries written
/// before the failure stay on disk.
pub fn extract_all(archive_path: &Path, dest: &Path) -> Result<ExtractSummary> {
    info!("Extracting {:?} into {:?}", archive_path, dest);

    let file = File::open(archive_path)
        .with_context(|| format!("Failed to open archive {:?}", archive_path))?;
    let mut archive = ZipArchive::new(file)
        .with_context(|| format!("Failed to read zip archive {:?}", archive_path))?;

    let mut summary = ExtractSummary::default();

    for index in 0..archive.len() {
        let mut entry = archive
            .by_index(index)
            .with_context(|| format!("Failed to open entry #{} of {:?}", index, archive_path))?;

        // `enclosed_name` is `None` for absolute paths and `..` escapes.
        let Some(relative_path) = entry.enclosed_name() else {
            warn!("Skipping archive entry with unsafe path: {:?}", entry.name());
            summary.skipped += 1;
            continue;
        };
        let out_path = dest.join(relative_path);

        if entry.is_dir() {
            fs::create_dir_all(&out_path)
                .with_context(|| format!("Failed to create directory {:?}", out_path))?;
        } else {
            // Archives may list files without their directory entries.
            if let Some(parent) = out_path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory {:?}", parent))?;
            }
            // `create` truncates files left over from an earlier extraction.
            let mut out_file = File::create(&out_path)
                .with_context(|| format!("Failed to create file {:?}", out_path))?;
            io::copy(&mut entry, &mut out_file)
                .with_context(|| format!("Failed to write {:?} from archive", out_path))?;
        }

        apply_mode(&out_path, entry.unix_mode())?;
        debug!("Extracted {:?}", out_path);
        summary.entries += 1;
    }

    info!(
        "Extracted {} entries from {:?} ({} skipped)",
        summary.entries, archive_path, summary.skipped
    );
    Ok(summary)
}

/// Applies the rwx permission bits stored in the archive, if any.
/// Setuid, setgid and sticky bits from the archive are never applied.
#[cfg(unix)]
fn apply_mode(path: &Path, mode: Option<u32>) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    if let Some(mode) = mode {
        fs::set_permissions(path, fs::Permissions::from_mode(mode & 0o777))
            .with_context(|| format!("Failed to set mode {:o} on {:?}", mode, path))?;
    }
    Ok(())
}

#[cfg(not(unix))]
fn apply_mode(_path: &Path, _mode: Option<u32>) -> Result<()> {
    Ok(())
}
