//! # bee Filesystem I/O Utilities (`common::fs::io`)
//!
//! File: cli/src/common/fs/io.rs
//! Author: bee Contributors
//!
//! ## Overview
//!
//! Small filesystem helpers shared by the docs download and install steps:
//!
//! - **`nonempty_file_len`**: Reports the size of a file only when it exists and
//!   holds at least one byte. The downloader uses it to decide whether a fetch
//!   can be skipped.
//! - **`remove_dir_all_if_exists`**: Recursive directory removal that treats a
//!   missing directory as success.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::io;
//! use std::path::Path;
//!
//! # fn run_example() -> crate::core::error::Result<()> {
//! if let Some(len) = io::nonempty_file_len(Path::new("swagger.zip")) {
//!     println!("archive already present ({} bytes)", len);
//! }
//! io::remove_dir_all_if_exists(Path::new("swagger"))?;
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::Result;
use anyhow::Context;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Returns the length of the file at `path` if it exists and is non-empty.
///
/// Any metadata error (including "not found") yields `None`, so callers treat
/// the file as absent and write it afresh.
pub fn nonempty_file_len(path: &Path) -> Option<u64> {
    match fs::metadata(path) {
        Ok(metadata) if metadata.is_file() && metadata.len() > 0 => Some(metadata.len()),
        Ok(_) => None,
        Err(e) => {
            debug!("No usable file at {:?}: {}", path, e);
            None
        }
    }
}

/// Recursively removes the directory at `path`.
///
/// # Returns
///
/// * `Ok(true)` if a directory was removed, `Ok(false)` if nothing existed.
///
/// # Errors
///
/// Returns an `Err` for any failure other than the directory being absent
/// (e.g., permissions), with context naming the path.
pub fn remove_dir_all_if_exists(path: &Path) -> Result<bool> {
    match fs::remove_dir_all(path) {
        Ok(()) => {
            debug!("Removed directory {:?}", path);
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e).with_context(|| format!("Failed to remove directory {:?}", path)),
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_nonempty_file_len_missing_file() -> Result<()> {
        let base_dir = tempdir()?;
        assert_eq!(nonempty_file_len(&base_dir.path().join("absent.zip")), None);
        Ok(())
    }

    #[test]
    fn test_nonempty_file_len_empty_file() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("empty.zip");
        fs::write(&file_path, b"")?;
        assert_eq!(nonempty_file_len(&file_path), None);
        Ok(())
    }

    #[test]
    fn test_nonempty_file_len_with_content() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("full.zip");
        fs::write(&file_path, b"PK\x03\x04")?;
        assert_eq!(nonempty_file_len(&file_path), Some(4));
        Ok(())
    }

    /// A directory at the path is not a file to skip downloading over.
    #[test]
    fn test_nonempty_file_len_directory() -> Result<()> {
        let base_dir = tempdir()?;
        assert_eq!(nonempty_file_len(base_dir.path()), None);
        Ok(())
    }

    #[test]
    fn test_remove_dir_all_if_exists() -> Result<()> {
        let base_dir = tempdir()?;
        let target = base_dir.path().join("swagger");
        fs::create_dir_all(target.join("nested"))?;
        fs::write(target.join("nested/index.html"), "<html></html>")?;

        assert!(remove_dir_all_if_exists(&target)?);
        assert!(!target.exists());

        // Second call finds nothing and still succeeds.
        assert!(!remove_dir_all_if_exists(&target)?);
        Ok(())
    }
}
