//! # bee Docs Server Utilities
//!
//! File: cli/src/commands/rundocs/utils.rs
//! Author: bee Contributors
//!
//! ## Overview
//!
//! Sanity checks on the directory about to be served. A bundle that was only
//! partly installed still "exists", so the server would start and answer 404
//! for `/`. `inspect_docs_dir` summarizes the top level of the directory and
//! `warn_if_incomplete` turns an empty directory or a missing `index.html`
//! into a visible warning before the server starts.
//!
use anyhow::Context;
use crate::core::error::Result;
use std::path::Path;
use tracing::{debug, warn};

/// Name of the page served for `/`.
const INDEX_FILE: &str = "index.html";

/// Top-level view of the docs directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocsDirSummary {
    /// Regular files (and anything else that is not a directory).
    pub files: usize,
    /// Subdirectories such as `css/` or `lib/`.
    pub dirs: usize,
    /// Whether `index.html` sits directly in the directory.
    pub has_index: bool,
}

impl DocsDirSummary {
    pub fn is_empty(&self) -> bool {
        self.files == 0 && self.dirs == 0
    }
}

/// # Inspect Docs Directory (`inspect_docs_dir`)
///
/// Counts the entries directly under `dir` and looks for `index.html`.
/// Entries whose type cannot be read are skipped.
///
/// ## Arguments
///
/// * `dir` - The docs directory (`swagger/`).
///
/// ## Returns
///
/// * `Result<DocsDirSummary>` - The counts, or an error if `dir` cannot be read.
pub fn inspect_docs_dir(dir: &Path) -> Result<DocsDirSummary> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read docs directory {}", dir.display()))?;

    let mut summary = DocsDirSummary::default();
    for entry in entries.filter_map(std::result::Result::ok) {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_dir() {
            summary.dirs += 1;
        } else {
            summary.files += 1;
            // Only a file counts as the index page.
            if entry.file_name() == INDEX_FILE {
                summary.has_index = true;
            }
        }
    }

    debug!("Docs directory {}: {:?}", dir.display(), summary);
    Ok(summary)
}

/// Warns when `dir` is unreadable, empty or has no `index.html`. Serving
/// still goes ahead; static files below it may be all the user needs.
pub fn warn_if_incomplete(dir: &Path) {
    match inspect_docs_dir(dir) {
        Ok(summary) if summary.is_empty() => {
            warn!("Docs directory {} is empty", dir.display());
        }
        Ok(summary) if !summary.has_index => {
            warn!(
                "Docs directory {} has no {}; `/` will answer 404",
                dir.display(),
                INDEX_FILE
            );
        }
        Ok(_) => {}
        Err(e) => warn!("{:#}", e),
    }
}
