//! # bee Error Types
//!
//! File: cli/src/core/error.rs
//! Author: bee Contributors
//!
//! ## Overview
//!
//! This module defines the error types used throughout the bee CLI.
//!
//! ## Architecture
//!
//! The error system consists of two parts:
//! - `DocsError`: A `thiserror` enum for the conditions callers branch on
//!   (missing docs directory, bad port, rejected or cancelled download, bad
//!   config file).
//! - `Result<T>`: A type alias for `anyhow::Result<T>` so any error can carry
//!   context on its way up to `main`.
//!
//! `main` downcasts the final error to `DocsError` to pick the process exit
//! status via [`DocsError::exit_code`].
//!
//! ## Examples
//!
//! ```rust
//! if !docs_dir.is_dir() {
//!     return Err(DocsError::DocsDirMissing { dir: docs_dir.to_path_buf() }.into());
//! }
//!
//! let body = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the bee CLI.
#[derive(Error, Debug)]
pub enum DocsError {
    #[error(
        "No docs found at '{}'. Run `bee rundocs -isDownload=true` to download them first.",
        dir.display()
    )]
    DocsDirMissing { dir: PathBuf },

    #[error("Invalid docs server port '{0}': expected a number between 0 and 65535")]
    InvalidPort(String),

    #[error("Download of {url} was rejected with HTTP status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0} was cancelled")]
    Cancelled(String),
}

impl DocsError {
    /// Process exit status for this error.
    ///
    /// A missing docs directory is the one deliberate hard stop with its own
    /// status; everything else is a generic failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            DocsError::DocsDirMissing { .. } => 2,
            _ => 1,
        }
    }
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

/// Resolves the exit status for an error that reached `main`.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<DocsError>()
        .map_or(1, DocsError::exit_code)
}
