//! # bee Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: bee Contributors
//!
//! ## Overview
//!
//! Shared utility modules used by the command handlers. Keeping them under
//! `common::` separates reusable plumbing from command-specific logic
//! (`commands::`) and core infrastructure (`core::`).
//!
//! ## Architecture
//!
//! - **`archive`**: ZIP extraction with path and mode preservation.
//! - **`fs`**: Small filesystem helpers (non-empty file checks, tolerant removal).
//! - **`network`**: Cancellable HTTP download of remote files.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::{archive, network};
//! use std::path::Path;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn run_example() -> crate::core::error::Result<()> {
//! let cancel = CancellationToken::new();
//! network::download::fetch("https://example.com/v2.zip", Path::new("swagger.zip"), &cancel).await?;
//! archive::zip::extract_all(Path::new("swagger.zip"), Path::new("."))?;
//! # Ok(())
//! # }
//! ```
//!

/// ZIP archive extraction.
pub mod archive;
/// Filesystem helpers.
pub mod fs;
/// HTTP download utilities.
pub mod network;
