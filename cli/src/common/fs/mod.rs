//! # bee Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//! Author: bee Contributors
//!
//! ## Overview
//!
//! Organizational entry point for filesystem helpers. Functionality lives in
//! submodules and is imported from there (e.g., `crate::common::fs::io`).
//!
//! - **`io`**: Existence/size checks and tolerant directory removal used by the
//!   `rundocs` download and install steps.
//!

/// Basic file I/O helpers (`nonempty_file_len`, `remove_dir_all_if_exists`).
pub mod io;
