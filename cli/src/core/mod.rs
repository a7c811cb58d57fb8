//! # bee Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: bee Contributors
//!
//! ## Overview
//!
//! Foundational pieces shared by every command. Currently this is the error
//! layer:
//! - `error`: `DocsError`, the crate-wide `Result` alias and exit-status mapping
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::error::{DocsError, Result};
//! ```
//!
pub mod error;
