//! # bee Archive Utilities Module (`common::archive`)
//!
//! File: cli/src/common/archive/mod.rs
//! Author: bee Contributors
//!
//! ## Overview
//!
//! Archive handling for the CLI. The docs bundle is distributed as a `.zip`
//! file, so the only format implemented is ZIP extraction.
//!
//! - **`zip`**: Extracts every entry of a `.zip` file beneath a destination
//!   directory, preserving relative paths and unix modes.
//!

pub mod zip;
