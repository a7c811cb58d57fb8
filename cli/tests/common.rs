//! # bee CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: bee Contributors
//!
//! ## Overview
//!
//! Shared helpers for the integration test files. Each `.rs` file in
//! `cli/tests/` is compiled as its own crate and runs the compiled `bee`
//! binary through `assert_cmd`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;

/// # Get bee Command (`bee_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `bee` binary with the
/// `rundocs` environment fallbacks cleared, so the host environment cannot
/// change test outcomes.
///
/// ## Panics
/// Panics if the `bee` binary cannot be found via `Command::cargo_bin`.
pub fn bee_cmd() -> Command {
    let mut cmd = Command::cargo_bin("bee").expect("Failed to find bee binary for testing");
    cmd.env_remove("BEE_DOCS_DOWNLOAD")
        .env_remove("BEE_DOCPORT")
        .env_remove("RUST_LOG");
    cmd
}
