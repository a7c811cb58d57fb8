//! # bee Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: bee Contributors
//!
//! ## Overview
//!
//! Aggregates the top-level commands of the bee CLI so `main.rs` can route to
//! them. Each command module defines its own argument struct and an async
//! `handle_*` function.
//!
//! ## Command Groups
//!
//! - `rundocs`: Download, install and serve the Swagger docs bundle
//!

/// Download, install and serve the Swagger docs bundle.
pub mod rundocs;
