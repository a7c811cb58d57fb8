//! # bee Network Utilities Module (`common::network`)
//!
//! File: cli/src/common/network/mod.rs
//! Author: bee Contributors
//!
//! ## Overview
//!
//! Outbound network helpers. The HTTP server side of `rundocs` lives with the
//! command in `commands::rundocs::server_logic`; this module only holds the
//! client side.
//!
//! - **`download`**: Skip-if-present file download over HTTP(S) via `reqwest`.
//!

pub mod download;
