#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # calckit
//!
//! Command-line front end for `calckit-core`: configuration, command
//! dispatch, and output rendering. The binary in `main.rs` only wires
//! logging and process exit codes around these modules.

pub use calckit_core;

pub mod cli;
pub mod commands;
pub mod config;
pub mod output;
