//! # techbot-cli
//!
//! Argument parsing for the `techbot` binary.

pub mod cli;

pub use cli::{Cli, Commands};
