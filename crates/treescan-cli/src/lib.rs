//! treescan-cli library
//!
//! Exposes argument parsing, logging setup and the command
//! implementations so both binaries and the tests can share them.

pub mod cli;
pub mod commands;
pub mod logging;

pub use cli::{Cli, HashCli, USAGE};
