//! CLI commands

pub mod hash;
pub mod scan;
