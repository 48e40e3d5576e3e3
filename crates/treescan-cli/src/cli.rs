//! Command line arguments

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;
use treescan_core::ScannerConfig;

/// Usage line reported when the arguments cannot be parsed
pub const USAGE: &str = "usage: treescan <source_path> <dest_path> [--verbose]";

#[derive(Debug, Parser)]
#[command(name = "treescan")]
#[command(author, version, about = "Inventory a source and a destination file tree", long_about = None)]
pub struct Cli {
    /// Source file or directory
    pub source_path: PathBuf,

    /// Destination file or directory
    pub dest_path: PathBuf,

    /// Write diagnostics to standard error
    #[arg(short, long)]
    pub verbose: bool,

    /// Visit directory entries in file name order
    #[arg(long)]
    pub sorted: bool,

    /// Print the report on a single line
    #[arg(long)]
    pub compact: bool,
}

/// Arguments of the single-file hash tool
#[derive(Debug, Parser)]
#[command(name = "treescan-hash")]
#[command(author, version, about = "Print the SHA-256 of a single file", long_about = None)]
pub struct HashCli {
    /// File to fingerprint
    pub file_path: PathBuf,
}

impl Cli {
    /// Scanner configuration derived from the flags
    #[must_use]
    pub fn scanner_config(&self) -> ScannerConfig {
        ScannerConfig::new()
            .with_verbose(self.verbose)
            .with_sorted_entries(self.sorted)
    }
}

/// Whether a parse error is really a help or version request
#[must_use]
pub fn is_informational(err: &clap::Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    )
}

/// Failure message for an argument error
#[must_use]
pub fn usage_message(err: &clap::Error) -> String {
    match err.kind() {
        ErrorKind::MissingRequiredArgument => USAGE.to_string(),
        kind => format!("{} ({USAGE})", kind.as_str().unwrap_or("invalid arguments")),
    }
}
