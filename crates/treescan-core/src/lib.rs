//! treescan-core: Core library for inventorying file trees
//!
//! Walks a source and a destination tree, fingerprints every regular
//! file with SHA-256 and captures its size, modification time and
//! permission bits. The resulting records and per-tree statistics are
//! bundled into a [`ScanReport`] for a downstream comparison tool.
//!
//! # Exclusion policy
//!
//! - Hidden entries (names starting with `.`) are skipped; hidden
//!   directories are pruned together with everything beneath them.
//! - Symbolic links are never followed or recorded.
//! - Only regular files produce records.

pub mod error;
pub mod record;
pub mod report;
pub mod scanner;

// Re-export commonly used types
pub use error::ScanError;
pub use record::FileMetadata;
pub use report::{ReportStatistics, ScanReport};
pub use scanner::{
    compute_file_hash, read_permissions, validate_directory, ScanStatistics, Scanner,
    ScannerConfig, DEFAULT_CHUNK_SIZE,
};
