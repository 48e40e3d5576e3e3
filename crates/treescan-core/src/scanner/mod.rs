//! Scanner module: Tree walking, hashing and statistics
//!
//! Responsible for walking a file or directory root, applying the
//! exclusion policy, fingerprinting each included file, and keeping
//! running totals until the caller resets them.

mod config;
mod hash;
mod permissions;
mod stats;
mod walker;

pub use config::{ScannerConfig, DEFAULT_CHUNK_SIZE, DEFAULT_PROGRESS_INTERVAL};
pub use hash::compute_file_hash;
pub use permissions::{permissions_from_metadata, read_permissions};
pub use stats::{bytes_to_mb, ScanStatistics};
pub use walker::{is_hidden_name, validate_directory, Scanner};
