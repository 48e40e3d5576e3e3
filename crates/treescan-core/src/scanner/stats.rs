//! Scan statistics snapshot

use serde::{Deserialize, Serialize};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Point-in-time read of a scanner's counters
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScanStatistics {
    /// Files successfully stat'd
    pub scanned_files: u64,
    /// Sum of their sizes in bytes
    pub total_size: u64,
    /// `total_size` in megabytes, rounded to two decimals
    pub total_size_mb: f64,
}

impl ScanStatistics {
    /// Build a snapshot from raw counters
    #[must_use]
    pub fn new(scanned_files: u64, total_size: u64) -> Self {
        Self {
            scanned_files,
            total_size,
            total_size_mb: bytes_to_mb(total_size),
        }
    }
}

/// Convert bytes to megabytes (1 MB = 1,048,576 bytes), two decimals
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn bytes_to_mb(bytes: u64) -> f64 {
    (bytes as f64 / BYTES_PER_MB * 100.0).round() / 100.0
}
