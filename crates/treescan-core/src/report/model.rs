//! Report model types

use serde::{Deserialize, Serialize};

use crate::record::FileMetadata;
use crate::scanner::ScanStatistics;

/// Per-tree statistics included in a successful report
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReportStatistics {
    /// Counters for the source root
    pub source: ScanStatistics,
    /// Counters for the destination root
    pub dest: ScanStatistics,
}

/// Inventory of a source and a destination tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    /// Records for the source root, in scan order
    pub source_files: Vec<FileMetadata>,
    /// Records for the destination root, in scan order
    pub dest_files: Vec<FileMetadata>,
    /// `true` if both roots were scanned
    pub status: bool,
    /// Human-readable summary or error text
    pub message: String,
    /// Present only on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<ReportStatistics>,
}

impl ScanReport {
    /// Build a successful report
    #[must_use]
    pub fn success(
        source_files: Vec<FileMetadata>,
        source_stats: ScanStatistics,
        dest_files: Vec<FileMetadata>,
        dest_stats: ScanStatistics,
    ) -> Self {
        let message = format!(
            "Scanned {} source files and {} destination files",
            source_files.len(),
            dest_files.len()
        );
        Self {
            source_files,
            dest_files,
            status: true,
            message,
            statistics: Some(ReportStatistics {
                source: source_stats,
                dest: dest_stats,
            }),
        }
    }

    /// Build a failure report with empty file lists
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            source_files: Vec::new(),
            dest_files: Vec::new(),
            status: false,
            message: message.into(),
            statistics: None,
        }
    }

    /// Render as JSON, indented with two spaces when `pretty` is set
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }

    /// Parse a report previously produced by [`ScanReport::to_json`]
    ///
    /// # Errors
    /// Returns an error if the text is not a valid report.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}
