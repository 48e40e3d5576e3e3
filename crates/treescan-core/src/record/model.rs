//! File metadata record

use std::path::Path;

use chrono::{DateTime, Local, Timelike};
use serde::{Deserialize, Serialize};

/// Permission string used when the mode bits cannot be read
pub const DEFAULT_PERMISSIONS: &str = "0644";

/// Identity and content fingerprint of one scanned file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadata {
    /// Path as supplied to or discovered by the walk (not canonicalized)
    pub path: String,
    /// Lowercase hex SHA-256 of the content, empty if it could not be computed
    pub hash: String,
    /// Size in bytes as reported by the filesystem at scan time
    pub size: u64,
    /// Last modification time, whole seconds, local clock
    #[serde(with = "super::timestamp")]
    pub modified_time: DateTime<Local>,
    /// Permission bits in octal text form, e.g. `0644`
    pub permissions: String,
}

impl FileMetadata {
    /// Create a new record
    ///
    /// A missing modification time defaults to the current instant.
    #[must_use]
    pub fn new(
        path: impl AsRef<Path>,
        hash: impl Into<String>,
        size: u64,
        modified_time: Option<DateTime<Local>>,
        permissions: impl Into<String>,
    ) -> Self {
        let modified_time = modified_time.unwrap_or_else(Local::now);
        Self {
            path: path.as_ref().to_string_lossy().into_owned(),
            hash: hash.into(),
            size,
            modified_time: truncate_to_seconds(modified_time),
            permissions: permissions.into(),
        }
    }

    /// Whether a content hash was computed for this file
    #[must_use]
    pub fn has_hash(&self) -> bool {
        !self.hash.is_empty()
    }

    /// Render the record as a generic JSON object
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "path": self.path,
            "hash": self.hash,
            "size": self.size,
            "modified_time": super::timestamp::format(&self.modified_time),
            "permissions": self.permissions,
        })
    }
}

fn truncate_to_seconds(time: DateTime<Local>) -> DateTime<Local> {
    time.with_nanosecond(0).unwrap_or(time)
}
