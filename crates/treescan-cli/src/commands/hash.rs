//! Hash command: Fingerprint a single file

use std::path::Path;

use serde::Serialize;
use treescan_core::{compute_file_hash, ScanError, DEFAULT_CHUNK_SIZE};

/// Usage line for the hash tool
pub const HASH_USAGE: &str = "usage: treescan-hash <file_path>";

/// Result object printed by the hash tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashOutcome {
    /// `true` if the file was hashed
    pub success: bool,
    /// Lowercase hex SHA-256, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    /// Error text, present on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl HashOutcome {
    fn hashed(hash: String) -> Self {
        Self {
            success: true,
            hash: Some(hash),
            message: None,
        }
    }

    /// Failure outcome carrying a message
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            hash: None,
            message: Some(message.into()),
        }
    }

    /// Render as a single JSON line
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| r#"{"success":false}"#.to_string())
    }
}

/// Hash one regular file
#[must_use]
pub fn run(path: &Path) -> HashOutcome {
    match hash_regular_file(path) {
        Ok(hash) => HashOutcome::hashed(hash),
        Err(e) => HashOutcome::failed(format!("Failed to hash file: {e}")),
    }
}

fn hash_regular_file(path: &Path) -> Result<String, ScanError> {
    let metadata = std::fs::metadata(path).map_err(|_| ScanError::NotFound(path.to_path_buf()))?;
    if !metadata.is_file() {
        return Err(ScanError::NotAFile(path.to_path_buf()));
    }
    compute_file_hash(path, DEFAULT_CHUNK_SIZE)
}
