//! Permission bit rendering

use std::fs::Metadata;
use std::path::Path;

use crate::error::ScanError;

/// Read a file's permission bits as an octal string such as `0644`
///
/// # Errors
/// Returns an error if the file cannot be stat'd.
pub fn read_permissions(path: impl AsRef<Path>) -> Result<String, ScanError> {
    let path = path.as_ref();
    let metadata = std::fs::metadata(path).map_err(|e| ScanError::io(path, e))?;
    Ok(permissions_from_metadata(&metadata))
}

/// Render the permission bits of already fetched metadata
#[cfg(unix)]
#[must_use]
pub fn permissions_from_metadata(metadata: &Metadata) -> String {
    use std::os::unix::fs::PermissionsExt;

    format!("{:04o}", metadata.permissions().mode() & 0o7777)
}

/// Render the permission bits of already fetched metadata
///
/// Only the read-only flag is available off Unix.
#[cfg(not(unix))]
#[must_use]
pub fn permissions_from_metadata(metadata: &Metadata) -> String {
    if metadata.permissions().readonly() {
        "0444".to_string()
    } else {
        crate::record::DEFAULT_PERMISSIONS.to_string()
    }
}
