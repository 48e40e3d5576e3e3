//! Streaming SHA-256 file hashing

use std::fs::File;
use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::ScanError;

/// Compute the lowercase hex SHA-256 of a file's content
///
/// The file is read in `chunk_size` pieces; the handle is dropped as
/// soon as hashing finishes or fails.
///
/// # Errors
/// Returns an error if the file cannot be opened or read.
pub fn compute_file_hash(path: impl AsRef<Path>, chunk_size: usize) -> Result<String, ScanError> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|e| ScanError::io(path, e))?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; chunk_size.max(1)];

    loop {
        let read = match file.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(ScanError::io(path, e)),
        };
        hasher.update(&buffer[..read]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}
