//! Error types for the fallible scanning building blocks

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while inspecting a single filesystem entry
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Path does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Not a regular file: {}", .0.display())]
    NotAFile(PathBuf),
}

impl ScanError {
    /// Wrap an I/O error together with the path it occurred on
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
