//! File walker: Inventories a file or directory tree

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use super::config::ScannerConfig;
use super::hash::compute_file_hash;
use super::permissions::read_permissions;
use super::stats::ScanStatistics;
use crate::error::ScanError;
use crate::record::{timestamp, FileMetadata, DEFAULT_PERMISSIONS};

/// Scanner that fingerprints files and accumulates totals
///
/// Counters accumulate across calls. Call [`Scanner::reset_statistics`]
/// before reusing an instance for an unrelated root.
#[derive(Debug, Default)]
pub struct Scanner {
    config: ScannerConfig,
    scanned_files: u64,
    total_size: u64,
}

impl Scanner {
    /// Create a new scanner with zeroed counters
    #[must_use]
    pub fn new(config: ScannerConfig) -> Self {
        Self {
            config,
            scanned_files: 0,
            total_size: 0,
        }
    }

    /// Get the configuration this scanner runs with
    #[must_use]
    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Hash a file, returning an empty string if it cannot be read
    #[must_use]
    pub fn calculate_hash(&self, path: &Path) -> String {
        match compute_file_hash(path, self.config.chunk_size) {
            Ok(hash) => hash,
            Err(e) => {
                if self.config.verbose {
                    warn!("Can't hash file {}: {}", path.display(), e);
                }
                String::new()
            }
        }
    }

    /// Read a file's permission bits, falling back to `0644`
    #[must_use]
    pub fn file_permissions(&self, path: &Path) -> String {
        read_permissions(path).unwrap_or_else(|_| DEFAULT_PERMISSIONS.to_string())
    }

    /// Scan a single file
    ///
    /// Returns `None` when the file cannot be stat'd. Counters are bumped
    /// once per successful stat, even if hashing fails afterwards.
    pub fn scan_file(&mut self, path: &Path) -> Option<FileMetadata> {
        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) => {
                if self.config.verbose {
                    warn!("Can't scan file {}: {}", path.display(), e);
                }
                return None;
            }
        };

        let size = metadata.len();
        let modified_time = metadata
            .modified()
            .ok()
            .and_then(timestamp::from_system_time);
        let permissions = self.file_permissions(path);

        self.scanned_files += 1;
        self.total_size += size;

        Some(FileMetadata::new(
            path,
            self.calculate_hash(path),
            size,
            modified_time,
            permissions,
        ))
    }

    /// Scan a root path, which may be a file or a directory
    ///
    /// Missing paths and special files yield an empty list.
    pub fn scan_path(&mut self, path: &Path) -> Vec<FileMetadata> {
        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) => {
                if self.config.verbose {
                    warn!("Path does not exist: {} ({})", path.display(), e);
                }
                return Vec::new();
            }
        };

        if metadata.is_file() {
            return self.scan_file(path).into_iter().collect();
        }

        if metadata.is_dir() {
            return self.scan_directory(path);
        }

        if self.config.verbose {
            warn!("Not a file or directory: {}", path.display());
        }
        Vec::new()
    }

    /// Recursively scan a directory
    ///
    /// Hidden entries and symbolic links are skipped. Entries the walk
    /// cannot read, such as a directory without read permission, are
    /// logged and skipped while the rest of the tree is still visited.
    pub fn scan_directory(&mut self, path: &Path) -> Vec<FileMetadata> {
        let mut files = Vec::new();

        if let Err(e) = validate_directory(path) {
            if self.config.verbose {
                warn!("Can't scan directory: {}", e);
            }
            return files;
        }

        let mut walker = WalkDir::new(path).follow_links(false);
        if self.config.sort_entries {
            walker = walker.sort_by_file_name();
        }

        let entries = walker
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

        let mut walked: u64 = 0;
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    if self.config.verbose {
                        warn!("Scanning issue with {}: {}", path.display(), e);
                    }
                    continue;
                }
            };

            if entry.path_is_symlink() {
                if self.config.verbose {
                    debug!("Skipping symlink: {}", entry.path().display());
                }
                continue;
            }

            if !entry.file_type().is_file() {
                continue;
            }

            if let Some(record) = self.scan_file(entry.path()) {
                files.push(record);
                walked += 1;
                self.log_progress(walked);
            }
        }

        files
    }

    /// Snapshot of the accumulated counters
    #[must_use]
    pub fn statistics(&self) -> ScanStatistics {
        ScanStatistics::new(self.scanned_files, self.total_size)
    }

    /// Zero both counters
    pub fn reset_statistics(&mut self) {
        self.scanned_files = 0;
        self.total_size = 0;
    }

    fn log_progress(&self, walked: u64) {
        let interval = self.config.progress_interval;
        if self.config.verbose && interval > 0 && walked % interval == 0 {
            info!("Scanned {} files", walked);
        }
    }
}

/// Check that a path exists and is a directory
///
/// # Errors
/// Returns `NotFound` or `NotADirectory` accordingly.
pub fn validate_directory(path: impl AsRef<Path>) -> Result<(), ScanError> {
    let path = path.as_ref();
    match fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(ScanError::NotADirectory(path.to_path_buf())),
        Err(_) => Err(ScanError::NotFound(path.to_path_buf())),
    }
}

/// Whether a file name marks a hidden entry
#[must_use]
pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.')
}

fn is_hidden(entry: &DirEntry) -> bool {
    is_hidden_name(&entry.file_name().to_string_lossy())
}
