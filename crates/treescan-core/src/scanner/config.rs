//! Scanner configuration

/// Bytes read per chunk while hashing
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Files between two progress lines in verbose mode
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 100;

/// Configuration for a [`Scanner`](super::Scanner)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Emit diagnostics through `tracing`
    pub verbose: bool,
    /// Successfully scanned files between progress lines, 0 disables them
    pub progress_interval: u64,
    /// Visit directory entries in file name order
    pub sort_entries: bool,
    /// Read buffer size used for hashing
    pub chunk_size: usize,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            sort_entries: false,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl ScannerConfig {
    /// Create a configuration with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable diagnostics
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Set the progress line interval
    #[must_use]
    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Visit directory entries sorted by file name
    #[must_use]
    pub fn with_sorted_entries(mut self, sorted: bool) -> Self {
        self.sort_entries = sorted;
        self
    }

    /// Set the hashing chunk size (at least one byte)
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }
}
