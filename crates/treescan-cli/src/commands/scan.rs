//! Scan command: Inventory the source and destination roots

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use treescan_core::{FileMetadata, ScanReport, ScanStatistics, Scanner, ScannerConfig};

/// Scan both roots with a single scanner, resetting it between them
#[must_use]
pub fn run(source: &Path, dest: &Path, config: ScannerConfig) -> ScanReport {
    let mut scanner = Scanner::new(config);

    let (source_files, source_stats) = scan_root(&mut scanner, source);
    let (dest_files, dest_stats) = scan_root(&mut scanner, dest);

    ScanReport::success(source_files, source_stats, dest_files, dest_stats)
}

/// Run the scan and render the report as JSON
///
/// # Errors
/// Returns an error if the report cannot be serialized.
pub fn execute(source: &Path, dest: &Path, config: ScannerConfig, pretty: bool) -> Result<String> {
    run(source, dest, config)
        .to_json(pretty)
        .context("Failed to render scan report")
}

/// Render the failure object for an error that reached the entry point
#[must_use]
pub fn failure_json(message: &str, pretty: bool) -> String {
    ScanReport::failure(message)
        .to_json(pretty)
        .unwrap_or_else(|_| {
            serde_json::json!({
                "source_files": [],
                "dest_files": [],
                "status": false,
                "message": message,
            })
            .to_string()
        })
}

fn scan_root(scanner: &mut Scanner, path: &Path) -> (Vec<FileMetadata>, ScanStatistics) {
    scanner.reset_statistics();
    info!("Starting scan of {}", path.display());

    let files = scanner.scan_path(path);
    let stats = scanner.statistics();
    let unhashed = files.iter().filter(|f| !f.has_hash()).count();

    info!(
        "Scan of {} finished: {} files, {} MB, {} without hash",
        path.display(),
        stats.scanned_files,
        stats.total_size_mb,
        unhashed
    );
    (files, stats)
}
