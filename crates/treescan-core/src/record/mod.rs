//! Record module: Per-file metadata produced by the scanner
//!
//! A record is built once for every file the scanner decides to include
//! and is never mutated afterwards. Rescanning produces new records.

mod model;
pub mod timestamp;

pub use model::{FileMetadata, DEFAULT_PERMISSIONS};
