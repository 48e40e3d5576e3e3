//! Report module: The combined two-tree scan output
//!
//! This is the object a comparison tool consumes. Both the producer
//! and a consumer can use the same types.

mod model;

pub use model::{ReportStatistics, ScanReport};
