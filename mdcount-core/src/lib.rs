//! mdcount core - heading segmentation and character counting
//!
//! This crate contains the counting logic, independent of how results are shown:
//! - ATX heading detection
//! - Inline decoration stripping
//! - Nesting-aware content spans and character counts
//! - Document loading
//! - Configuration management

pub mod config;
pub mod doc;
pub mod heading;
pub mod record;
pub mod segment;
pub mod strip;

// Re-export commonly used types
pub use config::Config;
pub use doc::Document;
pub use record::{CountUnit, DocumentTotals, HeaderRecord, Segmentation};
pub use segment::{segment, segment_with};
