//! mdcount report - presentation of heading counts
//!
//! This crate turns a segmented document into something a person or a script
//! can read:
//! - Plain-text table with previews and totals
//! - JSON output
//! - File watching for live re-counting

pub mod json;
pub mod preview;
pub mod table;

#[cfg(feature = "watch")]
pub mod watcher;

use anyhow::Result;
use mdcount_core::config::ReportFormat;
use mdcount_core::{Config, CountUnit, Document};

pub use json::render_json;
pub use table::render_table;

/// Table rendering options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    pub show_preview: bool,
    pub preview_lines: usize,
    pub preview_chars: usize,
    /// Unit used to cut previews
    pub unit: CountUnit,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for ReportOptions {
    fn from(config: &Config) -> Self {
        Self {
            show_preview: config.report.show_preview,
            preview_lines: config.report.preview_lines,
            preview_chars: config.report.preview_chars,
            unit: config.count.unit,
        }
    }
}

/// Render `doc` in the requested format
pub fn render(doc: &Document, format: ReportFormat, options: &ReportOptions) -> Result<String> {
    log::debug!(
        "Rendering {:?} report for {} (rev {})",
        format,
        doc.path.display(),
        doc.rev
    );
    match format {
        ReportFormat::Table => Ok(render_table(doc, options)),
        ReportFormat::Json => render_json(doc),
    }
}
