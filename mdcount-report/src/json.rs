//! JSON report for scripts and other tools

use anyhow::{Context, Result};
use mdcount_core::{CountUnit, Document, DocumentTotals, HeaderRecord};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct JsonReport<'a> {
    path: &'a Path,
    unit: CountUnit,
    records: &'a [HeaderRecord],
    totals: &'a DocumentTotals,
}

/// Serialize the document's records and totals as pretty-printed JSON
pub fn render_json(doc: &Document) -> Result<String> {
    let report = JsonReport {
        path: &doc.path,
        unit: doc.unit,
        records: &doc.segmentation.records,
        totals: &doc.segmentation.totals,
    };

    serde_json::to_string_pretty(&report)
        .with_context(|| format!("Failed to serialize report for {}", doc.path.display()))
}
