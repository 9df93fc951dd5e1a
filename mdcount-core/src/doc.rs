//! Document loading and segmentation

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::record::{CountUnit, Segmentation};
use crate::segment;

/// A Markdown document read from disk together with its segmentation
#[derive(Clone, Debug)]
pub struct Document {
    pub path: PathBuf,
    pub text: String,
    pub unit: CountUnit,
    pub segmentation: Segmentation,
    pub rev: u64,
}

impl Document {
    /// Load a document from a file path
    pub fn load(path: &Path, unit: CountUnit) -> Result<Self> {
        let abs_path = path
            .canonicalize()
            .with_context(|| format!("Failed to canonicalize path: {}", path.display()))?;

        let text = fs::read_to_string(&abs_path)
            .with_context(|| format!("Failed to read file: {}", abs_path.display()))?;

        let segmentation = segment::segment_with(&text, unit);

        Ok(Self {
            path: abs_path,
            text,
            unit,
            segmentation,
            rev: 1,
        })
    }

    /// Reload the document from disk and segment it again
    pub fn reload(&mut self) -> Result<()> {
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to reload file: {}", self.path.display()))?;

        self.segmentation = segment::segment_with(&text, self.unit);
        self.text = text;
        self.rev += 1;

        Ok(())
    }

    /// Number of lines when split on `\n`
    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }
}

/// Whether the file extension is one of `extensions` (case-insensitive)
pub fn has_markdown_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}
