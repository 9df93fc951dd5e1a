//! Per-heading records and document totals

use serde::{Deserialize, Serialize};

/// Unit used when measuring text length
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CountUnit {
    /// Unicode scalar values
    #[default]
    Chars,
    /// UTF-16 code units, as counted by JavaScript-based editors
    Utf16,
}

impl CountUnit {
    /// Length of `text` in this unit
    pub fn measure(self, text: &str) -> usize {
        match self {
            CountUnit::Chars => text.chars().count(),
            CountUnit::Utf16 => text.encode_utf16().count(),
        }
    }

    /// Length of a single character in this unit
    pub fn char_len(self, c: char) -> usize {
        match self {
            CountUnit::Chars => 1,
            CountUnit::Utf16 => c.len_utf16(),
        }
    }
}

/// A heading together with the content span beneath it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderRecord {
    /// Heading text after the `#` marker, as written
    pub raw_text: String,
    /// Heading text with decorations removed
    pub clean_text: String,
    pub level: u8,
    pub header_chars: usize,
    pub content_chars: usize,
    /// 1-based line of the heading
    pub start_line: usize,
    /// 0-based index of the last line in the content span
    pub end_line: usize,
    /// Lines after the heading through `end_line`, joined with `\n`
    pub content: String,
}

/// Aggregate counts over every record in a document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentTotals {
    pub headers: usize,
    pub header_chars: usize,
    pub content_chars: usize,
}

impl DocumentTotals {
    /// Accumulate totals over a record sequence
    pub fn from_records(records: &[HeaderRecord]) -> Self {
        records.iter().fold(Self::default(), |mut totals, record| {
            totals.headers += 1;
            totals.header_chars += record.header_chars;
            totals.content_chars += record.content_chars;
            totals
        })
    }
}

/// Result of segmenting one document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segmentation {
    pub records: Vec<HeaderRecord>,
    pub totals: DocumentTotals,
}

impl Segmentation {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
