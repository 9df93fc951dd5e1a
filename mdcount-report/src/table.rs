//! Plain-text table report

use mdcount_core::{Document, HeaderRecord, Segmentation};
use std::fmt::Write as _;
use unicode_width::UnicodeWidthStr;

use crate::preview::content_preview;
use crate::ReportOptions;

const LINES_TITLE: &str = "Lines";
const HEADER_TITLE: &str = "Header";
const HEADER_COUNT_TITLE: &str = "Header count";
const CONTENT_COUNT_TITLE: &str = "Content count";
const COLUMN_GAP: &str = "  ";

/// One rendered table row, before padding
struct Row {
    lines: String,
    heading: String,
    preview: Option<String>,
    header_count: String,
    content_count: String,
}

impl Row {
    fn new(record: &HeaderRecord, options: &ReportOptions) -> Self {
        let indent = "  ".repeat(usize::from(record.level.saturating_sub(1)));
        let preview = options
            .show_preview
            .then(|| {
                content_preview(
                    &record.content,
                    options.preview_lines,
                    options.preview_chars,
                    options.unit,
                )
            })
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .map(|p| format!("{indent}  {p}"));

        Self {
            lines: format!("Lines {}-{}", record.start_line, record.end_line),
            heading: format!("{indent}{} {}", "#".repeat(usize::from(record.level)), record.raw_text),
            preview,
            header_count: format!("{} chars", record.header_chars),
            content_count: format!("{} chars", record.content_chars),
        }
    }
}

/// Render the counting-method note, one row per heading and the totals
pub fn render_table(doc: &Document, options: &ReportOptions) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({} lines)", doc.path.display(), doc.line_count());
    let _ = writeln!(out);
    write_method_note(&mut out);
    let _ = writeln!(out);
    write_rows(&mut out, &doc.segmentation, options);
    let _ = writeln!(out);
    write_totals(&mut out, &doc.segmentation);
    out
}

fn write_method_note(out: &mut String) {
    let _ = writeln!(out, "Counting method");
    let _ = writeln!(out, "  - Header characters: excluding decoration markup");
    let _ = writeln!(
        out,
        "  - Content characters: from below the header to the next header of the same or higher level (excluding empty lines)"
    );
}

fn write_rows(out: &mut String, segmentation: &Segmentation, options: &ReportOptions) {
    if segmentation.is_empty() {
        let _ = writeln!(out, "No headings found.");
        return;
    }

    let rows: Vec<Row> = segmentation
        .records
        .iter()
        .map(|record| Row::new(record, options))
        .collect();

    let lines_width = column_width(LINES_TITLE, rows.iter().map(|r| r.lines.as_str()));
    let heading_width = column_width(
        HEADER_TITLE,
        rows.iter()
            .flat_map(|r| std::iter::once(r.heading.as_str()).chain(r.preview.as_deref())),
    );
    let header_count_width =
        column_width(HEADER_COUNT_TITLE, rows.iter().map(|r| r.header_count.as_str()));
    let content_count_width =
        column_width(CONTENT_COUNT_TITLE, rows.iter().map(|r| r.content_count.as_str()));

    let _ = writeln!(
        out,
        "{}{COLUMN_GAP}{}{COLUMN_GAP}{}{COLUMN_GAP}{}",
        pad_right(LINES_TITLE, lines_width),
        pad_right(HEADER_TITLE, heading_width),
        pad_left(HEADER_COUNT_TITLE, header_count_width),
        pad_left(CONTENT_COUNT_TITLE, content_count_width),
    );

    for row in &rows {
        let line = format!(
            "{}{COLUMN_GAP}{}{COLUMN_GAP}{}{COLUMN_GAP}{}",
            pad_right(&row.lines, lines_width),
            pad_right(&row.heading, heading_width),
            pad_left(&row.header_count, header_count_width),
            pad_left(&row.content_count, content_count_width),
        );
        let _ = writeln!(out, "{}", line.trim_end());

        if let Some(preview) = &row.preview {
            let _ = writeln!(out, "{}{COLUMN_GAP}{preview}", " ".repeat(lines_width));
        }
    }
}

fn write_totals(out: &mut String, segmentation: &Segmentation) {
    let totals = &segmentation.totals;
    let _ = writeln!(out, "Total headers: {}", totals.headers);
    let _ = writeln!(out, "Total header characters: {}", totals.header_chars);
    let _ = writeln!(out, "Total content characters: {}", totals.content_chars);
}

fn column_width<'a>(title: &str, cells: impl Iterator<Item = &'a str>) -> usize {
    cells.map(UnicodeWidthStr::width).fold(title.width(), usize::max)
}

fn pad_right(text: &str, width: usize) -> String {
    format!("{text}{}", " ".repeat(width.saturating_sub(text.width())))
}

fn pad_left(text: &str, width: usize) -> String {
    format!("{}{text}", " ".repeat(width.saturating_sub(text.width())))
}
