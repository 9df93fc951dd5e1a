//! Heading segmentation: pair every heading with the span beneath it

use crate::heading::{parse_heading, trim_blank, Heading};
use crate::record::{CountUnit, DocumentTotals, HeaderRecord, Segmentation};
use crate::strip::strip_decorations;

/// Segment `text` counting in Unicode scalar values
pub fn segment(text: &str) -> Segmentation {
    segment_with(text, CountUnit::default())
}

/// Segment `text`, measuring lengths in `unit`.
///
/// A heading's span runs until the next heading of the same or a shallower
/// level, so deeper headings are absorbed into their parent's content. The
/// scan keeps a stack of headings that are still open; the stack levels are
/// strictly increasing from bottom to top.
pub fn segment_with(text: &str, unit: CountUnit) -> Segmentation {
    let lines: Vec<&str> = text.split('\n').collect();
    let last_line = lines.len() - 1;

    let mut headings: Vec<(usize, Heading)> = Vec::new();
    let mut end_lines: Vec<usize> = Vec::new();
    let mut open: Vec<usize> = Vec::new();

    for (line_idx, line) in lines.iter().enumerate() {
        let Some(heading) = parse_heading(line) else {
            continue;
        };

        while let Some(&top) = open.last() {
            if headings[top].1.level < heading.level {
                break;
            }
            end_lines[top] = line_idx - 1;
            open.pop();
        }

        open.push(headings.len());
        headings.push((line_idx, heading));
        end_lines.push(last_line);
    }

    let records: Vec<HeaderRecord> = headings
        .into_iter()
        .zip(end_lines)
        .map(|((line_idx, heading), end_line)| {
            let content = lines[line_idx + 1..=end_line].join("\n");
            build_record(heading, line_idx, end_line, content, unit)
        })
        .collect();

    let totals = DocumentTotals::from_records(&records);
    log::debug!(
        "Segmented {} lines into {} headings ({} header chars, {} content chars)",
        lines.len(),
        totals.headers,
        totals.header_chars,
        totals.content_chars
    );

    Segmentation { records, totals }
}

fn build_record(
    heading: Heading,
    line_idx: usize,
    end_line: usize,
    content: String,
    unit: CountUnit,
) -> HeaderRecord {
    let clean_text = strip_decorations(&heading.text);
    HeaderRecord {
        header_chars: unit.measure(&clean_text),
        content_chars: count_content(&content, unit),
        raw_text: heading.text,
        clean_text,
        level: heading.level,
        start_line: line_idx + 1,
        end_line,
        content,
    }
}

/// Length of the decoration-stripped content with blank lines dropped and
/// the remaining lines concatenated without separators
pub fn count_content(content: &str, unit: CountUnit) -> usize {
    strip_decorations(content)
        .split('\n')
        .filter(|line| !trim_blank(line).is_empty())
        .map(|line| unit.measure(line))
        .sum()
}
