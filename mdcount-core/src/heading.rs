//! ATX heading detection

/// A line recognised as an ATX heading
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Heading {
    pub level: u8,
    pub text: String,
}

/// Characters a `.` in a line-oriented pattern refuses to cross
pub(crate) fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Whitespace as editors hosted on JavaScript see it: the byte-order mark
/// counts, U+0085 does not
pub(crate) fn is_blank(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Trim leading and trailing [`is_blank`] characters
pub(crate) fn trim_blank(text: &str) -> &str {
    text.trim_matches(is_blank)
}

/// Parse an ATX heading: `#{1,6}`, exactly one whitespace, then text.
///
/// The line is trimmed first, so indented headings are accepted. The heading
/// text runs until the first line terminator and is trimmed afterwards.
pub fn parse_heading(line: &str) -> Option<Heading> {
    let trimmed = trim_blank(line);

    let hash_count = trimmed.chars().take_while(|&c| c == '#').count();
    if hash_count == 0 || hash_count > 6 {
        return None;
    }

    let mut rest = trimmed[hash_count..].chars();
    if !rest.next().is_some_and(is_blank) {
        return None;
    }

    let rest = rest.as_str();
    let captured = match rest.find(is_line_terminator) {
        Some(end) => &rest[..end],
        None => rest,
    };
    if captured.is_empty() {
        return None;
    }

    Some(Heading {
        level: hash_count as u8,
        text: trim_blank(captured).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_levels() {
        let lines = ["# H1", "## H2", "### H3", "#### H4", "##### H5", "###### H6"];
        for (i, line) in lines.iter().enumerate() {
            let heading = parse_heading(line).unwrap();
            assert_eq!(heading.level, (i + 1) as u8);
            assert_eq!(heading.text, format!("H{}", i + 1));
        }
    }

    #[test]
    fn test_seven_hashes_not_heading() {
        assert!(parse_heading("####### Not a heading").is_none());
    }

    #[test]
    fn test_requires_whitespace_after_marker() {
        assert!(parse_heading("#heading").is_none());
        assert!(parse_heading("##").is_none());
        assert!(parse_heading("# ").is_none());
    }

    #[test]
    fn test_leading_whitespace_trimmed() {
        let heading = parse_heading("   ## Indented  ").unwrap();
        assert_eq!(heading.level, 2);
        assert_eq!(heading.text, "Indented");
    }

    #[test]
    fn test_tab_separator() {
        let heading = parse_heading("#\tTabbed").unwrap();
        assert_eq!(heading.level, 1);
        assert_eq!(heading.text, "Tabbed");
    }

    #[test]
    fn test_extra_spaces_trimmed_from_text() {
        let heading = parse_heading("#    Spaced out").unwrap();
        assert_eq!(heading.text, "Spaced out");
    }

    #[test]
    fn test_not_headings() {
        assert!(parse_heading("Not a #heading").is_none());
        assert!(parse_heading("").is_none());
        assert!(parse_heading("Just text").is_none());
    }

    #[test]
    fn test_trailing_carriage_return() {
        let heading = parse_heading("# Title\r").unwrap();
        assert_eq!(heading.text, "Title");
    }

    #[test]
    fn test_text_stops_at_carriage_return() {
        let heading = parse_heading("# one\rtwo").unwrap();
        assert_eq!(heading.text, "one");
        assert!(parse_heading("# \rtwo").is_none());
    }

    #[test]
    fn test_byte_order_mark_trimmed() {
        let heading = parse_heading("\u{feff}# Title").unwrap();
        assert_eq!(heading.level, 1);
        assert_eq!(heading.text, "Title");

        let heading = parse_heading("#\u{feff}Title\u{feff}").unwrap();
        assert_eq!(heading.text, "Title");
    }

    #[test]
    fn test_next_line_is_not_blank() {
        assert!(parse_heading("#\u{85}Title").is_none());
        assert_eq!(trim_blank("\u{85}x\u{85}"), "\u{85}x\u{85}");
        assert_eq!(trim_blank("\u{a0}\u{3000} x \t"), "x");
    }

    #[test]
    fn test_closing_hashes_kept() {
        let heading = parse_heading("## Title ##").unwrap();
        assert_eq!(heading.text, "Title ##");
    }
}
