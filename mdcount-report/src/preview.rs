//! Short content previews shown under each heading

use mdcount_core::CountUnit;

/// First `lines` lines of `content` joined with spaces, cut to `max_len`
/// measured in `unit`. `...` is appended when the whole content is longer
/// than `max_len`. A character that would straddle the cut is dropped.
pub fn content_preview(content: &str, lines: usize, max_len: usize, unit: CountUnit) -> String {
    let joined = content.split('\n').take(lines).collect::<Vec<_>>().join(" ");

    let mut preview = String::new();
    let mut len = 0;
    for c in joined.chars() {
        len += unit.char_len(c);
        if len > max_len {
            break;
        }
        preview.push(c);
    }

    if unit.measure(content) > max_len {
        preview.push_str("...");
    }

    preview
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars_preview(content: &str, lines: usize, max_len: usize) -> String {
        content_preview(content, lines, max_len, CountUnit::Chars)
    }

    #[test]
    fn test_short_content() {
        assert_eq!(chars_preview("Hello", 2, 100), "Hello");
        assert_eq!(chars_preview("", 2, 100), "");
    }

    #[test]
    fn test_takes_first_lines() {
        assert_eq!(chars_preview("one\ntwo\nthree", 2, 100), "one two");
        assert_eq!(chars_preview("one\ntwo\nthree", 1, 100), "one");
    }

    #[test]
    fn test_blank_lines_are_kept() {
        assert_eq!(chars_preview("\nsecond\nthird", 2, 100), " second");
    }

    #[test]
    fn test_truncates_long_content() {
        let content = "x".repeat(150);
        let preview = chars_preview(&content, 2, 100);
        assert_eq!(preview, format!("{}...", "x".repeat(100)));
    }

    #[test]
    fn test_ellipsis_depends_on_whole_content() {
        let content = format!("short\nshort\n{}", "y".repeat(200));
        assert_eq!(chars_preview(&content, 2, 100), "short short...");
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let content = "é".repeat(5);
        assert_eq!(chars_preview(&content, 2, 3), "ééé...");
        assert_eq!(chars_preview(&content, 2, 5), "ééééé");
    }

    #[test]
    fn test_utf16_unit_cuts_and_flags_earlier() {
        let content = "😀😀😀";
        assert_eq!(chars_preview(content, 2, 3), "😀😀😀");
        assert_eq!(content_preview(content, 2, 6, CountUnit::Utf16), "😀😀😀");
        assert_eq!(content_preview(content, 2, 4, CountUnit::Utf16), "😀😀...");
    }

    #[test]
    fn test_utf16_cut_never_splits_a_character() {
        assert_eq!(content_preview("a😀b", 2, 2, CountUnit::Utf16), "a...");
    }
}
