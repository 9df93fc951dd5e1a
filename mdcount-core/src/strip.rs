//! Removal of inline Markdown decorations before counting
//!
//! Each rule is a single left-to-right pass that replaces non-overlapping,
//! shortest matches. A match never crosses a line terminator. Rules run in
//! a fixed order and later rules see the output of earlier ones, so the
//! image rule only ever sees the `!` left behind by the link rule.

use crate::heading::is_line_terminator;

const BOLD: [(&str, &str); 2] = [("**", "**"), ("__", "__")];
const ITALIC: [(&str, &str); 2] = [("*", "*"), ("_", "_")];
const CODE: [(&str, &str); 1] = [("`", "`")];
const COMMENT: [(&str, &str); 1] = [("<!--", "-->")];

/// Strip bold, italic, inline code, links, images and HTML comments
pub fn strip_decorations(text: &str) -> String {
    let text = replace_enclosed(text, &BOLD, true);
    let text = replace_enclosed(&text, &ITALIC, true);
    let text = replace_enclosed(&text, &CODE, true);
    let text = replace_links(&text, "[");
    let text = replace_links(&text, "![");
    replace_enclosed(&text, &COMMENT, false)
}

/// Offset of `needle` in `haystack` as long as it completes before the first
/// line terminator
fn find_on_line(haystack: &str, needle: &str) -> Option<usize> {
    let line_end = haystack.find(is_line_terminator).unwrap_or(haystack.len());
    haystack[..line_end].find(needle)
}

/// Replace `open ... close` spans, trying each delimiter pair in order at
/// every position. The inner text is kept when `keep_inner` is set.
fn replace_enclosed(text: &str, delimiters: &[(&str, &str)], keep_inner: bool) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;

    'scan: while pos < text.len() {
        let rest = &text[pos..];

        for (open, close) in delimiters {
            if !rest.starts_with(open) {
                continue;
            }
            let body = &rest[open.len()..];
            if let Some(inner_len) = find_on_line(body, close) {
                if keep_inner {
                    out.push_str(&body[..inner_len]);
                }
                pos += open.len() + inner_len + close.len();
                continue 'scan;
            }
        }

        let Some(c) = rest.chars().next() else {
            break;
        };
        out.push(c);
        pos += c.len_utf8();
    }

    out
}

/// Replace `{prefix}label](target)` with `label`
fn replace_links(text: &str, prefix: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];

        if let Some(matched) = match_link(rest, prefix) {
            out.push_str(matched.label);
            pos += matched.len;
            continue;
        }

        let Some(c) = rest.chars().next() else {
            break;
        };
        out.push(c);
        pos += c.len_utf8();
    }

    out
}

struct LinkMatch<'a> {
    label: &'a str,
    len: usize,
}

fn match_link<'a>(text: &'a str, prefix: &str) -> Option<LinkMatch<'a>> {
    let body = text.strip_prefix(prefix)?;
    let label_len = find_on_line(body, "](")?;
    let target = &body[label_len + 2..];
    let target_len = find_on_line(target, ")")?;

    Some(LinkMatch {
        label: &body[..label_len],
        len: prefix.len() + label_len + 2 + target_len + 1,
    })
}
