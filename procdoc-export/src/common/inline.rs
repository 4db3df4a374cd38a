//! Inline formatting: bold spans and hard line breaks.
//!
//! Bold spans are delimited by `**…**` or `__…__`. Matching is greedy from the
//! left, non-overlapping and non-nested: the first opener pairs with the
//! nearest closer of the same kind and the content between them is taken
//! verbatim. Markers without a partner stay in the text as literals.
//!
//! A backslash escapes `*`, `_` and itself: `\*\*` is two literal asterisks
//! and never opens a span. The tokenizer escapes every literal marker
//! character it copies out of text and code nodes with
//! [`escape_inline_markers`].
//!
//! Every segment (before, inside and after a span) is split on `\n`. Each
//! line break becomes a break-marker run placed before the next line's text,
//! and empty lines produce no text run, so `"a\n\nb"` yields
//! `[a, <br>, <br>, b]`.

use crate::ir::nodes::TextRun;
use once_cell::sync::Lazy;
use regex::Regex;

static INLINE_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\\([\\*_])|\*\*((?:\\.|[^\\])+?)\*\*|__((?:\\.|[^\\])+?)__")
        .expect("inline token pattern is valid")
});

static ESCAPED_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\([\\*_])").expect("escape pattern is valid"));

/// Split a block's raw text into styled runs.
///
/// `None` yields an empty sequence.
pub fn parse_inline_formatting(text: Option<&str>) -> Vec<TextRun> {
    let Some(text) = text else {
        return Vec::new();
    };
    let text = normalize_newlines(text);

    let mut runs = Vec::new();
    let mut plain = String::new();
    let mut cursor = 0;
    for caps in INLINE_TOKEN.captures_iter(&text) {
        let Some(token) = caps.get(0) else { continue };
        plain.push_str(&text[cursor..token.start()]);
        cursor = token.end();

        if let Some(escaped) = caps.get(1) {
            plain.push_str(escaped.as_str());
            continue;
        }
        let Some(inner) = caps.get(2).or_else(|| caps.get(3)) else {
            continue;
        };
        push_lines(&mut runs, &plain, false);
        plain.clear();
        push_lines(&mut runs, &ESCAPED_MARKER.replace_all(inner.as_str(), "$1"), true);
    }
    plain.push_str(&text[cursor..]);
    push_lines(&mut runs, &plain, false);

    runs
}

/// Backslash-escape `\`, `*` and `_` so the text reads as literal characters.
pub fn escape_inline_markers(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '\\' | '*' | '_') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Split text on line breaks only, with every text run sharing `bold`.
pub fn split_line_breaks(text: &str, bold: bool) -> Vec<TextRun> {
    let mut runs = Vec::new();
    push_lines(&mut runs, &normalize_newlines(text), bold);
    runs
}

/// Re-join runs into plain text, turning break markers back into `\n`.
pub fn runs_to_text(runs: &[TextRun]) -> String {
    let mut out = String::new();
    for run in runs {
        if run.is_break {
            out.push('\n');
        } else {
            out.push_str(&run.text);
        }
    }
    out
}

/// Remove bold markers while keeping the text and its line breaks.
pub fn strip_inline_markers(text: &str) -> String {
    runs_to_text(&parse_inline_formatting(Some(text)))
}

fn push_lines(runs: &mut Vec<TextRun>, segment: &str, bold: bool) {
    for (index, line) in segment.split('\n').enumerate() {
        if index > 0 {
            runs.push(TextRun::line_break());
        }
        if line.is_empty() {
            continue;
        }
        runs.push(TextRun {
            text: line.to_string(),
            bold,
            is_break: false,
        });
    }
}

fn normalize_newlines(text: &str) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text.to_string()
    }
}
