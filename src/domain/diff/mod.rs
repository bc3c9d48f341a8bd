//! Unified line diff between submitted and refactored code

use std::ops::Range;

use similar::{ChangeTag, DiffOp, DiffTag, TextDiff};

const CONTEXT_LINES: usize = 3;
const ORIGINAL_LABEL: &str = "Original";
const REFACTORED_LABEL: &str = "Refactored";

/// Produces unified diffs with `Original`/`Refactored` headers
#[derive(Debug, Clone, Copy, Default)]
pub struct DiffFormatter;

impl DiffFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Unified diff of `original` against `modified`, one output line per
    /// `\n`-separated entry, no trailing newline. Identical inputs give an
    /// empty string.
    pub fn diff(&self, original: &str, modified: &str) -> String {
        let old_lines = split_lines(original);
        let new_lines = split_lines(modified);
        let diff = TextDiff::from_slices(&old_lines, &new_lines);

        if diff.ops().iter().all(|op| op.tag() == DiffTag::Equal) {
            return String::new();
        }

        let mut output = vec![
            format!("--- {}", ORIGINAL_LABEL),
            format!("+++ {}", REFACTORED_LABEL),
        ];

        for group in diff.grouped_ops(CONTEXT_LINES) {
            let (Some(first), Some(last)) = (group.first(), group.last()) else {
                continue;
            };
            output.push(hunk_header(first, last));

            for op in &group {
                for change in diff.iter_changes(op) {
                    let sign = match change.tag() {
                        ChangeTag::Delete => '-',
                        ChangeTag::Insert => '+',
                        ChangeTag::Equal => ' ',
                    };
                    output.push(format!("{}{}", sign, change.value()));
                }
            }
        }

        output.join("\n")
    }
}

/// Split on every line boundary, including lone `\r` and the Unicode
/// separators. A trailing terminator does not start an empty line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' && matches!(chars.peek(), Some((_, '\n'))) {
            chars.next();
            start += 1;
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

fn hunk_header(first: &DiffOp, last: &DiffOp) -> String {
    let old = first.old_range().start..last.old_range().end;
    let new = first.new_range().start..last.new_range().end;
    format!("@@ -{} +{} @@", format_range(old), format_range(new))
}

/// `start,len` with 1-based start; a single line omits the length and an
/// empty range points at the line before it
fn format_range(range: Range<usize>) -> String {
    let length = range.end - range.start;
    match length {
        0 => format!("{},0", range.start),
        1 => format!("{}", range.start + 1),
        _ => format!("{},{}", range.start + 1, length),
    }
}
