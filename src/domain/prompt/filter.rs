//! Hook for treating submitted code before it is interpolated into prompts
//!
//! Code goes to third-party services verbatim by default. A filter can
//! mark it as data, escape it, or redact parts of it without touching the
//! prompt templates.

use std::borrow::Cow;
use std::fmt::Debug;

/// Transformation applied to code at the prompt boundary
pub trait CodeFilter: Send + Sync + Debug {
    fn apply<'a>(&self, code: &'a str) -> Cow<'a, str>;
}

/// Leaves code untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughFilter;

impl CodeFilter for PassthroughFilter {
    fn apply<'a>(&self, code: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(code)
    }
}

/// Wraps code in a Markdown fence so models read it as quoted data.
///
/// The fence is one backtick longer than the longest backtick run inside
/// the code, so the code cannot close it early. The code itself is kept
/// byte-for-byte.
#[derive(Debug, Clone, Copy, Default)]
pub struct FenceFilter;

impl CodeFilter for FenceFilter {
    fn apply<'a>(&self, code: &'a str) -> Cow<'a, str> {
        let fence = "`".repeat(longest_backtick_run(code).max(2) + 1);
        Cow::Owned(format!("{fence}\n{code}\n{fence}"))
    }
}

fn longest_backtick_run(text: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;

    for c in text.chars() {
        if c == '`' {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }

    longest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passthrough_borrows() {
        let code = "print('hi')";
        assert!(matches!(PassthroughFilter.apply(code), Cow::Borrowed(c) if c == code));
    }

    #[test]
    fn test_fence_wraps_code() {
        assert_eq!(FenceFilter.apply("x = 1"), "```\nx = 1\n```");
    }

    #[test]
    fn test_fence_outgrows_embedded_fences() {
        let code = "doc = \"```python\"";
        let fenced = FenceFilter.apply(code);
        assert!(fenced.starts_with("````\n"));
        assert!(fenced.ends_with("\n````"));
        assert!(fenced.contains(code));
    }
}
