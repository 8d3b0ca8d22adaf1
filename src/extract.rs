//! Text extraction from PR descriptions
//!
//! Pure string functions: no I/O, all inputs passed in. The patterns are
//! deliberately loose; PR templates vary and a missed section only degrades
//! the generated page, it never fails a run.

use crate::types::TodoItem;
use regex::Regex;
use std::sync::LazyLock;

/// Triple-backtick fenced block, non-greedy, spanning lines.
static FENCED_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```[\s\S]*?```").expect("valid fenced block pattern"));

/// Single-backtick inline code span; group 1 is the code text.
static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("valid inline code pattern"));

/// A level 1-3 `summary`/`요약` heading, then the section text (group 1) up to
/// the next level 1-3 heading or end of input.
static SUMMARY_SECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|\n)#{1,3}\s*(?:summary|요약)\s*\n([\s\S]*?)(?:\n#{1,3}\s|$)")
        .expect("valid summary pattern")
});

/// `- [ ] text` / `* [x] text`; group 1 is the mark, group 2 the text.
static CHECKBOX_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*]\s*\[( |x|X)\]\s+(.*)$").expect("valid checkbox pattern"));

/// Remove fenced code blocks and unwrap inline code spans.
///
/// ```
/// use notion_merge_log::extract::strip_markdown;
/// assert_eq!(strip_markdown("a ```code``` b `x` c"), "a  b x c");
/// ```
pub fn strip_markdown(md: &str) -> String {
    let without_fences = FENCED_BLOCK.replace_all(md, "");
    INLINE_CODE
        .replace_all(&without_fences, "$1")
        .trim()
        .to_string()
}

/// Text of the `Summary`/`요약` section, or the whole body when there is none.
///
/// An empty section also falls back to the whole body.
pub fn extract_summary(body: &str) -> String {
    SUMMARY_SECTION
        .captures(body)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .filter(|section| !section.is_empty())
        .unwrap_or(body)
        .trim()
        .to_string()
}

/// Checklist items in body order. Lines that are not checkbox items are ignored.
pub fn extract_todos(body: &str) -> Vec<TodoItem> {
    body.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter_map(|line| {
            let caps = CHECKBOX_ITEM.captures(line)?;
            Some(TodoItem {
                checked: caps[1].eq_ignore_ascii_case("x"),
                text: caps[2].trim().to_string(),
            })
        })
        .collect()
}

/// The first `max_chars` characters of `s`.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    s.char_indices()
        .nth(max_chars)
        .map_or(s, |(idx, _)| &s[..idx])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_markdown_removes_fences_and_unwraps_inline() {
        assert_eq!(strip_markdown("a ```code``` b `x` c"), "a  b x c");
    }

    #[test]
    fn test_strip_markdown_multiline_fence_is_non_greedy() {
        let md = "before\n```rust\nfn main() {}\n```\nmiddle\n```\nmore\n```\nafter";
        assert_eq!(strip_markdown(md), "before\n\nmiddle\n\nafter");
    }

    #[test]
    fn test_strip_markdown_unclosed_fence_left_alone() {
        assert_eq!(strip_markdown("  ```open  "), "```open");
    }

    #[test]
    fn test_extract_summary_section() {
        assert_eq!(extract_summary("# Summary\nhello\n# Next\nworld"), "hello");
    }

    #[test]
    fn test_extract_summary_without_heading_returns_body() {
        assert_eq!(extract_summary("no headings here"), "no headings here");
        assert_eq!(extract_summary("  padded \n"), "padded");
    }

    #[test]
    fn test_extract_summary_korean_heading_case_insensitive() {
        let body = "intro\n## 요약\n변경 사항\n두 번째 줄\n### 테스트\n- ok";
        assert_eq!(extract_summary(body), "변경 사항\n두 번째 줄");

        let body = "### SUMMARY\nShouting\n## Details\nx";
        assert_eq!(extract_summary(body), "Shouting");
    }

    #[test]
    fn test_extract_summary_runs_to_end_without_next_heading() {
        let body = "## Summary\n\nline one\nline two\n";
        assert_eq!(extract_summary(body), "line one\nline two");
    }

    #[test]
    fn test_extract_summary_level_four_heading_does_not_end_section() {
        let body = "# Summary\nabove\n#### Minor\nbelow\n## Next\nrest";
        assert_eq!(extract_summary(body), "above\n#### Minor\nbelow");
    }

    #[test]
    fn test_extract_summary_crlf() {
        let body = "## Summary\r\nwindows text\r\n## Next\r\n";
        assert_eq!(extract_summary(body), "windows text");
    }

    #[test]
    fn test_extract_summary_empty_section_falls_back_to_body() {
        assert_eq!(extract_summary("# Summary\n"), "# Summary");
    }

    #[test]
    fn test_extract_summary_heading_right_after_summary_is_captured() {
        assert_eq!(extract_summary("# Summary\n# Next\nworld"), "# Next\nworld");
        assert_eq!(extract_summary("# Summary\n\n## Next\nx"), "## Next\nx");
    }

    #[test]
    fn test_extract_todos_mixed_lines() {
        let todos = extract_todos("- [x] done\n- [ ] todo\nplain line");
        assert_eq!(
            todos,
            vec![
                TodoItem {
                    checked: true,
                    text: "done".to_string()
                },
                TodoItem {
                    checked: false,
                    text: "todo".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_extract_todos_star_bullets_uppercase_and_crlf() {
        let todos = extract_todos("  * [X] Shipped  \r\n*[ ] tight bullet\r\n- [y] nope\r\n-[x]nospace");
        assert_eq!(
            todos,
            vec![
                TodoItem {
                    checked: true,
                    text: "Shipped".to_string()
                },
                TodoItem::unchecked("tight bullet"),
            ]
        );
    }

    #[test]
    fn test_extract_todos_empty_body() {
        assert!(extract_todos("").is_empty());
    }

    #[test]
    fn test_truncate_chars_counts_characters_not_bytes() {
        assert_eq!(truncate_chars("요약입니다", 2), "요약");
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("exact", 5), "exact");
    }
}
