//! Markdown stripper — reduces LLM output to plain ready-to-paste text.
//!
//! The model occasionally formats reviews despite instructions; review sites
//! render markdown literally, so markers are removed while their content is
//! kept.

use once_cell::sync::Lazy;
use regex::Regex;

static BOLD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid regex"));
static ITALIC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.*?)\*").expect("valid regex"));
static CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`(.*?)`").expect("valid regex"));
static HEADING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#+\s+").expect("valid regex"));
static LINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(.*?)\]\(.*?\)").expect("valid regex"));
static BLANK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n\s*\n").expect("valid regex"));

/// Strips markdown markers from `text`, keeping their content.
///
/// Fixed substitution order: bold before italic (so `**` pairs are not
/// half-consumed as `*` pairs), then inline code, heading markers, links,
/// blank-line collapse, and a final trim.
pub fn strip_markdown(text: &str) -> String {
    let cleaned = BOLD_RE.replace_all(text, "$1");
    let cleaned = ITALIC_RE.replace_all(&cleaned, "$1");
    let cleaned = CODE_RE.replace_all(&cleaned, "$1");
    let cleaned = HEADING_RE.replace_all(&cleaned, "");
    let cleaned = LINK_RE.replace_all(&cleaned, "$1");
    let cleaned = BLANK_RE.replace_all(&cleaned, "\n\n");
    cleaned.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_markers_removed() {
        assert_eq!(strip_markdown("a **great** meal"), "a great meal");
    }

    #[test]
    fn test_italic_markers_removed() {
        assert_eq!(strip_markdown("a *subtle* broth"), "a subtle broth");
    }

    #[test]
    fn test_inline_code_ticks_removed() {
        assert_eq!(strip_markdown("order the `brisket`"), "order the brisket");
    }

    #[test]
    fn test_heading_markers_removed_at_line_start() {
        assert_eq!(strip_markdown("### Title\nbody"), "Title\nbody");
        // A '#' mid-line is not a heading
        assert_eq!(strip_markdown("table #4 was free"), "table #4 was free");
    }

    #[test]
    fn test_link_syntax_keeps_text_drops_url() {
        assert_eq!(
            strip_markdown("see [the menu](https://example.com/menu)"),
            "see the menu"
        );
    }

    #[test]
    fn test_all_markers_removed_content_preserved() {
        let input = "**bold** *italic* `code`\n### Title\n[text](url)";
        assert_eq!(strip_markdown(input), "bold italic code\nTitle\ntext");
    }

    #[test]
    fn test_repeated_blank_lines_collapse() {
        assert_eq!(
            strip_markdown("first paragraph\n\n\n\nsecond paragraph"),
            "first paragraph\n\nsecond paragraph"
        );
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        assert_eq!(strip_markdown("  \n a fine meal \n  "), "a fine meal");
    }

    #[test]
    fn test_plain_text_passes_through() {
        let input = "The beef was fresh and the service attentive.";
        assert_eq!(strip_markdown(input), input);
    }
}
