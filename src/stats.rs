//! Document statistics and text preview.

use crate::model::{lines, LineRole};
use serde::Serialize;

/// Structural line counts for an outline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DocumentStatistics {
    /// Number of `'\n'`-separated lines, blank lines included
    pub lines: usize,
    /// Number of `## ` chapter lines
    pub chapters: usize,
    /// Number of `### ` section lines
    pub sections: usize,
    /// Number of `* ` bullet lines
    pub bullets: usize,
}

/// Counts lines, chapters, sections and bullets in a single pass.
pub fn collect_statistics(text: &str) -> DocumentStatistics {
    lines(text).fold(DocumentStatistics::default(), |mut stats, line| {
        stats.lines += 1;
        match line.role() {
            LineRole::Chapter(_) => stats.chapters += 1,
            LineRole::Section(_) => stats.sections += 1,
            LineRole::Bullet(_) => stats.bullets += 1,
            _ => {}
        }
        stats
    })
}

/// Default number of lines shown by [`preview`].
pub const PREVIEW_LINES: usize = 50;

/// Appended after a blank line when [`preview`] cuts the text short.
pub const PREVIEW_TRUNCATED: &str = "... (preview truncated)";

/// Returns the first `max_lines` lines of `text`.
///
/// Lines are counted the same way as [`DocumentStatistics::lines`]. Longer
/// text is cut and followed by [`PREVIEW_TRUNCATED`].
pub fn preview(text: &str, max_lines: usize) -> String {
    let mut shown = String::with_capacity(text.len().min(4096));
    let mut count = 0;

    for line in lines(text) {
        if count == max_lines {
            shown.push_str("\n\n");
            shown.push_str(PREVIEW_TRUNCATED);
            return shown;
        }
        if count > 0 {
            shown.push('\n');
        }
        shown.push_str(line.raw);
        count += 1;
    }

    shown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_has_one_line() {
        let stats = collect_statistics("");
        assert_eq!(
            stats,
            DocumentStatistics {
                lines: 1,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_counts() {
        let text = "# Title\n## One\n### A\n* x\n  * y\n\n**bold** para\n## Two\n";
        let stats = collect_statistics(text);
        assert_eq!(stats.lines, 9);
        assert_eq!(stats.chapters, 2);
        assert_eq!(stats.sections, 1);
        assert_eq!(stats.bullets, 2);
    }

    #[test]
    fn test_crlf_lines() {
        let stats = collect_statistics("## A\r\n* b\r\n");
        assert_eq!(stats.lines, 3);
        assert_eq!(stats.chapters, 1);
        assert_eq!(stats.bullets, 1);
    }

    #[test]
    fn test_title_is_not_counted() {
        let stats = collect_statistics("# T\n#### deep");
        assert_eq!(stats.chapters, 0);
        assert_eq!(stats.sections, 0);
    }

    #[test]
    fn test_serialize() {
        let stats = collect_statistics("## a");
        let json = serde_json::to_string(&stats).unwrap();
        assert_eq!(json, r#"{"lines":1,"chapters":1,"sections":0,"bullets":0}"#);
    }

    fn numbered(count: usize) -> String {
        (1..=count)
            .map(|n| format!("line {}", n))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_preview_at_limit_is_complete() {
        let text = numbered(PREVIEW_LINES);
        let shown = preview(&text, PREVIEW_LINES);
        assert_eq!(shown, text);
        assert!(!shown.contains(PREVIEW_TRUNCATED));
    }

    #[test]
    fn test_preview_past_limit_is_truncated() {
        let text = numbered(PREVIEW_LINES + 1);
        let shown = preview(&text, PREVIEW_LINES);
        assert_eq!(
            shown,
            format!("{}\n\n{}", numbered(PREVIEW_LINES), PREVIEW_TRUNCATED)
        );
        assert!(!shown.contains("line 51"));
    }

    #[test]
    fn test_preview_small_limits() {
        assert_eq!(preview("a\nb\nc", 2), format!("a\nb\n\n{}", PREVIEW_TRUNCATED));
        assert_eq!(preview("a\nb", 0), format!("\n\n{}", PREVIEW_TRUNCATED));
        assert_eq!(preview("", 0), format!("\n\n{}", PREVIEW_TRUNCATED));
        assert_eq!(preview("", 1), "");
    }
}
