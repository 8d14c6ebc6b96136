//! Line records and structural line classification.

/// Marker for the document title line.
pub const TITLE_MARKER: &str = "# ";
/// Marker for a chapter heading line.
pub const CHAPTER_MARKER: &str = "## ";
/// Marker for a section heading line.
pub const SECTION_MARKER: &str = "### ";
/// Marker for a bullet item line.
pub const BULLET_MARKER: &str = "* ";

/// A single line of the input outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// The line exactly as it appeared between newline separators
    pub raw: &'a str,
    /// The line with leading and trailing whitespace removed
    pub trimmed: &'a str,
}

impl<'a> Line<'a> {
    /// Creates a line record from raw text.
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            trimmed: raw.trim(),
        }
    }

    /// Classifies this line.
    pub fn role(&self) -> LineRole<'a> {
        LineRole::classify(self.trimmed)
    }
}

/// Splits text into line records on `'\n'`.
///
/// Carriage returns are left in the raw text; trimming removes them.
/// An empty input yields exactly one (blank) line.
pub fn lines(text: &str) -> impl Iterator<Item = Line<'_>> {
    text.split('\n').map(Line::new)
}

/// Structural role of a line, carrying the marker-stripped, trimmed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole<'a> {
    /// `# ` document title (only the first one is used, for the cover)
    Title(&'a str),
    /// `## ` chapter heading
    Chapter(&'a str),
    /// `### ` section heading
    Section(&'a str),
    /// `* ` bullet item
    Bullet(&'a str),
    /// Any other non-empty line
    Paragraph(&'a str),
    /// Empty line
    Blank,
}

impl<'a> LineRole<'a> {
    /// Classifies a line by its leading marker.
    ///
    /// Markers are tested longest first, so `### ` and `## ` lines are never
    /// taken for titles. A bare marker (`###`, `##`, `#`, `*`, whose trailing
    /// space was lost to trimming) keeps its role with empty text.
    pub fn classify(line: &'a str) -> Self {
        let line = line.trim();

        if line.is_empty() {
            return LineRole::Blank;
        }
        if let Some(rest) = strip_marker(line, SECTION_MARKER) {
            return LineRole::Section(rest);
        }
        if let Some(rest) = strip_marker(line, CHAPTER_MARKER) {
            return LineRole::Chapter(rest);
        }
        if let Some(rest) = strip_marker(line, TITLE_MARKER) {
            return LineRole::Title(rest);
        }
        if let Some(rest) = strip_marker(line, BULLET_MARKER) {
            return LineRole::Bullet(rest);
        }

        LineRole::Paragraph(line)
    }

    /// Returns the text carried by this role, if any.
    pub fn text(&self) -> Option<&'a str> {
        match *self {
            LineRole::Title(text)
            | LineRole::Chapter(text)
            | LineRole::Section(text)
            | LineRole::Bullet(text)
            | LineRole::Paragraph(text) => Some(text),
            LineRole::Blank => None,
        }
    }

    /// Returns true for chapter lines.
    pub fn is_chapter(&self) -> bool {
        matches!(self, LineRole::Chapter(_))
    }
}

fn strip_marker<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    if let Some(rest) = line.strip_prefix(marker) {
        return Some(rest.trim());
    }
    (line == marker.trim_end()).then_some("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_markers() {
        assert_eq!(LineRole::classify("# Title"), LineRole::Title("Title"));
        assert_eq!(LineRole::classify("## Intro"), LineRole::Chapter("Intro"));
        assert_eq!(
            LineRole::classify("### Details"),
            LineRole::Section("Details")
        );
        assert_eq!(LineRole::classify("* item"), LineRole::Bullet("item"));
        assert_eq!(
            LineRole::classify("Plain text"),
            LineRole::Paragraph("Plain text")
        );
        assert_eq!(LineRole::classify(""), LineRole::Blank);
    }

    #[test]
    fn test_priority_order() {
        // Longer header markers must never be read as a title
        assert!(matches!(LineRole::classify("### x"), LineRole::Section(_)));
        assert!(matches!(LineRole::classify("## x"), LineRole::Chapter(_)));
        // Four hashes are not a known marker
        assert_eq!(
            LineRole::classify("#### deep"),
            LineRole::Paragraph("#### deep")
        );
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(
            LineRole::classify("   ##   Spaced  out  \r"),
            LineRole::Chapter("Spaced  out")
        );
        assert_eq!(LineRole::classify(" \t \r"), LineRole::Blank);
    }

    #[test]
    fn test_bare_markers() {
        assert_eq!(LineRole::classify("## "), LineRole::Chapter(""));
        assert_eq!(LineRole::classify("###"), LineRole::Section(""));
        assert_eq!(LineRole::classify("# "), LineRole::Title(""));
        assert_eq!(LineRole::classify("*"), LineRole::Bullet(""));
    }

    #[test]
    fn test_marker_lookalikes_are_paragraphs() {
        assert_eq!(LineRole::classify("#hashtag"), LineRole::Paragraph("#hashtag"));
        assert_eq!(
            LineRole::classify("**bold** start"),
            LineRole::Paragraph("**bold** start")
        );
        assert_eq!(LineRole::classify("**"), LineRole::Paragraph("**"));
        assert_eq!(LineRole::classify("*\titem"), LineRole::Paragraph("*\titem"));
    }

    #[test]
    fn test_lines_split() {
        assert_eq!(lines("").count(), 1);
        assert_eq!(lines("a\n\nb\n").count(), 4);

        let collected: Vec<_> = lines("  # T \r\nbody").collect();
        assert_eq!(collected[0].raw, "  # T \r");
        assert_eq!(collected[0].trimmed, "# T");
        assert_eq!(collected[0].role(), LineRole::Title("T"));
        assert_eq!(collected[1].role(), LineRole::Paragraph("body"));
    }

    #[test]
    fn test_role_text() {
        assert_eq!(LineRole::classify("* a").text(), Some("a"));
        assert_eq!(LineRole::Blank.text(), None);
        assert!(LineRole::classify("## a").is_chapter());
        assert!(!LineRole::classify("### a").is_chapter());
    }
}
