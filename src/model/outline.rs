//! Outline structure: resolved title, table of contents and body blocks.

use super::line::{lines, LineRole};
use serde::Serialize;

/// One table-of-contents entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    /// 1-based chapter number, by order of appearance
    pub number: usize,
    /// Chapter title with the marker stripped
    pub title: String,
}

/// A body event produced by the line scan.
///
/// Text is kept as written in the source; escaping and inline bold
/// substitution happen at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Opens a bullet list container
    ListOpen,
    /// A bullet item inside the open list
    Bullet { text: String },
    /// Closes the open bullet list container
    ListClose,
    /// Chapter heading with its ordinal
    Chapter { number: usize, title: String },
    /// Section heading
    Section { title: String },
    /// Body paragraph
    Paragraph { text: String },
}

/// List-mode state carried across the body scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListState {
    /// No bullet list is open
    #[default]
    NoList,
    /// A bullet list container is open and unclosed
    InList,
}

impl ListState {
    /// Opens a list container unless one is already open.
    pub fn open(&mut self, body: &mut Vec<Block>) {
        if *self == ListState::NoList {
            body.push(Block::ListOpen);
            *self = ListState::InList;
        }
    }

    /// Closes the open list container, if any.
    pub fn close(&mut self, body: &mut Vec<Block>) {
        if *self == ListState::InList {
            body.push(Block::ListClose);
            *self = ListState::NoList;
        }
    }

    /// Returns true while a list container is open.
    pub fn is_open(&self) -> bool {
        *self == ListState::InList
    }
}

/// A classified outline ready for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Outline {
    /// Cover title
    pub title: String,
    /// Table of contents, one entry per chapter
    pub contents: Vec<TocEntry>,
    /// Body events in document order
    pub body: Vec<Block>,
}

impl Outline {
    /// Scans outline text into its cover title, contents and body.
    ///
    /// `fallback_title` is used when the text has no `# ` title line.
    pub fn parse(text: &str, fallback_title: &str) -> Self {
        let outline = Self {
            title: resolve_title(text, fallback_title),
            contents: table_of_contents(text),
            body: scan_body(text),
        };

        log::debug!(
            "parsed outline \"{}\": {} chapters, {} body blocks",
            outline.title,
            outline.contents.len(),
            outline.body.len()
        );

        outline
    }

    /// Returns the number of chapter blocks in the body.
    pub fn chapter_count(&self) -> usize {
        self.body
            .iter()
            .filter(|b| matches!(b, Block::Chapter { .. }))
            .count()
    }

    /// Returns true if the body has no blocks at all.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the outline as pretty-printed JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Returns the text of the first non-empty title line, or the fallback.
///
/// Title lines without text (`#`, `# `) are skipped.
pub fn resolve_title(text: &str, fallback_title: &str) -> String {
    lines(text)
        .find_map(|line| match line.role() {
            LineRole::Title(title) if !title.is_empty() => Some(title),
            _ => None,
        })
        .unwrap_or(fallback_title)
        .to_string()
}

/// Collects every chapter line, numbered 1..k in document order.
pub fn table_of_contents(text: &str) -> Vec<TocEntry> {
    lines(text)
        .filter_map(|line| match line.role() {
            LineRole::Chapter(title) => Some(title),
            _ => None,
        })
        .enumerate()
        .map(|(index, title)| TocEntry {
            number: index + 1,
            title: title.to_string(),
        })
        .collect()
}

/// Scans the body, tracking list mode and the running chapter number.
fn scan_body(text: &str) -> Vec<Block> {
    let mut body = Vec::new();
    let mut list = ListState::default();
    let mut chapter = 0;

    for line in lines(text) {
        let role = line.role();
        log::trace!("{:?} <- {:?}", role, line.raw);

        match role {
            LineRole::Title(_) | LineRole::Blank => {}
            LineRole::Chapter(title) => {
                list.close(&mut body);
                chapter += 1;
                body.push(Block::Chapter {
                    number: chapter,
                    title: title.to_string(),
                });
            }
            LineRole::Section(title) => {
                list.close(&mut body);
                body.push(Block::Section {
                    title: title.to_string(),
                });
            }
            LineRole::Bullet(text) => {
                list.open(&mut body);
                body.push(Block::Bullet {
                    text: text.to_string(),
                });
            }
            LineRole::Paragraph(text) => {
                list.close(&mut body);
                body.push(Block::Paragraph {
                    text: text.to_string(),
                });
            }
        }
    }

    list.close(&mut body);
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bullet(text: &str) -> Block {
        Block::Bullet {
            text: text.to_string(),
        }
    }

    fn paragraph(text: &str) -> Block {
        Block::Paragraph {
            text: text.to_string(),
        }
    }

    #[test]
    fn test_bullets_then_paragraph() {
        let outline = Outline::parse("* a\n* b\nc", "doc");
        assert_eq!(
            outline.body,
            vec![
                Block::ListOpen,
                bullet("a"),
                bullet("b"),
                Block::ListClose,
                paragraph("c"),
            ]
        );
    }

    #[test]
    fn test_blank_lines_keep_list_open() {
        let outline = Outline::parse("* a\n\n   \n* b", "doc");
        assert_eq!(
            outline.body,
            vec![Block::ListOpen, bullet("a"), bullet("b"), Block::ListClose]
        );
    }

    #[test]
    fn test_list_closed_before_headings() {
        let outline = Outline::parse("* a\n## One\n* b\n### Sub", "doc");
        assert_eq!(
            outline.body,
            vec![
                Block::ListOpen,
                bullet("a"),
                Block::ListClose,
                Block::Chapter {
                    number: 1,
                    title: "One".to_string()
                },
                Block::ListOpen,
                bullet("b"),
                Block::ListClose,
                Block::Section {
                    title: "Sub".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_list_closed_at_end_of_input() {
        let outline = Outline::parse("intro\n* last", "doc");
        assert_eq!(outline.body.last(), Some(&Block::ListClose));
    }

    #[test]
    fn test_title_resolution() {
        assert_eq!(resolve_title("text\n# Real Title \n# Second", "file"), "Real Title");
        assert_eq!(resolve_title("## Chapter only", "file"), "file");
        assert_eq!(resolve_title("# ", ""), "");
    }

    #[test]
    fn test_empty_title_lines_fall_through() {
        assert_eq!(resolve_title("#\n# Real Title", "notes"), "Real Title");
        assert_eq!(resolve_title("# ", "notes"), "notes");
        assert_eq!(Outline::parse("#\n# Real Title", "notes").title, "Real Title");
        assert_eq!(Outline::parse("  #  \n", "notes").title, "notes");
    }

    #[test]
    fn test_title_lines_are_not_in_body() {
        let outline = Outline::parse("# Book\n# Another", "doc");
        assert!(outline.is_empty());
        assert_eq!(outline.title, "Book");
    }

    #[test]
    fn test_table_of_contents_numbering() {
        let text = "## Intro\n### a\n* b\npara\n## Next\n## \n";
        let toc = table_of_contents(text);
        assert_eq!(
            toc,
            vec![
                TocEntry {
                    number: 1,
                    title: "Intro".to_string()
                },
                TocEntry {
                    number: 2,
                    title: "Next".to_string()
                },
                TocEntry {
                    number: 3,
                    title: String::new()
                },
            ]
        );
    }

    #[test]
    fn test_contents_and_body_numbering_agree() {
        let text = "## A\n## A\n* x\n### s\n## B\ntext\n## A";
        let outline = Outline::parse(text, "doc");

        let body_chapters: Vec<(usize, String)> = outline
            .body
            .iter()
            .filter_map(|b| match b {
                Block::Chapter { number, title } => Some((*number, title.clone())),
                _ => None,
            })
            .collect();
        let toc: Vec<(usize, String)> = outline
            .contents
            .iter()
            .map(|e| (e.number, e.title.clone()))
            .collect();

        assert_eq!(body_chapters, toc);
        assert_eq!(outline.chapter_count(), 4);
    }

    #[test]
    fn test_empty_input() {
        let outline = Outline::parse("", "Untitled");
        assert_eq!(outline.title, "Untitled");
        assert!(outline.contents.is_empty());
        assert!(outline.body.is_empty());
    }

    #[test]
    fn test_list_state_transitions() {
        let mut body = Vec::new();
        let mut state = ListState::default();

        state.close(&mut body);
        assert!(body.is_empty());

        state.open(&mut body);
        state.open(&mut body);
        assert!(state.is_open());
        assert_eq!(body, vec![Block::ListOpen]);

        state.close(&mut body);
        assert!(!state.is_open());
        assert_eq!(body, vec![Block::ListOpen, Block::ListClose]);
    }

    #[test]
    fn test_outline_json() {
        let outline = Outline::parse("# T\n## C\n* b", "doc");
        let json = outline.to_json();
        assert!(json.contains("\"title\": \"T\""));
        assert!(json.contains("\"type\": \"chapter\""));
        assert!(json.contains("\"type\": \"list_open\""));
    }
}
