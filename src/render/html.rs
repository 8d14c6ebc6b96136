//! HTML renderer implementation.

use super::inline::{escape_html, render_inline};
use super::stylesheet::{ORNAMENT, STYLESHEET};
use super::RenderOptions;
use crate::model::{Block, Outline, TocEntry};

use std::borrow::Cow;

/// Fixed markup overhead per body block, used to size the output buffer.
const BLOCK_OVERHEAD: usize = 64;

/// HTML renderer.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    options: RenderOptions,
}

impl HtmlRenderer {
    /// Creates a new renderer with the given options.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Returns the options this renderer was built with.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Renders an outline to a complete, self-contained HTML document.
    pub fn render(&self, outline: &Outline) -> String {
        let mut output = String::with_capacity(
            STYLESHEET.len()
                + 1024
                + (outline.body.len() + outline.contents.len()) * BLOCK_OVERHEAD,
        );

        self.render_head(&outline.title, &mut output);
        self.render_cover(&outline.title, &mut output);

        if self.options.include_contents && !outline.contents.is_empty() {
            self.render_contents(&outline.contents, &mut output);
        }

        for block in &outline.body {
            self.render_block(block, &mut output);
        }

        output.push_str("\n</body>\n</html>\n");
        output
    }

    /// Escapes plain text when escaping is enabled.
    fn text<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.options.escape_markup {
            escape_html(text)
        } else {
            Cow::Borrowed(text)
        }
    }

    /// Renders the document head with the inline stylesheet.
    fn render_head(&self, title: &str, output: &mut String) {
        output.push_str("<!DOCTYPE html>\n");
        output.push_str(&format!(
            "<html lang=\"{}\">\n",
            escape_html(&self.options.language)
        ));
        output.push_str("<head>\n  <meta charset=\"UTF-8\">\n");
        output.push_str(&format!("  <title>{}</title>\n", self.text(title)));
        output.push_str("  <style>");
        output.push_str(STYLESHEET);
        output.push_str("  </style>\n</head>\n<body>");
    }

    /// Renders the cover page.
    fn render_cover(&self, title: &str, output: &mut String) {
        output.push_str("\n  <div class=\"cover\">");
        output.push_str(&format!("\n    <div class=\"ornament\">{}</div>", ORNAMENT));
        output.push_str(&format!("\n    <h1>{}</h1>", self.text(title)));
        output.push_str(&format!("\n    <div class=\"ornament\">{}</div>", ORNAMENT));
        output.push_str(&format!(
            "\n    <p class=\"subtitle\">{}</p>",
            self.text(&self.options.subtitle)
        ));
        output.push_str("\n  </div>");
    }

    /// Renders the table of contents.
    fn render_contents(&self, contents: &[TocEntry], output: &mut String) {
        output.push_str("\n  <div class=\"toc\">");
        output.push_str(&format!(
            "\n    <h2>{}</h2>",
            self.text(&self.options.contents_heading)
        ));

        for entry in contents {
            output.push_str(&format!(
                "\n    <div class=\"toc-item\">\n      <strong>Chapter {}:</strong> {}\n    </div>",
                entry.number,
                self.text(&entry.title)
            ));
        }

        output.push_str("\n  </div>");
    }

    /// Renders a single body block.
    fn render_block(&self, block: &Block, output: &mut String) {
        match block {
            Block::ListOpen => output.push_str("\n  <div class=\"bullet-list\">"),
            Block::ListClose => output.push_str("\n  </div>"),
            Block::Bullet { text } => {
                output.push_str(&format!(
                    "\n    <div class=\"bullet-item\">{}</div>",
                    render_inline(text, self.options.escape_markup)
                ));
            }
            Block::Chapter { number, title } => {
                output.push_str("\n  <div class=\"chapter\">");
                output.push_str(&format!(
                    "\n    <div class=\"chapter-number\">{}</div>",
                    number
                ));
                output.push_str(&format!(
                    "\n    <div class=\"chapter-title\">{}</div>",
                    self.text(title)
                ));
                output.push_str("\n  </div>");
            }
            Block::Section { title } => {
                output.push_str(&format!(
                    "\n  <div class=\"section\">{}</div>",
                    self.text(title)
                ));
            }
            Block::Paragraph { text } => {
                output.push_str(&format!(
                    "\n  <p class=\"paragraph\">{}</p>",
                    render_inline(text, self.options.escape_markup)
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(text: &str) -> String {
        HtmlRenderer::default().render(&Outline::parse(text, "fallback"))
    }

    #[test]
    fn test_cover_always_present() {
        let html = render("");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<div class=\"cover\">"));
        assert!(html.contains("<h1>fallback</h1>"));
        assert!(html.contains("A Vintage Textbook Edition"));
        assert!(!html.contains("class=\"toc\""));
        assert!(!html.contains("class=\"bullet-list\""));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_contents_block() {
        let html = render("## Intro\n### s\n* b\npara\n## Next");
        assert!(html.contains("<h2>Table of Contents</h2>"));

        let first = html.find("<strong>Chapter 1:</strong> Intro").unwrap();
        let second = html.find("<strong>Chapter 2:</strong> Next").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_contents_can_be_disabled() {
        let renderer = HtmlRenderer::new(RenderOptions::default().without_contents());
        let html = renderer.render(&Outline::parse("## Intro", "doc"));
        assert!(!html.contains("class=\"toc\""));
        assert!(html.contains("<div class=\"chapter-title\">Intro</div>"));
    }

    #[test]
    fn test_chapter_block() {
        let html = render("## One\n## Two");
        assert_eq!(html.matches("<div class=\"chapter\">").count(), 2);
        assert!(html.contains("<div class=\"chapter-number\">2</div>"));
        assert!(html.contains("<div class=\"chapter-title\">Two</div>"));
    }

    #[test]
    fn test_list_events_in_order() {
        let html = render("* a\n* b\nc");
        assert_eq!(html.matches("<div class=\"bullet-list\">").count(), 1);

        let open = html.find("<div class=\"bullet-list\">").unwrap();
        let a = html.find("<div class=\"bullet-item\">a</div>").unwrap();
        let b = html.find("<div class=\"bullet-item\">b</div>").unwrap();
        let close = html[b..].find("\n  </div>").unwrap() + b;
        let c = html.find("<p class=\"paragraph\">c</p>").unwrap();
        assert!(open < a && a < b && b < close && close < c);
    }

    #[test]
    fn test_paragraph_bold() {
        let html = render("Hello **world**!");
        assert!(html.contains("<p class=\"paragraph\">Hello <strong>world</strong>!</p>"));
    }

    #[test]
    fn test_headings_do_not_substitute_bold() {
        let html = render("### **raw**");
        assert!(html.contains("<div class=\"section\">**raw**</div>"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let html = render("# <i>T</i>\n## a<b\n* <script>x</script>\n\"q\" & **<u>**");
        assert!(html.contains("<h1>&lt;i&gt;T&lt;/i&gt;</h1>"));
        assert!(html.contains("<title>&lt;i&gt;T&lt;/i&gt;</title>"));
        assert!(html.contains("<strong>Chapter 1:</strong> a&lt;b"));
        assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&quot;q&quot; &amp; <strong>&lt;u&gt;</strong>"));
    }

    #[test]
    fn test_unescaped_mode_passes_text_through() {
        let renderer = HtmlRenderer::new(RenderOptions::default().without_escaping());
        let html = renderer.render(&Outline::parse("a <em>b</em>", "doc"));
        assert!(html.contains("<p class=\"paragraph\">a <em>b</em></p>"));
    }

    #[test]
    fn test_custom_subtitle_and_language() {
        let renderer = HtmlRenderer::new(
            RenderOptions::default()
                .with_subtitle("Field Notes")
                .with_language("fr")
                .with_contents_heading("Sommaire"),
        );
        let html = renderer.render(&Outline::parse("## A", "doc"));
        assert!(html.contains("<html lang=\"fr\">"));
        assert!(html.contains("<p class=\"subtitle\">Field Notes</p>"));
        assert!(html.contains("<h2>Sommaire</h2>"));
    }

    #[test]
    fn test_bare_markers_render_empty_blocks() {
        let html = render("## \n###\n*");
        assert!(html.contains("<div class=\"chapter-title\"></div>"));
        assert!(html.contains("<div class=\"section\"></div>"));
        assert!(html.contains("<div class=\"bullet-item\"></div>"));
    }
}
