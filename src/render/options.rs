//! Rendering options for HTML output.

/// Subtitle shown on the cover under the title.
pub const DEFAULT_SUBTITLE: &str = "A Vintage Textbook Edition";

/// Heading of the table-of-contents block.
pub const DEFAULT_CONTENTS_HEADING: &str = "Table of Contents";

/// Options for HTML rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Static label under the cover title.
    pub subtitle: String,

    /// Heading of the contents block.
    pub contents_heading: String,

    /// Whether to emit the table of contents when the outline has chapters.
    pub include_contents: bool,

    /// Whether to escape reserved HTML characters in outline text.
    /// Disabling this reproduces raw pass-through of user text.
    pub escape_markup: bool,

    /// Value of the `lang` attribute on the root element.
    pub language: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            subtitle: DEFAULT_SUBTITLE.to_string(),
            contents_heading: DEFAULT_CONTENTS_HEADING.to_string(),
            include_contents: true,
            escape_markup: true,
            language: "en".to_string(),
        }
    }
}

impl RenderOptions {
    /// Creates new options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the cover subtitle.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Sets the contents heading.
    pub fn with_contents_heading(mut self, heading: impl Into<String>) -> Self {
        self.contents_heading = heading.into();
        self
    }

    /// Sets the document language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Omits the table of contents.
    pub fn without_contents(mut self) -> Self {
        self.include_contents = false;
        self
    }

    /// Inserts outline text without escaping.
    pub fn without_escaping(mut self) -> Self {
        self.escape_markup = false;
        self
    }
}
