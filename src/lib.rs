//! # vintage
//!
//! Turns plain-text outlines into styled, print-ready "vintage textbook"
//! HTML: a decorated cover, a numbered table of contents and a body of
//! chapters, sections, bullet lists and paragraphs. The HTML carries its own
//! stylesheet and is meant to be paginated into a PDF by a downstream engine.
//!
//! ## Outline Syntax
//!
//! | Line starts with | Role |
//! |------------------|------|
//! | `# `   | Document title (cover only) |
//! | `## `  | Chapter |
//! | `### ` | Section |
//! | `* `   | Bullet item |
//! | anything else | Paragraph |
//!
//! Inside bullets and paragraphs, `**text**` becomes strong emphasis.
//!
//! ## Quick Start
//!
//! ```
//! let text = "# Botany\n## Roots\n* **Taproots** grow deep\nMost plants have roots.";
//!
//! let stats = vintage::collect_statistics(text);
//! assert_eq!(stats.chapters, 1);
//!
//! let html = vintage::generate_markup(text, "notes");
//! assert!(html.contains("<h1>Botany</h1>"));
//! ```
//!
//! ## Features
//!
//! - `async`: Async file API with Tokio

pub mod detect;
pub mod error;
pub mod export;
pub mod load_options;
pub mod model;
pub mod render;
pub mod source;
pub mod stats;

#[cfg(feature = "async")]
pub mod async_api;

// Re-exports
pub use detect::{detect_encoding_from_bytes, detect_encoding_from_path, TextEncoding};
pub use error::{Error, Result};
pub use export::{
    suggested_file_name, ContentType, DirectoryExporter, ExportOutcome, Exporter, HtmlFileTarget,
    RenderTarget,
};
pub use load_options::{ErrorMode, LoadOptions};
pub use model::{Block, LineRole, Outline, TocEntry};
pub use render::RenderOptions;
pub use source::{load_bytes, load_file, SourceText};
pub use stats::{collect_statistics, preview, DocumentStatistics, PREVIEW_LINES};

use rayon::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Generates a complete HTML document from outline text with default options.
///
/// `fallback_title` is used on the cover when the text has no `# ` line.
/// Never fails: any input yields a valid document.
///
/// # Example
///
/// ```
/// let html = vintage::generate_markup("* a\n* b\nc", "notes");
/// assert_eq!(html.matches("class=\"bullet-list\"").count(), 1);
/// ```
pub fn generate_markup(text: &str, fallback_title: &str) -> String {
    generate_markup_with_options(text, fallback_title, &RenderOptions::default())
}

/// Generates a complete HTML document from outline text with custom options.
pub fn generate_markup_with_options(
    text: &str,
    fallback_title: &str,
    options: &RenderOptions,
) -> String {
    let outline = Outline::parse(text, fallback_title);
    render::render_html(&outline, options)
}

/// Converts an outline file to HTML with default options.
///
/// The file name (without extension) is the fallback title.
///
/// # Example
///
/// ```no_run
/// let html = vintage::to_html("lecture.txt")?;
/// std::fs::write("lecture.html", html)?;
/// # Ok::<(), vintage::Error>(())
/// ```
pub fn to_html(path: impl AsRef<Path>) -> Result<String> {
    to_html_with_options(path, &RenderOptions::default())
}

/// Converts an outline file to HTML with custom options.
pub fn to_html_with_options(path: impl AsRef<Path>, options: &RenderOptions) -> Result<String> {
    let source = load_file(path, &LoadOptions::default())?;
    Ok(generate_markup_with_options(
        &source.text,
        &source.fallback_title,
        options,
    ))
}

/// Collects statistics for an outline file.
pub fn statistics(path: impl AsRef<Path>) -> Result<DocumentStatistics> {
    let source = load_file(path, &LoadOptions::default())?;
    Ok(collect_statistics(&source.text))
}

/// Output names for a set of inputs: each file stem, with `_2`, `_3`, ...
/// appended to repeated stems so that no two inputs share an output.
///
/// # Example
///
/// ```
/// let names = vintage::output_names(&["a/notes.txt", "b/notes.txt", "plan.md"]);
/// assert_eq!(names, ["notes", "notes_2", "plan"]);
/// ```
pub fn output_names<P: AsRef<Path>>(paths: &[P]) -> Vec<String> {
    let mut taken = HashSet::with_capacity(paths.len());
    paths
        .iter()
        .map(|path| {
            let stem = source::fallback_title_for(path);
            let mut name = stem.clone();
            let mut suffix = 2;
            while !taken.insert(name.clone()) {
                name = format!("{}_{}", stem, suffix);
                suffix += 1;
            }
            name
        })
        .collect()
}

/// Converts several outline files in parallel.
///
/// Each file is written through `target` under the name given by
/// [`output_names`]. Results
/// are returned in input order; one failing file does not stop the others.
pub fn convert_batch<P>(
    paths: &[P],
    options: &RenderOptions,
    target: &dyn RenderTarget,
) -> Vec<Result<PathBuf>>
where
    P: AsRef<Path> + Sync,
{
    Vintage::new()
        .with_render_options(options.clone())
        .convert_batch(paths, target)
}

/// Builder for loading and rendering outlines.
///
/// # Example
///
/// ```no_run
/// use vintage::{HtmlFileTarget, Vintage};
///
/// let path = Vintage::new()
///     .with_subtitle("Lecture Notes")
///     .lenient()
///     .load("lecture.txt")?
///     .render_to(&HtmlFileTarget::new("out"))?;
/// # Ok::<(), vintage::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Vintage {
    render_options: RenderOptions,
    load_options: LoadOptions,
    fallback_title: Option<String>,
}

impl Vintage {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all render options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Replaces all load options.
    pub fn with_load_options(mut self, options: LoadOptions) -> Self {
        self.load_options = options;
        self
    }

    /// Sets the cover subtitle.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.render_options.subtitle = subtitle.into();
        self
    }

    /// Overrides the fallback title derived from the file name.
    pub fn with_fallback_title(mut self, title: impl Into<String>) -> Self {
        self.fallback_title = Some(title.into());
        self
    }

    /// Omits the table of contents.
    pub fn without_contents(mut self) -> Self {
        self.render_options.include_contents = false;
        self
    }

    /// Inserts outline text into the markup without escaping.
    pub fn without_escaping(mut self) -> Self {
        self.render_options.escape_markup = false;
        self
    }

    /// Decodes invalid byte sequences lossily instead of failing.
    pub fn lenient(mut self) -> Self {
        self.load_options = self.load_options.lenient();
        self
    }

    /// Loads and classifies an outline file.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<LoadedOutline> {
        let mut source = load_file(path, &self.load_options)?;
        if let Some(ref title) = self.fallback_title {
            source.fallback_title = title.clone();
        }
        Ok(self.build(source))
    }

    /// Classifies outline text that is already in memory.
    pub fn parse_text(&self, text: impl Into<String>) -> LoadedOutline {
        let source = SourceText {
            text: text.into(),
            fallback_title: self
                .fallback_title
                .clone()
                .unwrap_or_else(|| source::DEFAULT_FALLBACK_TITLE.to_string()),
            encoding: TextEncoding::Utf8,
        };
        self.build(source)
    }

    /// Converts several outline files in parallel, one output per input.
    ///
    /// Outputs are named by [`output_names`], so inputs sharing a file stem
    /// never overwrite each other.
    pub fn convert_batch<P>(&self, paths: &[P], target: &dyn RenderTarget) -> Vec<Result<PathBuf>>
    where
        P: AsRef<Path> + Sync,
    {
        log::debug!("converting {} outlines", paths.len());
        let names = output_names(paths);

        paths
            .par_iter()
            .zip(names.par_iter())
            .map(|(path, name)| self.load(path)?.render_as(target, name))
            .collect()
    }

    fn build(&self, source: SourceText) -> LoadedOutline {
        let outline = Outline::parse(&source.text, &source.fallback_title);
        LoadedOutline {
            source,
            outline,
            render_options: self.render_options.clone(),
        }
    }
}

/// A loaded outline ready for rendering.
#[derive(Debug, Clone)]
pub struct LoadedOutline {
    source: SourceText,
    outline: Outline,
    render_options: RenderOptions,
}

impl LoadedOutline {
    /// Returns the decoded source text.
    pub fn text(&self) -> &str {
        &self.source.text
    }

    /// Returns the resolved cover title.
    pub fn title(&self) -> &str {
        &self.outline.title
    }

    /// Returns the classified outline.
    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    /// Returns the encoding the source was decoded from.
    pub fn encoding(&self) -> TextEncoding {
        self.source.encoding
    }

    /// Counts structural lines in the source.
    pub fn statistics(&self) -> DocumentStatistics {
        collect_statistics(&self.source.text)
    }

    /// Renders the outline to HTML.
    pub fn to_html(&self) -> String {
        render::render_html(&self.outline, &self.render_options)
    }

    /// Renders through a target under a timestamped file name.
    pub fn render_to(&self, target: &dyn RenderTarget) -> Result<PathBuf> {
        self.render_as(target, &suggested_file_name())
    }

    /// Renders through a target under the given file name.
    pub fn render_as(&self, target: &dyn RenderTarget, name: &str) -> Result<PathBuf> {
        target.render(&self.to_html(), name)
    }

    /// Consumes self and returns the classified outline.
    pub fn into_outline(self) -> Outline {
        self.outline
    }
}
