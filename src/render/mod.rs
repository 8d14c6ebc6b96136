//! HTML rendering for outlines.

mod html;
pub mod inline;
mod options;
mod stylesheet;

pub use html::HtmlRenderer;
pub use inline::{escape_html, substitute_bold};
pub use options::{RenderOptions, DEFAULT_CONTENTS_HEADING, DEFAULT_SUBTITLE};
pub use stylesheet::STYLESHEET;

use crate::error::Result;
use crate::model::Outline;
use std::io::Write;
use std::path::Path;

/// Renders an outline to HTML.
pub fn render_html(outline: &Outline, options: &RenderOptions) -> String {
    let renderer = HtmlRenderer::new(options.clone());
    renderer.render(outline)
}

/// Renders an outline to HTML and writes it to a file.
pub fn render_to_file(
    outline: &Outline,
    path: impl AsRef<Path>,
    options: &RenderOptions,
) -> Result<()> {
    let content = render_html(outline, options);
    std::fs::write(path, content)?;
    Ok(())
}

/// Renders an outline to HTML and writes it to a writer.
pub fn render_to_writer<W: Write>(
    outline: &Outline,
    writer: &mut W,
    options: &RenderOptions,
) -> Result<()> {
    let content = render_html(outline, options);
    writer.write_all(content.as_bytes())?;
    Ok(())
}
