//! Rendering and export collaborators.
//!
//! The generator stops at a markup string. A [`RenderTarget`] turns that
//! string into a file (the HTML itself, or a PDF produced by an external
//! engine), and an [`Exporter`] hands the file to its final destination.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Prefix of generated output file names.
pub const OUTPUT_PREFIX: &str = "vintage_textbook";

/// Returns a timestamped output file name without extension.
pub fn suggested_file_name() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    format!("{}_{}", OUTPUT_PREFIX, millis)
}

/// Content type label passed to exporters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    /// Rendered PDF document
    Pdf,
    /// Generated HTML markup
    Html,
}

impl ContentType {
    /// MIME type for this content.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ContentType::Pdf => "application/pdf",
            ContentType::Html => "text/html",
        }
    }

    /// File extension for this content.
    pub fn extension(&self) -> &'static str {
        match self {
            ContentType::Pdf => "pdf",
            ContentType::Html => "html",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mime_type())
    }
}

/// Turns generated markup into an output file.
pub trait RenderTarget: Sync {
    /// Content type of the files this target produces.
    fn content_type(&self) -> ContentType;

    /// Renders `markup` under the suggested name and returns the written path.
    fn render(&self, markup: &str, file_name: &str) -> Result<PathBuf>;
}

/// Writes the markup as an `.html` file into a directory.
#[derive(Debug, Clone)]
pub struct HtmlFileTarget {
    directory: PathBuf,
}

impl HtmlFileTarget {
    /// Creates a target writing into `directory` (created on first use).
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Output directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl RenderTarget for HtmlFileTarget {
    fn content_type(&self) -> ContentType {
        ContentType::Html
    }

    fn render(&self, markup: &str, file_name: &str) -> Result<PathBuf> {
        if file_name.trim().is_empty() {
            return Err(Error::Render("empty output file name".into()));
        }

        std::fs::create_dir_all(&self.directory)?;
        let path = self
            .directory
            .join(format!("{}.{}", file_name, ContentType::Html.extension()));
        std::fs::write(&path, markup)?;

        log::debug!("wrote {} bytes to {}", markup.len(), path.display());
        Ok(path)
    }
}

/// Result of an export action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The file reached its destination
    Exported(PathBuf),
    /// The user backed out; not an error
    Cancelled,
}

/// Delivers a rendered file to the user (share sheet, save dialog, copy).
pub trait Exporter {
    /// Exports the file at `path`.
    fn export(&self, path: &Path, content_type: ContentType) -> Result<ExportOutcome>;
}

/// Copies exported files into a destination directory.
#[derive(Debug, Clone)]
pub struct DirectoryExporter {
    destination: PathBuf,
}

impl DirectoryExporter {
    /// Creates an exporter copying into `destination`.
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
        }
    }
}

impl Exporter for DirectoryExporter {
    fn export(&self, path: &Path, content_type: ContentType) -> Result<ExportOutcome> {
        let file_name = path
            .file_name()
            .ok_or_else(|| Error::Export(format!("not a file: {}", path.display())))?;

        std::fs::create_dir_all(&self.destination)?;
        let target = self.destination.join(file_name);

        if target != path {
            std::fs::copy(path, &target)
                .map_err(|e| Error::Export(format!("{}: {}", path.display(), e)))?;
        }

        log::debug!("exported {} as {}", target.display(), content_type);
        Ok(ExportOutcome::Exported(target))
    }
}
