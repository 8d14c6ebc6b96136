//! Async API for non-blocking outline processing.
//!
//! Enable the `async` feature to use these APIs:
//!
//! ```toml
//! [dependencies]
//! vintage = { version = "0.1", features = ["async"] }
//! ```

use crate::error::{Error, Result};
use crate::load_options::LoadOptions;
use crate::render::RenderOptions;
use crate::source::SourceText;
use crate::stats::DocumentStatistics;
use std::path::Path;
use tokio::fs;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Asynchronously loads and decodes an outline file.
///
/// # Example
///
/// ```no_run
/// # async fn example() -> vintage::Result<()> {
/// let source = vintage::async_api::load_file("notes.txt").await?;
/// println!("{} bytes", source.text.len());
/// # Ok(())
/// # }
/// ```
pub async fn load_file(path: impl AsRef<Path>) -> Result<SourceText> {
    load_file_with_options(path, &LoadOptions::default()).await
}

/// Asynchronously loads an outline file with custom load options.
pub async fn load_file_with_options(
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> Result<SourceText> {
    let path = path.as_ref();
    let data = fs::read(path).await?;
    crate::source::load_bytes(&data, crate::source::fallback_title_for(path), options)
}

/// Asynchronously loads an outline from an async reader.
pub async fn load_reader<R: AsyncRead + Unpin>(
    mut reader: R,
    fallback_title: impl Into<String>,
) -> Result<SourceText> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data).await?;
    crate::source::load_bytes(&data, fallback_title, &LoadOptions::default())
}

/// Asynchronously collects statistics for an outline file.
pub async fn statistics(path: impl AsRef<Path>) -> Result<DocumentStatistics> {
    let source = load_file(path).await?;
    Ok(crate::collect_statistics(&source.text))
}

/// Asynchronously converts an outline file to HTML.
///
/// # Example
///
/// ```no_run
/// # async fn example() -> vintage::Result<()> {
/// let html = vintage::async_api::to_html("notes.txt").await?;
/// tokio::fs::write("notes.html", html).await?;
/// # Ok(())
/// # }
/// ```
pub async fn to_html(path: impl AsRef<Path>) -> Result<String> {
    to_html_with_options(path, &RenderOptions::default()).await
}

/// Asynchronously converts an outline file to HTML with custom options.
///
/// Generation is CPU-bound, so it runs on the blocking pool.
pub async fn to_html_with_options(
    path: impl AsRef<Path>,
    options: &RenderOptions,
) -> Result<String> {
    let source = load_file(path).await?;
    let options = options.clone();
    tokio::task::spawn_blocking(move || {
        crate::generate_markup_with_options(&source.text, &source.fallback_title, &options)
    })
    .await
    .map_err(|e| Error::Io(std::io::Error::other(e.to_string())))
}
