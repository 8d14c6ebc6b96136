//! Loading outline text from files and byte buffers.

use crate::detect::{detect_encoding_from_bytes, TextEncoding};
use crate::error::{Error, Result};
use crate::load_options::LoadOptions;
use encoding_rs::{Encoding, UTF_16BE, UTF_16LE};
use std::path::Path;
use unicode_normalization::UnicodeNormalization;

/// Title used when neither the outline nor its file name provide one.
pub const DEFAULT_FALLBACK_TITLE: &str = "document";

/// Decoded outline text together with its fallback title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    /// Decoded outline text
    pub text: String,
    /// Title to use when the text has no `# ` title line
    pub fallback_title: String,
    /// Encoding the text was decoded from
    pub encoding: TextEncoding,
}

/// Reads and decodes an outline file.
///
/// The fallback title is the file name without its extension.
pub fn load_file(path: impl AsRef<Path>, options: &LoadOptions) -> Result<SourceText> {
    let path = path.as_ref();

    if options.max_size > 0 {
        let size = std::fs::metadata(path)?.len();
        if size > options.max_size as u64 {
            return Err(Error::InvalidData(format!(
                "{} is {} bytes, limit is {}",
                path.display(),
                size,
                options.max_size
            )));
        }
    }

    let data = std::fs::read(path)?;
    log::debug!("read {} bytes from {}", data.len(), path.display());

    load_bytes(&data, fallback_title_for(path), options)
}

/// Decodes an outline from bytes.
pub fn load_bytes(
    data: &[u8],
    fallback_title: impl Into<String>,
    options: &LoadOptions,
) -> Result<SourceText> {
    if options.max_size > 0 && data.len() > options.max_size {
        return Err(Error::InvalidData(format!(
            "input is {} bytes, limit is {}",
            data.len(),
            options.max_size
        )));
    }

    let encoding = detect_encoding_from_bytes(data)?;
    let body = &data[encoding.bom_len()..];

    let text = match encoding {
        TextEncoding::Utf8 | TextEncoding::Utf8Bom => decode_utf8(body, options)?,
        TextEncoding::Utf16Le => decode_utf16(UTF_16LE, body, options)?,
        TextEncoding::Utf16Be => decode_utf16(UTF_16BE, body, options)?,
    };

    let text = if options.normalize_unicode {
        text.nfc().collect::<String>()
    } else {
        text
    };

    Ok(SourceText {
        text,
        fallback_title: fallback_title.into(),
        encoding,
    })
}

/// Derives a fallback title from a file path.
pub fn fallback_title_for(path: impl AsRef<Path>) -> String {
    path.as_ref()
        .file_stem()
        .map(|stem| stem.to_string_lossy().trim().to_string())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| DEFAULT_FALLBACK_TITLE.to_string())
}

fn decode_utf8(data: &[u8], options: &LoadOptions) -> Result<String> {
    if options.is_lenient() {
        let text = String::from_utf8_lossy(data);
        if text.contains('\u{FFFD}') {
            log::warn!("replaced invalid UTF-8 sequences in outline");
        }
        return Ok(text.into_owned());
    }

    Ok(std::str::from_utf8(data)?.to_string())
}

fn decode_utf16(encoding: &'static Encoding, data: &[u8], options: &LoadOptions) -> Result<String> {
    if options.is_lenient() {
        let (text, had_errors) = encoding.decode_without_bom_handling(data);
        if had_errors {
            log::warn!("replaced invalid {} sequences in outline", encoding.name());
        }
        return Ok(text.into_owned());
    }

    encoding
        .decode_without_bom_handling_and_without_replacement(data)
        .map(|text| text.into_owned())
        .ok_or_else(|| Error::Encoding(format!("invalid {} sequence", encoding.name())))
}
