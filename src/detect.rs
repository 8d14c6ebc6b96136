//! Text encoding detection for outline sources.
//!
//! Outlines are plain text. Known binary containers are rejected up front
//! so that a PDF or an image is never fed to the generator as text.

use crate::error::{Error, Result};
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

/// Byte order mark for UTF-8
const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Byte order mark for UTF-16 little endian
const UTF16LE_BOM: [u8; 2] = [0xFF, 0xFE];

/// Byte order mark for UTF-16 big endian
const UTF16BE_BOM: [u8; 2] = [0xFE, 0xFF];

/// Binary signatures that are never outline text.
const BINARY_SIGNATURES: &[(&[u8], &str)] = &[
    (b"%PDF-", "PDF document"),
    (&[0x50, 0x4B, 0x03, 0x04], "ZIP archive"),
    (&[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1], "OLE compound file"),
    (&[0x89, b'P', b'N', b'G'], "PNG image"),
    (&[0xFF, 0xD8, 0xFF], "JPEG image"),
    (b"GIF8", "GIF image"),
];

/// How many leading bytes are sniffed for binary content.
const SNIFF_LEN: usize = 8192;

/// Detected text encoding of an outline source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    /// UTF-8 without a byte order mark
    Utf8,
    /// UTF-8 with a leading byte order mark
    Utf8Bom,
    /// UTF-16 little endian (with BOM)
    Utf16Le,
    /// UTF-16 big endian (with BOM)
    Utf16Be,
}

impl TextEncoding {
    /// Length of the byte order mark for this encoding.
    pub fn bom_len(&self) -> usize {
        match self {
            TextEncoding::Utf8 => 0,
            TextEncoding::Utf8Bom => UTF8_BOM.len(),
            TextEncoding::Utf16Le | TextEncoding::Utf16Be => 2,
        }
    }
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextEncoding::Utf8 => write!(f, "UTF-8"),
            TextEncoding::Utf8Bom => write!(f, "UTF-8 (BOM)"),
            TextEncoding::Utf16Le => write!(f, "UTF-16LE"),
            TextEncoding::Utf16Be => write!(f, "UTF-16BE"),
        }
    }
}

/// Detect text encoding from a file path.
pub fn detect_encoding_from_path(path: impl AsRef<Path>) -> Result<TextEncoding> {
    let mut file = std::fs::File::open(path)?;
    detect_encoding(&mut file)
}

/// Detect text encoding from a reader, leaving it rewound to the start.
pub fn detect_encoding<R: Read + Seek>(reader: &mut R) -> Result<TextEncoding> {
    let mut buffer = Vec::with_capacity(SNIFF_LEN);

    reader.seek(SeekFrom::Start(0))?;
    reader.by_ref().take(SNIFF_LEN as u64).read_to_end(&mut buffer)?;
    reader.seek(SeekFrom::Start(0))?;

    detect_encoding_from_bytes(&buffer)
}

/// Detect text encoding from bytes.
///
/// Empty input is valid UTF-8 text.
pub fn detect_encoding_from_bytes(data: &[u8]) -> Result<TextEncoding> {
    if data.starts_with(&UTF8_BOM) {
        return Ok(TextEncoding::Utf8Bom);
    }
    if data.starts_with(&UTF16LE_BOM) {
        return Ok(TextEncoding::Utf16Le);
    }
    if data.starts_with(&UTF16BE_BOM) {
        return Ok(TextEncoding::Utf16Be);
    }

    if let Some((_, name)) = BINARY_SIGNATURES
        .iter()
        .find(|(magic, _)| data.starts_with(magic))
    {
        return Err(Error::UnsupportedFormat((*name).to_string()));
    }

    // NUL bytes do not occur in UTF-8 text
    let sniff = &data[..data.len().min(SNIFF_LEN)];
    if sniff.contains(&0) {
        return Err(Error::UnsupportedFormat("binary data".to_string()));
    }

    Ok(TextEncoding::Utf8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_detect_plain_utf8() {
        assert_eq!(
            detect_encoding_from_bytes("## 한글 chapter".as_bytes()).unwrap(),
            TextEncoding::Utf8
        );
        assert_eq!(detect_encoding_from_bytes(b"").unwrap(), TextEncoding::Utf8);
    }

    #[test]
    fn test_detect_boms() {
        assert_eq!(
            detect_encoding_from_bytes(&[0xEF, 0xBB, 0xBF, b'#']).unwrap(),
            TextEncoding::Utf8Bom
        );
        assert_eq!(
            detect_encoding_from_bytes(&[0xFF, 0xFE, b'#', 0x00]).unwrap(),
            TextEncoding::Utf16Le
        );
        assert_eq!(
            detect_encoding_from_bytes(&[0xFE, 0xFF, 0x00, b'#']).unwrap(),
            TextEncoding::Utf16Be
        );
    }

    #[test]
    fn test_reject_pdf() {
        let result = detect_encoding_from_bytes(b"%PDF-1.7\n%...");
        match result {
            Err(Error::UnsupportedFormat(name)) => assert_eq!(name, "PDF document"),
            other => panic!("Expected UnsupportedFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_reject_zip_magic() {
        let data = [0x50, 0x4B, 0x03, 0x04, 0x00, 0x00, 0x00, 0x00];
        assert!(matches!(
            detect_encoding_from_bytes(&data),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_reject_nul_bytes() {
        let data = [b'a', 0x00, b'b'];
        match detect_encoding_from_bytes(&data) {
            Err(Error::UnsupportedFormat(name)) => assert_eq!(name, "binary data"),
            other => panic!("Expected UnsupportedFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_detect_from_reader_rewinds() {
        let mut cursor = Cursor::new(b"# Title\n".to_vec());
        cursor.set_position(3);

        assert_eq!(detect_encoding(&mut cursor).unwrap(), TextEncoding::Utf8);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_bom_len() {
        assert_eq!(TextEncoding::Utf8.bom_len(), 0);
        assert_eq!(TextEncoding::Utf8Bom.bom_len(), 3);
        assert_eq!(TextEncoding::Utf16Le.bom_len(), 2);
    }
}
