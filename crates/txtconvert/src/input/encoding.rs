//! Character-set detection and strict decoding.
//!
//! Input files arrive either as UTF-8 or as a UTF-16 variant (spreadsheet
//! exports on Windows commonly produce UTF-16LE). Detection is a BOM sniff
//! followed by a NUL-byte heuristic for BOM-less 16-bit text.

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};

use crate::error::{ConvertError, Result};

/// How many leading bytes the NUL-byte heuristic inspects.
const DETECT_SAMPLE: usize = 1024;

/// A document handed to the pipeline: raw bytes that still need
/// decoding, or text some earlier stage already decoded.
#[derive(Debug, Clone)]
pub enum RawDocument {
    Bytes(Vec<u8>),
    Text(String),
}

impl RawDocument {
    /// Decode into text, reporting the encoding label used. Text input
    /// is a pass-through.
    pub fn into_text(self) -> Result<(String, &'static str)> {
        match self {
            RawDocument::Text(text) => Ok((text, UTF_8.name())),
            RawDocument::Bytes(bytes) => decode(&bytes),
        }
    }
}

impl From<String> for RawDocument {
    fn from(text: String) -> Self {
        RawDocument::Text(text)
    }
}

impl From<&str> for RawDocument {
    fn from(text: &str) -> Self {
        RawDocument::Text(text.to_string())
    }
}

impl From<Vec<u8>> for RawDocument {
    fn from(bytes: Vec<u8>) -> Self {
        RawDocument::Bytes(bytes)
    }
}

impl From<&[u8]> for RawDocument {
    fn from(bytes: &[u8]) -> Self {
        RawDocument::Bytes(bytes.to_vec())
    }
}

/// Detect the character-set family of raw input bytes.
pub fn detect(bytes: &[u8]) -> &'static Encoding {
    if bytes.starts_with(&[0xFF, 0xFE]) {
        return UTF_16LE;
    }
    if bytes.starts_with(&[0xFE, 0xFF]) {
        return UTF_16BE;
    }
    if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
        return UTF_8;
    }

    // BOM-less 16-bit text: ASCII-range content puts a NUL on one side
    // of every code unit pair.
    let sample = &bytes[..bytes.len().min(DETECT_SAMPLE)];
    if sample.len() >= 4 {
        let pairs = sample.len() / 2;
        let even_nuls = sample.iter().step_by(2).filter(|&&b| b == 0).count();
        let odd_nuls = sample.iter().skip(1).step_by(2).filter(|&&b| b == 0).count();
        if odd_nuls * 2 > pairs {
            return UTF_16LE;
        }
        if even_nuls * 2 > pairs {
            return UTF_16BE;
        }
    }

    UTF_8
}

/// Decode raw bytes with the detected encoding.
///
/// A leading BOM selects the encoding and is stripped from the output.
/// Malformed sequences are a hard error rather than lossy replacement
/// output.
pub fn decode(bytes: &[u8]) -> Result<(String, &'static str)> {
    let detected = detect(bytes);
    let (text, used, had_errors) = detected.decode(bytes);
    if had_errors {
        return Err(ConvertError::Decode {
            encoding: used.name(),
            message: "malformed byte sequence".to_string(),
        });
    }
    Ok((text.into_owned(), used.name()))
}
