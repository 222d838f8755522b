//! Converter facade: one call from raw bytes to table plus annotations.

use std::fs;
use std::path::Path;

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::comment::CommentBlock;
use crate::error::{ConvertError, Result};
use crate::input::{RawDocument, SourceMetadata};
use crate::pipeline::{assemble, clean_body, parse_body};
use crate::table::Table;

/// Configuration for a converter. Nothing here alters the pipeline
/// semantics.
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    /// Record a SHA-256 content hash in the source metadata.
    pub compute_hash: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self { compute_hash: true }
    }
}

/// Result of converting one document: the comment block and the table
/// are independently complete structures.
#[derive(Debug, Clone, Serialize)]
pub struct Conversion {
    /// Extracted comment entries, in source order. Index 0 was used as
    /// the header candidate but is returned here untouched.
    pub comments: CommentBlock,
    /// The final table, header row first when one was merged in.
    pub table: Table,
    /// Source file metadata; present only for file conversions.
    pub source: Option<SourceMetadata>,
}

/// The conversion engine. Each call runs one document through the
/// linear pipeline; calls share no state, so a single converter can be
/// reused across a whole batch.
#[derive(Debug, Default)]
pub struct Converter {
    config: ConverterConfig,
}

impl Converter {
    /// Create a converter with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with custom configuration.
    pub fn with_config(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// Read, decode, and convert a file, attaching source metadata.
    pub fn convert_file(&self, path: impl AsRef<Path>) -> Result<Conversion> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| ConvertError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let (text, encoding) = crate::input::decode(&bytes)?;
        let mut conversion = self.convert_str(&text)?;

        let hash = self
            .config
            .compute_hash
            .then(|| format!("sha256:{:x}", Sha256::digest(&bytes)));

        conversion.source = Some(SourceMetadata::new(
            path.to_path_buf(),
            hash,
            bytes.len() as u64,
            encoding.to_string(),
            conversion.comments.len(),
            conversion.table.len(),
            conversion.table.rows().first().map_or(0, |row| row.len()),
        ));

        Ok(conversion)
    }

    /// Convert a document given as raw bytes or decoded text.
    pub fn convert(&self, document: RawDocument) -> Result<Conversion> {
        let (text, _) = document.into_text()?;
        self.convert_str(&text)
    }

    /// Decode and convert raw bytes.
    pub fn convert_bytes(&self, bytes: &[u8]) -> Result<Conversion> {
        self.convert(RawDocument::from(bytes))
    }

    /// Convert already-decoded text.
    pub fn convert_str(&self, text: &str) -> Result<Conversion> {
        let comments = CommentBlock::extract(text);
        let cleaned = clean_body(text);
        let rows = parse_body(&cleaned)?;
        let table = assemble(rows, &comments);

        Ok(Conversion {
            comments,
            table,
            source: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Cell;

    #[test]
    fn test_convert_str_end_to_end() {
        let text = "&Men\tWomen\n&title=Women vote Democratic\n1972\t36\t38\n1976\t50\t50\n";
        let conversion = Converter::new().convert_str(text).unwrap();

        assert_eq!(conversion.comments.len(), 2);
        assert_eq!(conversion.table.len(), 3);
        assert_eq!(
            conversion.table.rows()[0],
            vec![
                Cell::Text("&".to_string()),
                Cell::Text("Men".to_string()),
                Cell::Text("Women".to_string()),
            ]
        );
        assert_eq!(
            conversion.table.rows()[1],
            vec![
                Cell::Number(1972.0),
                Cell::Number(36.0),
                Cell::Number(38.0),
            ]
        );
    }

    #[test]
    fn test_convert_str_has_no_source_metadata() {
        let conversion = Converter::new().convert_str("1\t2\n").unwrap();
        assert!(conversion.source.is_none());
    }

    #[test]
    fn test_convert_missing_file() {
        let err = Converter::new()
            .convert_file("/nonexistent/input.txt")
            .unwrap_err();
        assert!(matches!(err, ConvertError::Io { .. }));
    }
}
