//! Source file metadata.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata about the source file a conversion came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the raw file contents, if computed.
    pub hash: Option<String>,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Detected encoding label (UTF-8, UTF-16LE, UTF-16BE).
    pub encoding: String,
    /// Number of comment lines extracted.
    pub comment_count: usize,
    /// Number of rows in the final table, including any header row.
    pub row_count: usize,
    /// Number of columns in the first table row, 0 for an empty table.
    pub column_count: usize,
    /// When the conversion was performed.
    pub converted_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a file that has been converted.
    pub fn new(
        path: PathBuf,
        hash: Option<String>,
        size_bytes: u64,
        encoding: String,
        comment_count: usize,
        row_count: usize,
        column_count: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            encoding,
            comment_count,
            row_count,
            column_count,
            converted_at: Utc::now(),
        }
    }
}
