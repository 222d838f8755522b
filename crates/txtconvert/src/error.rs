//! Error types for the txtconvert library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for conversion operations.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Raw bytes could not be decoded under the detected encoding.
    #[error("Decode error ({encoding}): {message}")]
    Decode {
        encoding: &'static str,
        message: String,
    },

    /// Structurally malformed row in the tab-delimited body. Aborts the
    /// whole document; no partial table is produced.
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
