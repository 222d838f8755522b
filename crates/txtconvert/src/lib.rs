//! txtconvert: clean annotated tab-delimited text files into tables.
//!
//! Chart data files interleave ordinary TSV rows with comment lines
//! prefixed by `&`, carrying column labels and key/value annotations
//! (`title`, `subtitle`, `source`, ...). This crate detects the file's
//! encoding, extracts and classifies the comment lines, strips them
//! and structural noise from the body, parses the remainder into typed
//! rows, and reconciles the extracted labels with the parsed row shape.
//!
//! # Example
//!
//! ```
//! use txtconvert::Converter;
//!
//! let text = "&Men\tWomen\n&title=Turnout\n1972\t36\t38\n";
//! let conversion = Converter::new().convert_str(text).unwrap();
//!
//! assert_eq!(conversion.comments.len(), 2);
//! assert_eq!(conversion.table.len(), 2);
//! ```

pub mod comment;
pub mod error;
pub mod input;
pub mod pipeline;
pub mod table;

mod converter;

pub use comment::{CommentBlock, CommentEntry, SENTINEL};
pub use converter::{Conversion, Converter, ConverterConfig};
pub use error::{ConvertError, Result};
pub use input::{RawDocument, SourceMetadata};
pub use table::{Cell, DataRow, Table};
