//! Sentinel-line extraction.
//!
//! Comment lines are prefixed with `&` and carry either column labels
//! (tab-separated, conventionally the first comment) or a key/value
//! annotation such as `&title=UK retail sales volume`. Which shape a
//! line has is structural, never declared: a tab after normalization
//! means labels, otherwise the line splits on `=`.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// The fixed marker identifying a comment/metadata line.
pub const SENTINEL: char = '&';

/// Lines beginning with the sentinel, captured to end of line.
static SENTINEL_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^&(.*)").unwrap());

/// One leading and/or trailing wrapping quote mark.
static WRAPPING_QUOTES: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^["']|["']$"#).unwrap());

/// The trimmed fields of one comment line, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentEntry(Vec<String>);

impl CommentEntry {
    /// Normalize one sentinel line (sentinel already stripped) into an
    /// ordered list of trimmed fields.
    fn from_line(raw: &str) -> Self {
        let stripped = raw.trim_start_matches('\t').trim();
        let stripped = WRAPPING_QUOTES.replace_all(stripped, "");

        let fields = if stripped.contains('\t') {
            stripped.split('\t')
        } else {
            stripped.split('=')
        };

        CommentEntry(fields.map(|field| field.trim().to_string()).collect())
    }

    pub fn fields(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// All comment entries of a document, in order of appearance.
///
/// Index 0 is the header candidate the row assembler consumes; the
/// rest are dataset metadata passed through to the caller untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentBlock(Vec<CommentEntry>);

impl CommentBlock {
    /// Scan decoded text for sentinel lines. No sentinel lines is a
    /// valid document and yields an empty block.
    pub fn extract(text: &str) -> Self {
        let entries = SENTINEL_LINE
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| CommentEntry::from_line(m.as_str()))
            .collect();
        CommentBlock(entries)
    }

    pub fn entries(&self) -> &[CommentEntry] {
        &self.0
    }

    /// The header candidate, if any comment lines were present.
    pub fn first(&self) -> Option<&CommentEntry> {
        self.0.first()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The key/value annotations (entries after the header candidate)
    /// as an insertion-ordered map. A value containing `=` is rejoined.
    pub fn annotations(&self) -> IndexMap<String, String> {
        self.0
            .iter()
            .skip(1)
            .filter_map(|entry| {
                let fields = entry.fields();
                if fields.len() >= 2 {
                    Some((fields[0].clone(), fields[1..].join("=")))
                } else {
                    None
                }
            })
            .collect()
    }
}
