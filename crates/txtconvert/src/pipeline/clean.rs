//! Line-wise cleanup of the data body before delimited parsing.
//!
//! Purely textual: comment lines, blank lines, and incidental
//! whitespace are removed without any delimiter-aware parsing. The
//! output contains only tab-delimited data lines, each `\n`-terminated,
//! and cleaning is idempotent.

use once_cell::sync::Lazy;
use regex::Regex;

/// A comment line in the body, tolerating a run of non-alphanumeric
/// junk (stray quotes, spaces, control bytes) before the sentinel.
static TOLERANT_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^a-zA-Z0-9&\t]*&").unwrap());

/// Remove comment lines, blank lines, trailing whitespace runs, and
/// leading tab runs from decoded text.
pub fn clean_body(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());

    for line in text.lines() {
        // Leading tabs come off first so a tab-indented comment line is
        // still recognized below; cleaning stays idempotent this way.
        let line = line
            .trim_start_matches('\t')
            .trim_end_matches([' ', '\t', '\r']);
        if TOLERANT_COMMENT.is_match(line) {
            continue;
        }
        if line.chars().all(|c| c.is_whitespace() || c.is_control()) {
            continue;
        }
        cleaned.push_str(line);
        cleaned.push('\n');
    }

    cleaned
}
