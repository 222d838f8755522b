//! Tab-delimited parsing with per-cell numeric coercion.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ConvertError, Result};
use crate::table::{Cell, DataRow};

/// Whole-cell integer or decimal number, optionally signed.
static NUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d+(\.\d+)?$").unwrap());

/// Parse a cleaned body into rows of typed cells.
///
/// Any structural delimiter/quoting error aborts the whole document;
/// there is no partial-row recovery.
pub fn parse_body(cleaned: &str) -> Result<Vec<DataRow>> {
    validate_quoting(cleaned)?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(cleaned.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(coerce_cell).collect::<DataRow>());
    }
    Ok(rows)
}

/// A cell whose full trimmed content matches the numeric pattern
/// becomes a number; anything else stays a trimmed, detabbed string.
fn coerce_cell(raw: &str) -> Cell {
    let trimmed = raw.trim();
    if NUMERIC.is_match(trimmed) {
        if let Ok(value) = trimmed.parse::<f64>() {
            return Cell::Number(value);
        }
    }
    Cell::Text(trimmed.replace('\t', ""))
}

/// Reject structurally malformed quoting before handing the body to
/// the csv reader, which would otherwise paper over it.
///
/// A field opening with `"` must close with a quote (with `""` as the
/// escape), and the closing quote must sit at a field boundary. The
/// cleaned body uses `\n` line endings only, so a byte scan is enough.
fn validate_quoting(text: &str) -> Result<()> {
    let bytes = text.as_bytes();
    let mut line = 1usize;
    let mut i = 0;
    let mut at_field_start = true;

    while i < bytes.len() {
        if at_field_start && bytes[i] == b'"' {
            let opened_at = line;
            i += 1;
            loop {
                while i < bytes.len() && bytes[i] != b'"' {
                    if bytes[i] == b'\n' {
                        line += 1;
                    }
                    i += 1;
                }
                if i >= bytes.len() {
                    return Err(ConvertError::Parse {
                        line: opened_at,
                        message: "unterminated quoted field".to_string(),
                    });
                }
                if bytes.get(i + 1) == Some(&b'"') {
                    i += 2;
                    continue;
                }
                i += 1;
                if i < bytes.len() && bytes[i] != b'\t' && bytes[i] != b'\n' {
                    return Err(ConvertError::Parse {
                        line,
                        message: "closing quote not at field boundary".to_string(),
                    });
                }
                break;
            }
            at_field_start = false;
            continue;
        }

        match bytes[i] {
            b'\t' => at_field_start = true,
            b'\n' => {
                line += 1;
                at_field_start = true;
            }
            _ => at_field_start = false,
        }
        i += 1;
    }

    Ok(())
}
