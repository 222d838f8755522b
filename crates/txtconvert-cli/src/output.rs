//! Output serialization: CSV and JSON writers.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, WriterBuilder};
use txtconvert::Table;

/// Explicit output selection, passed into the batch runner rather than
/// read from ambient state.
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub csv: bool,
    pub json: bool,
    pub stdout: bool,
}

impl OutputOptions {
    /// CSV is the default when no output was requested at all.
    pub fn from_flags(csv: bool, json: bool, stdout: bool) -> Self {
        Self {
            csv: csv || !(json || stdout),
            json,
            stdout,
        }
    }
}

/// Derive an output path from the input path by replacing its
/// extension.
pub fn derive_path(input: &Path, extension: &str) -> PathBuf {
    input.with_extension(extension)
}

/// Write the table as CSV with every field quoted.
pub fn write_csv(path: &Path, table: &Table) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_path(path)?;

    for row in table.rows() {
        writer.write_record(row.iter().map(|cell| cell.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the table as a JSON array of arrays.
pub fn write_json(path: &Path, table: &Table) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(path)?;
    serde_json::to_writer(file, table)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use txtconvert::Converter;

    #[test]
    fn test_default_format_is_csv() {
        let options = OutputOptions::from_flags(false, false, false);
        assert!(options.csv);
        assert!(!options.json);
    }

    #[test]
    fn test_explicit_json_disables_default_csv() {
        let options = OutputOptions::from_flags(false, true, false);
        assert!(!options.csv);
        assert!(options.json);
    }

    #[test]
    fn test_csv_and_json_can_combine() {
        let options = OutputOptions::from_flags(true, true, false);
        assert!(options.csv && options.json);
    }

    #[test]
    fn test_derive_path_replaces_extension() {
        assert_eq!(
            derive_path(Path::new("data/input.txt"), "csv"),
            PathBuf::from("data/input.csv")
        );
    }

    #[test]
    fn test_write_csv_quotes_everything() {
        let conversion = Converter::new()
            .convert_str("&Men\tWomen\n1972\t36\t38\n")
            .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_csv(&path, &conversion.table).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "\"&\",\"Men\",\"Women\"\n\"1972\",\"36\",\"38\"\n"
        );
    }

    #[test]
    fn test_write_json_shape() {
        let conversion = Converter::new().convert_str("a\t1\n").unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_json(&path, &conversion.table).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, r#"[["a",1]]"#);
    }
}
