//! Convert command - batch-convert annotated TSV files.

use std::path::{Path, PathBuf};

use colored::Colorize;
use txtconvert::{ConvertError, Conversion, Converter};

use crate::output::{self, OutputOptions};

/// Run the batch. Each file is converted independently; a failure on
/// one file never aborts the rest. Returns the number of failures.
pub fn run(files: &[PathBuf], options: OutputOptions, verbose: bool) -> usize {
    let converter = Converter::new();
    let mut failures = 0;

    for path in files {
        match converter.convert_file(path) {
            Ok(conversion) => {
                if let Err(e) = emit(path, &conversion, options, verbose) {
                    eprintln!("{} writing output for {}: {}", "Error".red().bold(), path.display(), e);
                    failures += 1;
                }
            }
            Err(ConvertError::Io { path, source })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                eprintln!("{}: {}", "Invalid filename".red().bold(), path.display());
                failures += 1;
            }
            Err(e) => {
                eprintln!("{} converting {}: {}", "Error".red().bold(), path.display(), e);
                failures += 1;
            }
        }
    }

    failures
}

/// Write the selected outputs for one successfully converted file.
fn emit(
    path: &Path,
    conversion: &Conversion,
    options: OutputOptions,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if verbose {
        let encoding = conversion
            .source
            .as_ref()
            .map(|s| s.encoding.as_str())
            .unwrap_or("unknown");
        println!(
            "{} {} ({}, {} comments, {} rows)",
            "Converting".cyan().bold(),
            path.display(),
            encoding,
            conversion.comments.len(),
            conversion.table.len(),
        );
    }

    if options.csv {
        let out = output::derive_path(path, "csv");
        output::write_csv(&out, &conversion.table)?;
        if verbose {
            println!("  {} {}", "wrote".green(), out.display());
        }
    }

    if options.json {
        let out = output::derive_path(path, "json");
        output::write_json(&out, &conversion.table)?;
        if verbose {
            println!("  {} {}", "wrote".green(), out.display());
        }
    }

    if options.stdout {
        println!("{}", serde_json::to_string(&conversion.table)?);
    }

    Ok(())
}
