//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// Convert annotated TSV .txt files into CSV or JSON
#[derive(Parser)]
#[command(name = "txtconvert")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input files to convert
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    /// Write a .csv next to each input (default when no format is chosen)
    #[arg(short, long)]
    pub csv: bool,

    /// Write a .json next to each input
    #[arg(short, long)]
    pub json: bool,

    /// Print each table as JSON to stdout
    #[arg(short, long)]
    pub stdout: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
