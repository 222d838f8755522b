//! txtconvert CLI - convert annotated TSV text files to CSV or JSON.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;
use output::OutputOptions;

fn main() {
    let cli = Cli::parse();
    let options = OutputOptions::from_flags(cli.csv, cli.json, cli.stdout);

    let failures = commands::convert::run(&cli.files, options, cli.verbose);
    if failures > 0 {
        std::process::exit(1);
    }
}
