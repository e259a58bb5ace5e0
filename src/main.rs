//! # colfix
//!
//! A command-line tool for bringing note and rating TSV files to the column schema
//! the scoring pipeline expects.
//!
//! ## Usage
//!
//! ```bash
//! # Correct data/notes-00000.tsv and data/ratings-00000.tsv in place
//! colfix correct
//!
//! # Write *_fixed.tsv siblings instead, notes only
//! colfix correct --notes data/notes-00000.tsv --no-inplace --notes-only
//!
//! # Run the scorer; a 23-column notes file is corrected on the fly
//! colfix run --runner scoring-runner -- --notes data/notes-00000.tsv --scorers MFCoreScorer
//! ```

mod cli;

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let cli = cli::Cli::parse();

    cli::init_logging(cli.verbosity());

    cli::dispatch(cli)
}
