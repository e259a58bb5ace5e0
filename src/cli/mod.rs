use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod config;
mod correct;
mod run;

pub use config::Config;

/// colfix - Column schema correction for note and rating TSV files
#[derive(Parser)]
#[command(name = "colfix")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Load schema, path, and runner settings from a TOML config file
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Correct notes and ratings files on disk
    Correct {
        /// Notes TSV path [default: data/notes-00000.tsv]
        #[arg(long, value_name = "PATH")]
        notes: Option<PathBuf>,

        /// Ratings TSV path [default: data/ratings-00000.tsv]
        #[arg(long, value_name = "PATH")]
        ratings: Option<PathBuf>,

        /// Write <name>_fixed.tsv instead of overwriting
        #[arg(long)]
        no_inplace: bool,

        /// Only correct the notes file
        #[arg(long, conflicts_with = "ratings_only")]
        notes_only: bool,

        /// Only correct the ratings file
        #[arg(long)]
        ratings_only: bool,
    },

    /// Run the scoring pipeline, correcting the file named by `--notes` on the way
    ///
    /// Everything after the options is passed to the pipeline verbatim, except that
    /// the value of `--notes` may be replaced by a corrected copy. Use `--` before
    /// the pipeline arguments if the first one could be mistaken for a colfix option.
    Run {
        /// Downstream program (overrides [runner] in the config file)
        #[arg(long, value_name = "PROGRAM")]
        runner: Option<String>,

        /// Arguments for the downstream pipeline
        #[arg(
            value_name = "ARGS",
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        args: Vec<String>,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<ExitCode> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Correct {
            notes,
            ratings,
            no_inplace,
            notes_only,
            ratings_only,
        } => {
            correct::run(&config, notes, ratings, no_inplace, notes_only, ratings_only)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Run { runner, args } => run::run(&config, runner, args),
    }
}
