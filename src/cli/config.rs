//! TOML configuration file support.
//!
//! Every key is optional; anything left out falls back to the built-in schemas and
//! the conventional data paths:
//!
//! ```toml
//! # colfix.toml
//! [schema]
//! ratings_columns = ["noteId", "raterParticipantId", "helpful"]
//!
//! [repair]
//! missing_column = "isCollaborativeNote"
//! default_value = "0"
//! id_column = "noteId"
//!
//! [paths]
//! notes = "data/notes-00000.tsv"
//! ratings = "data/ratings-00000.tsv"
//!
//! [runner]
//! program = "python"
//! args = ["-m", "scoring.runner"]
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use colfix::schema::{ColumnSchema, NoteRepair, SchemaRegistry};

/// Notes path used when neither the command line nor the config names one
pub const DEFAULT_NOTES_PATH: &str = "data/notes-00000.tsv";

/// Ratings path used when neither the command line nor the config names one
pub const DEFAULT_RATINGS_PATH: &str = "data/ratings-00000.tsv";

/// Root configuration structure for colfix.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Canonical column overrides.
    #[serde(default)]
    pub schema: SchemaConfig,

    /// Notes repair rule overrides.
    #[serde(default)]
    pub repair: RepairConfig,

    /// Default file locations.
    #[serde(default)]
    pub paths: PathsConfig,

    /// Downstream pipeline command.
    #[serde(default)]
    pub runner: RunnerConfig,
}

/// Replacement column lists.
#[derive(Debug, Default, Deserialize)]
pub struct SchemaConfig {
    /// Canonical notes columns, in order.
    pub notes_columns: Option<Vec<String>>,

    /// Canonical ratings columns, in order.
    pub ratings_columns: Option<Vec<String>>,
}

/// Overrides for the notes repair rule.
#[derive(Debug, Default, Deserialize)]
pub struct RepairConfig {
    /// Column added to notes files that lack it.
    pub missing_column: Option<String>,

    /// Value written into the added column.
    pub default_value: Option<String>,

    /// Record-id column used to recognize a header line.
    pub id_column: Option<String>,
}

/// Input file locations used when the command line names none.
#[derive(Debug, Default, Deserialize)]
pub struct PathsConfig {
    /// Notes TSV file.
    pub notes: Option<PathBuf>,

    /// Ratings TSV file.
    pub ratings: Option<PathBuf>,
}

/// How to start the downstream pipeline.
#[derive(Debug, Default, Deserialize)]
pub struct RunnerConfig {
    /// Program to execute.
    pub program: Option<String>,

    /// Arguments placed before the forwarded ones.
    #[serde(default)]
    pub args: Vec<String>,
}

impl Config {
    /// Load the config file if one was given, otherwise use defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Build the schema registry: built-in values with this file's overrides applied.
    pub fn registry(&self) -> Result<SchemaRegistry> {
        let builtin = SchemaRegistry::builtin();

        let notes = match &self.schema.notes_columns {
            Some(columns) => ColumnSchema::new(columns.clone()).context("Invalid notes_columns")?,
            None => builtin.notes.clone(),
        };
        let ratings = match &self.schema.ratings_columns {
            Some(columns) => {
                ColumnSchema::new(columns.clone()).context("Invalid ratings_columns")?
            }
            None => builtin.ratings.clone(),
        };

        let defaults = NoteRepair::default();
        let repair = NoteRepair {
            missing_column: self
                .repair
                .missing_column
                .clone()
                .unwrap_or(defaults.missing_column),
            default_value: self
                .repair
                .default_value
                .clone()
                .unwrap_or(defaults.default_value),
            id_column: self.repair.id_column.clone().unwrap_or(defaults.id_column),
        };

        SchemaRegistry::new(notes, ratings, repair).context("Invalid schema configuration")
    }

    /// Notes path: command line, then config, then the conventional default.
    pub fn notes_path(&self, cli: Option<PathBuf>) -> PathBuf {
        cli.or_else(|| self.paths.notes.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_NOTES_PATH))
    }

    /// Ratings path: command line, then config, then the conventional default.
    pub fn ratings_path(&self, cli: Option<PathBuf>) -> PathBuf {
        cli.or_else(|| self.paths.ratings.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RATINGS_PATH))
    }
}
