//! # Whole-File Correction
//!
//! Loads a notes or ratings file into memory, reconciles its columns with the
//! [`SchemaRegistry`](crate::schema::SchemaRegistry), and writes the corrected file.
//!
//! Only two shapes are ever repaired:
//!
//! 1. **Notes** one column short of canonical: the missing column is added with its
//!    default value and the columns are put in canonical order.
//! 2. **Ratings** with any column superset/subset/order: projected onto exactly the
//!    canonical rating columns.
//!
//! Anything else is rejected before a single byte is written.
//!
//! ```rust,no_run
//! use colfix::correct::{correct_notes, OutputMode};
//! use colfix::schema::SchemaRegistry;
//! use std::path::Path;
//!
//! let outcome = correct_notes(
//!     Path::new("data/notes-00000.tsv"),
//!     SchemaRegistry::builtin(),
//!     OutputMode::InPlace,
//! )?;
//! println!("{outcome:?}");
//! # Ok::<(), colfix::correct::CorrectionError>(())
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

mod error;
mod notes;
mod ratings;

#[cfg(test)]
mod tests;

pub use error::CorrectionError;
pub use notes::{correct_notes, repair_notes_table};
pub use ratings::{correct_ratings, project_ratings_table};

/// Suffix inserted before `.tsv` when writing a sibling instead of overwriting
pub const SIBLING_SUFFIX: &str = "_fixed";

/// Record kinds with a canonical schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// Note records
    Notes,
    /// Rating records
    Ratings,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Notes => write!(f, "notes"),
            RecordKind::Ratings => write!(f, "ratings"),
        }
    }
}

/// Where corrected output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Overwrite the input file
    #[default]
    InPlace,
    /// Write `<stem>_fixed.tsv` next to the input and leave the input untouched
    Sibling,
}

impl OutputMode {
    /// Output path for a given input under this mode
    pub fn output_path(&self, input: &Path) -> PathBuf {
        match self {
            OutputMode::InPlace => input.to_path_buf(),
            OutputMode::Sibling => sibling_path(input),
        }
    }
}

/// `notes.tsv` becomes `notes_fixed.tsv`; a name without `.tsv` gets the suffix appended.
pub fn sibling_path(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let fixed = match name.strip_suffix(".tsv") {
        Some(stem) => format!("{stem}{SIBLING_SUFFIX}.tsv"),
        None => format!("{name}{SIBLING_SUFFIX}"),
    };
    input.with_file_name(fixed)
}

/// Result of a correction that did not fail.
///
/// A rejected file is reported as `Err(CorrectionError::SchemaMismatch { .. })`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorrectionOutcome {
    /// The file already matched; nothing was written
    AlreadyCorrect(PathBuf),
    /// A corrected file was written to this path
    Corrected(PathBuf),
}

impl CorrectionOutcome {
    /// Path the consumer should read: the input, or the written output
    pub fn path(&self) -> &Path {
        match self {
            CorrectionOutcome::AlreadyCorrect(path) | CorrectionOutcome::Corrected(path) => path,
        }
    }

    /// Whether a file was written
    pub fn is_corrected(&self) -> bool {
        matches!(self, CorrectionOutcome::Corrected(_))
    }
}
