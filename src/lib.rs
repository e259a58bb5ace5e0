//! # colfix - Column Schema Correction for Scoring Inputs
//!
//! `colfix` normalizes tab-separated note and rating files to the fixed column
//! schema a downstream scoring pipeline validates against, so that exports with
//! schema drift can be scored without touching the pipeline itself.
//!
//! ## What Gets Repaired
//!
//! - **Notes** one column short of canonical (older exports lack
//!   `isCollaborativeNote`): the column is added with value `0` and all columns are
//!   put in canonical order.
//! - **Ratings** with extra, missing, or reordered columns: projected onto exactly
//!   the canonical rating columns. Missing columns become empty strings; extras such
//!   as `correlatedRater` are dropped.
//!
//! Every other shape is rejected. The correctors never guess which of several
//! columns are missing.
//!
//! ## Two Ways to Correct
//!
//! ```rust,no_run
//! use colfix::correct::{correct_ratings, OutputMode};
//! use colfix::schema::SchemaRegistry;
//! use colfix::stream::ensure_full_notes;
//! use std::path::Path;
//!
//! let registry = SchemaRegistry::builtin();
//!
//! // Whole file: load, project, overwrite.
//! correct_ratings(Path::new("data/ratings-00000.tsv"), registry, OutputMode::InPlace)?;
//!
//! // Streaming: one line in memory, corrected copy next to the input.
//! let notes = ensure_full_notes(Path::new("data/notes-00000.tsv"), registry)?;
//! println!("score with {}", notes.display());
//! # Ok::<(), colfix::correct::CorrectionError>(())
//! ```
//!
//! ## Wrapping the Pipeline
//!
//! [`rewrite::run_with_corrected_notes`] rewrites the `--notes <path>` pair of a
//! pipeline invocation to point at a corrected file and hands the new argument list
//! to a [`downstream::Downstream`].
//!
//! ## Architecture
//!
//! - [`schema`]: canonical column lists and the notes repair rule
//! - [`table`]: in-memory TSV tables
//! - [`correct`]: whole-file notes and ratings correction
//! - [`stream`]: streaming notes correction
//! - [`rewrite`]: `--notes` rewriting and delegation
//! - [`downstream`]: the pipeline seam
//! - [`report`]: one-line status output

#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod correct;
pub mod downstream;
pub mod report;
pub mod rewrite;
pub mod schema;
pub mod stream;
pub mod table;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::correct::{
        correct_notes, correct_ratings, CorrectionError, CorrectionOutcome, OutputMode, RecordKind,
    };
    pub use crate::downstream::{CommandDownstream, Downstream, DownstreamError};
    pub use crate::report::{StepReport, StepStatus};
    pub use crate::rewrite::{run_with_corrected_notes, Invocation, RunError};
    pub use crate::schema::{ColumnSchema, NoteRepair, SchemaRegistry};
    pub use crate::stream::ensure_full_notes;
}
