//! # Canonical Column Schemas
//!
//! The downstream scorer validates its inputs against two fixed, ordered column
//! lists. This module holds those lists and the single repair rule the correctors
//! know how to apply.
//!
//! | Record kind | Columns | Repair |
//! |-------------|---------|--------|
//! | notes | 24 | a 23-column file gets `isCollaborativeNote` = `0` appended |
//! | ratings | 33 | projected onto the canonical columns, extras dropped |
//!
//! [`SchemaRegistry::builtin`] is the process-wide default. A registry built from a
//! config file goes through [`SchemaRegistry::new`], which checks the repair rule
//! against the notes schema.

/// Note column name constants.
pub mod note_columns;
/// Rating column name constants.
pub mod rating_columns;
mod registry;


pub use registry::{ColumnSchema, NoteRepair, SchemaError, SchemaRegistry};
