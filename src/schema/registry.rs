use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

use super::note_columns::{self, NOTE_COLUMNS};
use super::rating_columns::RATING_COLUMNS;

/// An ordered list of unique column names.
///
/// Order is meaningful: it is the on-disk column order a corrected file must have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSchema {
    columns: Vec<String>,
}

impl ColumnSchema {
    /// Build a schema, rejecting empty, blank, or duplicate column names.
    pub fn new<I, S>(columns: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        if columns.is_empty() {
            return Err(SchemaError::EmptySchema);
        }

        let mut seen = HashSet::with_capacity(columns.len());
        for (index, name) in columns.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(SchemaError::EmptyColumnName(index));
            }
            if !seen.insert(name.as_str()) {
                return Err(SchemaError::DuplicateColumn(name.clone()));
            }
        }

        Ok(Self { columns })
    }

    fn from_static(columns: &[&str]) -> Self {
        Self {
            columns: columns.iter().map(|c| (*c).to_string()).collect(),
        }
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Always false for a constructed schema
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column names in canonical order
    pub fn names(&self) -> &[String] {
        &self.columns
    }

    /// Whether `name` is one of the schema's columns
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Zero-based position of `name` in the canonical order
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Last column in canonical order
    pub fn last(&self) -> Option<&str> {
        self.columns.last().map(String::as_str)
    }

    /// True when `header` has exactly these columns in exactly this order.
    pub fn matches<S: AsRef<str>>(&self, header: &[S]) -> bool {
        header.len() == self.columns.len()
            && header
                .iter()
                .zip(&self.columns)
                .all(|(actual, expected)| actual.as_ref() == expected)
    }
}

impl fmt::Display for ColumnSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.columns.join(", "))
    }
}

/// How a notes file that lacks exactly one column is completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRepair {
    /// Name of the column older exports omit
    pub missing_column: String,
    /// Value written into that column for every data row
    pub default_value: String,
    /// Record-id column, used to recognize a header line when streaming
    pub id_column: String,
}

impl Default for NoteRepair {
    fn default() -> Self {
        Self {
            missing_column: note_columns::IS_COLLABORATIVE_NOTE.to_string(),
            default_value: note_columns::IS_COLLABORATIVE_NOTE_DEFAULT.to_string(),
            id_column: note_columns::NOTE_ID.to_string(),
        }
    }
}

/// Canonical schemas for both record kinds plus the notes repair rule.
///
/// A registry is read-only once built and is passed by reference to every corrector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaRegistry {
    /// Note record columns
    pub notes: ColumnSchema,
    /// Rating record columns
    pub ratings: ColumnSchema,
    /// Repair applied to notes files one column short
    pub repair: NoteRepair,
}

impl SchemaRegistry {
    /// Assemble a registry and check that the repair rule fits the notes schema.
    ///
    /// The repaired column must be the last notes column so that appending it to
    /// every line (the streaming path) lands it in canonical position.
    pub fn new(
        notes: ColumnSchema,
        ratings: ColumnSchema,
        repair: NoteRepair,
    ) -> Result<Self, SchemaError> {
        if notes.last() != Some(repair.missing_column.as_str()) {
            return Err(SchemaError::RepairColumnNotLast(repair.missing_column));
        }
        if repair.id_column == repair.missing_column || !notes.contains(&repair.id_column) {
            return Err(SchemaError::IdColumnMissing(repair.id_column));
        }

        Ok(Self {
            notes,
            ratings,
            repair,
        })
    }

    /// The built-in registry, constructed once per process.
    pub fn builtin() -> &'static SchemaRegistry {
        static BUILTIN: OnceLock<SchemaRegistry> = OnceLock::new();
        BUILTIN.get_or_init(|| SchemaRegistry {
            notes: ColumnSchema::from_static(&NOTE_COLUMNS),
            ratings: ColumnSchema::from_static(&RATING_COLUMNS),
            repair: NoteRepair::default(),
        })
    }

    /// Column count of a notes file that can be repaired
    pub fn notes_deficit_len(&self) -> usize {
        self.notes.len() - 1
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

/// Errors raised while building a schema or registry
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SchemaError {
    /// The column list is empty
    #[error("Schema has no columns")]
    EmptySchema,

    /// A column name is empty or whitespace
    #[error("Column {0} has an empty name")]
    EmptyColumnName(usize),

    /// A column name occurs more than once
    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),

    /// The repaired column is not the final notes column
    #[error("Repair column '{0}' must be the last notes column")]
    RepairColumnNotLast(String),

    /// The record-id column is not a usable notes column
    #[error("Id column '{0}' must be a notes column other than the repair column")]
    IdColumnMissing(String),
}
