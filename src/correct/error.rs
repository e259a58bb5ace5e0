use std::path::PathBuf;

/// Errors that can occur while correcting a notes or ratings file
#[derive(Debug, thiserror::Error)]
pub enum CorrectionError {
    /// The column count is neither the canonical count nor one short of it
    #[error(
        "{}: found {found} columns, expected {expected} or {}; refusing to guess which columns are missing",
        path.display(),
        expected - 1
    )]
    SchemaMismatch {
        /// File that was inspected
        path: PathBuf,
        /// Canonical column count
        expected: usize,
        /// Column count found in the header
        found: usize,
    },

    /// The header has a repairable width but names columns the schema does not know
    #[error(
        "{}: header does not complete to the canonical columns (unknown: [{}], missing: [{}])",
        path.display(),
        unknown.join(", "),
        missing.join(", ")
    )]
    UnexpectedColumns {
        /// File that was inspected
        path: PathBuf,
        /// Header names that are not canonical (or are repeated)
        unknown: Vec<String>,
        /// Canonical names absent from the header after repair
        missing: Vec<String>,
    },

    /// The input file does not exist
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The input file has no header row
    #[error("{}: file is empty, a header row is required", .0.display())]
    EmptyFile(PathBuf),

    /// A data row has more cells than the header
    #[error("{}: line {line} has {found} fields but the header has {expected}", path.display())]
    MalformedRow {
        /// File that was read
        path: PathBuf,
        /// 1-based line number
        line: u64,
        /// Fields found on the line
        found: usize,
        /// Fields in the header
        expected: usize,
    },

    /// Reading the input failed
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// File that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// TSV parsing failed
    #[error("TSV parsing error in {}: {source}", path.display())]
    Csv {
        /// File that was read
        path: PathBuf,
        /// Underlying CSV error
        #[source]
        source: csv::Error,
    },

    /// Creating, writing, flushing, or persisting the output failed
    #[error("Failed to write {}: {source}", path.display())]
    WriteFailure {
        /// Output that was being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl CorrectionError {
    /// Map an error from opening an input file, keeping "not found" distinct.
    pub(crate) fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            CorrectionError::FileNotFound(path)
        } else {
            CorrectionError::Read { path, source }
        }
    }

    /// True for the one condition callers may skip over
    pub fn is_not_found(&self) -> bool {
        matches!(self, CorrectionError::FileNotFound(_))
    }
}
