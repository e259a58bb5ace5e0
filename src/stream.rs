//! # Streaming Notes Correction
//!
//! Repairs the one-column notes deficit without loading the file: the first line
//! is peeked to count columns, then every line is copied to a temporary sibling
//! with the missing column appended. At most one line is held in memory.
//!
//! The output is a [`tempfile::NamedTempFile`] created in the input's directory.
//! It is deleted on any error and persisted only once the whole pass succeeded.

use std::fs::File;
use std::io::{BufRead, BufReader, LineWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::correct::CorrectionError;
use crate::schema::{NoteRepair, SchemaRegistry};

/// Errors from the line-by-line pass, tagged with the 1-based line number
#[derive(Debug, thiserror::Error)]
pub enum AppendError {
    /// Reading a line failed (including invalid UTF-8)
    #[error("failed to read line {line}: {source}")]
    Read {
        /// Line being read
        line: u64,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Writing a line failed
    #[error("failed to write line {line}: {source}")]
    Write {
        /// Line being written
        line: u64,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Return a path to a notes file with the canonical column count.
///
/// If the first line already has the canonical count, `path` itself is returned and
/// no file is created. If it is one short, a corrected copy is written next to the
/// input and its path returned. Any other count is a
/// [`CorrectionError::SchemaMismatch`].
pub fn ensure_full_notes(
    path: &Path,
    registry: &SchemaRegistry,
) -> Result<PathBuf, CorrectionError> {
    let expected = registry.notes.len();
    let found = count_header_fields(path)?;

    if found == expected {
        debug!("{} already has {expected} columns", path.display());
        return Ok(path.to_path_buf());
    }
    if found != registry.notes_deficit_len() {
        return Err(CorrectionError::SchemaMismatch {
            path: path.to_path_buf(),
            expected,
            found,
        });
    }

    let input = File::open(path).map_err(|e| CorrectionError::open(path, e))?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let prefix = format!(
        "{}.",
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    );
    let temp = tempfile::Builder::new()
        .prefix(&prefix)
        .suffix(".tsv")
        .tempfile_in(dir)
        .map_err(|source| CorrectionError::WriteFailure {
            path: dir.to_path_buf(),
            source,
        })?;
    debug!("streaming {} into {}", path.display(), temp.path().display());

    // `temp` is dropped (and deleted) on every early return below.
    let lines = append_column(
        BufReader::new(input),
        LineWriter::new(temp.as_file()),
        &registry.repair,
    )
    .map_err(|e| match e {
        AppendError::Read { source, .. } => CorrectionError::Read {
            path: path.to_path_buf(),
            source,
        },
        AppendError::Write { source, .. } => CorrectionError::WriteFailure {
            path: temp.path().to_path_buf(),
            source,
        },
    })?;

    let (_, output) = temp.keep().map_err(|e| CorrectionError::WriteFailure {
        path: e.file.path().to_path_buf(),
        source: e.error,
    })?;

    info!(
        "notes: appended '{}' to {lines} lines, wrote {}",
        registry.repair.missing_column,
        output.display()
    );
    Ok(output)
}

/// Count tab-separated fields on the first line of `path`.
///
/// An empty file counts as one (empty) field.
pub fn count_header_fields(path: &Path) -> Result<usize, CorrectionError> {
    let file = File::open(path).map_err(|e| CorrectionError::open(path, e))?;
    let mut first = String::new();
    BufReader::new(file)
        .read_line(&mut first)
        .map_err(|source| CorrectionError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(strip_line_ending(&first).split('\t').count())
}

/// Copy `reader` to `writer`, appending one tab-separated cell to every line.
///
/// Blank lines are copied as-is. The first line gets the repair column's name when
/// its first field is the id column (a header sniff), otherwise the default value;
/// every later line gets the default value. Lines are always written with `\n`.
///
/// Returns the number of lines copied.
pub fn append_column<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    repair: &NoteRepair,
) -> Result<u64, AppendError> {
    let mut line = String::new();
    let mut count: u64 = 0;

    loop {
        line.clear();
        let read = reader
            .read_line(&mut line)
            .map_err(|source| AppendError::Read {
                line: count + 1,
                source,
            })?;
        if read == 0 {
            break;
        }

        let content = strip_line_ending(&line);
        let written = if content.is_empty() {
            writer.write_all(b"\n")
        } else {
            let suffix = if count == 0 && is_header(content, &repair.id_column) {
                &repair.missing_column
            } else {
                &repair.default_value
            };
            writeln!(writer, "{content}\t{suffix}")
        };
        written.map_err(|source| AppendError::Write {
            line: count + 1,
            source,
        })?;

        count += 1;
    }

    writer.flush().map_err(|source| AppendError::Write {
        line: count,
        source,
    })?;
    Ok(count)
}

fn is_header(line: &str, id_column: &str) -> bool {
    line.split('\t').next().map(str::trim) == Some(id_column)
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
