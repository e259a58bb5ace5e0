//! # In-memory TSV tables
//!
//! Whole-file correction loads a file into a [`Table`]: a header row plus data
//! rows of opaque text cells. No cell is ever parsed or coerced; an empty cell is
//! a valid value and stays an empty string.

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use log::debug;

use crate::correct::CorrectionError;

/// A delimited file held fully in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table from a header and rows.
    ///
    /// Rows are expected to be as wide as the header.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Read a tab-separated file with a mandatory header row.
    pub fn read_tsv<P: AsRef<Path>>(path: P) -> Result<Self, CorrectionError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| CorrectionError::open(path, e))?;
        let table = Self::from_reader(BufReader::new(file), path)?;
        debug!(
            "read {}: {} columns, {} rows",
            path.display(),
            table.column_count(),
            table.row_count()
        );
        Ok(table)
    }

    /// Read only the header row of a tab-separated file.
    ///
    /// Data rows are not parsed, so a malformed row further down goes unnoticed.
    pub fn read_tsv_headers<P: AsRef<Path>>(path: P) -> Result<Vec<String>, CorrectionError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| CorrectionError::open(path, e))?;
        read_headers(&mut tsv_reader(BufReader::new(file)), path)
    }

    /// Read tab-separated data from any reader; `source` names it in errors.
    ///
    /// Cells are taken verbatim between tabs: quote characters have no special
    /// meaning. Rows shorter than the header are padded with empty cells. Rows wider than
    /// the header are rejected. Blank lines are skipped.
    pub fn from_reader<R: Read>(reader: R, source: &Path) -> Result<Self, CorrectionError> {
        let csv_error = |e: csv::Error| CorrectionError::Csv {
            path: source.to_path_buf(),
            source: e,
        };

        let mut csv_reader = tsv_reader(reader);
        let headers = read_headers(&mut csv_reader, source)?;

        let width = headers.len();
        let mut rows = Vec::new();

        for record in csv_reader.records() {
            let record = record.map_err(csv_error)?;
            if record.len() > width {
                return Err(CorrectionError::MalformedRow {
                    path: source.to_path_buf(),
                    line: record.position().map(|p| p.line()).unwrap_or(0),
                    found: record.len(),
                    expected: width,
                });
            }

            let mut row: Vec<String> = record.iter().map(str::to_string).collect();
            row.resize(width, String::new());
            rows.push(row);
        }

        Ok(Self { headers, rows })
    }

    /// Write the table as tab-separated text with a header row.
    ///
    /// The file at `path` is created or truncated.
    pub fn write_tsv<P: AsRef<Path>>(&self, path: P) -> Result<(), CorrectionError> {
        let path = path.as_ref();
        let write_error = |source: std::io::Error| CorrectionError::WriteFailure {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(write_error)?;
        self.to_writer(file)
            .map_err(|e| write_error(std::io::Error::from(e)))?;

        debug!("wrote {}: {} rows", path.display(), self.row_count());
        Ok(())
    }

    /// Serialize the table to any writer. Cells are written verbatim, never quoted.
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .quote_style(csv::QuoteStyle::Never)
            .from_writer(writer);

        csv_writer.write_record(&self.headers)?;
        for row in &self.rows {
            csv_writer.write_record(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    /// Header names in file order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of columns in the header
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Index of the first column called `name`
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Append a column holding `value` in every row.
    pub fn push_column(&mut self, name: &str, value: &str) {
        self.headers.push(name.to_string());
        for row in &mut self.rows {
            row.push(value.to_string());
        }
    }

    /// Select and reorder columns to exactly `columns`.
    ///
    /// Columns absent from the table are synthesized with `fill`; table columns not
    /// listed are dropped. When a header name repeats, its first occurrence wins.
    pub fn into_projection<S: AsRef<str>>(self, columns: &[S], fill: &str) -> Table {
        let sources: Vec<Option<usize>> = columns.iter().map(|c| self.column(c.as_ref())).collect();

        let rows = self
            .rows
            .into_iter()
            .map(|mut row| {
                sources
                    .iter()
                    .map(|source| match source {
                        Some(index) => std::mem::take(&mut row[*index]),
                        None => fill.to_string(),
                    })
                    .collect()
            })
            .collect();

        Table {
            headers: columns.iter().map(|c| c.as_ref().to_string()).collect(),
            rows,
        }
    }
}

fn tsv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .quoting(false)
        .flexible(true)
        .has_headers(true)
        .from_reader(reader)
}

fn read_headers<R: Read>(
    csv_reader: &mut csv::Reader<R>,
    source: &Path,
) -> Result<Vec<String>, CorrectionError> {
    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(|e| CorrectionError::Csv {
            path: source.to_path_buf(),
            source: e,
        })?
        .iter()
        .map(str::to_string)
        .collect();

    if headers.is_empty() {
        return Err(CorrectionError::EmptyFile(source.to_path_buf()));
    }
    Ok(headers)
}
