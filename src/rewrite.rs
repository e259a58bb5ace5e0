//! # Invocation Rewriting
//!
//! Makes streaming correction transparent to the downstream pipeline: every
//! `--notes <path>` pair in an argument list is run through
//! [`ensure_full_notes`](crate::stream::ensure_full_notes) and the path replaced by
//! the corrected one. Everything else passes through untouched and in order.
//!
//! The rewritten list is handed to a [`Downstream`] explicitly; the process's own
//! arguments are never modified.

use std::path::{Path, PathBuf};

use log::info;

use crate::correct::CorrectionError;
use crate::downstream::{Downstream, DownstreamError};
use crate::schema::SchemaRegistry;
use crate::stream::ensure_full_notes;

/// Flag whose value names the notes file
pub const NOTES_FLAG: &str = "--notes";

/// Errors from a rewritten downstream run
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// The notes file could not be corrected
    #[error(transparent)]
    Correction(#[from] CorrectionError),

    /// The downstream pipeline could not be started
    #[error(transparent)]
    Downstream(#[from] DownstreamError),
}

/// Argument list destined for the downstream pipeline
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Invocation {
    args: Vec<String>,
}

impl Invocation {
    /// Wrap an argument list (without the program name)
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Arguments in order
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Consume into the argument list
    pub fn into_args(self) -> Vec<String> {
        self.args
    }

    /// Value of the last `--notes <path>` pair, if any
    pub fn notes_path(&self) -> Option<&str> {
        self.args
            .windows(2)
            .rfind(|pair| pair[0] == NOTES_FLAG)
            .map(|pair| pair[1].as_str())
    }

    /// Build a new invocation with every `--notes <path>` value replaced by
    /// `correct(path)`.
    ///
    /// A trailing `--notes` with no value is kept as-is. When `correct` returns the
    /// same path, the original argument text is kept byte for byte.
    pub fn rewrite_notes<F, E>(self, mut correct: F) -> Result<Invocation, E>
    where
        F: FnMut(&Path) -> Result<PathBuf, E>,
    {
        let mut rewritten = Vec::with_capacity(self.args.len());
        let mut args = self.args.into_iter();

        while let Some(arg) = args.next() {
            if arg == NOTES_FLAG {
                if let Some(value) = args.next() {
                    let corrected = correct(Path::new(&value))?;
                    rewritten.push(arg);
                    if corrected.as_path() == Path::new(&value) {
                        rewritten.push(value);
                    } else {
                        rewritten.push(corrected.to_string_lossy().into_owned());
                    }
                    continue;
                }
            }
            rewritten.push(arg);
        }

        Ok(Invocation { args: rewritten })
    }
}

/// Correct the notes file named by `--notes` (if any), then run `downstream` with
/// the rewritten arguments and return its exit code.
pub fn run_with_corrected_notes<D>(
    invocation: Invocation,
    registry: &SchemaRegistry,
    downstream: &mut D,
) -> Result<i32, RunError>
where
    D: Downstream + ?Sized,
{
    let rewritten = invocation.rewrite_notes(|path| {
        let corrected = ensure_full_notes(path, registry)?;
        if corrected != path {
            info!("using corrected notes {} for {}", corrected.display(), path.display());
        }
        Ok::<_, CorrectionError>(corrected)
    })?;

    Ok(downstream.invoke(rewritten.args())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;
    use std::fs;
    use tempfile::tempdir;

    fn fixed(path: &Path) -> Result<PathBuf, Infallible> {
        Ok(path.with_extension("fixed.tsv"))
    }

    #[test]
    fn test_without_notes_flag_passes_through() {
        let invocation = Invocation::new(["--ratings", "r.tsv", "--scorers", "MFCoreScorer"]);
        let mut calls = 0;
        let rewritten = invocation
            .clone()
            .rewrite_notes(|p| {
                calls += 1;
                fixed(p)
            })
            .unwrap();
        assert_eq!(rewritten, invocation);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_notes_value_is_replaced_in_place() {
        let rewritten = Invocation::new(["--outdir", "data", "--notes", "n.tsv", "--scorers", "X"])
            .rewrite_notes(fixed)
            .unwrap();
        assert_eq!(
            rewritten.args(),
            ["--outdir", "data", "--notes", "n.fixed.tsv", "--scorers", "X"]
        );
    }

    #[test]
    fn test_trailing_flag_without_value_is_kept() {
        let rewritten = Invocation::new(["--scorers", "X", "--notes"])
            .rewrite_notes(fixed)
            .unwrap();
        assert_eq!(rewritten.args(), ["--scorers", "X", "--notes"]);
    }

    #[test]
    fn test_every_occurrence_is_rewritten() {
        let rewritten = Invocation::new(["--notes", "a.tsv", "--notes", "b.tsv"])
            .rewrite_notes(fixed)
            .unwrap();
        assert_eq!(
            rewritten.args(),
            ["--notes", "a.fixed.tsv", "--notes", "b.fixed.tsv"]
        );
        assert_eq!(rewritten.notes_path(), Some("b.fixed.tsv"));
    }

    #[test]
    fn test_correction_error_stops_rewrite() {
        let result = Invocation::new(["--notes", "bad.tsv"])
            .rewrite_notes(|_| Err::<PathBuf, _>("rejected"));
        assert_eq!(result.unwrap_err(), "rejected");
    }

    #[test]
    fn test_run_with_deficit_notes() {
        let dir = tempdir().unwrap();
        let notes = dir.path().join("notes23.tsv");
        let header = SchemaRegistry::builtin().notes.names()[..23].join("\t");
        fs::write(&notes, format!("{header}\n")).unwrap();

        let mut seen: Vec<String> = Vec::new();
        let mut downstream = |args: &[String]| -> Result<i32, DownstreamError> {
            seen = args.to_vec();
            Ok(0)
        };

        let invocation = Invocation::new([
            "--notes".to_string(),
            notes.display().to_string(),
            "--scorers".to_string(),
            "X".to_string(),
        ]);
        let code =
            run_with_corrected_notes(invocation, SchemaRegistry::builtin(), &mut downstream)
                .unwrap();
        assert_eq!(code, 0);

        assert_eq!(seen.len(), 4);
        assert_eq!(seen[0], "--notes");
        assert_ne!(seen[1], notes.display().to_string());
        assert_eq!(&seen[2..], ["--scorers", "X"]);

        let corrected = fs::read_to_string(&seen[1]).unwrap();
        let first = corrected.lines().next().unwrap();
        assert_eq!(first.split('\t').count(), 24);
    }

    #[test]
    fn test_run_with_full_notes_is_unchanged() {
        let dir = tempdir().unwrap();
        let notes = dir.path().join("notes24.tsv");
        let header = SchemaRegistry::builtin().notes.names().join("\t");
        fs::write(&notes, format!("{header}\n")).unwrap();

        let args = vec![
            "--notes".to_string(),
            notes.display().to_string(),
            "--scorers".to_string(),
            "X".to_string(),
        ];
        let mut seen: Vec<String> = Vec::new();
        let mut downstream = |a: &[String]| -> Result<i32, DownstreamError> {
            seen = a.to_vec();
            Ok(5)
        };

        let code = run_with_corrected_notes(
            Invocation::new(args.clone()),
            SchemaRegistry::builtin(),
            &mut downstream,
        )
        .unwrap();
        assert_eq!(code, 5);
        assert_eq!(seen, args);
    }

    #[test]
    fn test_run_fails_closed_before_downstream() {
        let dir = tempdir().unwrap();
        let notes = dir.path().join("notes.tsv");
        fs::write(&notes, "noteId\tsummary\n").unwrap();

        let mut called = false;
        let mut downstream = |_: &[String]| -> Result<i32, DownstreamError> {
            called = true;
            Ok(0)
        };

        let err = run_with_corrected_notes(
            Invocation::new(["--notes".to_string(), notes.display().to_string()]),
            SchemaRegistry::builtin(),
            &mut downstream,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            RunError::Correction(CorrectionError::SchemaMismatch { found: 2, .. })
        ));
        assert!(!called);
    }
}
