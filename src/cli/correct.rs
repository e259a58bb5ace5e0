use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use colfix::correct::{correct_notes, correct_ratings, CorrectionError, OutputMode, RecordKind};
use colfix::report::StepReport;

use super::Config;

/// Correct the notes and/or ratings files on disk
pub fn run(
    config: &Config,
    notes: Option<PathBuf>,
    ratings: Option<PathBuf>,
    no_inplace: bool,
    notes_only: bool,
    ratings_only: bool,
) -> Result<()> {
    let registry = config.registry()?;
    let notes = config.notes_path(notes);
    let ratings = config.ratings_path(ratings);
    let mode = if no_inplace {
        OutputMode::Sibling
    } else {
        OutputMode::InPlace
    };

    info!("Mode: {:?}", mode);

    if !ratings_only {
        let outcome = correct_notes(&notes, &registry, mode)
            .with_context(|| format!("Failed to correct notes file {}", notes.display()))?;
        let report = StepReport::from_outcome(RecordKind::Notes, registry.notes.len(), &outcome);
        println!("{}", report.format_colored());
    }

    if !notes_only {
        let report = match correct_ratings(&ratings, &registry, mode) {
            Ok(outcome) => {
                StepReport::from_outcome(RecordKind::Ratings, registry.ratings.len(), &outcome)
            }
            Err(CorrectionError::FileNotFound(path)) => {
                StepReport::skipped(RecordKind::Ratings, &path, "file not found")
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to correct ratings file {}", ratings.display())
                })
            }
        };
        println!("{}", report.format_colored());
    }

    Ok(())
}
