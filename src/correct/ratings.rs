use std::path::Path;

use log::{debug, info};

use super::{CorrectionError, CorrectionOutcome, OutputMode};
use crate::schema::SchemaRegistry;
use crate::table::Table;

/// Project a ratings file onto exactly the canonical rating columns.
///
/// Canonical columns absent from the file are added as empty strings; columns the
/// scorer does not take as input (such as `correlatedRater`) are dropped. Running it
/// on its own output reports [`CorrectionOutcome::AlreadyCorrect`].
///
/// A missing input surfaces as [`CorrectionError::FileNotFound`] so the caller can
/// skip the step.
pub fn correct_ratings(
    path: &Path,
    registry: &SchemaRegistry,
    mode: OutputMode,
) -> Result<CorrectionOutcome, CorrectionError> {
    let table = Table::read_tsv(path)?;

    let Some(projected) = project_ratings_table(table, registry) else {
        info!(
            "ratings {}: already has the {} canonical columns",
            path.display(),
            registry.ratings.len()
        );
        return Ok(CorrectionOutcome::AlreadyCorrect(path.to_path_buf()));
    };

    let output = mode.output_path(path);
    projected.write_tsv(&output)?;
    info!(
        "ratings: wrote exactly {} columns to {}",
        registry.ratings.len(),
        output.display()
    );
    Ok(CorrectionOutcome::Corrected(output))
}

/// Project an in-memory ratings table; `None` when it is already canonical.
pub fn project_ratings_table(table: Table, registry: &SchemaRegistry) -> Option<Table> {
    if registry.ratings.matches(table.headers()) {
        return None;
    }

    let dropped: Vec<&String> = table
        .headers()
        .iter()
        .filter(|h| !registry.ratings.contains(h))
        .collect();
    let added: Vec<&String> = registry
        .ratings
        .names()
        .iter()
        .filter(|c| table.column(c).is_none())
        .collect();
    debug!("ratings: dropping {dropped:?}, adding {added:?}");

    Some(table.into_projection(registry.ratings.names(), ""))
}
