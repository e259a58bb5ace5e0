use std::path::Path;

use log::{debug, info};

use super::{CorrectionError, CorrectionOutcome, OutputMode};
use crate::schema::SchemaRegistry;
use crate::table::Table;

/// Bring a notes file to the canonical notes schema.
///
/// - canonical column count: [`CorrectionOutcome::AlreadyCorrect`], nothing written
/// - one column short: the repair column is added with its default value, columns
///   are put in canonical order, and the result is written per `mode`
/// - anything else: [`CorrectionError::SchemaMismatch`], nothing written
pub fn correct_notes(
    path: &Path,
    registry: &SchemaRegistry,
    mode: OutputMode,
) -> Result<CorrectionOutcome, CorrectionError> {
    let expected = registry.notes.len();
    let found = Table::read_tsv_headers(path)?.len();
    info!(
        "notes {}: {} columns (expected {})",
        path.display(),
        found,
        expected
    );

    // Width is decided by the header alone; rows are only loaded for a repair.
    if found == expected {
        return Ok(CorrectionOutcome::AlreadyCorrect(path.to_path_buf()));
    }
    if found != registry.notes_deficit_len() {
        return Err(CorrectionError::SchemaMismatch {
            path: path.to_path_buf(),
            expected,
            found,
        });
    }

    let table = Table::read_tsv(path)?;
    let Some(repaired) = repair_notes_table(table, registry, path)? else {
        return Ok(CorrectionOutcome::AlreadyCorrect(path.to_path_buf()));
    };

    let output = mode.output_path(path);
    repaired.write_tsv(&output)?;
    info!(
        "notes: added '{}', wrote {}",
        registry.repair.missing_column,
        output.display()
    );
    Ok(CorrectionOutcome::Corrected(output))
}

/// Repair an in-memory notes table.
///
/// Returns `Ok(None)` when the table already has the canonical column count. `source`
/// only names the file in errors.
pub fn repair_notes_table(
    mut table: Table,
    registry: &SchemaRegistry,
    source: &Path,
) -> Result<Option<Table>, CorrectionError> {
    let expected = registry.notes.len();
    let found = table.column_count();

    if found == expected {
        return Ok(None);
    }
    if found != registry.notes_deficit_len() {
        return Err(CorrectionError::SchemaMismatch {
            path: source.to_path_buf(),
            expected,
            found,
        });
    }

    let repair = &registry.repair;
    table.push_column(&repair.missing_column, &repair.default_value);

    if !registry.notes.matches(table.headers()) {
        check_permutation(&table, registry, source)?;
        debug!("notes header order differs from canonical; reordering");
        table = table.into_projection(registry.notes.names(), "");
    }

    Ok(Some(table))
}

/// After the repair column is added the header must be a reordering of the schema.
fn check_permutation(
    table: &Table,
    registry: &SchemaRegistry,
    source: &Path,
) -> Result<(), CorrectionError> {
    let headers = table.headers();

    let unknown: Vec<String> = headers
        .iter()
        .enumerate()
        .filter(|(index, name)| {
            !registry.notes.contains(name) || table.column(name) != Some(*index)
        })
        .map(|(_, name)| name.clone())
        .collect();

    let missing: Vec<String> = registry
        .notes
        .names()
        .iter()
        .filter(|name| table.column(name).is_none())
        .cloned()
        .collect();

    if unknown.is_empty() && missing.is_empty() {
        Ok(())
    } else {
        Err(CorrectionError::UnexpectedColumns {
            path: source.to_path_buf(),
            unknown,
            missing,
        })
    }
}
