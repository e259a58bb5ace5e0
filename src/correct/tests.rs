use super::*;
use crate::schema::{ColumnSchema, NoteRepair, SchemaRegistry};
use std::fs;
use tempfile::tempdir;

fn notes_header(columns: usize) -> Vec<String> {
    SchemaRegistry::builtin().notes.names()[..columns].to_vec()
}

fn write_rows(path: &Path, header: &[String], rows: &[Vec<String>]) {
    let mut text = header.join("\t");
    text.push('\n');
    for row in rows {
        text.push_str(&row.join("\t"));
        text.push('\n');
    }
    fs::write(path, text).unwrap();
}

fn data_row(id: &str, width: usize) -> Vec<String> {
    (0..width)
        .map(|i| if i == 0 { id.to_string() } else { format!("{id}-{i}") })
        .collect()
}

fn small_ratings_registry() -> SchemaRegistry {
    let builtin = SchemaRegistry::builtin();
    SchemaRegistry::new(
        builtin.notes.clone(),
        ColumnSchema::new(["noteId", "raterParticipantId", "helpful"]).unwrap(),
        NoteRepair::default(),
    )
    .unwrap()
}

#[test]
fn test_notes_already_correct_is_untouched() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.tsv");
    write_rows(&path, &notes_header(24), &[data_row("N1", 24)]);
    let before = fs::read(&path).unwrap();

    let outcome = correct_notes(&path, SchemaRegistry::builtin(), OutputMode::Sibling).unwrap();

    assert_eq!(outcome, CorrectionOutcome::AlreadyCorrect(path.clone()));
    assert_eq!(fs::read(&path).unwrap(), before);
    assert!(!sibling_path(&path).exists());
}

#[test]
fn test_notes_missing_column_is_added() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.tsv");
    write_rows(
        &path,
        &notes_header(23),
        &[data_row("N1", 23), data_row("N2", 23)],
    );

    let outcome = correct_notes(&path, SchemaRegistry::builtin(), OutputMode::InPlace).unwrap();
    assert_eq!(outcome, CorrectionOutcome::Corrected(path.clone()));

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with("\tisMediaNote\tisCollaborativeNote"));
    assert!(lines[1].starts_with("N1\tN1-1\t"));
    for line in &lines[1..] {
        assert_eq!(line.split('\t').count(), 24);
        assert!(line.ends_with("\t0"));
    }
}

#[test]
fn test_notes_columns_are_reordered() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.tsv");

    let mut header = notes_header(23);
    header.swap(0, 1);
    let mut row = data_row("N1", 23);
    row.swap(0, 1);
    write_rows(&path, &header, &[row]);

    correct_notes(&path, SchemaRegistry::builtin(), OutputMode::InPlace).unwrap();

    let table = crate::table::Table::read_tsv(&path).unwrap();
    assert!(SchemaRegistry::builtin().notes.matches(table.headers()));
    assert_eq!(table.rows()[0][0], "N1");
    assert_eq!(table.rows()[0][1], "N1-1");
    assert_eq!(table.rows()[0][23], "0");
}

#[test]
fn test_notes_sibling_mode_keeps_original() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes-00000.tsv");
    write_rows(&path, &notes_header(23), &[data_row("N1", 23)]);
    let before = fs::read(&path).unwrap();

    let outcome = correct_notes(&path, SchemaRegistry::builtin(), OutputMode::Sibling).unwrap();

    let expected = dir.path().join("notes-00000_fixed.tsv");
    assert_eq!(outcome, CorrectionOutcome::Corrected(expected.clone()));
    assert_eq!(fs::read(&path).unwrap(), before);
    assert!(expected.exists());
}

#[test]
fn test_notes_unrecognized_width_is_rejected() {
    let dir = tempdir().unwrap();
    for width in [22, 25, 1] {
        let path = dir.path().join(format!("notes{width}.tsv"));
        let header: Vec<String> = (0..width).map(|i| format!("c{i}")).collect();
        write_rows(&path, &header, &[data_row("N1", width)]);
        let before = fs::read(&path).unwrap();

        let err =
            correct_notes(&path, SchemaRegistry::builtin(), OutputMode::Sibling).unwrap_err();
        match err {
            CorrectionError::SchemaMismatch {
                expected, found, ..
            } => {
                assert_eq!(expected, 24);
                assert_eq!(found, width);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(fs::read(&path).unwrap(), before);
        assert!(!sibling_path(&path).exists());
    }
}

#[test]
fn test_notes_with_wrong_column_set_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.tsv");

    // 23 columns, but the repair column is present and `summary` is not.
    let mut header = notes_header(24);
    header.retain(|c| c != "summary");
    write_rows(&path, &header, &[data_row("N1", 23)]);

    let err = correct_notes(&path, SchemaRegistry::builtin(), OutputMode::InPlace).unwrap_err();
    match err {
        CorrectionError::UnexpectedColumns { unknown, missing, .. } => {
            assert_eq!(unknown, vec!["isCollaborativeNote".to_string()]);
            assert_eq!(missing, vec!["summary".to_string()]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_notes_missing_file() {
    let dir = tempdir().unwrap();
    let err = correct_notes(
        &dir.path().join("absent.tsv"),
        SchemaRegistry::builtin(),
        OutputMode::InPlace,
    )
    .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_ratings_extra_column_is_dropped() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ratings.tsv");
    fs::write(
        &path,
        "noteId\traterParticipantId\thelpful\tcorrelatedRater\nN1\tR1\t1\tR9\n",
    )
    .unwrap();

    let registry = small_ratings_registry();
    let outcome = correct_ratings(&path, &registry, OutputMode::InPlace).unwrap();
    assert!(outcome.is_corrected());

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, "noteId\traterParticipantId\thelpful\nN1\tR1\t1\n");

    let again = correct_ratings(&path, &registry, OutputMode::InPlace).unwrap();
    assert_eq!(again, CorrectionOutcome::AlreadyCorrect(path.clone()));
}

#[test]
fn test_ratings_missing_and_reordered_columns() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ratings.tsv");
    fs::write(&path, "raterParticipantId\tnoteId\nR1\tN1\nR2\tN2\n").unwrap();

    let registry = small_ratings_registry();
    let outcome = correct_ratings(&path, &registry, OutputMode::Sibling).unwrap();

    let output = dir.path().join("ratings_fixed.tsv");
    assert_eq!(outcome, CorrectionOutcome::Corrected(output.clone()));
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "noteId\traterParticipantId\thelpful\nN1\tR1\t\nN2\tR2\t\n"
    );
}

#[test]
fn test_ratings_missing_file_is_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ratings.tsv");
    let err = correct_ratings(&path, SchemaRegistry::builtin(), OutputMode::InPlace).unwrap_err();
    assert!(matches!(err, CorrectionError::FileNotFound(p) if p == path));
}

#[test]
fn test_sibling_path() {
    assert_eq!(
        sibling_path(Path::new("data/notes-00000.tsv")),
        PathBuf::from("data/notes-00000_fixed.tsv")
    );
    assert_eq!(
        sibling_path(Path::new("data/notes.txt")),
        PathBuf::from("data/notes.txt_fixed")
    );
    // only a trailing `.tsv` is treated as the extension
    assert_eq!(
        sibling_path(Path::new("data/notes.tsv.bak")),
        PathBuf::from("data/notes.tsv.bak_fixed")
    );
    assert_eq!(
        OutputMode::InPlace.output_path(Path::new("a.tsv")),
        PathBuf::from("a.tsv")
    );
}

#[test]
fn test_notes_already_correct_ignores_rows() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.tsv");
    write_rows(
        &path,
        &notes_header(24),
        &[data_row("N1", 24), data_row("N2", 26)],
    );

    let outcome = correct_notes(&path, SchemaRegistry::builtin(), OutputMode::InPlace).unwrap();
    assert_eq!(outcome, CorrectionOutcome::AlreadyCorrect(path.clone()));
}

#[test]
fn test_notes_quoted_summary_is_kept_verbatim() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.tsv");
    let summary = notes_header(23)
        .iter()
        .position(|c| c == "summary")
        .unwrap();

    let mut unmatched = data_row("N1", 23);
    unmatched[summary] = "\"Wrong claim".to_string();
    let mut paired = data_row("N2", 23);
    paired[summary] = "\"Fake\" says the post".to_string();
    write_rows(
        &path,
        &notes_header(23),
        &[unmatched, paired, data_row("N3", 23)],
    );

    correct_notes(&path, SchemaRegistry::builtin(), OutputMode::InPlace).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1].split('\t').nth(summary), Some("\"Wrong claim"));
    assert_eq!(lines[2].split('\t').nth(summary), Some("\"Fake\" says the post"));
    assert!(lines[3].starts_with("N3\t"));
    assert!(lines.iter().all(|l| l.split('\t').count() == 24));
}

#[test]
fn test_ratings_quoted_cell_is_kept_verbatim() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ratings.tsv");
    fs::write(
        &path,
        "noteId\traterParticipantId\thelpful\tcorrelatedRater\n\"N1\tR1\t1\tR9\nN2\tR2\t0\t\n",
    )
    .unwrap();

    correct_ratings(&path, &small_ratings_registry(), OutputMode::InPlace).unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "noteId\traterParticipantId\thelpful\n\"N1\tR1\t1\nN2\tR2\t0\n"
    );
}
