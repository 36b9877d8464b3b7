//! Module-level generation tests: assembly, determinism, reference
//! verification, and sidecar file output.

use rz_layout::{Layout, ResolvedPair, compile};
use rz_model::{Category, Discipline, LinkBinding, PairBinding, School, Schema};
use rz_vba::{SHEET_MODULE_FILE, VbaError, WORKBOOK_MODULE_FILE, generate_modules, write_modules};

/// One pair (columns 4-6) and one link (columns 7-8), two schools (rows 5-6).
fn small_layout() -> Layout {
    let schema = Schema::new(
        vec![Category::new(
            "Arte",
            vec![
                Discipline::participation_bounded("canto_solista", "Canto - Solista", 1, 1),
                Discipline::participation_bounded("canto_dueto", "Canto - Dueto", 2, 2),
                Discipline::head_count("canto_num", "Canto - Nº Part.", 1, 2),
                Discipline::participation("teatro", "Teatro (1-10)"),
                Discipline::head_count("teatro_num", "Teatro - Nº Part.", 1, 10),
            ],
        )],
        vec![PairBinding::new(
            "Canto",
            "canto_solista",
            "canto_dueto",
            "canto_num",
        )],
        vec![LinkBinding::new("Teatro", "teatro", "teatro_num")],
        vec![
            School::new("21EBH0000A", "ESCUELA UNO", "LOCALIDAD UNO"),
            School::new("21EBH0001B", "ESCUELA DOS", "LOCALIDAD DOS"),
        ],
    )
    .expect("schema");
    compile(&schema).expect("layout")
}

#[test]
fn worksheet_change_snapshot() {
    let modules = generate_modules(&small_layout()).expect("modules");
    insta::assert_snapshot!("worksheet_change", modules.worksheet_change);
}

#[test]
fn before_save_covers_every_binding_and_row() {
    let modules = generate_modules(&small_layout()).expect("modules");
    let code = &modules.workbook_before_save;
    assert!(code.starts_with("Private Sub Workbook_BeforeSave"));
    assert!(code.contains("Set ws = ThisWorkbook.Sheets(\"Registro General\")"));
    // Row range comes from the school count, not a fixed literal.
    assert_eq!(code.matches("For r = 5 To 6").count(), 2);
    // Pair: exact individual count, team range, must-be-empty branch.
    assert!(code.contains("If num_val <> 1 Then"));
    assert!(code.contains("num_val < 2 Or num_val > 2"));
    assert!(code.contains("[Canto - Equipo] exige entre 2 y 2 participantes."));
    // Link: its own bounds.
    assert!(code.contains("[Teatro] exige entre 1 y 10 participantes."));
    assert!(code.ends_with("End Sub\n"));
}

#[test]
fn generation_is_deterministic() {
    let layout = small_layout();
    let first = generate_modules(&layout).expect("modules");
    let second = generate_modules(&layout).expect("modules");
    assert_eq!(first, second);
}

#[test]
fn dangling_column_reference_aborts_generation() {
    let mut layout = small_layout();
    layout.pairs.push(ResolvedPair {
        name: "Fantasma".to_string(),
        individual_column: 90,
        team_column: 91,
        count_column: 92,
        individual_count: 1,
        team_min: 2,
        team_max: 3,
    });
    let err = generate_modules(&layout).unwrap_err();
    match err {
        VbaError::UnassignedColumn { binding, column } => {
            assert_eq!(binding, "Fantasma");
            assert_eq!(column, 90);
        }
        other => panic!("expected UnassignedColumn, got {other:?}"),
    }
}

#[test]
fn write_modules_emits_both_sidecar_files() {
    let modules = generate_modules(&small_layout()).expect("modules");
    let dir = tempfile::tempdir().expect("tempdir");
    let paths = write_modules(dir.path(), &modules).expect("write");
    assert_eq!(paths.len(), 2);
    assert_eq!(paths[0].file_name().unwrap(), SHEET_MODULE_FILE);
    assert_eq!(paths[1].file_name().unwrap(), WORKBOOK_MODULE_FILE);
    let sheet = std::fs::read_to_string(&paths[0]).expect("read sheet module");
    assert_eq!(sheet, modules.worksheet_change);
}
