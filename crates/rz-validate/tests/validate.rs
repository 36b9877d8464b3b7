//! Validator tests for the pair and single-link rule matrices.

use std::collections::BTreeMap;

use rz_layout::{Layout, compile};
use rz_model::{Category, Discipline, LinkBinding, PairBinding, School, Schema};
use rz_validate::{FindingKind, validate_grid};
use rz_workbook::{CellValue, GridSnapshot, RowSnapshot};

/// Pair with individual count 1 and team range 2-3 (columns 4-6), plus a
/// single link with range 2-4 (columns 7-8). One school, data row 5.
fn layout() -> Layout {
    let schema = Schema::new(
        vec![Category::new(
            "Tech-Desafíos",
            vec![
                Discipline::participation_bounded("humor_ind", "Humor - Ind", 1, 1),
                Discipline::participation_bounded("humor_eq", "Humor - Eq", 2, 3),
                Discipline::head_count("humor_num", "Humor - Nº Part.", 1, 3),
                Discipline::participation("ciencias", "Enc. Ciencias (2-4)"),
                Discipline::head_count("ciencias_num", "Ciencias - Nº Part.", 2, 4),
            ],
        )],
        vec![PairBinding::new("Humor", "humor_ind", "humor_eq", "humor_num")],
        vec![LinkBinding::new("Ciencias", "ciencias", "ciencias_num")],
        vec![School::new("21EBH0000A", "ESCUELA UNO", "LOCALIDAD")],
    )
    .expect("schema");
    compile(&schema).expect("layout")
}

fn text(value: &str) -> CellValue {
    CellValue::Text(value.to_string())
}

fn grid(cells: Vec<(u16, CellValue)>) -> GridSnapshot {
    GridSnapshot {
        rows: vec![RowSnapshot {
            row: 5,
            cct: "21EBH0000A".to_string(),
            school: "ESCUELA UNO".to_string(),
            locality: "LOCALIDAD".to_string(),
            cells: BTreeMap::from_iter(cells),
        }],
    }
}

#[test]
fn individual_with_exact_count_passes() {
    let report = validate_grid(
        &layout(),
        &grid(vec![(4, text("Sí")), (6, CellValue::Number(1.0))]),
    );
    assert!(report.is_clean(), "unexpected findings: {:?}", report.findings);
}

#[test]
fn individual_with_team_count_fails() {
    let report = validate_grid(
        &layout(),
        &grid(vec![(4, text("Sí")), (6, CellValue::Number(2.0))]),
    );
    assert_eq!(report.len(), 1);
    assert_eq!(report.findings[0].kind, FindingKind::ExactCountMismatch);
    assert_eq!(report.findings[0].column, 6);
    assert_eq!(report.findings[0].row, 5);
    assert_eq!(report.findings[0].school, "ESCUELA UNO");
}

#[test]
fn individual_with_empty_count_fails() {
    let report = validate_grid(&layout(), &grid(vec![(4, text("Sí"))]));
    assert_eq!(report.len(), 1);
    assert_eq!(report.findings[0].kind, FindingKind::ExactCountMismatch);
}

#[test]
fn team_with_count_in_range_passes() {
    let report = validate_grid(
        &layout(),
        &grid(vec![(5, text("Sí")), (6, CellValue::Number(2.0))]),
    );
    assert!(report.is_clean());
}

#[test]
fn team_with_count_above_range_fails() {
    let report = validate_grid(
        &layout(),
        &grid(vec![(5, text("Sí")), (6, CellValue::Number(4.0))]),
    );
    assert_eq!(report.len(), 1);
    assert_eq!(report.findings[0].kind, FindingKind::CountOutOfRange);
}

#[test]
fn team_with_empty_count_fails() {
    let report = validate_grid(&layout(), &grid(vec![(5, text("Sí"))]));
    assert_eq!(report.len(), 1);
    assert_eq!(report.findings[0].kind, FindingKind::MissingCount);
}

#[test]
fn team_with_text_count_fails() {
    let report = validate_grid(
        &layout(),
        &grid(vec![(5, text("Sí")), (6, text("dos"))]),
    );
    assert_eq!(report.len(), 1);
    assert_eq!(report.findings[0].kind, FindingKind::CountNotNumeric);
}

#[test]
fn numeric_text_counts_as_a_number() {
    let report = validate_grid(&layout(), &grid(vec![(5, text("Sí")), (6, text("3"))]));
    assert!(report.is_clean());
}

#[test]
fn neither_variant_with_empty_count_passes() {
    let report = validate_grid(&layout(), &grid(vec![(4, text("No")), (5, text("No"))]));
    assert!(report.is_clean());
}

#[test]
fn neither_variant_with_count_fails() {
    let report = validate_grid(
        &layout(),
        &grid(vec![(4, text("No")), (5, text("No")), (6, CellValue::Number(1.0))]),
    );
    assert_eq!(report.len(), 1);
    assert_eq!(report.findings[0].kind, FindingKind::StrayCount);
}

#[test]
fn link_with_count_in_range_passes() {
    let report = validate_grid(
        &layout(),
        &grid(vec![(7, text("Sí")), (8, CellValue::Number(3.0))]),
    );
    assert!(report.is_clean());
}

#[test]
fn link_with_count_below_range_fails() {
    let report = validate_grid(
        &layout(),
        &grid(vec![(7, text("Sí")), (8, CellValue::Number(1.0))]),
    );
    assert_eq!(report.len(), 1);
    assert_eq!(report.findings[0].kind, FindingKind::CountOutOfRange);
    assert_eq!(report.findings[0].subject, "Ciencias");
}

#[test]
fn link_with_count_above_range_fails() {
    let report = validate_grid(
        &layout(),
        &grid(vec![(7, text("Sí")), (8, CellValue::Number(5.0))]),
    );
    assert_eq!(report.len(), 1);
    assert_eq!(report.findings[0].kind, FindingKind::CountOutOfRange);
}

#[test]
fn link_not_entered_with_empty_count_passes() {
    let report = validate_grid(&layout(), &grid(vec![(7, text("No"))]));
    assert!(report.is_clean());
}

#[test]
fn link_not_entered_with_zero_count_fails() {
    let report = validate_grid(
        &layout(),
        &grid(vec![(7, text("No")), (8, CellValue::Number(0.0))]),
    );
    assert_eq!(report.len(), 1);
    assert_eq!(report.findings[0].kind, FindingKind::StrayCount);
}

#[test]
fn violations_across_rows_are_all_reported() {
    let mut snapshot = grid(vec![(4, text("Sí"))]);
    let mut second = snapshot.rows[0].clone();
    second.row = 6;
    second.school = "ESCUELA DOS".to_string();
    second.cells = BTreeMap::from_iter(vec![(7, text("Sí"))]);
    snapshot.rows.push(second);

    let report = validate_grid(&layout(), &snapshot);
    assert_eq!(report.len(), 2);
    assert_eq!(report.findings[0].row, 5);
    assert_eq!(report.findings[1].row, 6);
}

#[test]
fn report_serializes() {
    let report = validate_grid(&layout(), &grid(vec![(4, text("Sí"))]));
    let json = serde_json::to_string(&report).expect("serialize report");
    assert!(json.contains("exact_count_mismatch"));
}
