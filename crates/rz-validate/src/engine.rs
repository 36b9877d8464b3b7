//! The row validator.
//!
//! Implements the same three-way check the generated `Workbook_BeforeSave`
//! macro enforces, over a grid snapshot instead of live cells: an entered
//! individual variant requires the exact head count, an entered team
//! variant requires a numeric count within bounds, and a discipline left
//! out requires an empty count cell. Unlike the macro, which stops at the
//! first violation to focus the offending cell, this engine reports every
//! finding in one pass.

use rz_layout::{Layout, ResolvedLink, ResolvedPair};
use rz_model::MARK_YES;
use rz_workbook::{CellValue, GridSnapshot, RowSnapshot};

use crate::report::{Finding, FindingKind, ValidationReport};

/// Validate a grid snapshot against the layout's resolved constraints.
pub fn validate_grid(layout: &Layout, grid: &GridSnapshot) -> ValidationReport {
    let mut findings = Vec::new();
    for row in &grid.rows {
        for pair in &layout.pairs {
            check_pair(row, pair, &mut findings);
        }
        for link in &layout.links {
            check_link(row, link, &mut findings);
        }
    }
    ValidationReport { findings }
}

fn check_pair(row: &RowSnapshot, pair: &ResolvedPair, findings: &mut Vec<Finding>) {
    let individual = row.cell(pair.individual_column);
    let team = row.cell(pair.team_column);
    let count = row.cell(pair.count_column);

    if individual.is_mark(MARK_YES) {
        let expected = f64::from(pair.individual_count);
        if count.as_number() != Some(expected) {
            findings.push(Finding {
                row: row.row,
                school: row.school.clone(),
                subject: pair.name.clone(),
                column: pair.count_column,
                kind: FindingKind::ExactCountMismatch,
                message: format!(
                    "[{} - Indiv.] exige exactamente {} participante.",
                    pair.name, pair.individual_count
                ),
            });
        }
    } else if team.is_mark(MARK_YES) {
        check_ranged_count(
            row,
            &pair.name,
            Some(" - Equipo"),
            pair.count_column,
            count,
            pair.team_min,
            pair.team_max,
            findings,
        );
    } else if !count.is_blank() {
        findings.push(stray_count(row, &pair.name, pair.count_column));
    }
}

fn check_link(row: &RowSnapshot, link: &ResolvedLink, findings: &mut Vec<Finding>) {
    let trigger = row.cell(link.trigger_column);
    let count = row.cell(link.count_column);

    if trigger.is_mark(MARK_YES) {
        check_ranged_count(
            row,
            &link.name,
            None,
            link.count_column,
            count,
            link.min,
            link.max,
            findings,
        );
    } else if !count.is_blank() {
        findings.push(stray_count(row, &link.name, link.count_column));
    }
}

#[allow(clippy::too_many_arguments)]
fn check_ranged_count(
    row: &RowSnapshot,
    subject: &str,
    suffix: Option<&str>,
    column: u16,
    count: &CellValue,
    min: u32,
    max: u32,
    findings: &mut Vec<Finding>,
) {
    let label = match suffix {
        Some(suffix) => format!("{subject}{suffix}"),
        None => subject.to_string(),
    };
    let kind = if count.is_blank() {
        FindingKind::MissingCount
    } else {
        match count.as_number() {
            None => FindingKind::CountNotNumeric,
            Some(value) if value < f64::from(min) || value > f64::from(max) => {
                FindingKind::CountOutOfRange
            }
            Some(_) => return,
        }
    };
    let message = match kind {
        FindingKind::MissingCount => {
            format!("Falta el número de participantes en [{label}]")
        }
        _ => format!("[{label}] exige entre {min} y {max} participantes."),
    };
    findings.push(Finding {
        row: row.row,
        school: row.school.clone(),
        subject: subject.to_string(),
        column,
        kind,
        message,
    });
}

fn stray_count(row: &RowSnapshot, subject: &str, column: u16) -> Finding {
    Finding {
        row: row.row,
        school: row.school.clone(),
        subject: subject.to_string(),
        column,
        kind: FindingKind::StrayCount,
        message: format!(
            "Si NO participa en [{subject}], el número de participantes debe estar vacío."
        ),
    }
}
