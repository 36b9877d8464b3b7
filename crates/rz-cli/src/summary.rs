use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rz_layout::Layout;
use rz_model::{ColumnKind, Schema};
use rz_validate::ValidationReport;

use crate::pipeline::GenerateResult;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

pub fn print_generate_summary(result: &GenerateResult) {
    println!("Workbook: {}", result.workbook.display());
    for module in &result.modules {
        println!("Macro module: {}", module.display());
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell(""), header_cell("Count")]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table.add_row(vec![Cell::new("Schools"), Cell::new(result.schools)]);
    table.add_row(vec![Cell::new("Discipline columns"), Cell::new(result.columns)]);
    table.add_row(vec![Cell::new("Pairs"), Cell::new(result.pairs)]);
    table.add_row(vec![Cell::new("Single links"), Cell::new(result.links)]);
    println!("{table}");
}

pub fn print_findings(report: &ValidationReport) {
    if report.is_clean() {
        println!("No findings; the workbook would save cleanly.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("School"),
        header_cell("Discipline"),
        header_cell("Column"),
        header_cell("Kind"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    for finding in &report.findings {
        table.add_row(vec![
            Cell::new(finding.row),
            Cell::new(&finding.school),
            Cell::new(&finding.subject),
            Cell::new(finding.column),
            Cell::new(finding.kind).fg(Color::Red),
            Cell::new(&finding.message),
        ]);
    }
    println!("{table}");
    println!("{} finding(s)", report.len());
}

pub fn print_schema(schema: &Schema, layout: &Layout) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Discipline"),
        header_cell("Key"),
        header_cell("Kind"),
        header_cell("Bounds"),
        header_cell("Col"),
    ]);
    apply_table_style(&mut table);
    for category in schema.categories() {
        for discipline in &category.disciplines {
            let column = layout
                .column(&discipline.key)
                .map(|plan| plan.column.to_string())
                .unwrap_or_default();
            let kind = match discipline.kind {
                ColumnKind::Participation => "Participa",
                ColumnKind::HeadCount => "Nº Part.",
            };
            table.add_row(vec![
                Cell::new(&category.name),
                Cell::new(&discipline.name),
                Cell::new(&discipline.key),
                Cell::new(kind),
                Cell::new(
                    discipline
                        .bounds
                        .map(|bounds| bounds.to_string())
                        .unwrap_or_default(),
                ),
                Cell::new(column),
            ]);
        }
    }
    println!("{table}");

    let mut bindings = Table::new();
    bindings.set_header(vec![
        header_cell("Binding"),
        header_cell("Type"),
        header_cell("Individual / Trigger"),
        header_cell("Team"),
        header_cell("Count"),
    ]);
    apply_table_style(&mut bindings);
    for pair in schema.pairs() {
        bindings.add_row(vec![
            Cell::new(&pair.name),
            Cell::new("pair"),
            Cell::new(&pair.individual),
            Cell::new(&pair.team),
            Cell::new(&pair.count),
        ]);
    }
    for link in schema.links() {
        bindings.add_row(vec![
            Cell::new(&link.name),
            Cell::new("link"),
            Cell::new(&link.trigger),
            Cell::new("-"),
            Cell::new(&link.count),
        ]);
    }
    println!("{bindings}");
}
