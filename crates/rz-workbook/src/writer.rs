//! Workbook writer.
//!
//! Renders the compiled layout into the three-sheet template: the
//! data-entry grid, the participation summary, and the hidden option list
//! backing the Sí/No dropdowns.

use std::fs;
use std::path::Path;

use rust_xlsxwriter::{
    Color, DataValidation, Format, FormatAlign, FormatBorder, Formula, Workbook, Worksheet,
};
use tracing::{debug, warn};

use rz_layout::{
    ColumnPlan, FIRST_DISCIPLINE_COL, Layout, SUB_LABEL_ROW, column_letter,
};
use rz_model::{
    ColumnKind, GRID_SHEET, LISTS_SHEET, MARK_NO, MARK_YES, OPTION_LIST_TITLE, SUMMARY_SHEET,
    Schema,
};

use crate::error::Result;

/// Cell formats used across the template.
struct Formats {
    header_main: Format,
    header_cat: Format,
    header_disc: Format,
    header_sub: Format,
    cell: Format,
    cell_locked: Format,
    num: Format,
}

impl Formats {
    fn new() -> Self {
        let centered = || {
            Format::new()
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter)
                .set_border(FormatBorder::Thin)
        };
        Self {
            header_main: centered()
                .set_bold()
                .set_background_color(Color::RGB(0x1F4E78))
                .set_font_color(Color::White),
            header_cat: centered()
                .set_bold()
                .set_background_color(Color::RGB(0x2E75B6))
                .set_font_color(Color::White),
            header_disc: centered()
                .set_bold()
                .set_background_color(Color::RGB(0xDDEBF7))
                .set_text_wrap(),
            header_sub: centered()
                .set_bold()
                .set_background_color(Color::RGB(0xF2F2F2))
                .set_font_size(9),
            cell: centered(),
            cell_locked: centered().set_background_color(Color::RGB(0xE2EFDA)),
            num: centered().set_background_color(Color::RGB(0xFFF2CC)),
        }
    }

    fn label(&self, kind: ColumnKind) -> &Format {
        match kind {
            ColumnKind::Participation => &self.header_disc,
            ColumnKind::HeadCount => &self.num,
        }
    }
}

/// Write the registration workbook to `path`.
///
/// A pre-existing file is removed best-effort first; when removal fails
/// (file open in a spreadsheet application, typically) the failure is
/// logged and the save itself reports the real error.
pub fn write_workbook(path: &Path, schema: &Schema, layout: &Layout) -> Result<()> {
    if path.exists() {
        if let Err(error) = fs::remove_file(path) {
            warn!(%error, path = %path.display(), "could not remove existing workbook");
        }
    }

    let formats = Formats::new();
    let mut workbook = Workbook::new();

    {
        let sheet = workbook.add_worksheet();
        sheet.set_name(GRID_SHEET)?;
        write_grid_sheet(sheet, schema, layout, &formats)?;
    }
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name(SUMMARY_SHEET)?;
        write_summary_sheet(sheet, layout, &formats)?;
    }
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name(LISTS_SHEET)?;
        write_lists_sheet(sheet)?;
        sheet.set_hidden(true);
    }

    workbook.save(path)?;
    debug!(path = %path.display(), "workbook written");
    Ok(())
}

fn write_grid_sheet(
    sheet: &mut Worksheet,
    schema: &Schema,
    layout: &Layout,
    formats: &Formats,
) -> Result<()> {
    // Header stays visible while scrolling the grid.
    sheet.set_freeze_panes(SUB_LABEL_ROW, FIRST_DISCIPLINE_COL - 1)?;
    sheet.set_column_width(0, 15)?;
    sheet.set_column_width(1, 35)?;
    sheet.set_column_width(2, 22)?;

    sheet.merge_range(0, 0, 0, 2, "DATOS DEL PLANTEL", &formats.header_main)?;
    for row in 1..=2 {
        for col in 0..=2 {
            sheet.write_blank(row, col, &formats.header_main)?;
        }
    }
    sheet.write_string_with_format(3, 0, "CCT", &formats.header_sub)?;
    sheet.write_string_with_format(3, 1, "Nombre del Plantel", &formats.header_sub)?;
    sheet.write_string_with_format(3, 2, "Localidad", &formats.header_sub)?;

    for band in &layout.bands {
        let first = band.first_column - 1;
        let last = band.last_column - 1;
        if first == last {
            sheet.write_string_with_format(0, first, &band.name, &formats.header_cat)?;
        } else {
            sheet.merge_range(0, first, 0, last, &band.name, &formats.header_cat)?;
        }
    }

    for plan in &layout.columns {
        let col = plan.column - 1;
        sheet.merge_range(1, col, 2, col, &plan.name, formats.label(plan.kind))?;
        sheet.write_string_with_format(3, col, plan.sub_label(), &formats.header_sub)?;
        sheet.set_column_width(col, plan.width())?;
    }

    let dropdown = DataValidation::new().allow_list_formula(Formula::new(format!(
        "{LISTS_SHEET}!$A$2:$A$3"
    )));
    for (index, school) in schema.schools().iter().enumerate() {
        let row = layout.data_rows.first - 1 + index as u32;
        sheet.write_string_with_format(row, 0, &school.cct, &formats.cell_locked)?;
        sheet.write_string_with_format(row, 1, &school.name, &formats.cell_locked)?;
        sheet.write_string_with_format(row, 2, &school.locality, &formats.cell_locked)?;

        for plan in &layout.columns {
            let col = plan.column - 1;
            match plan.kind {
                ColumnKind::HeadCount => {
                    sheet.write_blank(row, col, &formats.num)?;
                }
                ColumnKind::Participation => {
                    sheet.write_string_with_format(row, col, MARK_NO, &formats.cell)?;
                    sheet.add_data_validation(row, col, row, col, &dropdown)?;
                }
            }
        }
    }

    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, layout: &Layout, formats: &Formats) -> Result<()> {
    sheet.write_string_with_format(
        0,
        0,
        "RESUMEN DE PARTICIPACIÓN POR DISCIPLINA",
        &formats.header_main,
    )?;
    sheet.set_column_width(0, 40)?;
    sheet.set_column_width(1, 15)?;

    let mut row = 2;
    for plan in &layout.columns {
        if plan.kind != ColumnKind::Participation {
            continue;
        }
        sheet.write_string_with_format(row, 0, &plan.name, &formats.cell_locked)?;
        sheet.write_formula_with_format(
            row,
            1,
            Formula::new(summary_formula(plan, layout)),
            &formats.cell,
        )?;
        row += 1;
    }
    Ok(())
}

/// COUNTIF formula counting "Sí" marks in one discipline's column over the
/// computed data row range.
pub(crate) fn summary_formula(plan: &ColumnPlan, layout: &Layout) -> String {
    let letter = column_letter(plan.column);
    format!(
        "=COUNTIF('{GRID_SHEET}'!{letter}{first}:{letter}{last}, \"{MARK_YES}\")",
        first = layout.data_rows.first,
        last = layout.data_rows.last,
    )
}

fn write_lists_sheet(sheet: &mut Worksheet) -> Result<()> {
    sheet.write_string(0, 0, OPTION_LIST_TITLE)?;
    sheet.write_string(1, 0, MARK_NO)?;
    sheet.write_string(2, 0, MARK_YES)?;
    Ok(())
}
