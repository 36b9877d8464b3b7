//! Workbook reader: raw sheet dumps for `inspect` and grid extraction for
//! `check`.

use std::path::Path;

use calamine::{Data, Reader, Xlsx, open_workbook};

use rz_layout::{Layout, SCHOOL_CCT_COL, SCHOOL_LOCALITY_COL, SCHOOL_NAME_COL};
use rz_model::GRID_SHEET;

use crate::error::{Result, WorkbookError};
use crate::grid::{CellValue, GridSnapshot, RowSnapshot};

/// Cell text is clipped to this many characters in dumps.
const DUMP_VALUE_LIMIT: usize = 50;

/// Raw contents of one sheet, values rendered as clipped strings.
#[derive(Debug, Clone)]
pub struct SheetDump {
    pub name: String,
    pub height: usize,
    pub width: usize,
    pub rows: Vec<Vec<String>>,
}

/// Dump every sheet of a workbook, keeping at most `max_rows` rows each.
pub fn dump_workbook(path: &Path, max_rows: usize) -> Result<Vec<SheetDump>> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let names = workbook.sheet_names().to_vec();
    let mut dumps = Vec::with_capacity(names.len());
    for name in names {
        let range = workbook.worksheet_range(&name)?;
        let rows = range
            .rows()
            .take(max_rows)
            .map(|row| row.iter().map(clip_value).collect())
            .collect();
        dumps.push(SheetDump {
            name,
            height: range.height(),
            width: range.width(),
            rows,
        });
    }
    Ok(dumps)
}

/// Load the data-entry grid of a generated workbook.
///
/// Rows and columns to read come from the layout, so this stays in sync
/// with whatever schema produced the file.
pub fn load_grid(path: &Path, layout: &Layout) -> Result<GridSnapshot> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    if !workbook.sheet_names().iter().any(|name| name == GRID_SHEET) {
        return Err(WorkbookError::MissingSheet(GRID_SHEET.to_string()));
    }
    let range = workbook.worksheet_range(GRID_SHEET)?;

    let mut rows = Vec::with_capacity(layout.data_rows.len());
    for row in layout.data_rows.rows() {
        let text_at = |column: u16| -> String {
            match value_at(&range, row, column) {
                CellValue::Text(text) => text,
                CellValue::Number(number) => number.to_string(),
                CellValue::Empty => String::new(),
            }
        };
        let mut cells = std::collections::BTreeMap::new();
        for plan in &layout.columns {
            cells.insert(plan.column, value_at(&range, row, plan.column));
        }
        rows.push(RowSnapshot {
            row,
            cct: text_at(SCHOOL_CCT_COL),
            school: text_at(SCHOOL_NAME_COL),
            locality: text_at(SCHOOL_LOCALITY_COL),
            cells,
        });
    }
    Ok(GridSnapshot { rows })
}

/// Read one cell by 1-based grid coordinates.
fn value_at(range: &calamine::Range<Data>, row: u32, column: u16) -> CellValue {
    let data = range.get_value((row - 1, u32::from(column) - 1));
    match data {
        None | Some(Data::Empty) => CellValue::Empty,
        Some(Data::String(text)) => {
            if text.trim().is_empty() {
                CellValue::Empty
            } else {
                CellValue::Text(text.clone())
            }
        }
        Some(Data::Float(value)) => CellValue::Number(*value),
        Some(Data::Int(value)) => CellValue::Number(*value as f64),
        Some(other) => CellValue::Text(other.to_string()),
    }
}

fn clip_value(data: &Data) -> String {
    let text = match data {
        Data::Empty => String::new(),
        other => other.to_string(),
    };
    if text.chars().count() > DUMP_VALUE_LIMIT {
        text.chars().take(DUMP_VALUE_LIMIT).collect()
    } else {
        text
    }
}
