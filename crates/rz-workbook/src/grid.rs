//! In-memory snapshot of a filled data-entry grid, as read back from a
//! workbook. Consumed by the validator and the `check` command.

use std::collections::BTreeMap;

use serde::Serialize;

/// One grid cell's content, reduced to what the validation rules care about.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
}

impl CellValue {
    /// Numeric view of the cell: a number, or text that parses as one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(value) => Some(*value),
            CellValue::Text(text) => text.trim().parse().ok(),
            CellValue::Empty => None,
        }
    }

    /// True when the cell is empty or holds only whitespace.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(text) => text.trim().is_empty(),
            CellValue::Number(_) => false,
        }
    }

    /// True when the cell holds the given participation mark.
    pub fn is_mark(&self, mark: &str) -> bool {
        matches!(self, CellValue::Text(text) if text.trim() == mark)
    }
}

/// One school's row: identity cells plus discipline cells keyed by the
/// 1-based grid column.
#[derive(Debug, Clone, Serialize)]
pub struct RowSnapshot {
    /// 1-based grid row.
    pub row: u32,
    pub cct: String,
    pub school: String,
    pub locality: String,
    pub cells: BTreeMap<u16, CellValue>,
}

impl RowSnapshot {
    /// Cell at a 1-based grid column; absent cells read as empty.
    pub fn cell(&self, column: u16) -> &CellValue {
        self.cells.get(&column).unwrap_or(&CellValue::Empty)
    }
}

/// The full data-entry area of a workbook.
#[derive(Debug, Clone, Serialize)]
pub struct GridSnapshot {
    pub rows: Vec<RowSnapshot>,
}
