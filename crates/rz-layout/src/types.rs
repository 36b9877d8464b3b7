//! Compiled layout types.
//!
//! All rows and columns here are 1-based spreadsheet coordinates; the
//! workbook writer converts to whatever its library expects.

use serde::Serialize;

use rz_model::ColumnKind;

/// Column holding the school identifier (CCT).
pub const SCHOOL_CCT_COL: u16 = 1;
/// Column holding the school name.
pub const SCHOOL_NAME_COL: u16 = 2;
/// Column holding the school locality.
pub const SCHOOL_LOCALITY_COL: u16 = 3;
/// First column assigned to a discipline; assignment is contiguous from here.
pub const FIRST_DISCIPLINE_COL: u16 = 4;

/// Row carrying the category bands (and the "DATOS DEL PLANTEL" title).
pub const BAND_ROW: u32 = 1;
/// First of the two rows merged into each discipline label.
pub const LABEL_ROW: u32 = 2;
/// Row carrying the per-column sub-labels ("Participa?" / "#").
pub const SUB_LABEL_ROW: u32 = 4;
/// First data row; one row per school from here on.
pub const FIRST_DATA_ROW: u32 = 5;

/// One discipline's column assignment.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnPlan {
    pub key: String,
    pub name: String,
    pub kind: ColumnKind,
    /// Assigned 1-based column.
    pub column: u16,
}

impl ColumnPlan {
    /// Sub-label rendered beneath the merged discipline label.
    pub fn sub_label(&self) -> &'static str {
        match self.kind {
            ColumnKind::Participation => "Participa?",
            ColumnKind::HeadCount => "#",
        }
    }

    /// Column width in character units.
    pub fn width(&self) -> f64 {
        match self.kind {
            ColumnKind::Participation => 10.0,
            ColumnKind::HeadCount => 8.0,
        }
    }
}

/// Merged header band covering one category's columns.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryBand {
    pub name: String,
    pub first_column: u16,
    pub last_column: u16,
}

/// A pair binding with every reference replaced by column literals.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedPair {
    pub name: String,
    pub individual_column: u16,
    pub team_column: u16,
    pub count_column: u16,
    /// Exact head count required when the individual variant is entered.
    pub individual_count: u32,
    pub team_min: u32,
    pub team_max: u32,
}

/// A single-link binding with every reference replaced by column literals.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedLink {
    pub name: String,
    pub trigger_column: u16,
    pub count_column: u16,
    pub min: u32,
    pub max: u32,
}

/// Inclusive 1-based row range holding school data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RowRange {
    pub first: u32,
    pub last: u32,
}

impl RowRange {
    /// Row range for `count` schools starting at [`FIRST_DATA_ROW`].
    pub fn for_schools(count: usize) -> Self {
        Self {
            first: FIRST_DATA_ROW,
            last: FIRST_DATA_ROW + count as u32 - 1,
        }
    }

    pub fn len(&self) -> usize {
        (self.last - self.first + 1) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.last < self.first
    }

    pub fn contains(&self, row: u32) -> bool {
        row >= self.first && row <= self.last
    }

    pub fn rows(&self) -> impl Iterator<Item = u32> {
        self.first..=self.last
    }
}

/// The compiled grid layout: column assignments, header plan, and the
/// constraint records the macro generator and validator consume.
#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub columns: Vec<ColumnPlan>,
    pub bands: Vec<CategoryBand>,
    pub pairs: Vec<ResolvedPair>,
    pub links: Vec<ResolvedLink>,
    pub data_rows: RowRange,
}

impl Layout {
    /// Look up a column plan by discipline key.
    pub fn column(&self, key: &str) -> Option<&ColumnPlan> {
        self.columns.iter().find(|plan| plan.key == key)
    }

    /// Last assigned column, or the locality column for an empty schema.
    pub fn last_column(&self) -> u16 {
        self.columns
            .last()
            .map(|plan| plan.column)
            .unwrap_or(SCHOOL_LOCALITY_COL)
    }

    /// True when `column` was assigned to some discipline.
    pub fn is_assigned(&self, column: u16) -> bool {
        column >= FIRST_DISCIPLINE_COL && column <= self.last_column()
    }
}

/// Spreadsheet letter name for a 1-based column (1 -> "A", 27 -> "AA").
pub fn column_letter(column: u16) -> String {
    debug_assert!(column >= 1);
    let mut remaining = u32::from(column);
    let mut letters = Vec::new();
    while remaining > 0 {
        remaining -= 1;
        letters.push(b'A' + (remaining % 26) as u8);
        remaining /= 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}
