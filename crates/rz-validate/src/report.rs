use std::fmt;

use serde::Serialize;

/// Why a head-count cell failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    /// Individual variant entered, count differs from the required value.
    ExactCountMismatch,
    /// Team or link entered, count cell left empty.
    MissingCount,
    /// Team or link entered, count cell holds non-numeric content.
    CountNotNumeric,
    /// Team or link entered, count outside the allowed bounds.
    CountOutOfRange,
    /// Discipline not entered, count cell holds a value anyway.
    StrayCount,
}

impl FindingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FindingKind::ExactCountMismatch => "exact count mismatch",
            FindingKind::MissingCount => "missing count",
            FindingKind::CountNotNumeric => "count not numeric",
            FindingKind::CountOutOfRange => "count out of range",
            FindingKind::StrayCount => "stray count",
        }
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One validation violation, addressed to a grid cell.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    /// 1-based grid row.
    pub row: u32,
    pub school: String,
    /// Pair or link display name.
    pub subject: String,
    /// 1-based column of the offending head-count cell.
    pub column: u16,
    pub kind: FindingKind,
    pub message: String,
}

/// All findings of one validation pass.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub findings: Vec<Finding>,
}

impl ValidationReport {
    /// True when the workbook would save cleanly under the generated macro.
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }
}
