//! Layout & constraint compiler for the registration grid.
//!
//! Takes a validated [`rz_model::Schema`] and produces the column
//! assignment, merged header plan, and column-literal constraint records
//! that the workbook writer, macro generator, and validator all share.

mod compile;
mod error;
mod types;

pub use compile::compile;
pub use error::{LayoutError, Result};
pub use types::{
    BAND_ROW, CategoryBand, ColumnPlan, FIRST_DATA_ROW, FIRST_DISCIPLINE_COL, LABEL_ROW, Layout,
    ResolvedLink, ResolvedPair, RowRange, SCHOOL_CCT_COL, SCHOOL_LOCALITY_COL, SCHOOL_NAME_COL,
    SUB_LABEL_ROW, column_letter,
};
