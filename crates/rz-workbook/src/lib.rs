//! Registration workbook I/O.
//!
//! Writing renders a compiled layout into the three-sheet template;
//! reading recovers sheet dumps and grid snapshots from an existing file.

mod error;
mod grid;
mod reader;
mod writer;

pub use error::{Result, WorkbookError};
pub use grid::{CellValue, GridSnapshot, RowSnapshot};
pub use reader::{SheetDump, dump_workbook, load_grid};
pub use writer::write_workbook;
