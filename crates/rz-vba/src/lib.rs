//! Macro module generation.
//!
//! The original template attaches two VBA lifecycle hooks to the generated
//! workbook: a per-cell change handler that keeps pair selections mutually
//! exclusive, and a pre-save validator enforcing the head-count rules. This
//! crate renders both modules from a compiled [`rz_layout::Layout`] and
//! writes them as importable `.bas` sidecar files.

mod error;
mod generate;

pub use error::{Result, VbaError};
pub use generate::{
    SHEET_MODULE_FILE, VbaModules, WORKBOOK_MODULE_FILE, generate_modules, write_modules,
};
