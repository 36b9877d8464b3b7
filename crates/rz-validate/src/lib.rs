//! Grid validation.
//!
//! The Rust-side counterpart of the generated pre-save macro: the same
//! three-way check per pair and link, producing structured findings
//! instead of message boxes.

mod engine;
mod report;

pub use engine::validate_grid;
pub use report::{Finding, FindingKind, ValidationReport};
