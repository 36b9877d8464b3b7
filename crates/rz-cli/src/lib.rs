//! Library components of the registration workbook CLI.

pub mod logging;
pub mod pipeline;
