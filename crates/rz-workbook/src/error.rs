use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkbookError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("workbook write error: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),
    #[error("workbook read error: {0}")]
    Read(#[from] calamine::XlsxError),
    #[error("workbook has no sheet named {0:?}")]
    MissingSheet(String),
}

pub type Result<T> = std::result::Result<T, WorkbookError>;
