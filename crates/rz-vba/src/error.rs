use thiserror::Error;

#[derive(Debug, Error)]
pub enum VbaError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error(
        "constraint {binding:?} references column {column}, which the layout never assigned; \
         refusing to emit macro code with a dangling cell reference"
    )]
    UnassignedColumn { binding: String, column: u16 },
}

pub type Result<T> = std::result::Result<T, VbaError>;
