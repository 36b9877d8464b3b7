use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("binding {binding:?} references {key:?}, which was never assigned a column")]
    UnknownDiscipline { binding: String, key: String },
    #[error("binding {binding:?}: discipline {key:?} carries no participant bounds")]
    MissingBounds { binding: String, key: String },
}

pub type Result<T> = std::result::Result<T, LayoutError>;
