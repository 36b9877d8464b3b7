use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("duplicate discipline key: {0}")]
    DuplicateKey(String),
    #[error("category {0:?} declares no disciplines")]
    EmptyCategory(String),
    #[error("school list is empty")]
    EmptySchoolList,
    #[error("duplicate school CCT: {0}")]
    DuplicateSchool(String),
    #[error("pair {pair:?}: {role} reference {key:?} does not name a schema discipline")]
    UnresolvedPair {
        pair: String,
        role: &'static str,
        key: String,
    },
    #[error("single link {link:?}: {role} reference {key:?} does not name a schema discipline")]
    UnresolvedLink {
        link: String,
        role: &'static str,
        key: String,
    },
    #[error("{binding:?}: discipline {key:?} is a {actual} column, expected {expected}")]
    WrongColumnKind {
        binding: String,
        key: String,
        expected: &'static str,
        actual: &'static str,
    },
    #[error("discipline {key:?} is referenced by more than one binding ({first:?} and {second:?})")]
    SharedBindingTarget {
        key: String,
        first: String,
        second: String,
    },
    #[error("{binding:?}: discipline {key:?} carries no participant bounds")]
    MissingBounds { binding: String, key: String },
}

pub type Result<T> = std::result::Result<T, SchemaError>;
