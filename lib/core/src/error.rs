use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("User not found: {0}")]
    UserNotFound(u64),

    #[error("Listing not found: {0}")]
    ListingNotFound(u64),

    #[error("Invalid privacy value: {0:?} (expected \"public\" or \"circle\")")]
    InvalidPrivacy(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Invalid query parameter: {0}")]
    InvalidQuery(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// True for errors caused by an unknown query subject.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::UserNotFound(_) | Error::ListingNotFound(_))
    }
}
