use thiserror::Error;

#[derive(Error, Debug)]
pub enum NuStorageError {
    /// Malformed input or unrecognised command word. Carries the usage hint.
    #[error("{0}")]
    Parse(String),

    /// Execute-time failure: bad index, duplicate record and the like.
    #[error("{0}")]
    Command(String),

    #[error("Inventory record not found")]
    RecordNotFound,

    #[error("Operation would result in duplicate inventory records")]
    DuplicateRecord,

    #[error("Person not found")]
    PersonNotFound,

    #[error("Operation would result in duplicate persons")]
    DuplicatePerson,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, NuStorageError>;
