use thiserror::Error;

/// Errors that can occur while browsing or uploading to remote storage
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("remote service returned status {status}: {message}")]
    RemoteService { status: u16, message: String },

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("no node at path: {path}")]
    UnknownPath { path: String },

    #[error("not a folder: {path}")]
    NotAFolder { path: String },
}

impl StorageError {
    /// Status code of a `RemoteService` error, if that is what this is
    pub fn status(&self) -> Option<u16> {
        match self {
            StorageError::RemoteService { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for storage operations
pub type Result<T> = std::result::Result<T, StorageError>;
