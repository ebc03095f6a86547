/// Core error types for TuneX
use crate::types::{PlaylistId, SongId, UserId};
use thiserror::Error;

/// Result type alias using `TunexError`
pub type Result<T> = std::result::Result<T, TunexError>;

/// Core error type for TuneX
#[derive(Error, Debug)]
pub enum TunexError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Metadata parsing errors
    #[error("Metadata error: {0}")]
    Metadata(String),

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Song not found
    #[error("Song not found: {0}")]
    SongNotFound(SongId),

    /// Playlist not found
    #[error("Playlist not found: {0}")]
    PlaylistNotFound(PlaylistId),

    /// User not found
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    /// Genre not found
    #[error("Genre not found: {0}")]
    GenreNotFound(i64),

    /// Permission denied
    #[error("Permission denied")]
    PermissionDenied,

    /// Duplicate entry
    #[error("Duplicate entry: {0}")]
    Duplicate(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),
}

impl TunexError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a metadata error
    pub fn metadata(msg: impl Into<String>) -> Self {
        Self::Metadata(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create a duplicate error
    pub fn duplicate(msg: impl Into<String>) -> Self {
        Self::Duplicate(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for TunexError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}
