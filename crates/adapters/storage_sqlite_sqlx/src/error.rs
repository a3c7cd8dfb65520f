//! Storage-specific error type wrapping sqlx and filesystem errors.

use scurry_domain::error::ScurryError;

/// Errors originating from the persistence layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Filesystem access failed (string store).
    #[error("io error")]
    Io(#[from] std::io::Error),

    /// A stored line could not be decoded (string store).
    #[error("JSON deserialization error")]
    Json(#[from] serde_json::Error),
}

impl From<StorageError> for ScurryError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
