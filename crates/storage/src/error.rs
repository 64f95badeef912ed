use thiserror::Error;

use crate::repository::reference::Target;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    /// A unique column rejected the write. Carries the client-facing message.
    #[error("{0}")]
    Duplicate(&'static str),

    /// A required reference named a row that does not exist.
    #[error("{0}")]
    InvalidReference(String),

    #[error("Failed to find {target}: {source}")]
    Lookup {
        target: Target,
        #[source]
        source: sqlx::Error,
    },
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23505")
        )
    }
}
