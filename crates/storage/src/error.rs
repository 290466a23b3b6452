use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    /// SQLSTATE of the underlying database error, if any
    fn sql_state(&self) -> Option<String> {
        match self {
            StorageError::Database(sqlx::Error::Database(e)) => e.code().map(|c| c.into_owned()),
            _ => None,
        }
    }

    pub fn is_unique_violation(&self) -> bool {
        self.sql_state().as_deref() == Some("23505")
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        self.sql_state().as_deref() == Some("23503")
    }
}
