use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("Database error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Contact submission not found: id={0}")]
    SubmissionNotFound(i64),
}

pub type DbResult<T> = Result<T, DbError>;
