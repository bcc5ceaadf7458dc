//! Service-level error types.

use thiserror::Error;

use db::DbError;

/// Errors produced by [`crate::BookService`].
#[derive(Debug, Error)]
pub enum BookError {
    /// No book has the requested id.
    #[error("book {0} not found")]
    NotFound(i64),

    /// Persistence error from the db crate.
    #[error("database error: {0}")]
    Database(#[source] DbError),
}

impl BookError {
    /// Lift a repository error, turning a missing row into `NotFound(id)`.
    pub(crate) fn for_id(id: i64) -> impl FnOnce(DbError) -> Self {
        move |err| match err {
            DbError::NotFound => Self::NotFound(id),
            other => Self::Database(other),
        }
    }
}

impl From<DbError> for BookError {
    fn from(err: DbError) -> Self {
        Self::Database(err)
    }
}

impl From<sqlx::Error> for BookError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(DbError::from(err))
    }
}
