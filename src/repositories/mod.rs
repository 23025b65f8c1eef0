pub mod quiz_repository;
pub mod score_repository;
pub mod user_repository;

pub use quiz_repository::{QuizRepository, SqliteQuizRepository};
pub use score_repository::{ScoreRepository, SqliteScoreRepository};
pub use user_repository::{SqliteUserRepository, UserRepository};

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Record not found")]
    NotFound,
    #[error("Record already exists")]
    AlreadyExists,
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl RepositoryError {
    /// Maps unique-constraint violations to `AlreadyExists`.
    pub(crate) fn from_insert(error: sqlx::Error) -> Self {
        let unique = error
            .as_database_error()
            .is_some_and(|db| db.is_unique_violation());
        if unique {
            RepositoryError::AlreadyExists
        } else {
            RepositoryError::Database(error)
        }
    }
}
