use super::RepositoryResult;
use crate::models::{Question, QuestionRow, Quiz, QuizId};
use async_trait::async_trait;
use sqlx::SqlitePool;

#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait QuizRepository: Send + Sync {
    /// All quizzes in insertion order.
    async fn list_quizzes(&self) -> RepositoryResult<Vec<Quiz>>;
    /// Questions of one quiz in insertion order, options decoded.
    async fn list_questions(&self, quiz_id: QuizId) -> RepositoryResult<Vec<Question>>;
}

pub struct SqliteQuizRepository {
    pool: SqlitePool,
}

impl SqliteQuizRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuizRepository for SqliteQuizRepository {
    async fn list_quizzes(&self) -> RepositoryResult<Vec<Quiz>> {
        let quizzes = sqlx::query_as::<_, Quiz>("SELECT id, name FROM quizzes ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(quizzes)
    }

    async fn list_questions(&self, quiz_id: QuizId) -> RepositoryResult<Vec<Question>> {
        let rows = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, quiz_id, question, options, answer
            FROM quiz_questions
            WHERE quiz_id = ?
            ORDER BY id
            "#,
        )
        .bind(quiz_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Question::from).collect())
    }
}
