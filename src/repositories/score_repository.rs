use super::RepositoryResult;
use crate::models::{QuizId, QuizResult, ScoreRecord, UserId};
use async_trait::async_trait;
use sqlx::SqlitePool;

#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait ScoreRepository: Send + Sync {
    async fn record_score(
        &self,
        user_id: UserId,
        quiz_id: QuizId,
        score: i64,
    ) -> RepositoryResult<ScoreRecord>;
    async fn results_for_user(&self, user_id: UserId) -> RepositoryResult<Vec<QuizResult>>;
}

pub struct SqliteScoreRepository {
    pool: SqlitePool,
}

impl SqliteScoreRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScoreRepository for SqliteScoreRepository {
    async fn record_score(
        &self,
        user_id: UserId,
        quiz_id: QuizId,
        score: i64,
    ) -> RepositoryResult<ScoreRecord> {
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query("INSERT INTO user_scores (user_id, quiz_id, score) VALUES (?, ?, ?)")
            .bind(user_id)
            .bind(quiz_id)
            .bind(score)
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();

        let record = sqlx::query_as::<_, ScoreRecord>(
            "SELECT id, user_id, quiz_id, score, taken_at FROM user_scores WHERE id = ?",
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(record)
    }

    async fn results_for_user(&self, user_id: UserId) -> RepositoryResult<Vec<QuizResult>> {
        let results = sqlx::query_as::<_, QuizResult>(
            r#"
            SELECT quizzes.name AS quiz_name, user_scores.score AS score
            FROM user_scores
            JOIN quizzes ON user_scores.quiz_id = quizzes.id
            WHERE user_scores.user_id = ?
            ORDER BY user_scores.id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(results)
    }
}
