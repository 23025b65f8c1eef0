use super::{QuizId, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One completed quiz attempt. Rows are only ever appended.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub id: i64,
    pub user_id: UserId,
    pub quiz_id: QuizId,
    pub score: i64,
    pub taken_at: Option<String>,
}

/// A score joined with the name of the quiz it was earned on.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct QuizResult {
    pub quiz_name: String,
    pub score: i64,
}
