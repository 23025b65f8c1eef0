use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub type QuizId = i64;

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Quiz {
    pub id: QuizId,
    pub name: String,
}
