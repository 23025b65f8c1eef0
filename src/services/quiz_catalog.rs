use crate::models::{Quiz, QuizId};
use crate::repositories::{QuizRepository, RepositoryResult};
use std::sync::Arc;

/// The typed menu choice does not name a listed quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Invalid choice")]
pub struct InvalidChoice;

/// Parses a 1-based ordinal typed at a prompt. Zero and non-numbers are
/// rejected.
pub fn parse_ordinal(input: &str) -> Option<usize> {
    input.trim().parse::<usize>().ok().filter(|n| *n >= 1)
}

pub struct QuizCatalog {
    repository: Arc<dyn QuizRepository>,
}

impl QuizCatalog {
    pub fn new(repository: Arc<dyn QuizRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_quizzes(&self) -> RepositoryResult<Vec<Quiz>> {
        self.repository.list_quizzes().await
    }

    /// Maps the number picked from the printed menu to a quiz id.
    pub fn resolve_choice(input: &str, quizzes: &[Quiz]) -> Result<QuizId, InvalidChoice> {
        parse_ordinal(input)
            .and_then(|ordinal| quizzes.get(ordinal - 1))
            .map(|quiz| quiz.id)
            .ok_or(InvalidChoice)
    }
}
