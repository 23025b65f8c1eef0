use crate::models::{QuizResult, UserId};
use crate::repositories::{RepositoryError, ScoreRepository};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum ResultsServiceError {
    #[error("Repository error: {0}")]
    RepositoryError(#[from] RepositoryError),
}

pub struct ResultsService {
    repository: Arc<dyn ScoreRepository>,
}

impl ResultsService {
    pub fn new(repository: Arc<dyn ScoreRepository>) -> Self {
        Self { repository }
    }

    /// Every recorded attempt of the user, oldest first.
    pub async fn get_results(
        &self,
        user_id: UserId,
    ) -> Result<Vec<QuizResult>, ResultsServiceError> {
        Ok(self.repository.results_for_user(user_id).await?)
    }
}
