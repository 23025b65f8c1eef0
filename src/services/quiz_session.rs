//! One quiz attempt, from picking a quiz to recording the score.
//!
//! The attempt walks the questions of the chosen quiz in storage order,
//! grades each answer as it is typed, and appends a single score record once
//! the last question has been answered. Nothing is written when the choice is
//! invalid, when the quiz has no questions, or when input ends mid-attempt.

use super::quiz_catalog::{parse_ordinal, QuizCatalog};
use crate::console::Console;
use crate::models::{Question, Quiz, ScoreRecord, UserId};
use crate::repositories::{QuizRepository, RepositoryError, ScoreRepository};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum QuizSessionError {
    #[error("Repository error: {0}")]
    RepositoryError(#[from] RepositoryError),
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
    /// Not a number, or no option with that ordinal.
    Invalid,
}

/// Grades one typed answer against a question.
pub fn grade(question: &Question, input: &str) -> AnswerOutcome {
    match parse_ordinal(input) {
        Some(ordinal) if ordinal <= question.options.len() => {
            if question.is_correct(ordinal) {
                AnswerOutcome::Correct
            } else {
                AnswerOutcome::Incorrect
            }
        }
        _ => AnswerOutcome::Invalid,
    }
}

#[derive(Debug, Clone)]
pub struct Attempt {
    pub quiz: Quiz,
    pub score: usize,
    pub total: usize,
    pub record: ScoreRecord,
}

#[derive(Debug, Clone)]
pub enum SessionOutcome {
    InvalidChoice,
    NoQuestions(Quiz),
    /// Input ended before the last answer; nothing was recorded.
    Abandoned(Quiz),
    Completed(Attempt),
}

pub struct QuizSession {
    catalog: QuizCatalog,
    quizzes: Arc<dyn QuizRepository>,
    scores: Arc<dyn ScoreRepository>,
}

impl QuizSession {
    pub fn new(quizzes: Arc<dyn QuizRepository>, scores: Arc<dyn ScoreRepository>) -> Self {
        Self {
            catalog: QuizCatalog::new(quizzes.clone()),
            quizzes,
            scores,
        }
    }

    pub async fn run<C: Console + ?Sized>(
        &self,
        user_id: UserId,
        console: &mut C,
    ) -> Result<SessionOutcome, QuizSessionError> {
        let quizzes = self.catalog.list_quizzes().await?;

        console.say("")?;
        console.say("Available Quizzes:")?;
        for (ordinal, quiz) in quizzes.iter().enumerate() {
            console.say(&format!("{}. {}", ordinal + 1, quiz.name))?;
        }

        let choice = console
            .prompt("Choose a quiz by number: ")?
            .unwrap_or_default();
        let quiz = match QuizCatalog::resolve_choice(&choice, &quizzes) {
            Ok(quiz_id) => quizzes
                .into_iter()
                .find(|quiz| quiz.id == quiz_id)
                .ok_or(RepositoryError::NotFound)?,
            Err(_) => {
                console.say("Invalid choice.")?;
                return Ok(SessionOutcome::InvalidChoice);
            }
        };

        let questions = self.quizzes.list_questions(quiz.id).await?;
        if questions.is_empty() {
            console.say("No questions available for this quiz.")?;
            return Ok(SessionOutcome::NoQuestions(quiz));
        }

        let mut score = 0;
        for question in &questions {
            console.say("")?;
            console.say(&question.text)?;
            for (ordinal, option) in question.options.iter().enumerate() {
                console.say(&format!("{}. {}", ordinal + 1, option))?;
            }

            let Some(answer) = console.prompt("Your answer: ")? else {
                tracing::info!("Input closed during quiz {}; attempt discarded", quiz.id);
                return Ok(SessionOutcome::Abandoned(quiz));
            };

            match grade(question, &answer) {
                AnswerOutcome::Correct => score += 1,
                AnswerOutcome::Incorrect => {}
                AnswerOutcome::Invalid => console.say("Invalid answer.")?,
            }
        }

        let total = questions.len();
        console.say("")?;
        console.say(&format!("You scored {}/{}!", score, total))?;

        let record = self
            .scores
            .record_score(user_id, quiz.id, score as i64)
            .await?;
        tracing::info!(
            "User {} scored {}/{} on quiz {}",
            user_id,
            score,
            total,
            quiz.name
        );

        Ok(SessionOutcome::Completed(Attempt {
            quiz,
            score,
            total,
            record,
        }))
    }
}
