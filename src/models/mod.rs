pub mod question;
pub mod quiz;
pub mod score;
pub mod user;

pub use question::{AnswerOptions, Question, QuestionRow, OPTION_DELIMITER};
pub use quiz::{Quiz, QuizId};
pub use score::{QuizResult, ScoreRecord};
pub use user::{User, UserId};
