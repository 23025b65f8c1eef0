use super::QuizId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Separator used in the `options` column.
pub const OPTION_DELIMITER: char = ',';

/// Raw `quiz_questions` row, options still packed into one field.
#[derive(Debug, Clone, FromRow)]
pub struct QuestionRow {
    pub id: i64,
    pub quiz_id: QuizId,
    pub question: String,
    pub options: String,
    pub answer: String,
}

/// Ordered answer options, decoded once from the delimited column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOptions(Vec<String>);

impl AnswerOptions {
    pub fn decode(raw: &str) -> Self {
        Self(raw.split(OPTION_DELIMITER).map(str::to_string).collect())
    }

    /// Looks up an option by its 1-based ordinal.
    pub fn by_ordinal(&self, ordinal: usize) -> Option<&str> {
        ordinal
            .checked_sub(1)
            .and_then(|index| self.0.get(index))
            .map(String::as_str)
    }

    /// Ordinal of the option whose text matches exactly, if any.
    pub fn ordinal_of(&self, text: &str) -> Option<usize> {
        self.0.iter().position(|option| option == text).map(|i| i + 1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub quiz_id: QuizId,
    pub text: String,
    pub options: AnswerOptions,
    pub answer: String,
}

impl Question {
    /// Exact text comparison between the chosen option and the stored answer.
    pub fn is_correct(&self, ordinal: usize) -> bool {
        self.options
            .by_ordinal(ordinal)
            .is_some_and(|choice| choice == self.answer)
    }
}

impl From<QuestionRow> for Question {
    fn from(row: QuestionRow) -> Self {
        Self {
            id: row.id,
            quiz_id: row.quiz_id,
            text: row.question,
            options: AnswerOptions::decode(&row.options),
            answer: row.answer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> Question {
        Question::from(QuestionRow {
            id: 1,
            quiz_id: 3,
            question: "Which algorithm finds the shortest path in a graph?".to_string(),
            options: "Dijkstra's,Bubble Sort,DFS,Insertion Sort".to_string(),
            answer: "Dijkstra's".to_string(),
        })
    }

    #[test]
    fn test_decode_keeps_stored_order() {
        let options = AnswerOptions::decode("1NF,2NF,3NF,BCNF");
        let decoded: Vec<&str> = options.iter().collect();
        assert_eq!(decoded, vec!["1NF", "2NF", "3NF", "BCNF"]);
    }

    #[test]
    fn test_by_ordinal_is_one_based() {
        let options = AnswerOptions::decode("Queue,Stack,Graph,Tree");
        assert_eq!(options.by_ordinal(1), Some("Queue"));
        assert_eq!(options.by_ordinal(4), Some("Tree"));
        assert_eq!(options.by_ordinal(0), None);
        assert_eq!(options.by_ordinal(5), None);
    }

    #[test]
    fn test_is_correct_uses_exact_text() {
        let question = question();
        assert!(question.is_correct(1));
        assert!(!question.is_correct(2));
        assert!(!question.is_correct(0));
        assert!(!question.is_correct(9));
        assert_eq!(question.options.ordinal_of("Dijkstra's"), Some(1));
        assert_eq!(question.options.ordinal_of("dijkstra's"), None);
    }
}
