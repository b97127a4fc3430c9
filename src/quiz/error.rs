use thiserror::Error;

/// Errors raised while recording answers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// The question index does not exist in the question list.
    #[error("question index {index} is out of range (quiz has {total} questions)")]
    QuestionOutOfRange { index: usize, total: usize },
}
