use std::collections::HashSet;
use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::data::LoadError;

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
    #[serde(alias = "question")]
    pub prompt: String,
    pub options: Vec<String>,
    #[serde(alias = "answer")]
    pub correct_option: String,
    pub explanation: String,
}

impl QuestionRecord {
    pub fn is_correct(&self, choice: &str) -> bool {
        self.correct_option == choice
    }
}

/// An immutable, validated question list.
///
/// Cloning is cheap: the records are shared, so independent sessions can
/// score against the same bank without copying it.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Arc<[QuestionRecord]>,
}

impl QuestionBank {
    /// Validate `questions` and freeze them into a bank.
    ///
    /// Rejects an empty list, questions with fewer than two options and
    /// questions whose correct option is not one of their options.
    pub fn new(questions: Vec<QuestionRecord>) -> Result<Self, LoadError> {
        if questions.is_empty() {
            return Err(LoadError::Empty);
        }

        for (index, question) in questions.iter().enumerate() {
            if question.options.len() < 2 {
                return Err(LoadError::TooFewOptions { index });
            }
            if !question.options.contains(&question.correct_option) {
                return Err(LoadError::CorrectOptionMissing { index });
            }

            let unique: HashSet<&str> = question.options.iter().map(String::as_str).collect();
            if unique.len() != question.options.len() {
                tracing::warn!(index, "question has duplicate options");
            }
        }

        Ok(Self {
            questions: questions.into(),
        })
    }
}

impl Deref for QuestionBank {
    type Target = [QuestionRecord];

    fn deref(&self) -> &Self::Target {
        &self.questions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(options: &[&str], correct: &str) -> QuestionRecord {
        QuestionRecord {
            prompt: "Which one?".to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_option: correct.to_string(),
            explanation: "Because.".to_string(),
        }
    }

    #[test]
    fn test_bank_rejects_empty_list() {
        assert!(matches!(QuestionBank::new(Vec::new()), Err(LoadError::Empty)));
    }

    #[test]
    fn test_bank_rejects_missing_correct_option() {
        let questions = vec![record(&["a", "b"], "a"), record(&["a", "b"], "c")];
        assert!(matches!(
            QuestionBank::new(questions),
            Err(LoadError::CorrectOptionMissing { index: 1 })
        ));
    }

    #[test]
    fn test_bank_rejects_single_option() {
        assert!(matches!(
            QuestionBank::new(vec![record(&["a"], "a")]),
            Err(LoadError::TooFewOptions { index: 0 })
        ));
    }

    #[test]
    fn test_bank_accepts_duplicate_options() {
        let bank = QuestionBank::new(vec![record(&["a", "a", "b"], "b")]).unwrap();
        assert_eq!(bank.len(), 1);
    }

    #[test]
    fn test_record_accepts_question_and_answer_aliases() {
        let json = r#"{
            "question": "Q?",
            "options": ["x", "y"],
            "answer": "y",
            "explanation": "E"
        }"#;
        let question: QuestionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(question.prompt, "Q?");
        assert!(question.is_correct("y"));
        assert!(!question.is_correct("x"));
    }
}
