use std::collections::BTreeMap;

use crate::quiz::QuizError;

/// The options a user has currently selected, one slot per question.
///
/// `None` means the question has no selection yet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnswerSet {
    answers: Vec<Option<String>>,
}

impl AnswerSet {
    /// An empty answer set for a question list of length `total`.
    pub fn with_len(total: usize) -> Self {
        Self {
            answers: vec![None; total],
        }
    }

    /// Build an answer set from a 0-based index to option map.
    ///
    /// A `None` entry marks the question as explicitly unanswered; its index
    /// is still range-checked.
    pub fn from_map(
        total: usize,
        map: BTreeMap<usize, Option<String>>,
    ) -> Result<Self, QuizError> {
        let mut answers = Self::with_len(total);
        for (index, option) in map {
            match option {
                Some(option) => answers.record(index, option)?,
                None => answers.clear(index)?,
            }
        }
        Ok(answers)
    }

    /// Select `option` for question `index`, replacing any earlier selection.
    ///
    /// The option is not checked against the question's options: an unknown
    /// value simply never matches the correct one.
    pub fn record(&mut self, index: usize, option: impl Into<String>) -> Result<(), QuizError> {
        let total = self.answers.len();
        let slot = self
            .answers
            .get_mut(index)
            .ok_or(QuizError::QuestionOutOfRange { index, total })?;
        *slot = Some(option.into());
        Ok(())
    }

    /// Remove the selection for question `index`.
    pub fn clear(&mut self, index: usize) -> Result<(), QuizError> {
        let total = self.answers.len();
        let slot = self
            .answers
            .get_mut(index)
            .ok_or(QuizError::QuestionOutOfRange { index, total })?;
        *slot = None;
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.answers.get(index).and_then(|a| a.as_deref())
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_last_write_wins() {
        let mut answers = AnswerSet::with_len(3);
        answers.record(1, "first").unwrap();
        answers.record(1, "second").unwrap();

        assert_eq!(answers.get(1), Some("second"));
        assert_eq!(answers.answered_count(), 1);
    }

    #[test]
    fn test_record_same_option_twice_is_noop() {
        let mut answers = AnswerSet::with_len(2);
        answers.record(0, "same").unwrap();
        let before = answers.clone();
        answers.record(0, "same").unwrap();
        assert_eq!(answers, before);
    }

    #[test]
    fn test_record_out_of_range() {
        let mut answers = AnswerSet::with_len(2);
        let err = answers.record(2, "x").unwrap_err();
        assert_eq!(err, QuizError::QuestionOutOfRange { index: 2, total: 2 });
        assert_eq!(answers.answered_count(), 0);
    }

    #[test]
    fn test_clear_removes_selection() {
        let mut answers = AnswerSet::with_len(2);
        answers.record(0, "x").unwrap();
        answers.clear(0).unwrap();
        assert_eq!(answers.get(0), None);
        assert!(answers.clear(5).is_err());
    }

    #[test]
    fn test_from_map_rejects_bad_index() {
        let map = BTreeMap::from([(0, Some("a".to_string())), (9, Some("b".to_string()))]);
        assert!(AnswerSet::from_map(3, map).is_err());

        let map = BTreeMap::from([(2, Some("b".to_string()))]);
        let answers = AnswerSet::from_map(3, map).unwrap();
        assert_eq!(answers.get(2), Some("b"));
        assert_eq!(answers.get(0), None);
    }

    #[test]
    fn test_from_map_null_entry_is_unanswered() {
        let map: BTreeMap<usize, Option<String>> =
            serde_json::from_str(r#"{"0": "a", "1": null}"#).unwrap();
        let answers = AnswerSet::from_map(3, map).unwrap();

        assert_eq!(answers.get(0), Some("a"));
        assert_eq!(answers.get(1), None);
        assert_eq!(answers.answered_count(), 1);

        let map = BTreeMap::from([(7, None)]);
        assert_eq!(
            AnswerSet::from_map(3, map),
            Err(QuizError::QuestionOutOfRange { index: 7, total: 3 })
        );
    }
}
