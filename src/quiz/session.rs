use uuid::Uuid;

use crate::models::{AnswerSet, QuestionBank};

use super::engine::{ScoreResult, score};
use super::error::QuizError;
use super::tier::TierThresholds;

/// Where a quiz session is in its lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Answers are being recorded; nothing has been scored.
    InProgress,
    /// The answers were scored on the last submit.
    Submitted(ScoreResult),
}

/// One user's pass through the question bank.
#[derive(Debug, Clone)]
pub struct QuizSession {
    id: Uuid,
    bank: QuestionBank,
    thresholds: TierThresholds,
    answers: AnswerSet,
    state: SessionState,
}

impl QuizSession {
    pub fn new(bank: QuestionBank, thresholds: TierThresholds) -> Self {
        let answers = AnswerSet::with_len(bank.len());
        let session = Self {
            id: Uuid::new_v4(),
            bank,
            thresholds,
            answers,
            state: SessionState::InProgress,
        };
        tracing::info!(session = %session.id, questions = session.bank.len(), "quiz session started");
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn result(&self) -> Option<&ScoreResult> {
        match &self.state {
            SessionState::Submitted(result) => Some(result),
            SessionState::InProgress => None,
        }
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.state, SessionState::Submitted(_))
    }

    /// Select an option for a question.
    ///
    /// Allowed after submission too; the stored result is only replaced by
    /// the next [`submit`](Self::submit).
    pub fn record_answer(
        &mut self,
        index: usize,
        option: impl Into<String>,
    ) -> Result<(), QuizError> {
        let option = option.into();
        tracing::debug!(session = %self.id, index, option = %option, "answer recorded");
        self.answers.record(index, option)
    }

    /// Withdraw the selection for a question so it counts as unanswered.
    pub fn clear_answer(&mut self, index: usize) -> Result<(), QuizError> {
        tracing::debug!(session = %self.id, index, "answer cleared");
        self.answers.clear(index)
    }

    /// Score the current answers, replacing any previous result.
    pub fn submit(&mut self) -> ScoreResult {
        let result = score(&self.bank, &self.answers, &self.thresholds);
        tracing::info!(
            session = %self.id,
            correct = result.correct_count,
            total = result.total_count,
            tier = ?result.tier,
            "quiz submitted"
        );
        self.state = SessionState::Submitted(result.clone());
        result
    }

    /// Discard this session's answers and start over with a new id.
    pub fn reset(&mut self) {
        let previous = self.id;
        *self = Self::new(self.bank.clone(), self.thresholds.clone());
        tracing::info!(previous = %previous, session = %self.id, "quiz session reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::reference_questions;
    use crate::quiz::Tier;

    fn session() -> QuizSession {
        QuizSession::new(reference_questions().unwrap(), TierThresholds::default())
    }

    #[test]
    fn test_new_session_is_in_progress() {
        let session = session();
        assert_eq!(session.state(), &SessionState::InProgress);
        assert!(session.result().is_none());
        assert_eq!(session.answers().answered_count(), 0);
    }

    #[test]
    fn test_submit_transitions_to_submitted() {
        let mut session = session();
        let correct = session.bank()[0].correct_option.clone();
        session.record_answer(0, correct).unwrap();

        let result = session.submit();
        assert_eq!(result.correct_count, 1);
        assert!(session.is_submitted());
        assert_eq!(session.result(), Some(&result));
    }

    #[test]
    fn test_resubmit_recomputes_from_current_answers() {
        let mut session = session();
        let first = session.bank()[0].correct_option.clone();
        session.record_answer(0, first).unwrap();
        assert_eq!(session.submit().correct_count, 1);

        session.record_answer(0, "wrong").unwrap();
        assert_eq!(session.result().map(|r| r.correct_count), Some(1));

        assert_eq!(session.submit().correct_count, 0);
        assert_eq!(session.submit().correct_count, 0);
    }

    #[test]
    fn test_reset_clears_answers_and_changes_id() {
        let mut session = session();
        let id = session.id();
        session.record_answer(3, "anything").unwrap();
        session.submit();

        session.reset();
        assert_ne!(session.id(), id);
        assert_eq!(session.state(), &SessionState::InProgress);
        assert_eq!(session.answers().answered_count(), 0);
        assert_eq!(session.answers().len(), 10);
    }

    #[test]
    fn test_record_answer_rejects_bad_index() {
        let mut session = session();
        assert_eq!(
            session.record_answer(10, "x"),
            Err(QuizError::QuestionOutOfRange {
                index: 10,
                total: 10
            })
        );
    }

    #[test]
    fn test_clear_answer_counts_as_unanswered() {
        let mut session = session();
        let correct = session.bank()[0].correct_option.clone();
        session.record_answer(0, correct).unwrap();
        session.clear_answer(0).unwrap();

        let result = session.submit();
        assert_eq!(result.correct_count, 0);
        assert_eq!(result.per_question[0].user_answer, None);
        assert!(session.clear_answer(10).is_err());
    }

    #[test]
    fn test_sessions_are_independent() {
        let bank = reference_questions().unwrap();
        let mut a = QuizSession::new(bank.clone(), TierThresholds::default());
        let b = QuizSession::new(bank, TierThresholds::default());

        for (index, question) in a.bank().clone().iter().enumerate() {
            a.record_answer(index, question.correct_option.clone()).unwrap();
        }
        assert_eq!(a.submit().tier, Tier::Excellent);
        assert_eq!(b.answers().answered_count(), 0);
        assert_ne!(a.id(), b.id());
    }
}
