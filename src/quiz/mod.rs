//! Quiz scoring and review.
//!
//! A [`QuizSession`] owns the user's [`AnswerSet`](crate::models::AnswerSet)
//! and produces a [`ScoreResult`] on submit. Scoring itself is the pure
//! [`score`] function, so sessions never share mutable state.

mod engine;
mod error;
mod session;
mod tier;

pub use engine::{QuestionFeedback, ScoreResult, percentage, score};
pub use error::QuizError;
pub use session::{QuizSession, SessionState};
pub use tier::{ThresholdRule, Tier, TierThresholds};
