use serde::Serialize;

use crate::models::{AnswerSet, QuestionRecord};

use super::tier::{Tier, TierThresholds};

/// Review of one question after submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionFeedback {
    pub index: usize,
    pub user_answer: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
    pub explanation: String,
}

/// Outcome of scoring a full answer set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub correct_count: usize,
    pub total_count: usize,
    pub percentage: f64,
    pub tier: Tier,
    pub per_question: Vec<QuestionFeedback>,
}

/// Score `answers` against `questions`.
///
/// Questions are evaluated in list order and every question appears in
/// `per_question`; an unanswered question is incorrect. Never fails.
pub fn score(
    questions: &[QuestionRecord],
    answers: &AnswerSet,
    thresholds: &TierThresholds,
) -> ScoreResult {
    let per_question: Vec<QuestionFeedback> = questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let user_answer = answers.get(index);
            QuestionFeedback {
                index,
                user_answer: user_answer.map(str::to_string),
                correct_answer: question.correct_option.clone(),
                is_correct: user_answer.is_some_and(|a| question.is_correct(a)),
                explanation: question.explanation.clone(),
            }
        })
        .collect();

    let correct_count = per_question.iter().filter(|f| f.is_correct).count();
    let total_count = questions.len();

    ScoreResult {
        correct_count,
        total_count,
        percentage: percentage(correct_count, total_count),
        tier: thresholds.classify(correct_count),
        per_question,
    }
}

/// Share of correct answers scaled to 100; an empty quiz scores 0.
pub fn percentage(correct: usize, total: usize) -> f64 {
    if total > 0 {
        (correct as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::reference_questions;

    fn answer_correctly(questions: &[QuestionRecord], numbers: &[usize]) -> AnswerSet {
        let mut answers = AnswerSet::with_len(questions.len());
        for &number in numbers {
            let question = &questions[number - 1];
            answers
                .record(number - 1, question.correct_option.clone())
                .unwrap();
        }
        answers
    }

    fn wrong_option(question: &QuestionRecord) -> String {
        question
            .options
            .iter()
            .find(|o| **o != question.correct_option)
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_all_correct_is_excellent() {
        let bank = reference_questions().unwrap();
        let numbers: Vec<usize> = (1..=bank.len()).collect();
        let answers = answer_correctly(&bank, &numbers);

        let result = score(&bank, &answers, &TierThresholds::default());
        assert_eq!(result.correct_count, 10);
        assert_eq!(result.total_count, 10);
        assert_eq!(result.percentage, 100.0);
        assert_eq!(result.tier, Tier::Excellent);
    }

    #[test]
    fn test_empty_answers_needs_improvement() {
        let bank = reference_questions().unwrap();
        let answers = AnswerSet::with_len(bank.len());

        let result = score(&bank, &answers, &TierThresholds::default());
        assert_eq!(result.correct_count, 0);
        assert_eq!(result.percentage, 0.0);
        assert_eq!(result.tier, Tier::NeedsImprovement);
        assert_eq!(result.per_question.len(), 10);
        assert!(result.per_question.iter().all(|f| f.user_answer.is_none()));
    }

    #[test]
    fn test_seven_correct_three_wrong() {
        let bank = reference_questions().unwrap();
        let mut answers = answer_correctly(&bank, &[1, 2, 3, 5, 6, 8, 9]);
        for number in [4, 7, 10] {
            answers
                .record(number - 1, wrong_option(&bank[number - 1]))
                .unwrap();
        }

        let result = score(&bank, &answers, &TierThresholds::default());
        assert_eq!(result.correct_count, 7);
        assert_eq!(result.percentage, 70.0);
        assert_eq!(result.tier, Tier::Excellent);
        assert!(!result.per_question[3].is_correct);
        assert!(result.per_question[3].user_answer.is_some());
    }

    #[test]
    fn test_only_first_answered() {
        let bank = reference_questions().unwrap();
        let answers = answer_correctly(&bank, &[1]);

        let result = score(&bank, &answers, &TierThresholds::default());
        assert_eq!(result.correct_count, 1);
        assert_eq!(result.percentage, 10.0);
        assert_eq!(result.tier, Tier::NeedsImprovement);
        assert!(result.per_question[0].is_correct);
        for feedback in &result.per_question[1..] {
            assert!(!feedback.is_correct);
            assert_eq!(feedback.user_answer, None);
        }
    }

    #[test]
    fn test_tier_boundaries_on_reference_set() {
        let bank = reference_questions().unwrap();
        let thresholds = TierThresholds::default();

        let six = answer_correctly(&bank, &[1, 2, 3, 4, 5, 6]);
        assert_eq!(score(&bank, &six, &thresholds).tier, Tier::Good);

        let three = answer_correctly(&bank, &[1, 2, 3]);
        assert_eq!(score(&bank, &three, &thresholds).tier, Tier::NeedsImprovement);

        let four = answer_correctly(&bank, &[1, 2, 3, 4]);
        assert_eq!(score(&bank, &four, &thresholds).tier, Tier::Good);
    }

    #[test]
    fn test_score_is_deterministic() {
        let bank = reference_questions().unwrap();
        let answers = answer_correctly(&bank, &[2, 4, 6]);
        let thresholds = TierThresholds::default();

        assert_eq!(
            score(&bank, &answers, &thresholds),
            score(&bank, &answers, &thresholds)
        );
    }

    #[test]
    fn test_unknown_option_is_incorrect() {
        let bank = reference_questions().unwrap();
        let mut answers = AnswerSet::with_len(bank.len());
        answers.record(0, "Not an option").unwrap();

        let result = score(&bank, &answers, &TierThresholds::default());
        assert!(!result.per_question[0].is_correct);
        assert_eq!(
            result.per_question[0].user_answer.as_deref(),
            Some("Not an option")
        );
    }

    #[test]
    fn test_percentage_guards_zero_total() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(1, 4), 25.0);
    }
}
