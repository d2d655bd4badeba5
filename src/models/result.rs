// src/models/result.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::no_nul_bytes;

/// Upper bound on questions per attempt. Keeps the per-student totals
/// far away from `i64` overflow.
pub const MAX_TOTAL_QUESTIONS: i64 = 10_000;

/// One quiz attempt: a phase 1 score (sentence only) and a phase 2 score
/// (with the diagram), both out of `total_questions`.
///
/// Attempts are append-only; resubmitting the same sentence adds a record.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = validate_score_bounds))]
pub struct QuizResult {
    #[validate(custom(function = no_nul_bytes))]
    pub student_name: String,
    #[validate(custom(function = no_nul_bytes))]
    pub student_class: String,
    pub sentence_id: i64,
    pub sentence_score: i64,
    pub flowchart_score: i64,
    #[validate(range(min = 0, max = MAX_TOTAL_QUESTIONS))]
    pub total_questions: i64,
}

fn validate_score_bounds(result: &QuizResult) -> Result<(), ValidationError> {
    let total = result.total_questions;
    if total < 0 {
        return Err(ValidationError::new("total_questions_negative"));
    }
    for score in [result.sentence_score, result.flowchart_score] {
        if !(0..=total).contains(&score) {
            return Err(ValidationError::new("score_out_of_range")
                .with_message("scores must be between 0 and total_questions".into()));
        }
    }
    Ok(())
}

impl QuizResult {
    pub fn improved(&self) -> bool {
        self.flowchart_score > self.sentence_score
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmitResultResponse {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProgressResponse {
    pub completed_count: i64,
}

/// Per-student aggregate over that student's attempts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StudentSummary {
    pub student_name: String,
    /// Class of the student's first listed attempt.
    pub student_class: String,
    pub attempts: i64,
    pub sentence_score_total: i64,
    pub flowchart_score_total: i64,
    pub total_questions_total: i64,
    pub improved_count: i64,
}

/// Groups results by student. Input must already be sorted by
/// `student_name`, which is what the stats listing returns.
pub fn summarize(results: &[QuizResult]) -> Vec<StudentSummary> {
    let mut summaries: Vec<StudentSummary> = Vec::new();

    for r in results {
        if summaries.last().is_none_or(|last| last.student_name != r.student_name) {
            summaries.push(StudentSummary {
                student_name: r.student_name.clone(),
                student_class: r.student_class.clone(),
                attempts: 0,
                sentence_score_total: 0,
                flowchart_score_total: 0,
                total_questions_total: 0,
                improved_count: 0,
            });
        }

        if let Some(summary) = summaries.last_mut() {
            summary.attempts = summary.attempts.saturating_add(1);
            summary.sentence_score_total =
                summary.sentence_score_total.saturating_add(r.sentence_score);
            summary.flowchart_score_total =
                summary.flowchart_score_total.saturating_add(r.flowchart_score);
            summary.total_questions_total =
                summary.total_questions_total.saturating_add(r.total_questions);
            if r.improved() {
                summary.improved_count = summary.improved_count.saturating_add(1);
            }
        }
    }

    summaries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, sentence_id: i64, s: i64, f: i64, total: i64) -> QuizResult {
        QuizResult {
            student_name: name.into(),
            student_class: "7B".into(),
            sentence_id,
            sentence_score: s,
            flowchart_score: f,
            total_questions: total,
        }
    }

    #[test]
    fn scores_within_bounds_pass() {
        assert!(result("Alice", 1, 0, 4, 4).validate().is_ok());
        assert!(result("Alice", 1, 0, 0, 0).validate().is_ok());
    }

    #[test]
    fn scores_out_of_bounds_fail() {
        assert!(result("Alice", 1, 5, 1, 4).validate().is_err());
        assert!(result("Alice", 1, 1, -1, 4).validate().is_err());
        assert!(result("Alice", 1, 0, 0, -2).validate().is_err());
    }

    #[test]
    fn total_questions_has_an_upper_bound() {
        let at_limit = MAX_TOTAL_QUESTIONS;
        assert!(result("Alice", 1, at_limit, at_limit, at_limit).validate().is_ok());
        assert!(result("Alice", 1, 0, 0, at_limit + 1).validate().is_err());
        assert!(result("Alice", 1, i64::MAX, i64::MAX, i64::MAX).validate().is_err());
    }

    #[test]
    fn summary_totals_saturate_instead_of_overflowing() {
        // Rows read back from storage are not re-validated.
        let rows = vec![
            result("Alice", 1, i64::MAX, i64::MAX, i64::MAX),
            result("Alice", 2, i64::MAX, i64::MAX, i64::MAX),
        ];
        let summary = summarize(&rows);
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].attempts, 2);
        assert_eq!(summary[0].sentence_score_total, i64::MAX);
        assert_eq!(summary[0].flowchart_score_total, i64::MAX);
        assert_eq!(summary[0].total_questions_total, i64::MAX);
    }

    #[test]
    fn summary_groups_consecutive_students() {
        let rows = vec![
            result("Alice", 1, 1, 3, 4),
            result("Alice", 1, 2, 2, 4),
            result("Alice", 2, 0, 4, 4),
            result("Bob", 1, 3, 1, 4),
        ];

        let summary = summarize(&rows);
        assert_eq!(summary.len(), 2);

        let alice = &summary[0];
        assert_eq!(alice.student_name, "Alice");
        assert_eq!(alice.attempts, 3);
        assert_eq!(alice.sentence_score_total, 3);
        assert_eq!(alice.flowchart_score_total, 9);
        assert_eq!(alice.total_questions_total, 12);
        assert_eq!(alice.improved_count, 2);

        let bob = &summary[1];
        assert_eq!(bob.attempts, 1);
        assert_eq!(bob.improved_count, 0);
    }

    #[test]
    fn summary_of_nothing_is_empty() {
        assert!(summarize(&[]).is_empty());
    }
}
