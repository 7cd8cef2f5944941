// src/models/attempt.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::question::{Question, QuizDefinition};

/// One question of an attempt, as finalized by submission, skip or timeout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionAttempt {
    /// Position of the question in the quiz's question list.
    pub question_index: usize,

    /// Chosen option, absent when the question was skipped.
    pub selected_option_index: Option<usize>,

    /// Seconds spent, already clamped to the question's time limit.
    pub time_spent: u32,

    /// Number of answer changes before the question was finalized.
    pub option_switches: u32,

    pub skipped: bool,
}

impl QuestionAttempt {
    pub fn answered(question_index: usize, selected: usize, time_spent: u32, option_switches: u32) -> Self {
        Self {
            question_index,
            selected_option_index: Some(selected),
            time_spent,
            option_switches,
            skipped: false,
        }
    }

    pub fn skipped(question_index: usize, time_spent: u32, option_switches: u32) -> Self {
        Self {
            question_index,
            selected_option_index: None,
            time_spent,
            option_switches,
            skipped: true,
        }
    }

    /// Scores against `question`. Skipped attempts never score.
    pub fn is_correct_for(&self, question: &Question) -> bool {
        question.is_correct(self.selected_option_index)
    }
}

/// A student's full pass through a quiz.
///
/// `score`, `max_score`, `skipped_count` and `efficiency_score` are derived
/// from the analysis and are recomputed whenever the attempt is analyzed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAttempt {
    pub quiz_code: String,
    pub student_email: String,

    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub end_time: DateTime<Utc>,

    /// Seconds, clamped to the quiz's total time limit.
    pub total_time_spent: u32,

    pub question_attempts: Vec<QuestionAttempt>,

    pub score: usize,
    pub max_score: usize,
    pub skipped_count: usize,
    pub efficiency_score: f64,
}

/// Identity and timing of an attempt, supplied by the submission handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptMeta {
    pub quiz_code: String,
    pub student_email: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// The per-attempt facts the analysis consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptPayload {
    pub question_attempts: Vec<QuestionAttempt>,
    pub total_time_spent: u32,
}

/// DTO for requesting the report of a single attempt.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeAttemptRequest {
    #[validate(length(min = 1), nested)]
    pub questions: Vec<Question>,
    pub attempt: AttemptPayload,
}

/// DTO for re-deriving the report of a stored attempt.
/// The stored score fields are carried along but never read.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RederiveReportRequest {
    #[validate(length(min = 1), nested)]
    pub questions: Vec<Question>,
    pub attempt: QuizAttempt,
}

/// DTO for requesting the aggregate over many attempts of one quiz.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeQuizRequest {
    #[validate(length(min = 1), nested)]
    pub questions: Vec<Question>,
    pub attempts: Vec<AttemptPayload>,
}

/// A raw answer event from the quiz client.
/// A missing selection means the student skipped the question.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerEvent {
    pub question_index: usize,
    pub selected_option_index: Option<usize>,
    pub time_spent: u32,
    #[serde(default)]
    pub option_switches: u32,
}

/// DTO for finalizing an attempt from its raw answer events.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FinalizeAttemptRequest {
    #[validate(nested)]
    pub quiz: QuizDefinition,

    #[validate(email)]
    pub student_email: String,

    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub end_time: DateTime<Utc>,

    pub events: Vec<AnswerEvent>,
}
