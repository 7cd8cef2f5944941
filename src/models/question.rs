// src/models/question.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Difficulty tag attached to every question by the quiz author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A single multiple-choice question of a quiz.
/// Immutable once the quiz has been published.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// The text content of the question.
    #[validate(length(min = 1, max = 1000))]
    pub text: String,

    /// Ordered answer options (e.g., ["Option A", "Option B"]).
    #[validate(custom(function = validate_options))]
    pub options: Vec<String>,

    /// Index into `options` of the correct answer.
    pub correct_option_index: usize,

    /// Per-question time limit in seconds.
    #[validate(range(min = 1))]
    pub time_limit: u32,

    pub difficulty: Difficulty,
}

impl Question {
    /// Whether `selected` is this question's correct option.
    pub fn is_correct(&self, selected: Option<usize>) -> bool {
        selected == Some(self.correct_option_index)
    }

    /// Whether the answer key points at an existing option.
    pub fn has_valid_answer_key(&self) -> bool {
        self.correct_option_index < self.options.len()
    }
}

fn validate_options(options: &[String]) -> Result<(), validator::ValidationError> {
    if options.len() < 2 {
        return Err(validator::ValidationError::new("at_least_two_options"));
    }
    for opt in options {
        if opt.is_empty() || opt.len() > 500 {
            return Err(validator::ValidationError::new("invalid_option_length"));
        }
    }
    Ok(())
}

/// Quiz definition as handed over by the quiz store.
/// `questions` order is stable: a `questionIndex` is a position in this list.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuizDefinition {
    #[validate(length(min = 1, max = 32))]
    pub code: String,

    /// Time limit for the whole attempt, in seconds.
    #[validate(range(min = 1))]
    pub total_time_limit: u32,

    #[validate(length(min = 1), nested)]
    pub questions: Vec<Question>,
}
