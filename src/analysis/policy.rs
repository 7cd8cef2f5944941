// src/analysis/policy.rs

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::models::{attempt::QuestionAttempt, question::{Difficulty, Question}};

/// How correct answers are attributed to hard questions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HardAccuracyPolicy {
    /// With N hard questions, counts correct answers at question positions
    /// `0..N`, whatever their difficulty. Historical behavior.
    #[default]
    LeadingPositions,

    /// Counts correct answers to questions tagged `hard`.
    DifficultyMatch,
}

impl HardAccuracyPolicy {
    /// Percentage of hard questions answered correctly, `0.0` when the quiz
    /// has no hard question.
    ///
    /// `attempts` must only reference indices inside `questions`.
    pub fn accuracy(self, questions: &[Question], attempts: &[QuestionAttempt]) -> f64 {
        let hard_count = questions
            .iter()
            .filter(|q| q.difficulty == Difficulty::Hard)
            .count();

        if hard_count == 0 {
            return 0.0;
        }

        let correct_hard = attempts
            .iter()
            .filter(|a| {
                let question = &questions[a.question_index];
                let counts = match self {
                    HardAccuracyPolicy::LeadingPositions => a.question_index < hard_count,
                    HardAccuracyPolicy::DifficultyMatch => question.difficulty == Difficulty::Hard,
                };
                counts && a.is_correct_for(question)
            })
            .count();

        (correct_hard as f64 / hard_count as f64) * 100.0
    }
}

impl fmt::Display for HardAccuracyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HardAccuracyPolicy::LeadingPositions => write!(f, "leading_positions"),
            HardAccuracyPolicy::DifficultyMatch => write!(f, "difficulty_match"),
        }
    }
}

impl FromStr for HardAccuracyPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "leading_positions" => Ok(HardAccuracyPolicy::LeadingPositions),
            "difficulty_match" => Ok(HardAccuracyPolicy::DifficultyMatch),
            other => Err(format!("unknown hard accuracy policy '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(difficulty: Difficulty) -> Question {
        Question {
            text: "Q".to_string(),
            options: vec!["A".to_string(), "B".to_string()],
            correct_option_index: 0,
            time_limit: 30,
            difficulty,
        }
    }

    #[test]
    fn test_no_hard_questions_is_zero() {
        let questions = vec![question(Difficulty::Easy), question(Difficulty::Medium)];
        let attempts = vec![
            QuestionAttempt::answered(0, 0, 5, 0),
            QuestionAttempt::answered(1, 0, 5, 0),
        ];
        for policy in [HardAccuracyPolicy::LeadingPositions, HardAccuracyPolicy::DifficultyMatch] {
            assert_eq!(policy.accuracy(&questions, &attempts), 0.0);
        }
    }

    #[test]
    fn test_policies_diverge_when_hard_questions_trail() {
        // One hard question, placed last. Only position 0 is answered correctly.
        let questions = vec![question(Difficulty::Easy), question(Difficulty::Hard)];
        let attempts = vec![
            QuestionAttempt::answered(0, 0, 5, 0),
            QuestionAttempt::answered(1, 1, 5, 0),
        ];

        assert_eq!(HardAccuracyPolicy::LeadingPositions.accuracy(&questions, &attempts), 100.0);
        assert_eq!(HardAccuracyPolicy::DifficultyMatch.accuracy(&questions, &attempts), 0.0);
    }

    #[test]
    fn test_difficulty_match_counts_actual_hard_questions() {
        let questions = vec![
            question(Difficulty::Hard),
            question(Difficulty::Easy),
            question(Difficulty::Hard),
        ];
        let attempts = vec![
            QuestionAttempt::answered(0, 1, 5, 0), // wrong
            QuestionAttempt::answered(2, 0, 5, 0),
        ];

        assert_eq!(HardAccuracyPolicy::DifficultyMatch.accuracy(&questions, &attempts), 50.0);
    }

    #[test]
    fn test_skipped_hard_question_never_counts() {
        let questions = vec![question(Difficulty::Hard)];
        let attempts = vec![QuestionAttempt::skipped(0, 30, 0)];
        assert_eq!(HardAccuracyPolicy::LeadingPositions.accuracy(&questions, &attempts), 0.0);
    }

    #[test]
    fn test_parse_policy() {
        assert_eq!(
            "difficulty_match".parse::<HardAccuracyPolicy>(),
            Ok(HardAccuracyPolicy::DifficultyMatch)
        );
        assert_eq!(
            " Leading_Positions ".parse::<HardAccuracyPolicy>(),
            Ok(HardAccuracyPolicy::LeadingPositions)
        );
        assert!("identity".parse::<HardAccuracyPolicy>().is_err());
        assert_eq!(HardAccuracyPolicy::default().to_string(), "leading_positions");
    }
}
