// src/analysis/summary.rs

use serde::Serialize;

use crate::{
    analysis::{engine::AnalysisEngine, error::Result},
    models::{
        attempt::AttemptPayload,
        question::{Difficulty, Question},
    },
};

/// Upper bounds (inclusive, minutes) and labels of the time distribution.
const TIME_BUCKETS: [(f64, &str); 5] = [
    (15.0, "0-15 min"),
    (30.0, "15-30 min"),
    (45.0, "30-45 min"),
    (60.0, "45-60 min"),
    (f64::INFINITY, "60+ min"),
];

/// Upper bounds (inclusive) of switches per question for the low and medium
/// switching buckets.
const LOW_SWITCHING: f64 = 2.0;
const MEDIUM_SWITCHING: f64 = 5.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DifficultyStats {
    pub correct: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DifficultyBreakdown {
    pub easy: DifficultyStats,
    pub medium: DifficultyStats,
    pub hard: DifficultyStats,
}

impl DifficultyBreakdown {
    fn stats_mut(&mut self, difficulty: Difficulty) -> &mut DifficultyStats {
        match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionSwitching {
    pub low_switching: usize,
    pub medium_switching: usize,
    pub high_switching: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeBucket {
    pub label: &'static str,
    pub count: usize,
}

/// Aggregate view over all attempts of one quiz, for the quiz author.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSummary {
    pub total_attempts: usize,
    /// Mean raw score, in correct answers per attempt.
    pub average_score: f64,
    pub average_percentage: f64,
    pub average_time_spent: f64,
    pub average_efficiency: f64,
    pub difficulty_breakdown: DifficultyBreakdown,
    pub skipped_questions: usize,
    pub option_switching: OptionSwitching,
    pub time_distribution: Vec<TimeBucket>,
}

impl AnalysisEngine {
    /// Summarizes many attempts of the quiz made of `questions`.
    /// Every per-attempt figure is taken from that attempt's report.
    pub fn summarize(&self, questions: &[Question], attempts: &[AttemptPayload]) -> Result<QuizSummary> {
        let mut breakdown = DifficultyBreakdown::default();
        let mut switching = OptionSwitching::default();
        let mut distribution: Vec<TimeBucket> = TIME_BUCKETS
            .iter()
            .map(|&(_, label)| TimeBucket { label, count: 0 })
            .collect();

        let mut score_sum = 0.0;
        let mut percentage_sum = 0.0;
        let mut time_sum = 0.0;
        let mut efficiency_sum = 0.0;
        let mut skipped_questions = 0;

        for attempt in attempts {
            let report = self.analyze(questions, &attempt.question_attempts, attempt.total_time_spent)?;

            score_sum += report.score as f64;
            percentage_sum += report.percentage;
            time_sum += f64::from(report.time_analysis.total_time);
            efficiency_sum += report.efficiency_score;
            skipped_questions += report.skipped_count;

            for qa in &attempt.question_attempts {
                let question = &questions[qa.question_index];
                let stats = breakdown.stats_mut(question.difficulty);
                stats.total += 1;
                if qa.is_correct_for(question) {
                    stats.correct += 1;
                }
            }

            let per_question = if questions.is_empty() {
                0.0
            } else {
                report.option_switch_count as f64 / questions.len() as f64
            };
            if per_question <= LOW_SWITCHING {
                switching.low_switching += 1;
            } else if per_question <= MEDIUM_SWITCHING {
                switching.medium_switching += 1;
            } else {
                switching.high_switching += 1;
            }

            let minutes = f64::from(report.time_analysis.total_time) / 60.0;
            if let Some(slot) = TIME_BUCKETS.iter().position(|&(max, _)| minutes <= max) {
                distribution[slot].count += 1;
            }
        }

        let total_attempts = attempts.len();
        let average = |sum: f64| {
            if total_attempts == 0 {
                0.0
            } else {
                sum / total_attempts as f64
            }
        };

        Ok(QuizSummary {
            total_attempts,
            average_score: average(score_sum),
            average_percentage: average(percentage_sum),
            average_time_spent: average(time_sum),
            average_efficiency: average(efficiency_sum),
            difficulty_breakdown: breakdown,
            skipped_questions,
            option_switching: switching,
            time_distribution: distribution,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{analysis::error::AnalysisError, models::attempt::QuestionAttempt};

    fn questions() -> Vec<Question> {
        [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
            .into_iter()
            .map(|difficulty| Question {
                text: "Q".to_string(),
                options: vec!["A".into(), "B".into()],
                correct_option_index: 0,
                time_limit: 600,
                difficulty,
            })
            .collect()
    }

    fn payload(question_attempts: Vec<QuestionAttempt>, total_time_spent: u32) -> AttemptPayload {
        AttemptPayload {
            question_attempts,
            total_time_spent,
        }
    }

    #[test]
    fn test_empty_summary_is_all_zero() {
        let summary = AnalysisEngine::default().summarize(&questions(), &[]).unwrap();

        assert_eq!(summary.total_attempts, 0);
        assert_eq!(summary.average_score, 0.0);
        assert_eq!(summary.average_percentage, 0.0);
        assert_eq!(summary.average_time_spent, 0.0);
        assert_eq!(summary.average_efficiency, 0.0);
        assert_eq!(summary.time_distribution.len(), 5);
        assert!(summary.time_distribution.iter().all(|b| b.count == 0));
    }

    #[test]
    fn test_summary_aggregates_attempts() {
        let questions = questions();
        let attempts = vec![
            // 3/3 correct in 10 minutes, 3 switches.
            payload(
                vec![
                    QuestionAttempt::answered(0, 0, 60, 1),
                    QuestionAttempt::answered(1, 0, 60, 1),
                    QuestionAttempt::answered(2, 0, 60, 1),
                ],
                600,
            ),
            // 0/3 with a skip in 40 minutes, 21 switches.
            payload(
                vec![
                    QuestionAttempt::answered(0, 1, 60, 10),
                    QuestionAttempt::answered(2, 1, 60, 11),
                    QuestionAttempt::skipped(1, 60, 0),
                ],
                2400,
            ),
            // 1/3 in one minute, 12 switches.
            payload(vec![QuestionAttempt::answered(0, 0, 60, 12)], 60),
        ];

        let summary = AnalysisEngine::default().summarize(&questions, &attempts).unwrap();

        assert_eq!(summary.total_attempts, 3);
        assert!((summary.average_score - 4.0 / 3.0).abs() < 1e-9);
        assert!((summary.average_percentage - 44.444).abs() < 0.001);
        assert_eq!(summary.average_time_spent, 1020.0);
        // (0.3 + 0.0 + 1.0) / 3
        assert!((summary.average_efficiency - 0.43333).abs() < 0.0001);
        assert_eq!(summary.skipped_questions, 1);
        assert_eq!(summary.difficulty_breakdown.easy, DifficultyStats { correct: 2, total: 3 });
        assert_eq!(summary.difficulty_breakdown.medium, DifficultyStats { correct: 1, total: 2 });
        assert_eq!(summary.difficulty_breakdown.hard, DifficultyStats { correct: 1, total: 2 });
        assert_eq!(
            summary.option_switching,
            OptionSwitching {
                low_switching: 1,
                medium_switching: 1,
                high_switching: 1,
            }
        );
        assert_eq!(summary.time_distribution[0].count, 2);
        assert_eq!(summary.time_distribution[2].count, 1);
    }

    #[test]
    fn test_time_bucket_bounds_are_inclusive() {
        let questions = questions();
        let attempts = vec![payload(vec![], 0), payload(vec![], 900), payload(vec![], 3601)];

        let summary = AnalysisEngine::default().summarize(&questions, &attempts).unwrap();

        assert_eq!(summary.time_distribution[0].count, 2);
        assert_eq!(summary.time_distribution[4].count, 1);
        assert_eq!(summary.time_distribution[4].label, "60+ min");
    }

    #[test]
    fn test_invalid_attempt_fails_whole_summary() {
        let questions = questions();
        let attempts = vec![payload(vec![QuestionAttempt::answered(9, 0, 5, 0)], 5)];

        let err = AnalysisEngine::default().summarize(&questions, &attempts).unwrap_err();
        assert!(matches!(err, AnalysisError::QuestionIndexOutOfRange { index: 9, .. }));
    }
}
