// src/analysis/engine.rs

use std::collections::HashSet;

use crate::{
    analysis::{
        error::{AnalysisError, Result},
        feedback::{FeedbackInputs, generate_feedback},
        policy::HardAccuracyPolicy,
    },
    models::{
        attempt::{QuestionAttempt, QuizAttempt},
        question::Question,
        report::{PerformanceReport, TimeAnalysis},
    },
};

/// Derives a `PerformanceReport` from a quiz's questions and one attempt.
///
/// Stateless apart from the hard-accuracy policy: the same inputs always
/// produce an equal report. Ratios with a zero denominator (no questions, no
/// recorded attempts, zero elapsed time) are reported as `0.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalysisEngine {
    policy: HardAccuracyPolicy,
}

impl AnalysisEngine {
    pub fn new(policy: HardAccuracyPolicy) -> Self {
        Self { policy }
    }

    /// Analyzes one attempt.
    ///
    /// * `questions`: the quiz's questions, in stored order.
    /// * `attempts`: at most one entry per question. Questions without an
    ///   entry are simply not scored.
    /// * `total_time_spent`: seconds, already clamped to the quiz limit.
    ///
    /// Fails when an attempt references a question that does not exist or
    /// when the same question is recorded twice.
    pub fn analyze(
        &self,
        questions: &[Question],
        attempts: &[QuestionAttempt],
        total_time_spent: u32,
    ) -> Result<PerformanceReport> {
        check_attempts(questions, attempts)?;

        let score = attempts
            .iter()
            .filter(|a| a.is_correct_for(&questions[a.question_index]))
            .count();
        let max_score = questions.len();
        let percentage = ratio(score as f64, max_score as f64) * 100.0;

        let time_analysis = TimeAnalysis {
            total_time: total_time_spent,
            average_time_per_question: ratio(total_time_spent as f64, attempts.len() as f64),
            time_per_question: attempts.iter().map(|a| a.time_spent).collect(),
        };

        let option_switch_count = attempts.iter().map(|a| u64::from(a.option_switches)).sum();
        let skipped_count = attempts.iter().filter(|a| a.skipped).count();
        let hard_questions_accuracy = self.policy.accuracy(questions, attempts);
        let efficiency_score = ratio(score as f64, total_time_spent as f64 / 60.0);

        let mut attempt_sequence: Vec<usize> = attempts.iter().map(|a| a.question_index).collect();
        attempt_sequence.sort_unstable();

        let feedback = generate_feedback(&FeedbackInputs {
            percentage,
            efficiency_score,
            option_switch_count,
            skipped_count,
            hard_questions_accuracy,
        });

        Ok(PerformanceReport {
            score,
            max_score,
            percentage,
            time_analysis,
            option_switch_count,
            skipped_count,
            hard_questions_accuracy,
            efficiency_score,
            attempt_sequence,
            feedback,
        })
    }

    /// Re-derives the report of a stored attempt.
    /// The attempt's own derived fields are ignored.
    pub fn analyze_attempt(&self, questions: &[Question], attempt: &QuizAttempt) -> Result<PerformanceReport> {
        self.analyze(questions, &attempt.question_attempts, attempt.total_time_spent)
    }
}

/// Analyzes with the default hard-accuracy policy.
pub fn analyze(
    questions: &[Question],
    attempts: &[QuestionAttempt],
    total_time_spent: u32,
) -> Result<PerformanceReport> {
    AnalysisEngine::default().analyze(questions, attempts, total_time_spent)
}

fn check_attempts(questions: &[Question], attempts: &[QuestionAttempt]) -> Result<()> {
    let mut seen = HashSet::with_capacity(attempts.len());
    for attempt in attempts {
        if attempt.question_index >= questions.len() {
            return Err(AnalysisError::QuestionIndexOutOfRange {
                index: attempt.question_index,
                len: questions.len(),
            });
        }
        if !seen.insert(attempt.question_index) {
            return Err(AnalysisError::DuplicateQuestionIndex(attempt.question_index));
        }
    }
    Ok(())
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}
