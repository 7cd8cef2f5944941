// src/analysis/recorder.rs

use indexmap::IndexMap;

use crate::{
    analysis::{
        engine::AnalysisEngine,
        error::{AnalysisError, Result},
    },
    models::{
        attempt::{AttemptMeta, QuestionAttempt, QuizAttempt},
        question::Question,
        report::PerformanceReport,
    },
};

/// Collects the per-question results of an attempt in progress.
///
/// Entries are keyed by question index. Recording a question again replaces
/// its entry but keeps the position of the first visit, so timings stay in
/// the order the student first reached each question.
#[derive(Debug, Clone)]
pub struct AttemptRecorder<'q> {
    questions: &'q [Question],
    entries: IndexMap<usize, QuestionAttempt>,
}

impl<'q> AttemptRecorder<'q> {
    pub fn new(questions: &'q [Question]) -> Self {
        Self {
            questions,
            entries: IndexMap::with_capacity(questions.len()),
        }
    }

    /// Records the final state of a question. `None` marks it skipped.
    /// `time_spent` is clamped to the question's time limit.
    pub fn record(
        &mut self,
        question_index: usize,
        selected_option_index: Option<usize>,
        time_spent: u32,
        option_switches: u32,
    ) -> Result<()> {
        let question = self.questions.get(question_index).ok_or(
            AnalysisError::QuestionIndexOutOfRange {
                index: question_index,
                len: self.questions.len(),
            },
        )?;

        let attempt = QuestionAttempt {
            question_index,
            selected_option_index,
            time_spent: time_spent.min(question.time_limit),
            option_switches,
            skipped: selected_option_index.is_none(),
        };
        self.entries.insert(question_index, attempt);
        Ok(())
    }

    pub fn skip(&mut self, question_index: usize, time_spent: u32, option_switches: u32) -> Result<()> {
        self.record(question_index, None, time_spent, option_switches)
    }

    /// Finalizes the attempt and analyzes it.
    ///
    /// The elapsed time is taken from `meta`, floored to whole seconds and
    /// clamped to `[0, total_time_limit]`. The derived fields of the returned
    /// attempt come from the report.
    pub fn finish(
        self,
        engine: &AnalysisEngine,
        meta: AttemptMeta,
        total_time_limit: u32,
    ) -> Result<(QuizAttempt, PerformanceReport)> {
        let total_time_spent = elapsed_seconds(&meta).min(total_time_limit);
        let question_attempts: Vec<QuestionAttempt> = self.entries.into_values().collect();

        let report = engine.analyze(self.questions, &question_attempts, total_time_spent)?;

        let attempt = QuizAttempt {
            quiz_code: meta.quiz_code,
            student_email: meta.student_email,
            start_time: meta.start_time,
            end_time: meta.end_time,
            total_time_spent,
            question_attempts,
            score: report.score,
            max_score: report.max_score,
            skipped_count: report.skipped_count,
            efficiency_score: report.efficiency_score,
        };

        Ok((attempt, report))
    }
}

fn elapsed_seconds(meta: &AttemptMeta) -> u32 {
    let seconds = (meta.end_time - meta.start_time).num_seconds();
    u32::try_from(seconds.max(0)).unwrap_or(u32::MAX)
}
