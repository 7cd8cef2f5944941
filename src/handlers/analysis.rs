// src/handlers/analysis.rs

use axum::{Json, extract::State, response::IntoResponse};
use validator::Validate;

use crate::{
    analysis::{AnalysisEngine, AttemptRecorder},
    error::AppError,
    models::{
        attempt::{
            AnalyzeAttemptRequest, AttemptMeta, FinalizeAttemptRequest, QuestionAttempt,
            RederiveReportRequest, SummarizeQuizRequest,
        },
        question::Question,
        report::FinalizedAttempt,
    },
};

/// Rejects quizzes whose answer key points past the options list.
fn check_answer_keys(questions: &[Question]) -> Result<(), AppError> {
    match questions.iter().position(|q| !q.has_valid_answer_key()) {
        Some(index) => Err(AppError::BadRequest(format!(
            "Question {} has no option at its correct option index",
            index
        ))),
        None => Ok(()),
    }
}

/// Rejects question attempts that contradict themselves or their question:
/// a `skipped` flag that disagrees with the selection, time over the
/// question's limit, or a selection past the options list.
///
/// Unknown question indices are left to the engine, which owns that check.
fn check_attempt_facts(questions: &[Question], attempts: &[QuestionAttempt]) -> Result<(), AppError> {
    for attempt in attempts {
        let index = attempt.question_index;
        let Some(question) = questions.get(index) else {
            continue;
        };

        if attempt.skipped != attempt.selected_option_index.is_none() {
            return Err(AppError::BadRequest(format!(
                "Question {} must be skipped exactly when no option is selected",
                index
            )));
        }
        if attempt.time_spent > question.time_limit {
            return Err(AppError::BadRequest(format!(
                "Question {} time spent exceeds its time limit of {}s",
                index, question.time_limit
            )));
        }
        if let Some(selected) = attempt
            .selected_option_index
            .filter(|&selected| selected >= question.options.len())
        {
            return Err(AppError::BadRequest(format!(
                "Question {} has no option {}",
                index, selected
            )));
        }
    }
    Ok(())
}

/// Analyzes a single completed attempt.
///
/// Derived fields are always recomputed; nothing from the client's own
/// scoring is trusted.
pub async fn analyze_attempt(
    State(engine): State<AnalysisEngine>,
    Json(req): Json<AnalyzeAttemptRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;
    check_answer_keys(&req.questions)?;
    check_attempt_facts(&req.questions, &req.attempt.question_attempts)?;

    let report = engine.analyze(
        &req.questions,
        &req.attempt.question_attempts,
        req.attempt.total_time_spent,
    )?;

    tracing::debug!(
        score = report.score,
        max_score = report.max_score,
        "Attempt analyzed"
    );

    Ok(Json(report))
}

/// Re-derives the report of a stored attempt from its question attempts.
/// Score fields stored with the attempt are ignored.
pub async fn rederive_report(
    State(engine): State<AnalysisEngine>,
    Json(req): Json<RederiveReportRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;
    check_answer_keys(&req.questions)?;
    check_attempt_facts(&req.questions, &req.attempt.question_attempts)?;

    let report = engine.analyze_attempt(&req.questions, &req.attempt)?;

    if report.score != req.attempt.score {
        tracing::warn!(
            quiz_code = %req.attempt.quiz_code,
            stored = req.attempt.score,
            derived = report.score,
            "Stored score disagrees with the re-derived report"
        );
    }

    Ok(Json(report))
}

/// Aggregates many attempts of one quiz for its author.
pub async fn summarize_quiz(
    State(engine): State<AnalysisEngine>,
    Json(req): Json<SummarizeQuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;
    check_answer_keys(&req.questions)?;
    for attempt in &req.attempts {
        check_attempt_facts(&req.questions, &attempt.question_attempts)?;
    }

    let summary = engine.summarize(&req.questions, &req.attempts)?;

    tracing::debug!(attempts = summary.total_attempts, "Quiz summarized");

    Ok(Json(summary))
}

/// Finalizes an attempt from the client's raw answer events.
///
/// * Replays the events; a later event for the same question replaces the earlier one.
/// * Clamps per-question and total time to the quiz limits.
/// * Returns the finalized attempt together with its report.
pub async fn finalize_attempt(
    State(engine): State<AnalysisEngine>,
    Json(req): Json<FinalizeAttemptRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;
    check_answer_keys(&req.quiz.questions)?;

    let mut recorder = AttemptRecorder::new(&req.quiz.questions);
    for event in &req.events {
        recorder.record(
            event.question_index,
            event.selected_option_index,
            event.time_spent,
            event.option_switches,
        )?;
    }

    let meta = AttemptMeta {
        quiz_code: req.quiz.code.clone(),
        student_email: req.student_email.clone(),
        start_time: req.start_time,
        end_time: req.end_time,
    };
    let (attempt, report) = recorder.finish(&engine, meta, req.quiz.total_time_limit)?;

    tracing::info!(
        quiz_code = %attempt.quiz_code,
        score = attempt.score,
        max_score = attempt.max_score,
        "Attempt finalized"
    );

    Ok(Json(FinalizedAttempt { attempt, report }))
}
