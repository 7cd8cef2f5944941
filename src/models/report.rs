// src/models/report.rs

use serde::{Deserialize, Serialize};

use crate::models::attempt::QuizAttempt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeAnalysis {
    pub total_time: u32,
    /// Averaged over recorded (answered or skipped) questions only.
    pub average_time_per_question: f64,
    /// `time_spent` values in the order the attempts were recorded.
    pub time_per_question: Vec<u32>,
}

/// Analysis of one completed attempt.
/// Built once per analysis call; consumers read it and never patch fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReport {
    pub score: usize,
    pub max_score: usize,
    pub percentage: f64,
    pub time_analysis: TimeAnalysis,
    pub option_switch_count: u64,
    pub skipped_count: usize,
    pub hard_questions_accuracy: f64,
    /// Correct answers per elapsed minute.
    pub efficiency_score: f64,
    /// Recorded question indices, ascending.
    pub attempt_sequence: Vec<usize>,
    pub feedback: String,
}

/// Response of the finalize endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct FinalizedAttempt {
    pub attempt: QuizAttempt,
    pub report: PerformanceReport,
}
