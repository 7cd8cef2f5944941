// src/analysis/mod.rs

pub mod engine;
pub mod error;
pub mod feedback;
pub mod policy;
pub mod recorder;
pub mod summary;

pub use engine::{AnalysisEngine, analyze};
pub use error::AnalysisError;
pub use policy::HardAccuracyPolicy;
pub use recorder::AttemptRecorder;
pub use summary::QuizSummary;
