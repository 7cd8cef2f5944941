use crate::analysis::AnalysisEngine;
use crate::config::Config;
use axum::extract::FromRef;

#[derive(Clone)]
pub struct AppState {
    pub engine: AnalysisEngine,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            engine: AnalysisEngine::new(config.hard_accuracy_policy),
        }
    }
}

impl FromRef<AppState> for AnalysisEngine {
    fn from_ref(state: &AppState) -> Self {
        state.engine
    }
}
