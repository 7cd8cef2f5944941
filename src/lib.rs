// src/lib.rs

pub mod analysis;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;

pub use analysis::{AnalysisEngine, analyze};
pub use routes::create_router;
