// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::post,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{handlers::analysis, state::AppState};

/// Assembles the main application router.
///
/// * Merges the analysis and attempt sub-routers.
/// * Applies global middleware (Trace, CORS).
/// * Injects the analysis engine.
pub fn create_router(state: AppState) -> Router {
    let origins = [
        HeaderValue::from_static("http://localhost:3000"),
        HeaderValue::from_static("http://127.0.0.1:3000"),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let analysis_routes = Router::new()
        .route("/report", post(analysis::analyze_attempt))
        .route("/summary", post(analysis::summarize_quiz));

    let attempt_routes = Router::new()
        .route("/finalize", post(analysis::finalize_attempt))
        .route("/report", post(analysis::rederive_report));

    Router::new()
        .nest("/api/analysis", analysis_routes)
        .nest("/api/attempts", attempt_routes)
        // Global Middleware (outermost first)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
