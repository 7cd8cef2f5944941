// src/main.rs

use quizlytics::config::Config;
use quizlytics::routes;
use quizlytics::state::AppState;
use dotenvy::dotenv;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenv().ok();

    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    tracing::info!(
        "Hard question accuracy policy: {}",
        config.hard_accuracy_policy
    );

    let state = AppState::new(&config);
    let app = routes::create_router(state);

    tracing::info!("Listening on {}", config.addr);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .expect("Failed to bind listening address");

    axum::serve(listener, app)
        .await
        .expect("Server terminated unexpectedly");
}
