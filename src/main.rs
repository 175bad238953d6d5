// src/main.rs

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use dotenvy::dotenv;
use leadscope_backend::config::Config;
use leadscope_backend::models::question::QuestionBank;
use leadscope_backend::routes;
use leadscope_backend::state::AppState;
use leadscope_backend::store::SessionStore;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    // Build the embedded question bank and the empty session store
    let bank = Arc::new(QuestionBank::builtin());
    let sessions = SessionStore::new();
    tracing::info!("Question bank loaded ({} questions)", bank.len());

    // Create AppState
    let state = AppState {
        bank,
        sessions: sessions.clone(),
        config: config.clone(),
    };

    // Sweep idle sessions in the background
    let ttl = chrono::Duration::seconds(config.session_ttl_secs as i64);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(60));
        loop {
            interval.tick().await;
            let removed = sessions.sweep_expired(ttl, chrono::Utc::now());
            if removed > 0 {
                tracing::info!("Swept {} idle session(s)", removed);
            }
        }
    });

    // Create the Axum application router
    let app = routes::create_router(state);

    // Bind to the listening address
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();

    // Start the server
    axum::serve(listener, app).await.unwrap();
}
