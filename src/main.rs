// src/main.rs

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use quiz_game::ai::GeminiClient;
use quiz_game::config::Config;
use quiz_game::routes;
use quiz_game::state::AppState;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load configuration from .env (if present) and the environment
    let config = Config::from_env().expect("Invalid configuration");

    let file_appender = tracing_appender::rolling::daily("logs", "quiz-game.log");
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

    // The store is optional here: when configured, make sure its schema exists.
    if let Some(database_url) = &config.database_url {
        prepare_store(database_url).await;
    }

    let model = GeminiClient::from_config(&config).expect("Failed to build model client");
    let state = AppState {
        model: Arc::new(model),
    };

    let app = routes::create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(model = %config.gemini_model, "Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();

    // Start the server
    axum::serve(listener, app).await.unwrap();
}

/// Connects to the quiz store (with retry) and applies migrations.
async fn prepare_store(database_url: &str) {
    let mut retry_count = 0;
    let pool = loop {
        match PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(database_url)
            .await
        {
            Ok(pool) => break pool,
            Err(e) => {
                retry_count += 1;
                if retry_count > 5 {
                    panic!("Failed to connect to database after 5 retries: {}", e);
                }
                tracing::warn!("Database not ready, retrying in 2s... (Attempt {})", retry_count);
                tokio::time::sleep(Duration::from_secs(2)).await;
            }
        }
    };

    tracing::info!("Running migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Migrations applied successfully.");
}
