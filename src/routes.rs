// src/routes.rs

use axum::{
    Router,
    http::{HeaderName, Method, header},
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{handlers::generate, state::AppState};

pub const GENERATE_QUIZ_PATH: &str = "/functions/v1/generate-quiz";

/// Assembles the router of the generation function.
///
/// * Any origin may call it (the mobile app has none to pin).
/// * Applies global middleware (Trace, CORS).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            header::CONTENT_TYPE,
        ]);

    Router::new()
        .route(
            GENERATE_QUIZ_PATH,
            post(generate::generate_quiz).options(generate::preflight),
        )
        .route("/health", get(generate::health))
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
