// src/handlers/generate.rs

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::header,
    response::IntoResponse,
};
use serde_json::Value;
use validator::Validate;

use crate::{
    ai::{ModelProvider, prompt::build_prompt, strip_code_fences},
    error::AppError,
    models::GenerateQuizRequest,
};

/// Generates quiz questions for a topic with the configured model.
///
/// * Validates `{ topic, numberOfQuestions }`.
/// * Asks the model for a JSON completion and strips any markdown fence.
/// * Relays the array untouched; anything that is not a JSON array is a 400.
pub async fn generate_quiz(
    State(model): State<Arc<dyn ModelProvider>>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    // Parsed by hand so malformed bodies still get the `{ "error": ... }` envelope.
    let req: GenerateQuizRequest = serde_json::from_slice(&body)?;
    req.validate()?;

    tracing::info!(
        topic = %req.topic,
        count = req.number_of_questions,
        "generating quiz questions"
    );

    let prompt = build_prompt(&req.topic, req.number_of_questions);
    let completion = model.generate(&prompt).await?;
    let payload = strip_code_fences(&completion);

    match serde_json::from_str::<Value>(payload) {
        Ok(Value::Array(items)) => {
            tracing::info!(questions = items.len(), "model returned questions");
        }
        Ok(_) => {
            return Err(AppError::Generation(
                "model output is not a JSON array".to_string(),
            ));
        }
        Err(e) => {
            return Err(AppError::Generation(format!(
                "model output is not valid JSON: {}",
                e
            )));
        }
    }

    Ok((
        [(header::CONTENT_TYPE, "application/json")],
        payload.to_string(),
    ))
}

/// Answers bare `OPTIONS` requests; real CORS preflights are handled by the layer.
pub async fn preflight() -> &'static str {
    "ok"
}

pub async fn health() -> &'static str {
    "ok"
}
