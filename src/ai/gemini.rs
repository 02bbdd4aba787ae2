// src/ai/gemini.rs

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use super::ModelProvider;
use crate::{config::Config, error::QuizError};

/// Client for Gemini's `generateContent` endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    endpoint: Url,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
}

impl GeminiClient {
    pub fn new(base_url: &Url, model: &str, api_key: &str) -> Result<Self, QuizError> {
        let raw = format!(
            "{}/models/{}:generateContent",
            base_url.as_str().trim_end_matches('/'),
            model
        );
        let mut endpoint = Url::parse(&raw)
            .map_err(|e| QuizError::Generation(format!("invalid model endpoint: {}", e)))?;
        endpoint.query_pairs_mut().append_pair("key", api_key);

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()?;

        Ok(Self { client, endpoint })
    }

    pub fn from_config(config: &Config) -> Result<Self, QuizError> {
        Self::new(
            &config.gemini_base_url,
            &config.gemini_model,
            &config.gemini_api_key,
        )
    }
}

#[async_trait]
impl ModelProvider for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, QuizError> {
        let body = GenerateContentRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
            },
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let data: Value = response
            .json()
            .await
            .map_err(|e| QuizError::Generation(format!("unreadable model response: {}", e)))?;

        tracing::debug!(%status, "model provider responded");
        extract_text(&data)
    }
}

/// Pulls `candidates[0].content.parts[0].text` out of a response,
/// falling back to the provider's own `error.message`.
fn extract_text(data: &Value) -> Result<String, QuizError> {
    if let Some(text) = data
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
    {
        return Ok(text.to_string());
    }

    let message = data
        .pointer("/error/message")
        .and_then(Value::as_str)
        .unwrap_or("model returned no candidates");
    Err(QuizError::Generation(message.to_string()))
}
