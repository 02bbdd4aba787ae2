// src/repository/generation.rs

use std::time::Duration;

use url::Url;

use crate::{
    ai::parse_ai_questions,
    error::QuizError,
    models::{GenerateQuizRequest, Question},
};

/// Calls the deployed generation function and parses whatever it returns.
#[derive(Debug, Clone)]
pub struct GenerationClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl GenerationClient {
    pub fn new(endpoint: Url) -> Result<Self, QuizError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(90))
            .build()?;

        Ok(Self { client, endpoint })
    }

    /// Single attempt, no retry.
    ///
    /// The body is read as text whatever the status code, so an
    /// `{ "error": ... }` envelope surfaces as its message.
    pub async fn generate(
        &self,
        topic: &str,
        number_of_questions: u32,
    ) -> Result<Vec<Question>, QuizError> {
        let payload = GenerateQuizRequest {
            topic: topic.to_string(),
            number_of_questions,
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        tracing::info!(%status, bytes = body.len(), topic, "generation function responded");

        parse_ai_questions(&body)
    }
}
