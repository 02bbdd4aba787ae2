// src/ai/mod.rs

pub mod gemini;
pub mod parser;
pub mod prompt;

use async_trait::async_trait;

use crate::error::QuizError;

pub use gemini::GeminiClient;
pub use parser::{parse_ai_questions, strip_code_fences};

/// A generative model that turns a prompt into raw completion text.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, QuizError>;
}
