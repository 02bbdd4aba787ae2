// src/models/generation.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_QUESTION_COUNT: u32 = 5;

/// Body of a generation request, shared by the function and its client.
/// Field names are camelCase on the wire (`numberOfQuestions`).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuizRequest {
    #[validate(length(min = 1, max = 200))]
    pub topic: String,

    #[serde(default = "default_question_count")]
    #[validate(range(min = 1, max = 20))]
    pub number_of_questions: u32,
}

fn default_question_count() -> u32 {
    DEFAULT_QUESTION_COUNT
}
