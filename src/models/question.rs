// src/models/question.rs

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A quiz question together with its answer options.
///
/// Two questions are equal when their ids are equal, whatever the other fields say.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: Uuid,

    /// Owning author. `None` for AI-sourced questions that were never persisted.
    pub author_id: Option<Uuid>,

    pub content: String,

    /// Opaque store timestamp, `None` until persisted.
    pub created_at: Option<String>,

    /// Order carries no meaning.
    #[serde(default)]
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// Returns the first option flagged as correct, if any.
    pub fn correct_option(&self) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.is_correct)
    }
}

impl PartialEq for Question {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Question {}

impl Hash for Question {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// One selectable answer. Equality and hashing use the id only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerOption {
    pub id: Uuid,
    pub question_id: Uuid,
    pub content: String,
    pub is_correct: bool,
    pub created_at: Option<String>,
}

impl PartialEq for AnswerOption {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for AnswerOption {}

impl Hash for AnswerOption {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
