// src/models/author.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Represents the 'authors' table in the database.
/// An author buckets a set of authored questions and is picked as a quiz topic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, FromRow, Serialize, Deserialize)]
pub struct Author {
    pub id: Uuid,
    pub name: String,

    /// Display glyph shown next to the name (usually a single emoji).
    pub emoji: String,

    /// Kept as the raw string the store returned; never parsed.
    pub created_at: String,
}

impl Author {
    /// The reserved author used for AI-generated sessions.
    /// It has no row in the store and always carries the nil UUID.
    pub fn ai_generated() -> Self {
        Self {
            id: Uuid::nil(),
            name: "AI generated".to_string(),
            emoji: "🤖".to_string(),
            created_at: String::new(),
        }
    }

    pub fn is_ai_generated(&self) -> bool {
        self.id.is_nil()
    }
}
