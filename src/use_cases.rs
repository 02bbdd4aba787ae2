// src/use_cases.rs

//! Single-purpose operations the session controller builds on.
//! None of them catch errors; failures propagate to the caller untouched.

use std::sync::Arc;

use rand::seq::SliceRandom;
use uuid::Uuid;

use crate::{
    error::QuizError,
    models::{Author, Question},
    repository::QuizRepository,
};

/// Lists every author in store order.
#[derive(Clone)]
pub struct ListAuthors {
    repository: Arc<dyn QuizRepository>,
}

impl ListAuthors {
    pub fn new(repository: Arc<dyn QuizRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<Vec<Author>, QuizError> {
        self.repository.fetch_authors().await
    }
}

/// Fetches an author's questions in a fresh random order on every call,
/// so players cannot learn the sequence by heart.
#[derive(Clone)]
pub struct GetQuestions {
    repository: Arc<dyn QuizRepository>,
}

impl GetQuestions {
    pub fn new(repository: Arc<dyn QuizRepository>) -> Self {
        Self { repository }
    }

    /// An author without questions yields an empty Vec, not an error.
    pub async fn execute(&self, author_id: Uuid) -> Result<Vec<Question>, QuizError> {
        let mut questions = self.repository.fetch_questions(author_id).await?;
        questions.shuffle(&mut rand::thread_rng());
        Ok(questions)
    }
}

/// Asks the AI collaborator for new questions on a topic. One attempt, no retry.
#[derive(Clone)]
pub struct GenerateQuestions {
    repository: Arc<dyn QuizRepository>,
}

impl GenerateQuestions {
    pub fn new(repository: Arc<dyn QuizRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, topic: &str, count: u32) -> Result<Vec<Question>, QuizError> {
        tracing::info!(topic, count, "requesting AI-generated questions");
        self.repository.generate_questions(topic, count).await
    }
}

/// The use cases a quiz session needs, assembled once at startup.
#[derive(Clone)]
pub struct QuizUseCases {
    pub list_authors: ListAuthors,
    pub get_questions: GetQuestions,
    pub generate_questions: GenerateQuestions,
}

impl QuizUseCases {
    pub fn new(repository: Arc<dyn QuizRepository>) -> Self {
        Self {
            list_authors: ListAuthors::new(repository.clone()),
            get_questions: GetQuestions::new(repository.clone()),
            generate_questions: GenerateQuestions::new(repository),
        }
    }
}
