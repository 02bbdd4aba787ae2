// src/repository/mod.rs

pub mod generation;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    error::QuizError,
    models::{Author, Question},
};

pub use generation::GenerationClient;
pub use postgres::PgQuizRepository;

/// Gateway to the quiz data: the authored store and the AI generation function.
///
/// Use cases and the session controller only ever see this trait, so the
/// backend can be swapped without touching them.
#[async_trait]
pub trait QuizRepository: Send + Sync {
    /// Fails with [`QuizError::RemoteFetch`].
    async fn fetch_authors(&self) -> Result<Vec<Author>, QuizError>;

    /// Every question of the author, options embedded. Fails with [`QuizError::RemoteFetch`].
    async fn fetch_questions(&self, author_id: Uuid) -> Result<Vec<Question>, QuizError>;

    /// Fails with [`QuizError::Generation`].
    async fn generate_questions(
        &self,
        topic: &str,
        number_of_questions: u32,
    ) -> Result<Vec<Question>, QuizError>;
}
