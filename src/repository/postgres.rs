// src/repository/postgres.rs

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::{GenerationClient, QuizRepository};
use crate::{
    error::QuizError,
    models::{AnswerOption, Author, Question},
};

/// Store-backed repository: authors and authored questions come from Postgres,
/// AI questions come from the generation function.
#[derive(Clone)]
pub struct PgQuizRepository {
    pool: PgPool,
    generator: GenerationClient,
}

/// One row of the questions/options join. Option columns are NULL for
/// questions that have no options yet.
#[derive(Debug, FromRow)]
struct QuestionOptionRow {
    question_id: Uuid,
    author_id: Option<Uuid>,
    question_content: String,
    question_created_at: Option<String>,
    option_id: Option<Uuid>,
    option_content: Option<String>,
    is_correct: Option<bool>,
    option_created_at: Option<String>,
}

impl PgQuizRepository {
    pub fn new(pool: PgPool, generator: GenerationClient) -> Self {
        Self { pool, generator }
    }
}

#[async_trait]
impl QuizRepository for PgQuizRepository {
    async fn fetch_authors(&self) -> Result<Vec<Author>, QuizError> {
        let authors = sqlx::query_as::<_, Author>(
            r#"
            SELECT
                id,
                name,
                emoji,
                COALESCE(created_at::TEXT, '') AS created_at
            FROM authors
            ORDER BY authors.created_at, authors.name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch authors: {:?}", e);
            QuizError::from(e)
        })?;

        Ok(authors)
    }

    async fn fetch_questions(&self, author_id: Uuid) -> Result<Vec<Question>, QuizError> {
        let rows = sqlx::query_as::<_, QuestionOptionRow>(
            r#"
            SELECT
                q.id AS question_id,
                q.author_id,
                q.content AS question_content,
                q.created_at::TEXT AS question_created_at,
                o.id AS option_id,
                o.content AS option_content,
                o.is_correct,
                o.created_at::TEXT AS option_created_at
            FROM questions q
            LEFT JOIN options o ON o.question_id = q.id
            WHERE q.author_id = $1
            ORDER BY q.created_at, q.id, o.created_at, o.id
            "#,
        )
        .bind(author_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch questions for {}: {:?}", author_id, e);
            QuizError::from(e)
        })?;

        Ok(assemble_questions(rows))
    }

    async fn generate_questions(
        &self,
        topic: &str,
        number_of_questions: u32,
    ) -> Result<Vec<Question>, QuizError> {
        self.generator.generate(topic, number_of_questions).await
    }
}

/// Folds join rows into questions with their options embedded.
/// Rows arrive ordered by question, so consecutive rows share a question.
fn assemble_questions(rows: Vec<QuestionOptionRow>) -> Vec<Question> {
    let mut questions: Vec<Question> = Vec::new();

    for row in rows {
        let starts_new = questions.last().is_none_or(|q| q.id != row.question_id);
        if starts_new {
            questions.push(Question {
                id: row.question_id,
                author_id: row.author_id,
                content: row.question_content,
                created_at: row.question_created_at,
                options: Vec::new(),
            });
        }

        let (Some(option_id), Some(content)) = (row.option_id, row.option_content) else {
            continue;
        };

        if let Some(question) = questions.last_mut() {
            question.options.push(AnswerOption {
                id: option_id,
                question_id: question.id,
                content,
                is_correct: row.is_correct.unwrap_or(false),
                created_at: row.option_created_at,
            });
        }
    }

    questions
}
