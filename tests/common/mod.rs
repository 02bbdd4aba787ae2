// tests/common/mod.rs
#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use quiz_game::{
    QuizSession, QuizUseCases, SessionSettings,
    error::QuizError,
    models::{AnswerOption, Author, Question},
    repository::QuizRepository,
};
use uuid::Uuid;

/// In-memory repository so tests never touch a real store or model.
#[derive(Default)]
pub struct MockRepository {
    pub authors: Vec<Author>,
    pub questions: Vec<Question>,
    /// `None` makes generation fail.
    pub generated: Option<Vec<Question>>,
    pub fail_fetch: bool,
    /// Questions for this author arrive only after the delay.
    pub slow_author: Option<(Uuid, Duration)>,
    pub author_calls: AtomicUsize,
    pub question_calls: AtomicUsize,
}

#[async_trait]
impl QuizRepository for MockRepository {
    async fn fetch_authors(&self) -> Result<Vec<Author>, QuizError> {
        self.author_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_fetch {
            return Err(QuizError::RemoteFetch("store unreachable".to_string()));
        }
        Ok(self.authors.clone())
    }

    async fn fetch_questions(&self, author_id: Uuid) -> Result<Vec<Question>, QuizError> {
        self.question_calls.fetch_add(1, Ordering::SeqCst);
        if let Some((slow_id, delay)) = self.slow_author {
            if slow_id == author_id {
                tokio::time::sleep(delay).await;
            }
        }
        if self.fail_fetch {
            return Err(QuizError::RemoteFetch("store unreachable".to_string()));
        }
        Ok(self
            .questions
            .iter()
            .filter(|q| q.author_id == Some(author_id))
            .cloned()
            .collect())
    }

    async fn generate_questions(
        &self,
        _topic: &str,
        _number_of_questions: u32,
    ) -> Result<Vec<Question>, QuizError> {
        self.generated
            .clone()
            .ok_or_else(|| QuizError::Generation("model unavailable".to_string()))
    }
}

pub fn author(name: &str) -> Author {
    Author {
        id: Uuid::new_v4(),
        name: name.to_string(),
        emoji: "🐱".to_string(),
        created_at: "2026-01-05".to_string(),
    }
}

/// A question with four options; `correct` (0..4) picks the right one.
pub fn question(author_id: Option<Uuid>, content: &str, labels: [&str; 4], correct: usize) -> Question {
    let id = Uuid::new_v4();
    let options = labels
        .iter()
        .enumerate()
        .map(|(i, label)| AnswerOption {
            id: Uuid::new_v4(),
            question_id: id,
            content: label.to_string(),
            is_correct: i == correct,
            created_at: None,
        })
        .collect();

    Question {
        id,
        author_id,
        content: content.to_string(),
        created_at: Some("2026-01-05".to_string()),
        options,
    }
}

pub fn correct_option(question: &Question) -> AnswerOption {
    question
        .options
        .iter()
        .find(|o| o.is_correct)
        .cloned()
        .expect("question has a correct option")
}

pub fn wrong_option(question: &Question) -> AnswerOption {
    question
        .options
        .iter()
        .find(|o| !o.is_correct)
        .cloned()
        .expect("question has a wrong option")
}

/// Author "Cat Memes" with Q1 (correct = Opt1) and Q2 (correct = Opt5).
pub fn cat_memes() -> (Author, Vec<Question>) {
    let author = author("Cat Memes");
    let q1 = question(Some(author.id), "Q1", ["Opt1", "Opt2", "Opt3", "Opt4"], 0);
    let q2 = question(Some(author.id), "Q2", ["Opt5", "Opt6", "Opt7", "Opt8"], 0);
    (author, vec![q1, q2])
}

pub fn session_with(repository: MockRepository) -> (QuizSession, Arc<MockRepository>) {
    let repository = Arc::new(repository);
    let session = QuizSession::new(
        QuizUseCases::new(repository.clone()),
        SessionSettings::default(),
    );
    (session, repository)
}
