// src/models/mod.rs

pub mod ai_question;
pub mod author;
pub mod generation;
pub mod question;

pub use ai_question::{AiOption, AiQuestion};
pub use author::Author;
pub use generation::GenerateQuizRequest;
pub use question::{AnswerOption, Question};
