// src/lib.rs

pub mod ai;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod session;
pub mod state;
pub mod use_cases;

pub use routes::create_router;
pub use session::{QuizSession, SessionSettings, SessionState};
pub use use_cases::QuizUseCases;
