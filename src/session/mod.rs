// src/session/mod.rs

pub mod controller;
pub mod state;
pub mod timer;

pub use controller::{QuizSession, SessionSettings};
pub use state::{DEFAULT_TIME_BUDGET, NO_QUESTIONS_MESSAGE, SessionState};
pub use timer::CountdownHandle;
