// src/session/state.rs

use crate::models::AnswerOption;

/// Ticks each question gets before it advances on its own.
pub const DEFAULT_TIME_BUDGET: u32 = 10;

pub const NO_QUESTIONS_MESSAGE: &str = "no questions found";

/// Snapshot of a quiz session.
///
/// Transitions are pure: each method consumes the state and returns the
/// next one. States a transition does not apply to are returned unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    #[default]
    Idle,
    Loading,
    InProgress {
        index: usize,
        selected: Option<AnswerOption>,
        score: u32,
        time_remaining: u32,
    },
    Finished {
        score: u32,
        total: usize,
    },
    Error {
        message: String,
    },
}

impl SessionState {
    /// Entry state once questions are loaded.
    pub fn begin(question_count: usize, time_budget: u32) -> Self {
        if question_count == 0 {
            return SessionState::Error {
                message: NO_QUESTIONS_MESSAGE.to_string(),
            };
        }
        SessionState::InProgress {
            index: 0,
            selected: None,
            score: 0,
            time_remaining: time_budget,
        }
    }

    /// Records the choice for the current question; the last call wins.
    pub fn select(self, option: AnswerOption) -> Self {
        match self {
            SessionState::InProgress {
                index,
                score,
                time_remaining,
                ..
            } => SessionState::InProgress {
                index,
                selected: Some(option),
                score,
                time_remaining,
            },
            other => other,
        }
    }

    /// Scores the current selection and moves on.
    ///
    /// A correct selection is worth one point; a wrong or missing one is worth nothing.
    pub fn advance(self, total: usize, time_budget: u32) -> Self {
        match self {
            SessionState::InProgress {
                index,
                selected,
                score,
                ..
            } => {
                let earned = u32::from(selected.is_some_and(|o| o.is_correct));
                let score = score + earned;

                if index + 1 >= total {
                    SessionState::Finished { score, total }
                } else {
                    SessionState::InProgress {
                        index: index + 1,
                        selected: None,
                        score,
                        time_remaining: time_budget,
                    }
                }
            }
            other => other,
        }
    }

    /// One unit of elapsed time. Never goes below zero.
    pub fn tick(self) -> Self {
        match self {
            SessionState::InProgress {
                index,
                selected,
                score,
                time_remaining,
            } => SessionState::InProgress {
                index,
                selected,
                score,
                time_remaining: time_remaining.saturating_sub(1),
            },
            other => other,
        }
    }

    pub fn is_in_progress(&self) -> bool {
        matches!(self, SessionState::InProgress { .. })
    }

    pub fn is_expired(&self) -> bool {
        matches!(
            self,
            SessionState::InProgress {
                time_remaining: 0,
                ..
            }
        )
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            SessionState::InProgress { index, .. } => Some(*index),
            _ => None,
        }
    }

    pub fn score(&self) -> Option<u32> {
        match self {
            SessionState::InProgress { score, .. } | SessionState::Finished { score, .. } => {
                Some(*score)
            }
            _ => None,
        }
    }

    pub fn selected(&self) -> Option<&AnswerOption> {
        match self {
            SessionState::InProgress { selected, .. } => selected.as_ref(),
            _ => None,
        }
    }

    pub fn time_remaining(&self) -> Option<u32> {
        match self {
            SessionState::InProgress { time_remaining, .. } => Some(*time_remaining),
            _ => None,
        }
    }
}
