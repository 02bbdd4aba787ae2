// src/session/controller.rs

//! Quiz session controller.
//!
//! Owns the authoritative session state, drives the per-question countdown
//! and publishes every new [`SessionState`] on a `watch` channel the
//! presentation layer subscribes to.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::watch;

use super::state::{DEFAULT_TIME_BUDGET, SessionState};
use super::timer::CountdownHandle;
use crate::{
    error::QuizError,
    models::{AnswerOption, Author, Question},
    use_cases::QuizUseCases,
};

/// Timing knobs for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    /// Ticks per question.
    pub time_budget: u32,
    /// Length of one tick.
    pub tick: Duration,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            time_budget: DEFAULT_TIME_BUDGET,
            tick: Duration::from_secs(1),
        }
    }
}

/// Cheap, clonable handle to one quiz session.
///
/// All transitions run under a single lock, which is never held across an
/// `.await`. The countdown only keeps a weak reference, so it dies with the
/// last handle.
#[derive(Clone)]
pub struct QuizSession {
    shared: Arc<Shared>,
    use_cases: QuizUseCases,
}

struct Shared {
    inner: Mutex<Inner>,
    events: watch::Sender<SessionState>,
    settings: SessionSettings,
}

#[derive(Default)]
struct Inner {
    state: SessionState,
    questions: Vec<Question>,
    author: Option<Author>,
    authors: Option<Vec<Author>>,
    timer: Option<CountdownHandle>,
    /// Bumped on every cancel; ticks carrying an older value are ignored.
    epoch: u64,
    /// Bumped by `stop`; loads started under an older value are discarded.
    load_token: u64,
}

impl Inner {
    fn cancel_timer(&mut self) {
        if let Some(handle) = self.timer.take() {
            handle.cancel();
        }
        self.epoch += 1;
    }
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, inner: &mut Inner, state: SessionState) {
        inner.state = state.clone();
        self.events.send_replace(state);
    }

    fn start_timer(self: &Arc<Self>, inner: &mut Inner) {
        inner.cancel_timer();
        let weak = Arc::downgrade(self);
        inner.timer = Some(CountdownHandle::spawn(
            inner.epoch,
            self.settings.tick,
            move |epoch| weak.upgrade().is_some_and(|shared| shared.on_tick(epoch)),
        ));
    }

    /// Returns whether the countdown should keep running.
    fn on_tick(self: &Arc<Self>, epoch: u64) -> bool {
        let mut inner = self.lock();
        if inner.epoch != epoch || inner.timer.is_none() || !inner.state.is_in_progress() {
            return false;
        }

        let next = inner.state.clone().tick();
        let expired = next.is_expired();
        self.publish(&mut inner, next);

        if expired {
            tracing::debug!(index = ?inner.state.index(), "question timed out");
            self.advance(&mut inner);
            return false;
        }
        true
    }

    fn advance(self: &Arc<Self>, inner: &mut Inner) {
        inner.cancel_timer();
        if !inner.state.is_in_progress() {
            return;
        }

        let next = inner
            .state
            .clone()
            .advance(inner.questions.len(), self.settings.time_budget);
        let keep_going = next.is_in_progress();

        if let SessionState::Finished { score, total } = &next {
            tracing::info!(score, total, "quiz finished");
        }
        self.publish(inner, next);

        if keep_going {
            self.start_timer(inner);
        }
    }

    /// Clears the previous run and announces that questions are loading.
    /// Returns the token the load must still hold when it completes.
    fn reset_for_loading(&self) -> u64 {
        let mut inner = self.lock();
        inner.cancel_timer();
        inner.questions.clear();
        inner.author = None;
        self.publish(&mut inner, SessionState::Loading);
        inner.load_token
    }

    fn fail(&self, token: u64, err: &QuizError) {
        let mut inner = self.lock();
        if inner.load_token != token {
            tracing::debug!("discarding load failure after stop: {}", err);
            return;
        }
        tracing::warn!("Quiz session failed: {}", err);
        inner.cancel_timer();
        self.publish(
            &mut inner,
            SessionState::Error {
                message: err.to_string(),
            },
        );
    }
}

impl QuizSession {
    pub fn new(use_cases: QuizUseCases, settings: SessionSettings) -> Self {
        let (events, _) = watch::channel(SessionState::Idle);
        Self {
            shared: Arc::new(Shared {
                inner: Mutex::new(Inner::default()),
                events,
                settings,
            }),
            use_cases,
        }
    }

    /// Receiver that observes every published state.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.shared.events.subscribe()
    }

    pub fn state(&self) -> SessionState {
        self.shared.lock().state.clone()
    }

    pub fn settings(&self) -> SessionSettings {
        self.shared.settings
    }

    pub fn author(&self) -> Option<Author> {
        self.shared.lock().author.clone()
    }

    pub fn question_count(&self) -> usize {
        self.shared.lock().questions.len()
    }

    /// The question being answered, while the session is in progress.
    pub fn current_question(&self) -> Option<Question> {
        let inner = self.shared.lock();
        let index = inner.state.index()?;
        inner.questions.get(index).cloned()
    }

    /// Loads the author list once; later calls return the cached list.
    pub async fn load_authors_if_needed(&self) -> Result<Vec<Author>, QuizError> {
        let cached = self.shared.lock().authors.clone();
        if let Some(authors) = cached {
            return Ok(authors);
        }

        let authors = self.use_cases.list_authors.execute().await?;
        tracing::info!(count = authors.len(), "authors loaded");
        self.shared.lock().authors = Some(authors.clone());
        Ok(authors)
    }

    /// Starts a new session for `author`.
    ///
    /// `preloaded` questions (the AI path) are used as given; otherwise the
    /// author's questions are fetched and shuffled. Overlapping calls are not
    /// de-duplicated: whichever load finishes last decides the state, and the
    /// author always changes together with its questions. A load still pending
    /// when [`stop`](Self::stop) is called is discarded.
    pub async fn start(&self, author: Author, preloaded: Option<Vec<Question>>) {
        tracing::info!(author = %author.name, preloaded = preloaded.is_some(), "starting quiz");
        let token = self.shared.reset_for_loading();
        self.load(token, author, preloaded).await;
    }

    /// Generates questions for `topic` and plays them as the AI author.
    pub async fn start_generated(&self, topic: &str, count: u32) {
        tracing::info!(topic, count, "starting generated quiz");
        let token = self.shared.reset_for_loading();

        match self.use_cases.generate_questions.execute(topic, count).await {
            Ok(questions) => {
                self.load(token, Author::ai_generated(), Some(questions))
                    .await
            }
            Err(err) => self.shared.fail(token, &err),
        }
    }

    async fn load(&self, token: u64, author: Author, preloaded: Option<Vec<Question>>) {
        let loaded = match preloaded {
            Some(questions) => Ok(questions),
            None => self.use_cases.get_questions.execute(author.id).await,
        };

        let questions = match loaded {
            Ok(questions) => questions,
            Err(err) => return self.shared.fail(token, &err),
        };

        let mut inner = self.shared.lock();
        if inner.load_token != token {
            tracing::debug!(author = %author.name, "discarding questions loaded after stop");
            return;
        }

        let next = SessionState::begin(questions.len(), self.shared.settings.time_budget);
        inner.cancel_timer();
        inner.author = Some(author);
        inner.questions = questions;
        let in_progress = next.is_in_progress();
        self.shared.publish(&mut inner, next);

        if in_progress {
            self.shared.start_timer(&mut inner);
        }
    }

    /// Records the answer for the current question. Ignored outside a running question.
    /// Membership of `option` in the current question is the caller's responsibility.
    pub fn select_option(&self, option: AnswerOption) {
        let mut inner = self.shared.lock();
        if !inner.state.is_in_progress() {
            return;
        }
        let next = inner.state.clone().select(option);
        self.shared.publish(&mut inner, next);
    }

    /// Scores the current question and moves to the next one, or finishes.
    pub fn advance(&self) {
        let mut inner = self.shared.lock();
        self.shared.advance(&mut inner);
    }

    /// Cancels the countdown and abandons any load still in flight.
    /// Safe in any state and idempotent.
    pub fn stop(&self) {
        let mut inner = self.shared.lock();
        inner.cancel_timer();
        inner.load_token += 1;
    }

    #[cfg(test)]
    fn live_epoch(&self) -> u64 {
        self.shared.lock().epoch
    }

    #[cfg(test)]
    fn fire_tick(&self, epoch: u64) -> bool {
        self.shared.on_tick(epoch)
    }
}
