//! Async driver around [`QuizSession`].
//!
//! The session itself is a pure state machine; this engine supplies the
//! parts that need a runtime: the one-in-flight fetch, the per-question
//! countdown, and the one-second feedback pause after an answer.
//!
//! Scheduling is generation-counted. Every index or phase change bumps a
//! counter and aborts the live timer tasks; a task that wakes up with a
//! stale generation returns without touching the session. That rules out
//! orphaned timers firing against a newer question and double-advances
//! when a timeout races the feedback pause.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::session::{Phase, QuizSession};
use crate::traits::QuestionSource;

/// How long an answered question stays on screen before auto-advancing.
pub const FEEDBACK_DELAY: Duration = Duration::from_secs(1);

/// Countdown resolution.
const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Drives a [`QuizSession`] with real time and a [`QuestionSource`].
pub struct QuizEngine {
    source: Arc<dyn QuestionSource>,
    amount: u8,
    inner: Arc<Mutex<Inner>>,
}

struct Inner {
    session: QuizSession,
    /// Bumped on every index or phase change; stale tasks check it and bail.
    generation: u64,
    countdown: Option<JoinHandle<()>>,
    feedback: Option<JoinHandle<()>>,
    fetching: bool,
}

impl Inner {
    fn cancel_timers(&mut self) {
        if let Some(handle) = self.countdown.take() {
            handle.abort();
        }
        if let Some(handle) = self.feedback.take() {
            handle.abort();
        }
    }
}

impl Drop for QuizEngine {
    fn drop(&mut self) {
        // Timer tasks hold their own Arc to the shared state; abort them
        // so the last engine handle actually releases it.
        self.lock().cancel_timers();
    }
}

impl QuizEngine {
    pub fn new(source: Arc<dyn QuestionSource>, amount: u8) -> Self {
        Self {
            source,
            amount,
            inner: Arc::new(Mutex::new(Inner {
                session: QuizSession::new(),
                generation: 0,
                countdown: None,
                feedback: None,
                fetching: false,
            })),
        }
    }

    /// A point-in-time copy of the session for rendering.
    pub fn snapshot(&self) -> QuizSession {
        self.lock().session.clone()
    }

    /// Fetch questions and start the quiz.
    ///
    /// A second call while a fetch is in flight is ignored, so there is
    /// never more than one question batch on the way per session.
    pub async fn start(&self) {
        {
            let mut inner = self.lock();
            if inner.fetching || !inner.session.begin_loading() {
                tracing::debug!("start ignored: load already underway");
                return;
            }
            inner.fetching = true;
        }

        let result = self.source.fetch(self.amount).await;

        let mut inner = self.lock();
        inner.fetching = false;
        match result {
            Ok(questions) => inner.session.load_succeeded(questions),
            Err(e) => inner.session.load_failed(format!("{e}")),
        }
        rearm(&self.inner, &mut inner);
    }

    /// Record an answer for the current question and, when it was
    /// accepted, schedule the feedback pause followed by an advance.
    pub fn answer(&self, selected: &str) {
        let mut inner = self.lock();
        if !inner.session.answer(selected) {
            return;
        }
        // The countdown keeps running during the pause; whichever fires
        // first advances, and the generation check silences the loser.
        let generation = inner.generation;
        let shared = Arc::clone(&self.inner);
        inner.feedback = Some(tokio::spawn(async move {
            tokio::time::sleep(FEEDBACK_DELAY).await;
            let mut inner = shared.lock().unwrap_or_else(|e| e.into_inner());
            if inner.generation != generation {
                return;
            }
            inner.session.advance();
            rearm(&shared, &mut inner);
        }));
    }

    /// Skip to the next question (or the results screen).
    pub fn advance(&self) {
        let mut inner = self.lock();
        inner.session.advance();
        rearm(&self.inner, &mut inner);
    }

    /// Go back one question.
    pub fn retreat(&self) {
        let mut inner = self.lock();
        let before = inner.session.current_index();
        inner.session.retreat();
        if inner.session.current_index() != before {
            rearm(&self.inner, &mut inner);
        }
    }

    /// Play the loaded questions again from the top.
    pub fn restart(&self) {
        let mut inner = self.lock();
        inner.session.restart();
        rearm(&self.inner, &mut inner);
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Invalidate all scheduled work and, while the quiz is in progress,
/// spawn a fresh countdown for the current question.
fn rearm(shared: &Arc<Mutex<Inner>>, inner: &mut Inner) {
    inner.generation += 1;
    inner.cancel_timers();
    if inner.session.phase() != Phase::InProgress {
        return;
    }
    let generation = inner.generation;
    let shared = Arc::clone(shared);
    inner.countdown = Some(tokio::spawn(async move {
        loop {
            tokio::time::sleep(TICK_INTERVAL).await;
            let mut inner = shared.lock().unwrap_or_else(|e| e.into_inner());
            if inner.generation != generation {
                return;
            }
            if inner.session.tick() {
                // Timed out: the session advanced underneath us, so this
                // countdown is done and a new one covers the next question.
                rearm(&shared, &mut inner);
                return;
            }
        }
    }));
}
