//! The quiz session state machine.
//!
//! `QuizSession` is pure and synchronous: every transition is a plain
//! method call and nothing in here touches clocks, I/O, or tasks. The
//! async `engine` module drives it, turning elapsed time into `tick()`
//! calls and feedback delays into deferred `advance()` calls. That split
//! keeps the whole state machine unit-testable without a runtime.

use crate::model::{AnswerRecord, Question};

/// Seconds a player gets per question.
pub const QUESTION_SECONDS: u32 = 30;

/// The session's top-level mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Loading,
    Error,
    InProgress,
    ShowingResults,
}

/// Quiz progress: questions, the cursor, recorded answers, score, timer.
///
/// Invariants upheld by every transition:
/// - `answers.len() == questions.len()` once loaded
/// - `score` equals the number of correct answer records
/// - `time_remaining` is reset to [`QUESTION_SECONDS`] on every index change
/// - transitions called outside their phase are silent no-ops
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    current_index: usize,
    answers: Vec<Option<AnswerRecord>>,
    score: u32,
    time_remaining: u32,
    phase: Phase,
    error: Option<String>,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            questions: Vec::new(),
            current_index: 0,
            answers: Vec::new(),
            score: 0,
            time_remaining: QUESTION_SECONDS,
            phase: Phase::NotStarted,
            error: None,
        }
    }

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    /// Enter the `Loading` phase. Returns `false` (and changes nothing) if
    /// a load is already underway, so a second start never races the first.
    pub fn begin_loading(&mut self) -> bool {
        match self.phase {
            Phase::Loading | Phase::InProgress => false,
            _ => {
                self.phase = Phase::Loading;
                self.error = None;
                true
            }
        }
    }

    /// Install a fetched question batch and start the quiz.
    pub fn load_succeeded(&mut self, questions: Vec<Question>) {
        if self.phase != Phase::Loading {
            return;
        }
        if questions.is_empty() {
            self.load_failed("the trivia service returned no questions".to_string());
            return;
        }
        self.answers = vec![None; questions.len()];
        self.questions = questions;
        self.current_index = 0;
        self.score = 0;
        self.time_remaining = QUESTION_SECONDS;
        self.phase = Phase::InProgress;
        tracing::debug!(count = self.questions.len(), "quiz started");
    }

    /// Record a fetch failure; the message is retained for display.
    pub fn load_failed(&mut self, message: String) {
        if self.phase != Phase::Loading {
            return;
        }
        tracing::warn!(%message, "quiz load failed");
        self.error = Some(message);
        self.phase = Phase::Error;
    }

    // ------------------------------------------------------------------
    // In-progress transitions
    // ------------------------------------------------------------------

    /// Record an answer for the current question.
    ///
    /// Returns `true` when the answer was recorded, in which case the
    /// caller should schedule the feedback pause followed by `advance()`.
    /// Returns `false` outside `InProgress` or when the current question
    /// is already answered (buttons stay disabled once pressed).
    pub fn answer(&mut self, selected: &str) -> bool {
        if self.phase != Phase::InProgress {
            return false;
        }
        if self.answers[self.current_index].is_some() {
            return false;
        }
        let correct = self.questions[self.current_index].is_correct(selected);
        self.answers[self.current_index] = Some(AnswerRecord {
            selected: selected.to_string(),
            correct,
        });
        if correct {
            self.score += 1;
        }
        true
    }

    /// Move to the next question, or to the results screen when the last
    /// question is done. The per-question timer resets on every move.
    pub fn advance(&mut self) {
        if self.phase != Phase::InProgress {
            return;
        }
        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            self.time_remaining = QUESTION_SECONDS;
        } else {
            self.phase = Phase::ShowingResults;
            tracing::debug!(score = self.score, total = self.questions.len(), "quiz finished");
        }
    }

    /// Move back one question. No-op at index 0; answers and score are
    /// untouched.
    pub fn retreat(&mut self) {
        if self.phase != Phase::InProgress || self.current_index == 0 {
            return;
        }
        self.current_index -= 1;
        self.time_remaining = QUESTION_SECONDS;
    }

    /// One second of countdown elapsed. At zero the quiz auto-advances
    /// with the current slot left unanswered. Returns `true` when this
    /// tick caused an advance, so the driver can re-arm its timer.
    pub fn tick(&mut self) -> bool {
        if self.phase != Phase::InProgress {
            return false;
        }
        if self.time_remaining > 0 {
            self.time_remaining -= 1;
        }
        if self.time_remaining == 0 {
            tracing::debug!(index = self.current_index, "question timed out");
            self.advance();
            return true;
        }
        false
    }

    /// Play the already-loaded questions again from the top.
    pub fn restart(&mut self) {
        if self.phase != Phase::ShowingResults {
            return;
        }
        self.answers = vec![None; self.questions.len()];
        self.current_index = 0;
        self.score = 0;
        self.time_remaining = QUESTION_SECONDS;
        self.phase = Phase::InProgress;
    }

    // ------------------------------------------------------------------
    // Read-only presentation surface
    // ------------------------------------------------------------------

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn current_question(&self) -> Option<&Question> {
        if self.phase == Phase::InProgress {
            self.questions.get(self.current_index)
        } else {
            None
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answer_at(&self, index: usize) -> Option<&AnswerRecord> {
        self.answers.get(index).and_then(|a| a.as_ref())
    }

    /// Whether the current question already has a recorded answer.
    pub fn current_answered(&self) -> bool {
        self.answers
            .get(self.current_index)
            .map(|a| a.is_some())
            .unwrap_or(false)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
