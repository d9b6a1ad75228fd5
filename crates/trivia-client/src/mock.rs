//! Mock question source for testing.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use trivia_core::error::FetchError;
use trivia_core::model::{Difficulty, Question};
use trivia_core::traits::QuestionSource;

/// A canned [`QuestionSource`] for driving the engine and the CLI in tests
/// without the network.
pub struct MockSource {
    questions: Vec<Question>,
    failure: Option<String>,
    delay: Duration,
    call_count: AtomicU32,
    last_amount: Mutex<Option<u8>>,
}

impl MockSource {
    /// A source that returns the given questions on every fetch.
    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            questions,
            failure: None,
            delay: Duration::ZERO,
            call_count: AtomicU32::new(0),
            last_amount: Mutex::new(None),
        }
    }

    /// A source that fails every fetch with the given reason.
    pub fn failing(reason: &str) -> Self {
        Self {
            questions: Vec::new(),
            failure: Some(reason.to_string()),
            delay: Duration::ZERO,
            call_count: AtomicU32::new(0),
            last_amount: Mutex::new(None),
        }
    }

    /// Delay every fetch, to hold the session in `Loading` for a while.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Number of fetches made against this source.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// The `amount` argument of the most recent fetch.
    pub fn last_amount(&self) -> Option<u8> {
        *self.last_amount.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// A plain question with the given text; "A" is always correct.
    pub fn question(text: &str) -> Question {
        Question {
            text: text.to_string(),
            correct_answer: "A".to_string(),
            options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            category: "General Knowledge".to_string(),
            difficulty: Difficulty::Medium,
        }
    }
}

#[async_trait]
impl QuestionSource for MockSource {
    async fn fetch(&self, amount: u8) -> Result<Vec<Question>, FetchError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self.last_amount.lock().unwrap_or_else(|e| e.into_inner()) = Some(amount);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if let Some(reason) = &self.failure {
            return Err(FetchError::Questions {
                reason: reason.clone(),
            });
        }
        Ok(self.questions.clone())
    }
}
