//! The question source seam.
//!
//! The engine only knows this async trait; the HTTP client in
//! `trivia-client` implements it, and tests substitute a mock.

use async_trait::async_trait;

use crate::error::FetchError;
use crate::model::Question;

/// A provider of normalized quiz questions.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetch up to `amount` multiple-choice questions, fully normalized
    /// (entity-decoded text, shuffled options).
    ///
    /// Returning fewer than `amount` questions is not an error; returning
    /// zero is.
    async fn fetch(&self, amount: u8) -> Result<Vec<Question>, FetchError>;
}
