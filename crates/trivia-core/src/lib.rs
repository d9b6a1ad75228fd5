//! trivia-core — Quiz session state machine, engine, and text helpers.
//!
//! This crate defines the fundamental data model, the `QuizSession` state
//! machine, and the async `QuizEngine` driver that the rest of the trivia
//! system builds on.

pub mod engine;
pub mod error;
pub mod model;
pub mod session;
pub mod shuffle;
pub mod text;
pub mod traits;
