//! trivia-client — Open Trivia DB integration.
//!
//! Implements the `QuestionSource` trait over the opentdb.com HTTP API,
//! plus a mock source for driving the engine in tests.

pub mod config;
pub mod mock;
pub mod opentdb;

pub use config::{load_config, load_config_from, TriviaConfig};
pub use mock::MockSource;
pub use opentdb::OpenTdbClient;
