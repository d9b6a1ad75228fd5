//! Fetch error types.
//!
//! These errors represent failures while acquiring a session token or
//! fetching questions. Defined in `trivia-core` so the engine can classify
//! them without depending on the HTTP client crate.

use std::fmt;
use thiserror::Error;

/// Errors that can occur while fetching a question batch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Token acquisition failed (network or HTTP status).
    #[error("token request failed: {reason}")]
    Token { reason: String },

    /// The question fetch failed (network or HTTP status).
    #[error("question request failed: {reason}")]
    Questions { reason: String },

    /// The service rejected the call with a nonzero response code.
    #[error("trivia API rejected {endpoint}: {code}")]
    Api { endpoint: String, code: ApiCode },

    /// The service returned zero questions.
    #[error("trivia API returned no questions")]
    Empty,
}

impl FetchError {
    /// Returns `true` if the failure happened before any questions were
    /// requested, i.e. while acquiring the token.
    pub fn is_token_phase(&self) -> bool {
        match self {
            FetchError::Token { .. } => true,
            FetchError::Api { endpoint, .. } => endpoint.contains("api_token"),
            _ => false,
        }
    }
}

/// Response codes of the Open Trivia DB API.
///
/// Only `Success` allows processing to continue; every other code is
/// treated as a failure even where the upstream behavior was to log and
/// carry on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiCode {
    Success,
    NoResults,
    InvalidParameter,
    TokenNotFound,
    TokenEmpty,
    RateLimited,
    Unknown(u8),
}

impl ApiCode {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => ApiCode::Success,
            1 => ApiCode::NoResults,
            2 => ApiCode::InvalidParameter,
            3 => ApiCode::TokenNotFound,
            4 => ApiCode::TokenEmpty,
            5 => ApiCode::RateLimited,
            other => ApiCode::Unknown(other),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiCode::Success)
    }
}

impl fmt::Display for ApiCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiCode::Success => write!(f, "success"),
            ApiCode::NoResults => write!(f, "no results for this query"),
            ApiCode::InvalidParameter => write!(f, "invalid parameter"),
            ApiCode::TokenNotFound => write!(f, "session token not found"),
            ApiCode::TokenEmpty => write!(f, "session token exhausted"),
            ApiCode::RateLimited => write!(f, "rate limited"),
            ApiCode::Unknown(code) => write!(f, "unknown response code {code}"),
        }
    }
}
