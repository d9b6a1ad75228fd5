//! Open Trivia DB API client.
//!
//! Fetching is a two-step handshake: acquire a session token, then request
//! a question batch with it. The token keeps the service from handing the
//! same question to this client twice. Either step failing aborts the
//! whole fetch; there are no retries and no partial results.

use async_trait::async_trait;
use rand::thread_rng;
use serde::Deserialize;
use tracing::instrument;

use trivia_core::error::{ApiCode, FetchError};
use trivia_core::model::Question;
use trivia_core::shuffle::answer_options;
use trivia_core::text::decode;
use trivia_core::traits::QuestionSource;

const DEFAULT_BASE_URL: &str = "https://opentdb.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

const TOKEN_ENDPOINT: &str = "/api_token.php";
const QUESTIONS_ENDPOINT: &str = "/api.php";

/// HTTP client for opentdb.com.
pub struct OpenTdbClient {
    base_url: String,
    client: reqwest::Client,
}

impl OpenTdbClient {
    pub fn new(base_url: Option<String>, timeout_secs: Option<u64>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(
                timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
            ))
            .build()
            .expect("failed to build HTTP client");

        Self {
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            client,
        }
    }

    /// Request a fresh session token.
    ///
    /// Any nonzero response code is a hard failure here, even the ones the
    /// service documents as advisory; proceeding without a valid token
    /// just produces a confusing failure one request later.
    async fn request_token(&self) -> Result<String, FetchError> {
        let url = format!("{}{TOKEN_ENDPOINT}?command=request", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Token {
                reason: transport_reason(&e),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Token {
                reason: format!("HTTP {status}"),
            });
        }

        let body: TokenResponse = response.json().await.map_err(|e| FetchError::Token {
            reason: format!("invalid response body: {e}"),
        })?;

        let code = ApiCode::from_code(body.response_code);
        if !code.is_success() {
            return Err(FetchError::Api {
                endpoint: TOKEN_ENDPOINT.to_string(),
                code,
            });
        }
        if body.token.is_empty() {
            return Err(FetchError::Token {
                reason: "service returned an empty token".to_string(),
            });
        }
        Ok(body.token)
    }

    async fn request_questions(
        &self,
        amount: u8,
        token: &str,
    ) -> Result<Vec<RawQuestion>, FetchError> {
        let url = format!(
            "{}{QUESTIONS_ENDPOINT}?amount={amount}&type=multiple&token={token}",
            self.base_url
        );
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Questions {
                reason: transport_reason(&e),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Questions {
                reason: format!("HTTP {status}"),
            });
        }

        let body: QuestionsResponse =
            response.json().await.map_err(|e| FetchError::Questions {
                reason: format!("invalid response body: {e}"),
            })?;

        let code = ApiCode::from_code(body.response_code);
        if !code.is_success() {
            return Err(FetchError::Api {
                endpoint: QUESTIONS_ENDPOINT.to_string(),
                code,
            });
        }
        Ok(body.results)
    }
}

#[async_trait]
impl QuestionSource for OpenTdbClient {
    #[instrument(skip(self))]
    async fn fetch(&self, amount: u8) -> Result<Vec<Question>, FetchError> {
        let token = self.request_token().await?;
        tracing::debug!("session token acquired");

        let raw = self.request_questions(amount, &token).await?;
        if raw.is_empty() {
            return Err(FetchError::Empty);
        }
        if raw.len() < amount as usize {
            // The service under-delivers rather than erroring when the
            // category runs dry; play what we got.
            tracing::warn!(requested = amount, received = raw.len(), "short question batch");
        }

        let mut rng = thread_rng();
        Ok(raw.into_iter().map(|q| normalize(q, &mut rng)).collect())
    }
}

/// Map a raw wire question into the strict model type: decode every text
/// field and shuffle the options once.
fn normalize<R: rand::Rng>(raw: RawQuestion, rng: &mut R) -> Question {
    let correct_answer = decode(&raw.correct_answer);
    let incorrect: Vec<String> = raw.incorrect_answers.iter().map(|a| decode(a)).collect();
    let options = answer_options(&correct_answer, &incorrect, rng);
    Question {
        text: decode(&raw.question),
        correct_answer,
        options,
        category: decode(&raw.category),
        difficulty: raw.difficulty.parse().unwrap_or_default(),
    }
}

fn transport_reason(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "request timed out".to_string()
    } else {
        format!("network error: {e}")
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    response_code: u8,
    #[serde(default)]
    token: String,
}

#[derive(Deserialize)]
struct QuestionsResponse {
    response_code: u8,
    #[serde(default)]
    results: Vec<RawQuestion>,
}

#[derive(Deserialize)]
struct RawQuestion {
    question: String,
    correct_answer: String,
    #[serde(default)]
    incorrect_answers: Vec<String>,
    #[serde(default)]
    category: String,
    #[serde(default)]
    difficulty: String,
}
