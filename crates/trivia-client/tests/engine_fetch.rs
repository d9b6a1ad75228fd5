//! End-to-end: the quiz engine driving the real HTTP client against a
//! mock trivia service.

use std::sync::Arc;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use trivia_client::OpenTdbClient;
use trivia_core::engine::QuizEngine;
use trivia_core::session::Phase;

async fn mount_quiz(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api_token.php"))
        .and(query_param("command", "request"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"response_code": 0, "token": "tok"})),
        )
        .mount(server)
        .await;

    let body = serde_json::json!({
        "response_code": 0,
        "results": [
            {
                "category": "Geography",
                "type": "multiple",
                "difficulty": "easy",
                "question": "Capital of Italy?",
                "correct_answer": "Rome",
                "incorrect_answers": ["Milan", "Naples", "Turin"],
            },
            {
                "category": "Geography",
                "type": "multiple",
                "difficulty": "medium",
                "question": "Capital of Australia?",
                "correct_answer": "Canberra",
                "incorrect_answers": ["Sydney", "Melbourne", "Perth"],
            },
        ],
    });
    Mock::given(method("GET"))
        .and(path("/api.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn full_quiz_through_the_engine() {
    let server = MockServer::start().await;
    mount_quiz(&server).await;

    let client = OpenTdbClient::new(Some(server.uri()), None);
    let engine = QuizEngine::new(Arc::new(client), 2);
    engine.start().await;

    let snap = engine.snapshot();
    assert_eq!(snap.phase(), Phase::InProgress);
    assert_eq!(snap.len(), 2);

    // First question: answer correctly, skip the feedback pause.
    let correct = snap.current_question().unwrap().correct_answer.clone();
    assert_eq!(correct, "Rome");
    engine.answer(&correct);
    engine.advance();

    // Second question: answer wrong.
    engine.answer("Sydney");
    engine.advance();

    let done = engine.snapshot();
    assert_eq!(done.phase(), Phase::ShowingResults);
    assert_eq!(done.score(), 1);
    assert!(done.answer_at(0).unwrap().correct);
    assert!(!done.answer_at(1).unwrap().correct);
}

#[tokio::test]
async fn fetch_failure_surfaces_in_the_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api_token.php"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = OpenTdbClient::new(Some(server.uri()), None);
    let engine = QuizEngine::new(Arc::new(client), 10);
    engine.start().await;

    let snap = engine.snapshot();
    assert_eq!(snap.phase(), Phase::Error);
    assert!(snap
        .error_message()
        .unwrap()
        .contains("token request failed"));
}

#[tokio::test]
async fn restart_reuses_the_fetched_batch() {
    let server = MockServer::start().await;
    mount_quiz(&server).await;

    let client = OpenTdbClient::new(Some(server.uri()), None);
    let engine = QuizEngine::new(Arc::new(client), 2);
    engine.start().await;

    engine.answer("Rome");
    engine.advance();
    engine.answer("Canberra");
    engine.advance();
    assert_eq!(engine.snapshot().phase(), Phase::ShowingResults);
    assert_eq!(engine.snapshot().score(), 2);

    engine.restart();
    let snap = engine.snapshot();
    assert_eq!(snap.phase(), Phase::InProgress);
    assert_eq!(snap.score(), 0);
    assert_eq!(snap.len(), 2);

    // Exactly one token request and one question request in total.
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
}
