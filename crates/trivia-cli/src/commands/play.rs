//! The `trivia play` command — the interactive terminal quiz.

use std::io::BufRead;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use comfy_table::{Cell, Table};
use tokio::sync::mpsc;

use trivia_client::{load_config_from, OpenTdbClient};
use trivia_core::engine::QuizEngine;
use trivia_core::session::{Phase, QuizSession};

/// How often the loop wakes up to re-check session state while waiting
/// for input.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

pub async fn execute(amount: Option<u8>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let amount = amount.unwrap_or(config.question_count);
    anyhow::ensure!(amount >= 1, "amount must be at least 1");

    let source = Arc::new(OpenTdbClient::new(
        Some(config.base_url),
        Some(config.timeout_secs),
    ));
    let engine = QuizEngine::new(source, amount);

    println!("Fetching {amount} questions...");
    tracing::debug!(amount, "starting quiz");
    engine.start().await;

    if engine.snapshot().phase() == Phase::Error {
        let snap = engine.snapshot();
        anyhow::bail!(
            "could not load the quiz: {}",
            snap.error_message().unwrap_or("unknown error")
        );
    }

    run_loop(&engine, stdin_lines()).await
}

async fn run_loop(
    engine: &QuizEngine,
    mut input: mpsc::UnboundedReceiver<String>,
) -> Result<()> {
    // Which question was last drawn, so navigation and timeouts trigger a
    // redraw but idle polling does not.
    let mut rendered: Option<usize> = None;
    let mut results_shown = false;

    loop {
        let snap = engine.snapshot();
        match snap.phase() {
            Phase::InProgress => {
                if rendered != Some(snap.current_index()) {
                    render_question(&snap);
                    rendered = Some(snap.current_index());
                    results_shown = false;
                }
                let line =
                    match tokio::time::timeout(POLL_INTERVAL, input.recv()).await {
                        Ok(Some(line)) => line,
                        Ok(None) => return Ok(()), // stdin closed
                        Err(_) => continue,        // poll again
                    };
                match line.trim() {
                    "" => {}
                    "q" => return Ok(()),
                    "n" => engine.advance(),
                    "p" => engine.retreat(),
                    other => handle_selection(engine, &snap, other),
                }
            }
            Phase::ShowingResults => {
                if !results_shown {
                    render_results(&snap);
                    results_shown = true;
                    rendered = None;
                }
                match input.recv().await {
                    Some(line) if line.trim() == "r" => engine.restart(),
                    Some(line) if line.trim() == "q" || line.trim().is_empty() => {
                        return Ok(())
                    }
                    Some(_) => println!("r to play again, q to quit"),
                    None => return Ok(()),
                }
            }
            Phase::Error => {
                anyhow::bail!(
                    "quiz failed: {}",
                    snap.error_message().unwrap_or("unknown error")
                );
            }
            Phase::NotStarted | Phase::Loading => {
                tokio::time::sleep(POLL_INTERVAL).await;
            }
        }
    }
}

fn handle_selection(engine: &QuizEngine, snap: &QuizSession, input: &str) {
    let Some(question) = snap.current_question() else {
        return;
    };
    let Ok(choice) = input.parse::<usize>() else {
        println!("pick an option number, n for next, p for previous, q to quit");
        return;
    };
    if choice == 0 || choice > question.options.len() {
        println!("pick a number between 1 and {}", question.options.len());
        return;
    }
    let selected = question.options[choice - 1].clone();
    engine.answer(&selected);

    // Show feedback right away; the engine advances after its pause.
    let after = engine.snapshot();
    if let Some(record) = after.answer_at(after.current_index()) {
        if record.correct {
            println!("Correct!");
        } else {
            println!("Wrong — the answer was: {}", question.correct_answer);
        }
    }
}

fn render_question(snap: &QuizSession) {
    let Some(question) = snap.current_question() else {
        return;
    };
    println!();
    println!(
        "Question {}/{} [{} / {}] — {}s on the clock",
        snap.current_index() + 1,
        snap.len(),
        question.category,
        question.difficulty,
        snap.time_remaining(),
    );
    println!("{}", question.text);
    for (i, option) in question.options.iter().enumerate() {
        println!("  {}) {}", i + 1, option);
    }
    println!("answer with 1-{}, n next, p previous, q quit", question.options.len());
}

fn render_results(snap: &QuizSession) {
    let mut table = Table::new();
    table.set_header(vec!["#", "Question", "Your answer", "Correct answer", ""]);

    for (i, question) in snap.questions().iter().enumerate() {
        let (selected, verdict) = match snap.answer_at(i) {
            Some(record) if record.correct => (record.selected.clone(), "right"),
            Some(record) => (record.selected.clone(), "wrong"),
            None => ("(no answer)".to_string(), "timed out"),
        };
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&question.text),
            Cell::new(selected),
            Cell::new(&question.correct_answer),
            Cell::new(verdict),
        ]);
    }

    println!("\n{table}");
    println!("Score: {}/{}", snap.score(), snap.len());
    println!("r to play again, q to quit");
}

/// Forward stdin lines into a channel from a blocking thread, so the quiz
/// loop can wait for input with a timeout.
fn stdin_lines() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    });
    rx
}
