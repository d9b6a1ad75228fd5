//! The `trivia fetch` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use trivia_client::{load_config_from, OpenTdbClient};
use trivia_core::traits::QuestionSource;

pub async fn execute(amount: Option<u8>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let amount = amount.unwrap_or(config.question_count);
    anyhow::ensure!(amount >= 1, "amount must be at least 1");

    let client = OpenTdbClient::new(Some(config.base_url), Some(config.timeout_secs));
    let questions = client
        .fetch(amount)
        .await
        .context("failed to fetch questions")?;

    println!("{}", serde_json::to_string_pretty(&questions)?);
    Ok(())
}
