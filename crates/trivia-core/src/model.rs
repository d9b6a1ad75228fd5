//! Core data model types for trivia.
//!
//! These are the fundamental types that the entire trivia system uses to
//! represent questions and recorded answers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single multiple-choice question, normalized and ready for display.
///
/// Text fields are entity-decoded and `options` is pre-shuffled at
/// construction time, so the question is immutable from here on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// The question text.
    pub text: String,
    /// The correct answer, verbatim as it appears in `options`.
    pub correct_answer: String,
    /// All answer options (one correct plus the incorrect ones), shuffled.
    pub options: Vec<String>,
    /// Category label from the trivia service.
    #[serde(default)]
    pub category: String,
    /// Question difficulty.
    #[serde(default)]
    pub difficulty: Difficulty,
}

impl Question {
    /// Whether `selected` matches this question's correct answer.
    pub fn is_correct(&self, selected: &str) -> bool {
        self.correct_answer == selected
    }
}

/// The answer a player gave for one question.
///
/// A question with no record is unanswered — a timeout leaves the slot
/// empty rather than recording an incorrect answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// The option the player selected.
    pub selected: String,
    /// Whether it matched the correct answer.
    pub correct: bool,
}

/// Question difficulty as reported by the trivia service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> Question {
        Question {
            text: "What is 2 + 2?".into(),
            correct_answer: "4".into(),
            options: vec!["3".into(), "4".into(), "5".into(), "22".into()],
            category: "Mathematics".into(),
            difficulty: Difficulty::Easy,
        }
    }

    #[test]
    fn difficulty_display_and_parse() {
        assert_eq!(Difficulty::Easy.to_string(), "easy");
        assert_eq!("hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!("Medium".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert!("impossible".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn answer_matching_is_exact() {
        let q = question();
        assert!(q.is_correct("4"));
        assert!(!q.is_correct("5"));
        assert!(!q.is_correct("4 "));
    }

    #[test]
    fn question_serde_roundtrip() {
        let json = serde_json::to_string(&question()).unwrap();
        let back: Question = serde_json::from_str(&json).unwrap();
        assert_eq!(back.correct_answer, "4");
        assert_eq!(back.options.len(), 4);
        assert_eq!(back.difficulty, Difficulty::Easy);
    }

    #[test]
    fn question_deserializes_without_optional_fields() {
        let json = r#"{"text":"Q","correct_answer":"A","options":["A","B"]}"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.category, "");
        assert_eq!(q.difficulty, Difficulty::Medium);
    }
}
