//! Core data model types for prepdrill.
//!
//! These are the fundamental types that the entire prepdrill system uses
//! to represent questions, recorded answers, and practice sessions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Question difficulty level.
///
/// Serialized capitalized ("Easy", "Medium", "Hard") to match the on-disk
/// question bank and session history format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All levels, in ascending order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
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

/// Difficulty mode for a whole session: one fixed level, or a mix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyMode {
    Easy,
    Medium,
    Hard,
    Mixed,
}

impl DifficultyMode {
    /// The fixed difficulty this mode pins questions to, if any.
    pub fn fixed(&self) -> Option<Difficulty> {
        match self {
            DifficultyMode::Easy => Some(Difficulty::Easy),
            DifficultyMode::Medium => Some(Difficulty::Medium),
            DifficultyMode::Hard => Some(Difficulty::Hard),
            DifficultyMode::Mixed => None,
        }
    }
}

impl fmt::Display for DifficultyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifficultyMode::Easy => write!(f, "Easy"),
            DifficultyMode::Medium => write!(f, "Medium"),
            DifficultyMode::Hard => write!(f, "Hard"),
            DifficultyMode::Mixed => write!(f, "Mixed"),
        }
    }
}

impl FromStr for DifficultyMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mixed" => Ok(DifficultyMode::Mixed),
            other => other.parse::<Difficulty>().map(Into::into),
        }
    }
}

impl From<Difficulty> for DifficultyMode {
    fn from(d: Difficulty) -> Self {
        match d {
            Difficulty::Easy => DifficultyMode::Easy,
            Difficulty::Medium => DifficultyMode::Medium,
            Difficulty::Hard => DifficultyMode::Hard,
        }
    }
}

/// A single interview question, sourced from the question bank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// The question text as presented to the candidate.
    pub text: String,
    /// Difficulty level of this question.
    pub difficulty: Difficulty,
}

impl Question {
    pub fn new(text: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            text: text.into(),
            difficulty,
        }
    }
}

/// A question together with the candidate's answer and its evaluation.
///
/// Created when a question is presented. Mutated exactly twice: once when
/// the answer is recorded, once when it is evaluated (score and feedback
/// are set together, never one without the other).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnsweredQuestion {
    pub question: Question,
    /// The candidate's free-text answer. Empty until recorded.
    #[serde(default)]
    pub answer: String,
    /// Normalized score in [1,10], set at evaluation time.
    #[serde(default)]
    pub score: Option<u8>,
    /// Composed feedback text, set together with the score.
    #[serde(default)]
    pub feedback: Option<String>,
}

impl AnsweredQuestion {
    pub fn new(question: Question) -> Self {
        Self {
            question,
            answer: String::new(),
            score: None,
            feedback: None,
        }
    }

    /// Record the candidate's answer.
    pub fn record_answer(&mut self, answer: impl Into<String>) {
        self.answer = answer.into();
    }

    /// Record the evaluation result. Score and feedback are always set
    /// together so callers never observe one without the other.
    pub fn record_evaluation(&mut self, score: u8, feedback: impl Into<String>) {
        self.score = Some(score);
        self.feedback = Some(feedback.into());
    }

    /// Whether this question has been evaluated.
    pub fn is_scored(&self) -> bool {
        self.score.is_some()
    }
}

/// One complete practice run: a role, a difficulty mode, and the ordered
/// sequence of answered questions.
///
/// The identity fields (`session_id`, `timestamp`) are absent until the
/// session store assigns them at append time; the session is never
/// rewritten after that.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Target role, e.g. "Java Developer".
    pub role: String,
    /// Difficulty mode the session was run with.
    pub mode: DifficultyMode,
    /// Questions in presentation order.
    pub questions: Vec<AnsweredQuestion>,
    /// RFC 3339 timestamp, assigned at save time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// Positive identifier, assigned monotonically at save time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<u32>,
}

impl Session {
    /// Start a session from freshly drawn questions.
    pub fn new(role: impl Into<String>, mode: DifficultyMode, questions: Vec<Question>) -> Self {
        Self {
            role: role.into(),
            mode,
            questions: questions.into_iter().map(AnsweredQuestion::new).collect(),
            timestamp: None,
            session_id: None,
        }
    }

    /// Calendar date portion of the timestamp (first 10 characters).
    pub fn date(&self) -> String {
        self.timestamp
            .as_deref()
            .unwrap_or("")
            .chars()
            .take(10)
            .collect()
    }
}
