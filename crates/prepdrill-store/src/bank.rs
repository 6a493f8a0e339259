//! JSON question bank.
//!
//! The bank maps role → difficulty → question texts. It is loaded once at
//! startup and only read afterwards; sampling draws without replacement.

use std::collections::HashMap;
use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;

use prepdrill_core::model::{Difficulty, DifficultyMode, Question};

use crate::error::StoreError;

/// The question corpus, keyed by role and difficulty.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    roles: HashMap<String, HashMap<Difficulty, Vec<String>>>,
}

impl QuestionBank {
    /// Load a bank from a JSON file.
    pub fn load(path: &Path) -> Result<QuestionBank, StoreError> {
        let content = std::fs::read_to_string(path).map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_str(&content, path)
    }

    /// Parse a bank from a JSON string (useful for testing).
    pub fn parse_str(content: &str, source_path: &Path) -> Result<QuestionBank, StoreError> {
        let roles: HashMap<String, HashMap<Difficulty, Vec<String>>> =
            serde_json::from_str(content).map_err(|source| StoreError::Malformed {
                path: source_path.to_path_buf(),
                source,
            })?;
        Ok(QuestionBank { roles })
    }

    /// Known roles, sorted for stable listings.
    pub fn roles(&self) -> Vec<&str> {
        let mut roles: Vec<&str> = self.roles.keys().map(String::as_str).collect();
        roles.sort_unstable();
        roles
    }

    /// Total number of questions across all roles and difficulties.
    pub fn question_count(&self) -> usize {
        self.roles
            .values()
            .flat_map(|by_difficulty| by_difficulty.values())
            .map(Vec::len)
            .sum()
    }

    /// Draw up to `n` questions for a session, without replacement.
    ///
    /// A fixed-difficulty mode draws from that difficulty's list; Mixed
    /// draws across all difficulties. An unknown role or an empty
    /// difficulty list yields an empty draw rather than an error, and a
    /// bank with fewer than `n` questions yields as many as it has.
    pub fn questions_for_session<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        role: &str,
        mode: DifficultyMode,
        n: usize,
    ) -> Vec<Question> {
        let Some(by_difficulty) = self.roles.get(role) else {
            tracing::warn!(role, "role not found in question bank");
            return Vec::new();
        };

        let pool: Vec<Question> = match mode.fixed() {
            Some(difficulty) => by_difficulty
                .get(&difficulty)
                .into_iter()
                .flatten()
                .map(|text| Question::new(text.clone(), difficulty))
                .collect(),
            None => Difficulty::ALL
                .iter()
                .filter_map(|d| by_difficulty.get(d).map(|texts| (d, texts)))
                .flat_map(|(d, texts)| texts.iter().map(|text| Question::new(text.clone(), *d)))
                .collect(),
        };

        pool.choose_multiple(rng, n.min(pool.len())).cloned().collect()
    }
}
