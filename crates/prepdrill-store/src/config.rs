//! Configuration loading.
//!
//! Operational settings only: how many questions a session asks and where
//! the bank and history live. Scoring constants (difficulty weights, the
//! length bonus, bucket thresholds) are part of score semantics and are
//! deliberately not configurable.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level prepdrill configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepdrillConfig {
    /// Questions drawn per session.
    #[serde(default = "default_questions_per_session")]
    pub questions_per_session: usize,
    /// Hard upper bound on questions per session.
    #[serde(default = "default_max_questions")]
    pub max_questions: usize,
    /// Path to the question bank JSON file.
    #[serde(default = "default_question_bank")]
    pub question_bank: PathBuf,
    /// Path to the session history JSON file.
    #[serde(default = "default_sessions_file")]
    pub sessions_file: PathBuf,
    /// How many recent sessions the history view covers.
    #[serde(default = "default_history_window")]
    pub history_window: usize,
}

fn default_questions_per_session() -> usize {
    5
}
fn default_max_questions() -> usize {
    15
}
fn default_question_bank() -> PathBuf {
    PathBuf::from("question_bank.json")
}
fn default_sessions_file() -> PathBuf {
    PathBuf::from("prepdrill_sessions.json")
}
fn default_history_window() -> usize {
    10
}

impl Default for PrepdrillConfig {
    fn default() -> Self {
        Self {
            questions_per_session: default_questions_per_session(),
            max_questions: default_max_questions(),
            question_bank: default_question_bank(),
            sessions_file: default_sessions_file(),
            history_window: default_history_window(),
        }
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `prepdrill.toml` in the current directory
/// 2. `~/.config/prepdrill/config.toml`
///
/// Falls back to defaults when neither exists.
pub fn load_config() -> Result<PrepdrillConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<PrepdrillConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("prepdrill.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<PrepdrillConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))
        }
        None => Ok(PrepdrillConfig::default()),
    }
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("prepdrill"))
}
