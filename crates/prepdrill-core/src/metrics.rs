//! Per-session performance metrics.
//!
//! Metrics are derived on demand from a session and never persisted; the
//! session itself is the record of truth.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{Difficulty, Session};

/// How many strength/improvement snippets a summary keeps.
const SNIPPET_LIMIT: usize = 3;

/// Question snippets are truncated to this many characters.
const SNIPPET_CHARS: usize = 50;

/// Per-difficulty weight for the weighted session average. Harder
/// questions count for more. These are score semantics, not configuration.
fn weight(difficulty: Difficulty) -> f64 {
    match difficulty {
        Difficulty::Easy => 1.0,
        Difficulty::Medium => 1.5,
        Difficulty::Hard => 2.0,
    }
}

/// Aggregate statistics for one session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionMetrics {
    /// Questions presented in the session.
    pub total_questions: usize,
    /// Questions with a recorded score.
    pub answered_questions: usize,
    /// Arithmetic mean of recorded scores.
    pub average_score: f64,
    /// Difficulty-weighted mean of recorded scores.
    pub weighted_score: f64,
    pub highest_score: u8,
    pub lowest_score: u8,
    pub score_range: u8,
    /// Count of answered questions per difficulty.
    pub difficulty_breakdown: HashMap<Difficulty, usize>,
    /// Average score per difficulty, over answered questions.
    pub difficulty_averages: HashMap<Difficulty, f64>,
    /// Snippets of questions scored >= 8, in question order, first 3.
    pub strengths: Vec<String>,
    /// Snippets of questions scored <= 6, in question order, first 3.
    pub improvement_areas: Vec<String>,
}

impl SessionMetrics {
    /// Compute metrics for a session, or `None` when no question has a
    /// recorded score.
    pub fn compute(session: &Session) -> Option<SessionMetrics> {
        let scored: Vec<(u8, Difficulty, &str)> = session
            .questions
            .iter()
            .filter_map(|q| {
                q.score
                    .map(|s| (s, q.question.difficulty, q.question.text.as_str()))
            })
            .collect();

        if scored.is_empty() {
            return None;
        }

        let count = scored.len() as f64;
        let average_score = scored.iter().map(|(s, _, _)| *s as f64).sum::<f64>() / count;

        let total_weight: f64 = scored.iter().map(|(_, d, _)| weight(*d)).sum();
        let weighted_score = if total_weight > 0.0 {
            scored
                .iter()
                .map(|(s, d, _)| *s as f64 * weight(*d))
                .sum::<f64>()
                / total_weight
        } else {
            0.0
        };

        let highest_score = scored.iter().map(|(s, _, _)| *s).max().unwrap_or(0);
        let lowest_score = scored.iter().map(|(s, _, _)| *s).min().unwrap_or(0);

        let mut per_difficulty: HashMap<Difficulty, (f64, usize)> = HashMap::new();
        for (score, difficulty, _) in &scored {
            let entry = per_difficulty.entry(*difficulty).or_insert((0.0, 0));
            entry.0 += *score as f64;
            entry.1 += 1;
        }
        let difficulty_breakdown = per_difficulty.iter().map(|(d, (_, n))| (*d, *n)).collect();
        let difficulty_averages = per_difficulty
            .iter()
            .map(|(d, (total, n))| (*d, total / *n as f64))
            .collect();

        let strengths = scored
            .iter()
            .filter(|(s, _, _)| *s >= 8)
            .take(SNIPPET_LIMIT)
            .map(|(_, _, text)| format!("Strong performance on: {}", snippet(text)))
            .collect();

        let improvement_areas = scored
            .iter()
            .filter(|(s, _, _)| *s <= 6)
            .take(SNIPPET_LIMIT)
            .map(|(_, _, text)| format!("Needs improvement on: {}", snippet(text)))
            .collect();

        Some(SessionMetrics {
            total_questions: session.questions.len(),
            answered_questions: scored.len(),
            average_score,
            weighted_score,
            highest_score,
            lowest_score,
            score_range: highest_score - lowest_score,
            difficulty_breakdown,
            difficulty_averages,
            strengths,
            improvement_areas,
        })
    }
}

/// First ~50 characters of a question, with an ellipsis.
fn snippet(text: &str) -> String {
    let truncated: String = text.chars().take(SNIPPET_CHARS).collect();
    format!("{truncated}...")
}
