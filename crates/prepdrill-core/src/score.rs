//! Score normalization and score extraction.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::Difficulty;

/// Fixed score for answers too short to evaluate.
const INSUFFICIENT_ANSWER_SCORE: u8 = 2;

/// Answers shorter than this (trimmed, in characters) bypass scoring.
const MIN_ANSWER_CHARS: usize = 10;

/// Word-count divisor for the length bonus.
const LENGTH_BONUS_DIVISOR: f64 = 50.0;

/// The length bonus saturates here.
const LENGTH_BONUS_CAP: f64 = 2.0;

/// Normalize a raw keyword signal into a score in [1,10].
///
/// Answers whose trimmed text is under 10 characters are treated as
/// insufficient and score a flat 2, regardless of keyword content.
/// Otherwise: a capped length bonus is added to the raw signal, the sum is
/// scaled by a difficulty multiplier (Hard is stricter, Easy more lenient),
/// shifted by a +5 baseline so a neutral answer lands mid-scale, then
/// floored and clamped into the closed range [1,10].
pub fn normalize(answer: &str, raw_score: i32, difficulty: Difficulty) -> u8 {
    if answer.trim().chars().count() < MIN_ANSWER_CHARS {
        return INSUFFICIENT_ANSWER_SCORE;
    }

    let word_count = answer.split_whitespace().count();
    let length_bonus = (word_count as f64 / LENGTH_BONUS_DIVISOR).min(LENGTH_BONUS_CAP);

    let mut adjusted = raw_score as f64 + length_bonus;
    adjusted *= match difficulty {
        Difficulty::Hard => 0.8,
        Difficulty::Easy => 1.2,
        Difficulty::Medium => 1.0,
    };

    ((adjusted + 5.0).floor() as i64).clamp(1, 10) as u8
}

// Feedback embeds the score as free text rather than carrying it as a
// field; these patterns recover it. Checked in order: an explicit
// "Score: N" label wins over a bare "N/10".
static SCORE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)score\s*[:：]\s*(\d+)").expect("valid score-label pattern"),
        Regex::new(r"(\d+)\s*/\s*10").expect("valid score-fraction pattern"),
    ]
});

/// Extract the first embedded score from composed feedback text, clamped
/// to [1,10]. Returns `None` when no pattern matches.
pub fn extract_score(feedback: &str) -> Option<u8> {
    for pattern in SCORE_PATTERNS.iter() {
        let Some(captures) = pattern.captures(feedback) else {
            continue;
        };
        if let Ok(value) = captures[1].parse::<u64>() {
            return Some(value.clamp(1, 10) as u8);
        }
    }
    None
}
