//! Bounded trend view over stored session history.

use serde::{Deserialize, Serialize};

use crate::metrics::SessionMetrics;
use crate::model::Session;

/// How many recent sessions the summary covers.
pub const HISTORY_WINDOW: usize = 10;

/// One row of the history view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Calendar date (first 10 characters of the session timestamp).
    pub date: String,
    pub role: String,
    pub average_score: f64,
    pub weighted_score: f64,
    /// Questions presented in the session.
    pub question_count: usize,
}

/// Summarize the most recent [`HISTORY_WINDOW`] sessions.
pub fn summarize(sessions: &[Session]) -> Vec<SessionSummary> {
    summarize_last(sessions, HISTORY_WINDOW)
}

/// Summarize the last `window` sessions by store order. Sessions with no
/// scored questions are skipped and do not shift the window.
pub fn summarize_last(sessions: &[Session], window: usize) -> Vec<SessionSummary> {
    let start = sessions.len().saturating_sub(window);
    sessions[start..]
        .iter()
        .filter_map(|session| {
            let Some(metrics) = SessionMetrics::compute(session) else {
                tracing::debug!(
                    session_id = session.session_id,
                    "skipping session with no scored questions"
                );
                return None;
            };
            Some(SessionSummary {
                date: session.date(),
                role: session.role.clone(),
                average_score: metrics.average_score,
                weighted_score: metrics.weighted_score,
                question_count: metrics.total_questions,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Difficulty, DifficultyMode, Question};

    fn stored_session(id: u32, score: Option<u8>) -> Session {
        let mut session = Session::new(
            "Frontend Developer",
            DifficultyMode::Medium,
            vec![Question::new(format!("Question {id}"), Difficulty::Medium)],
        );
        if let Some(score) = score {
            session.questions[0].record_answer("an answer");
            session.questions[0].record_evaluation(score, "feedback");
        }
        session.session_id = Some(id);
        session.timestamp = Some(format!("2024-03-{:02}T09:00:00+00:00", id));
        session
    }

    #[test]
    fn summarizes_in_store_order() {
        let sessions = vec![stored_session(1, Some(7)), stored_session(2, Some(9))];
        let summary = summarize(&sessions);

        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].date, "2024-03-01");
        assert_eq!(summary[1].date, "2024-03-02");
        assert!((summary[1].average_score - 9.0).abs() < 1e-9);
        assert_eq!(summary[0].question_count, 1);
    }

    #[test]
    fn window_keeps_only_last_ten() {
        let sessions: Vec<Session> = (1..=15).map(|i| stored_session(i, Some(5))).collect();
        let summary = summarize(&sessions);

        assert_eq!(summary.len(), 10);
        assert_eq!(summary[0].date, "2024-03-06");
        assert_eq!(summary[9].date, "2024-03-15");
    }

    #[test]
    fn unscored_sessions_skipped_without_shifting_window() {
        // Eleven scored sessions plus one unscored inside the window: the
        // window is cut by store position, then unscored rows drop out.
        let mut sessions: Vec<Session> = (1..=11).map(|i| stored_session(i, Some(6))).collect();
        sessions.insert(5, stored_session(99, None));

        let summary = summarize(&sessions);
        // Last 10 entries are ids 3..=11 (9 scored) with the unscored one
        // at position 5 filtered out.
        assert_eq!(summary.len(), 9);
        assert_eq!(summary[0].date, "2024-03-03");
        assert!(summary.iter().all(|s| s.date != "2024-03-99"));
    }

    #[test]
    fn empty_history_is_empty_summary() {
        assert!(summarize(&[]).is_empty());
    }
}
