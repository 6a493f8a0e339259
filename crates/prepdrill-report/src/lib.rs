//! prepdrill-report — Session report export.
//!
//! A report wraps one completed session with its derived metrics and an
//! export identity. JSON persistence round-trips every session field;
//! the markdown rendering is for human reading.

pub mod markdown;

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use prepdrill_core::metrics::SessionMetrics;
use prepdrill_core::model::Session;

/// An exportable snapshot of one practice session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// The full session, as stored.
    pub session: Session,
    /// Derived metrics; absent when no question was scored.
    pub metrics: Option<SessionMetrics>,
}

impl SessionReport {
    /// Build a report for a session, recomputing its metrics.
    pub fn new(session: Session) -> Self {
        let metrics = SessionMetrics::compute(&session);
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            session,
            metrics,
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: SessionReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}
