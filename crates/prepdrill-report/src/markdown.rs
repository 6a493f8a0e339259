//! Markdown report rendering.

use std::path::Path;

use anyhow::{Context, Result};

use crate::SessionReport;

/// Render a report as a markdown document.
pub fn render_markdown(report: &SessionReport) -> String {
    let mut md = String::new();
    let session = &report.session;

    md.push_str(&format!("# Interview Report — {}\n\n", session.role));
    md.push_str(&format!(
        "**Session:** #{} | **Mode:** {} | **Date:** {} | **Report:** {}\n\n",
        session
            .session_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string()),
        session.mode,
        session.timestamp.as_deref().unwrap_or("-"),
        report.id,
    ));

    match &report.metrics {
        Some(metrics) => {
            md.push_str("## Performance\n\n");
            md.push_str("| Metric | Value |\n");
            md.push_str("|--------|-------|\n");
            md.push_str(&format!(
                "| Average score | {:.1}/10 |\n",
                metrics.average_score
            ));
            md.push_str(&format!(
                "| Weighted score | {:.1}/10 |\n",
                metrics.weighted_score
            ));
            md.push_str(&format!(
                "| Questions answered | {}/{} |\n",
                metrics.answered_questions, metrics.total_questions
            ));
            md.push_str(&format!("| Highest score | {}/10 |\n", metrics.highest_score));
            md.push_str(&format!("| Lowest score | {}/10 |\n", metrics.lowest_score));
            md.push_str(&format!("| Score range | {} |\n\n", metrics.score_range));

            if !metrics.strengths.is_empty() {
                md.push_str("### Strengths\n\n");
                for strength in &metrics.strengths {
                    md.push_str(&format!("- ✅ {strength}\n"));
                }
                md.push('\n');
            }

            if !metrics.improvement_areas.is_empty() {
                md.push_str("### Areas for Improvement\n\n");
                for area in &metrics.improvement_areas {
                    md.push_str(&format!("- 📝 {area}\n"));
                }
                md.push('\n');
            }
        }
        None => {
            md.push_str("_No questions were scored in this session._\n\n");
        }
    }

    md.push_str("## Detailed Review\n");
    for (i, answered) in session.questions.iter().enumerate() {
        md.push_str(&format!(
            "\n### Question {}: {}\n\n",
            i + 1,
            answered.question.text
        ));
        md.push_str(&format!(
            "**Difficulty:** {}\n\n",
            answered.question.difficulty
        ));
        if !answered.answer.is_empty() {
            md.push_str(&format!("**Your Answer:** {}\n\n", answered.answer));
        }
        if let Some(score) = answered.score {
            md.push_str(&format!("**Score:** {score}/10\n\n"));
        }
        if let Some(feedback) = &answered.feedback {
            md.push_str(&format!("**Feedback:**\n\n{feedback}\n"));
        }
    }

    md
}

/// Write the markdown rendering of a report to a file.
pub fn write_markdown_report(report: &SessionReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, render_markdown(report))
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    Ok(())
}
