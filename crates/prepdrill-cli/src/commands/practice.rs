//! The `prepdrill practice` command.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use prepdrill_core::metrics::SessionMetrics;
use prepdrill_core::model::{DifficultyMode, Session};
use prepdrill_core::score::extract_score;
use prepdrill_feedback::evaluate_answer;
use prepdrill_store::{load_config_from, QuestionBank, SessionStore};

pub fn execute(
    role: String,
    mode: DifficultyMode,
    questions: Option<usize>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let n = questions.unwrap_or(config.questions_per_session);
    anyhow::ensure!(n >= 1, "questions must be at least 1");
    anyhow::ensure!(
        n <= config.max_questions,
        "questions must be at most {}",
        config.max_questions
    );

    let bank = QuestionBank::load(&config.question_bank).with_context(|| {
        format!(
            "failed to load question bank from {}; run `prepdrill init` to create a starter bank",
            config.question_bank.display()
        )
    })?;

    let mut rng = rand::thread_rng();
    let drawn = bank.questions_for_session(&mut rng, &role, mode, n);
    if drawn.is_empty() {
        println!(
            "No questions available for role '{role}'. Known roles: {}",
            bank.roles().join(", ")
        );
        return Ok(());
    }

    println!("Practice session: {role} ({mode}, {} questions)", drawn.len());
    println!("Submit an empty line to skip a question.");

    let mut session = Session::new(role.clone(), mode, drawn);
    let total = session.questions.len();

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    for (i, answered) in session.questions.iter_mut().enumerate() {
        println!(
            "\nQuestion {}/{} [{}]: {}",
            i + 1,
            total,
            answered.question.difficulty,
            answered.question.text
        );
        println!("Hint: {}", question_hint(&answered.question.text));
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!("\nNo more input; ending the session early.");
            break;
        };
        let answer = line.context("failed to read answer")?;
        if answer.trim().is_empty() {
            println!("Skipped.");
            continue;
        }

        answered.record_answer(answer.trim());
        let feedback = evaluate_answer(
            &mut rng,
            &answered.question.text,
            &answered.answer,
            answered.question.difficulty,
            &role,
        );
        if let Some(score) = extract_score(&feedback) {
            answered.record_evaluation(score, feedback.clone());
        }
        println!("\n{feedback}");
    }

    let store = SessionStore::new(&config.sessions_file);
    let stored = store.append(session)?;
    let session_id = stored.session_id.unwrap_or_default();
    println!(
        "\nSession #{session_id} saved to {}",
        store.path().display()
    );

    match SessionMetrics::compute(&stored) {
        Some(metrics) => {
            print_summary(&metrics);
            println!(
                "\nExport a full report with: prepdrill export --session {session_id}"
            );
        }
        None => println!("No questions were answered, so there is nothing to summarize."),
    }

    Ok(())
}

fn print_summary(metrics: &SessionMetrics) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec![
        "Average",
        "Weighted",
        "Answered",
        "Highest",
        "Lowest",
    ]);
    table.add_row(vec![
        Cell::new(format!("{:.1}/10", metrics.average_score)),
        Cell::new(format!("{:.1}/10", metrics.weighted_score)),
        Cell::new(format!(
            "{}/{}",
            metrics.answered_questions, metrics.total_questions
        )),
        Cell::new(format!("{}/10", metrics.highest_score)),
        Cell::new(format!("{}/10", metrics.lowest_score)),
    ]);

    println!("\n{table}");

    if !metrics.strengths.is_empty() {
        println!("\nStrengths:");
        for strength in &metrics.strengths {
            println!("  ✅ {strength}");
        }
    }
    if !metrics.improvement_areas.is_empty() {
        println!("\nAreas for improvement:");
        for area in &metrics.improvement_areas {
            println!("  📝 {area}");
        }
    }
}

/// A preparation hint keyed off the question's wording.
fn question_hint(question: &str) -> &'static str {
    let lowered = question.to_lowercase();

    if lowered.contains("algorithm") || lowered.contains("complexity") {
        "Think about time and space complexity, and consider different approaches."
    } else if lowered.contains("design") || lowered.contains("architecture") {
        "Consider scalability, maintainability, and trade-offs between different approaches."
    } else if lowered.contains("experience") || lowered.contains("project") {
        "Use the STAR method: Situation, Task, Action, Result."
    } else if lowered.contains("problem") || lowered.contains("challenge") {
        "Break down the problem, explain your approach, and discuss potential solutions."
    } else if lowered.contains("team") || lowered.contains("collaboration") {
        "Focus on communication, conflict resolution, and achieving common goals."
    } else {
        "Provide specific examples and explain your reasoning clearly."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_match_question_wording() {
        assert!(question_hint("Explain the complexity of quicksort.").contains("time and space"));
        assert!(question_hint("How would you DESIGN a rate limiter?").contains("scalability"));
        assert!(question_hint("Tell me about a project you led.").contains("STAR"));
        assert!(question_hint("Describe a hard problem you solved.").contains("Break down"));
        assert!(question_hint("How do you handle team conflict?").contains("communication"));
        assert!(question_hint("What is a closure?").contains("specific examples"));
    }
}
