//! The `prepdrill history` command.

use std::path::PathBuf;

use anyhow::Result;

use prepdrill_core::history::summarize_last;
use prepdrill_store::{load_config_from, SessionStore};

pub fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let store = SessionStore::new(&config.sessions_file);
    let sessions = store.load()?;

    let summary = summarize_last(&sessions, config.history_window);
    if summary.is_empty() {
        println!("No previous sessions found. Complete a practice run to see history.");
        return Ok(());
    }

    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Date", "Role", "Avg Score", "Weighted", "Questions"]);
    for row in &summary {
        table.add_row(vec![
            Cell::new(&row.date),
            Cell::new(&row.role),
            Cell::new(format!("{:.1}", row.average_score)),
            Cell::new(format!("{:.1}", row.weighted_score)),
            Cell::new(row.question_count),
        ]);
    }

    println!("{table}");
    println!(
        "\nShowing up to {} most recent sessions from {}",
        config.history_window,
        store.path().display()
    );

    Ok(())
}
