//! The `prepdrill export` command.

use std::path::PathBuf;

use anyhow::Result;

use prepdrill_report::markdown::write_markdown_report;
use prepdrill_report::SessionReport;
use prepdrill_store::{load_config_from, SessionStore};

pub fn execute(
    session_id: u32,
    output: PathBuf,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let store = SessionStore::new(&config.sessions_file);
    let sessions = store.load()?;

    let Some(session) = sessions
        .into_iter()
        .find(|s| s.session_id == Some(session_id))
    else {
        anyhow::bail!(
            "session {session_id} not found in {}",
            store.path().display()
        );
    };

    let report = SessionReport::new(session);

    let formats: Vec<&str> = if format == "all" {
        vec!["json", "markdown"]
    } else {
        format.split(',').map(str::trim).collect()
    };

    for fmt in &formats {
        match *fmt {
            "json" => {
                let path = output.join(format!("session-{session_id}.json"));
                report.save_json(&path)?;
                println!("Report saved to: {}", path.display());
            }
            "markdown" | "md" => {
                let path = output.join(format!("session-{session_id}.md"));
                write_markdown_report(&report, &path)?;
                println!("Report saved to: {}", path.display());
            }
            _ => {
                eprintln!("Unknown format: {fmt}");
            }
        }
    }

    Ok(())
}
