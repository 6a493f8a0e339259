//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn prepdrill() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("prepdrill").unwrap()
}

const LONG_ANSWER: &str = "I would use a HashMap because it gives O(1) average lookup and I \
    have experience optimizing this in production with thread safety in mind";

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    prepdrill()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created prepdrill.toml"))
        .stdout(predicate::str::contains("Created question_bank.json"));

    assert!(dir.path().join("prepdrill.toml").exists());
    assert!(dir.path().join("question_bank.json").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    prepdrill().current_dir(dir.path()).arg("init").assert().success();

    prepdrill()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("prepdrill.toml already exists"))
        .stdout(predicate::str::contains("question_bank.json already exists"));
}

#[test]
fn evaluate_prints_structured_feedback() {
    prepdrill()
        .arg("evaluate")
        .arg("--question")
        .arg("How would you implement a cache?")
        .arg("--answer")
        .arg(LONG_ANSWER)
        .arg("--difficulty")
        .arg("medium")
        .arg("--role")
        .arg("Java Developer")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your Score:"))
        .stdout(predicate::str::contains("/10"))
        .stdout(predicate::str::contains("Technical Analysis"))
        .stdout(predicate::str::contains("Follow-up Challenge"))
        .stdout(predicate::str::contains("Pro Tips"));
}

#[test]
fn evaluate_short_answer_scores_two() {
    prepdrill()
        .arg("evaluate")
        .arg("--question")
        .arg("What is a HashMap?")
        .arg("--answer")
        .arg("idk")
        .assert()
        .success()
        .stdout(predicate::str::contains("2/10"));
}

#[test]
fn evaluate_rejects_bad_difficulty() {
    prepdrill()
        .arg("evaluate")
        .arg("--question")
        .arg("q")
        .arg("--answer")
        .arg("a")
        .arg("--difficulty")
        .arg("extreme")
        .assert()
        .failure();
}

#[test]
fn history_without_sessions() {
    let dir = TempDir::new().unwrap();

    prepdrill()
        .current_dir(dir.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No previous sessions found"));
}

#[test]
fn export_unknown_session_fails() {
    let dir = TempDir::new().unwrap();

    prepdrill()
        .current_dir(dir.path())
        .arg("export")
        .arg("--session")
        .arg("7")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn practice_unknown_role_is_not_an_error() {
    let dir = TempDir::new().unwrap();

    prepdrill().current_dir(dir.path()).arg("init").assert().success();

    prepdrill()
        .current_dir(dir.path())
        .arg("practice")
        .arg("--role")
        .arg("Astronaut")
        .assert()
        .success()
        .stdout(predicate::str::contains("No questions available"));
}

#[test]
fn practice_without_bank_fails_with_hint() {
    let dir = TempDir::new().unwrap();

    prepdrill()
        .current_dir(dir.path())
        .arg("practice")
        .arg("--role")
        .arg("Java Developer")
        .assert()
        .failure()
        .stderr(predicate::str::contains("prepdrill init"));
}

#[test]
fn practice_session_saves_and_shows_in_history() {
    let dir = TempDir::new().unwrap();

    prepdrill().current_dir(dir.path()).arg("init").assert().success();

    prepdrill()
        .current_dir(dir.path())
        .arg("practice")
        .arg("--role")
        .arg("Java Developer")
        .arg("--questions")
        .arg("2")
        .write_stdin(format!("{LONG_ANSWER}\n{LONG_ANSWER}\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Session #1 saved"))
        .stdout(predicate::str::contains("Your Score:"));

    assert!(dir.path().join("prepdrill_sessions.json").exists());

    prepdrill()
        .current_dir(dir.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("Java Developer"));
}

#[test]
fn practice_rejects_too_many_questions() {
    let dir = TempDir::new().unwrap();

    prepdrill().current_dir(dir.path()).arg("init").assert().success();

    prepdrill()
        .current_dir(dir.path())
        .arg("practice")
        .arg("--role")
        .arg("Java Developer")
        .arg("--questions")
        .arg("100")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at most"));
}

#[test]
fn export_after_practice_writes_reports() {
    let dir = TempDir::new().unwrap();

    prepdrill().current_dir(dir.path()).arg("init").assert().success();

    prepdrill()
        .current_dir(dir.path())
        .arg("practice")
        .arg("--role")
        .arg("Data Scientist")
        .arg("--questions")
        .arg("1")
        .write_stdin(format!("{LONG_ANSWER}\n"))
        .assert()
        .success();

    prepdrill()
        .current_dir(dir.path())
        .arg("export")
        .arg("--session")
        .arg("1")
        .arg("--format")
        .arg("all")
        .assert()
        .success()
        .stdout(predicate::str::contains("session-1.md"))
        .stdout(predicate::str::contains("session-1.json"));

    let md = std::fs::read_to_string(
        dir.path().join("prepdrill-reports/session-1.md"),
    )
    .unwrap();
    assert!(md.contains("Interview Report — Data Scientist"));

    let json = std::fs::read_to_string(
        dir.path().join("prepdrill-reports/session-1.json"),
    )
    .unwrap();
    let report: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(report["session"]["role"], "Data Scientist");
    assert_eq!(report["session"]["session_id"], 1);
}
