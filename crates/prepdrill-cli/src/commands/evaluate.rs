//! The `prepdrill evaluate` command.

use anyhow::Result;

use prepdrill_core::model::Difficulty;
use prepdrill_feedback::evaluate_answer;

pub fn execute(question: String, answer: String, difficulty: Difficulty, role: String) -> Result<()> {
    let mut rng = rand::thread_rng();
    let feedback = evaluate_answer(&mut rng, &question, &answer, difficulty, &role);
    println!("{feedback}");
    Ok(())
}
