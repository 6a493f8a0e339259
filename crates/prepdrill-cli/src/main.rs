//! prepdrill CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use prepdrill_core::model::{Difficulty, DifficultyMode};

mod commands;

#[derive(Parser)]
#[command(name = "prepdrill", version, about = "Mock-interview practice and scoring")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a full practice session, reading answers from stdin
    Practice {
        /// Role to practice for (e.g. "Java Developer")
        #[arg(long)]
        role: String,

        /// Difficulty mode: easy, medium, hard, or mixed
        #[arg(long, default_value = "mixed")]
        difficulty: DifficultyMode,

        /// Questions to ask (defaults to the configured value)
        #[arg(long)]
        questions: Option<usize>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Evaluate a single answer and print the feedback
    Evaluate {
        /// The question that was asked
        #[arg(long)]
        question: String,

        /// The candidate's answer
        #[arg(long)]
        answer: String,

        /// Question difficulty: easy, medium, or hard
        #[arg(long, default_value = "medium")]
        difficulty: Difficulty,

        /// Role context for the follow-up question
        #[arg(long, default_value = "Developer")]
        role: String,
    },

    /// Show the recent session history
    History {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Export a stored session as a report
    Export {
        /// Session id to export
        #[arg(long)]
        session: u32,

        /// Output directory
        #[arg(long, default_value = "./prepdrill-reports")]
        output: PathBuf,

        /// Output format: json, markdown, all
        #[arg(long, default_value = "markdown")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and question bank
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("prepdrill=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Practice {
            role,
            difficulty,
            questions,
            config,
        } => commands::practice::execute(role, difficulty, questions, config),
        Commands::Evaluate {
            question,
            answer,
            difficulty,
            role,
        } => commands::evaluate::execute(question, answer, difficulty, role),
        Commands::History { config } => commands::history::execute(config),
        Commands::Export {
            session,
            output,
            format,
            config,
        } => commands::export::execute(session, output, format, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
