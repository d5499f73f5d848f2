use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use quiz_game::{DEFAULT_QUESTIONS_PATH, Quiz};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file the questions are loaded from and saved to
    #[arg(short, long, default_value = DEFAULT_QUESTIONS_PATH)]
    questions: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quiz_game=warn")),
        )
        .init();

    let args = Args::parse();
    let quiz = Quiz::from_json(&args.questions)
        .with_context(|| format!("Failed to load questions from {}", args.questions.display()))?;

    quiz.run().context("Error running quiz")?;
    Ok(())
}
