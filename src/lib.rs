//! # quiz-game
//!
//! An interactive console quiz backed by a JSON list of multiple-choice
//! questions.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quiz_game::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Load questions from a JSON file (a missing file is an empty quiz)
//!     let quiz = Quiz::from_json("questions.json")?;
//!
//!     // Run the menu on stdin/stdout until the user exits
//!     quiz.run()?;
//!
//!     Ok(())
//! }
//! ```

mod app;
pub mod console;
mod data;
mod models;
pub mod ui;

use std::io::{self, BufRead, Write};
use std::path::Path;

use thiserror::Error;

pub use app::App;
pub use console::Console;
pub use data::{DEFAULT_QUESTIONS_PATH, QuestionStore, StoreError};
pub use models::{MenuChoice, Question, QuestionError, format_option, option_letter};
pub use ui::Score;

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Error loading or saving the question file.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// A question record failed validation.
    #[error("invalid question: {0}")]
    Question(#[from] QuestionError),
    /// IO error while talking to the terminal.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Input ended while a prompt was waiting for a line.
    #[error("input closed before the quiz was exited")]
    InputClosed,
}

/// A quiz session bound to a question file.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a quiz over an in-memory list that saves to `store`.
    pub fn new(store: QuestionStore, questions: Vec<Question>) -> Self {
        Self {
            app: App::new(store, questions),
        }
    }

    /// Load a quiz from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON file containing questions. It does not
    ///   have to exist yet; it is created when the first question is added.
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let app = App::load(QuestionStore::new(path.as_ref()))?;
        Ok(Self { app })
    }

    /// Run the menu on stdin/stdout. Returns when the user picks Exit.
    pub fn run(self) -> Result<(), QuizError> {
        let mut console = Console::stdio();
        self.run_with(&mut console)
    }

    /// Run the menu on any console, e.g. a scripted one.
    pub fn run_with<R: BufRead, W: Write>(
        mut self,
        console: &mut Console<R, W>,
    ) -> Result<(), QuizError> {
        self.app.run(console)
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}
