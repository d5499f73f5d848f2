use std::io::{BufRead, Write};

use tracing::debug;

use crate::QuizError;
use crate::console::Console;
use crate::data::{QuestionStore, StoreError};
use crate::models::{MenuChoice, Question};
use crate::ui::{editor, menu, quiz};

/// The menu loop. Owns the question list for the whole session and writes
/// it back through the store whenever a question is added.
pub struct App {
    questions: Vec<Question>,
    store: QuestionStore,
}

impl App {
    pub fn new(store: QuestionStore, questions: Vec<Question>) -> Self {
        Self { questions, store }
    }

    /// Load the question list once, up front.
    pub fn load(store: QuestionStore) -> Result<Self, StoreError> {
        let questions = store.load()?;
        Ok(Self::new(store, questions))
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn store(&self) -> &QuestionStore {
        &self.store
    }

    /// Run menu iterations until the user picks Exit.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<(), QuizError> {
        loop {
            let Some(choice) = menu::read_choice(console)? else {
                console.blank()?;
                console.say("Invalid choice! Please enter 1, 2, or 3.")?;
                continue;
            };
            debug!(?choice, "menu choice");

            match choice {
                MenuChoice::Play => {
                    quiz::play(console, &self.questions)?;
                }
                MenuChoice::Manage => {
                    editor::show(console, &self.questions)?;
                    let store = &self.store;
                    editor::maybe_add(console, &mut self.questions, |all| store.save(all))?;
                }
                MenuChoice::Exit => {
                    console.blank()?;
                    console.say("Thank you for playing! Goodbye!")?;
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use tempfile::TempDir;

    use super::*;

    fn session(app: &mut App, input: &str) -> Result<String, QuizError> {
        let mut console = Console::new(Cursor::new(input.to_string()), Vec::new());
        app.run(&mut console)?;
        Ok(String::from_utf8(console.into_output()).unwrap())
    }

    #[test]
    fn test_view_without_adding_creates_no_file() {
        let dir = TempDir::new().unwrap();
        let mut app = App::load(QuestionStore::new(dir.path().join("questions.json"))).unwrap();

        let output = session(&mut app, "2\nno\n3\n").unwrap();
        assert!(output.contains("Current Questions:"));
        assert!(output.ends_with("Thank you for playing! Goodbye!\n"));
        assert!(!app.store().path().exists());
    }

    #[test]
    fn test_invalid_choice_returns_to_menu() {
        let dir = TempDir::new().unwrap();
        let mut app = App::load(QuestionStore::new(dir.path().join("questions.json"))).unwrap();

        let output = session(&mut app, "7\n\n3\n").unwrap();
        assert_eq!(output.matches("Invalid choice! Please enter 1, 2, or 3.").count(), 2);
        assert_eq!(output.matches("Welcome to the Quiz Game!").count(), 3);
    }

    #[test]
    fn test_added_question_is_saved_and_playable() {
        let dir = TempDir::new().unwrap();
        let store = QuestionStore::new(dir.path().join("questions.json"));
        let mut app = App::load(store.clone()).unwrap();

        let output = session(
            &mut app,
            "1\n2\ny\nLargest planet?\n3\nMars\nVenus\nJupiter\nC\n1\nc\n3\n",
        )
        .unwrap();

        assert!(output.contains("No questions available! Add some first."));
        assert!(output.contains("New question added successfully!"));
        assert!(output.contains("Quiz Over! You scored 1/1."));
        assert_eq!(app.questions().len(), 1);
        assert_eq!(store.load().unwrap(), app.questions());
        assert_eq!(
            app.questions()[0].options,
            vec!["A) Mars", "B) Venus", "C) Jupiter"]
        );
    }

    #[test]
    fn test_each_addition_rewrites_whole_file() {
        let dir = TempDir::new().unwrap();
        let store = QuestionStore::new(dir.path().join("questions.json"));
        store
            .save(&[Question::new("2+2?", ["3", "4"], 'B').unwrap()])
            .unwrap();
        let mut app = App::load(store.clone()).unwrap();

        session(&mut app, "2\ny\nq1\n2\na\nb\nA\n2\nyes\nq2\n4\na\nb\nc\nd\nD\n3\n").unwrap();

        let stored = store.load().unwrap();
        let texts: Vec<_> = stored.iter().map(|q| q.text.as_str()).collect();
        assert_eq!(texts, ["2+2?", "q1", "q2"]);
        assert_eq!(stored[2].answer, "D");
    }

    #[test]
    fn test_closed_input_ends_session_with_error() {
        let mut app = App::new(QuestionStore::default(), Vec::new());
        assert!(matches!(session(&mut app, "1\n"), Err(QuizError::InputClosed)));
    }
}
