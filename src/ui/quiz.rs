use std::fmt;
use std::io::{BufRead, Write};

use crate::QuizError;
use crate::console::Console;
use crate::models::Question;

/// Final tally of a finished quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.correct, self.total)
    }
}

/// Ask every question in order and report the score.
///
/// Returns `None` without asking anything when there are no questions.
pub fn play<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    questions: &[Question],
) -> Result<Option<Score>, QuizError> {
    if questions.is_empty() {
        console.blank()?;
        console.say("No questions available! Add some first.")?;
        return Ok(None);
    }

    console.blank()?;
    console.say("Starting the Quiz!")?;

    let mut correct = 0;
    for (i, question) in questions.iter().enumerate() {
        render_question(console, i + 1, question)?;

        let response = console.prompt("Enter your answer: ")?;
        if question.is_correct(&response) {
            console.say("Correct!")?;
            correct += 1;
        } else {
            console.say(format_args!(
                "Wrong! The correct answer was {}.",
                question.answer
            ))?;
        }
    }

    let score = Score {
        correct,
        total: questions.len(),
    };
    console.blank()?;
    console.say(format_args!("Quiz Over! You scored {}.", score))?;
    Ok(Some(score))
}

/// Print `Question <n>: <text>` followed by its option lines.
pub(crate) fn render_question<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    number: usize,
    question: &Question,
) -> Result<(), QuizError> {
    console.blank()?;
    console.say(format_args!("Question {}: {}", number, question.text))?;
    for option in &question.options {
        console.say(option)?;
    }
    Ok(())
}
