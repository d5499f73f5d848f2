use std::io::{BufRead, Write};
use std::num::IntErrorKind;

use tracing::info;

use crate::QuizError;
use crate::console::Console;
use crate::data::StoreError;
use crate::models::{MAX_OPTIONS, MIN_OPTIONS, Question, option_letter};

use super::quiz::render_question;

/// List every stored question together with its answer.
pub fn show<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    questions: &[Question],
) -> Result<(), QuizError> {
    console.blank()?;
    console.say("Current Questions:")?;
    for (i, question) in questions.iter().enumerate() {
        render_question(console, i + 1, question)?;
        console.say(format_args!("Answer: {}", question.answer))?;
    }
    Ok(())
}

/// Offer to add a question. If the user accepts, the new question is
/// appended to `questions` and the whole list is handed to `persist`.
///
/// Returns whether a question was added.
pub fn maybe_add<R, W, F>(
    console: &mut Console<R, W>,
    questions: &mut Vec<Question>,
    persist: F,
) -> Result<bool, QuizError>
where
    R: BufRead,
    W: Write,
    F: FnOnce(&[Question]) -> Result<(), StoreError>,
{
    console.blank()?;
    let reply = console.prompt("Do you want to add a new question? (yes/no): ")?;
    if !matches!(reply.to_lowercase().as_str(), "yes" | "y") {
        return Ok(false);
    }

    let question = read_question(console)?;
    info!(question = %question.text, options = question.options.len(), "adding question");
    questions.push(question);
    persist(questions)?;

    console.blank()?;
    console.say("New question added successfully!")?;
    Ok(true)
}

fn read_question<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Question, QuizError> {
    let text = console.prompt("Enter the question text: ")?;
    let count = read_option_count(console)?;

    let mut option_texts = Vec::with_capacity(count);
    for i in 0..count {
        option_texts.push(console.prompt(&format!("Enter option {}: ", option_letter(i)))?);
    }

    let answer = read_answer_letter(console, count)?;
    // Count and answer letter are already in range here.
    Ok(Question::new(text, option_texts, answer)?)
}

fn read_option_count<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<usize, QuizError> {
    loop {
        let input = console.prompt("Enter the number of options (2, 3, or 4): ")?;
        match input.parse::<i64>() {
            Ok(n) if (MIN_OPTIONS as i64..=MAX_OPTIONS as i64).contains(&n) => {
                return Ok(n as usize);
            }
            Ok(_) => {}
            // Numeric but far out of range.
            Err(err)
                if matches!(
                    err.kind(),
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
                ) => {}
            Err(_) => console.say("Please enter a valid number.")?,
        }
    }
}

fn read_answer_letter<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    count: usize,
) -> Result<char, QuizError> {
    let letters: Vec<char> = (0..count).map(option_letter).collect();
    let listed = letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let message = format!("Enter the correct answer ({}): ", listed);

    loop {
        let input = console.prompt(&message)?.to_uppercase();
        let mut chars = input.chars();
        if let (Some(letter), None) = (chars.next(), chars.next()) {
            if letters.contains(&letter) {
                return Ok(letter);
            }
        }
    }
}
