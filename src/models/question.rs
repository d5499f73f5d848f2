use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_OPTIONS: usize = 2;
pub const MAX_OPTIONS: usize = 4;

/// Why a question record was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionError {
    #[error("a question needs between 2 and 4 options, found {0}")]
    OptionCount(usize),
    #[error("answer {0:?} does not name one of the question's options")]
    UnknownAnswer(String),
}

/// A multiple-choice question.
///
/// Options are stored pre-formatted as `"A) text"`, `"B) text"`, ... and
/// `answer` holds the letter of the correct one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuestionRecord")]
pub struct Question {
    #[serde(rename = "question")]
    pub text: String,
    pub options: Vec<String>,
    pub answer: String,
}

/// Shape of a record as it appears on disk, before validation.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct QuestionRecord {
    question: String,
    options: Vec<String>,
    answer: String,
}

impl TryFrom<QuestionRecord> for Question {
    type Error = QuestionError;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        let question = Question {
            text: record.question,
            options: record.options,
            answer: record.answer,
        };
        question.validate()?;
        Ok(question)
    }
}

/// Letter assigned to the option at `index` (0 -> `A`).
pub fn option_letter(index: usize) -> char {
    debug_assert!(index < 26, "option index {index} has no letter");
    (b'A' + index as u8) as char
}

pub fn format_option(index: usize, text: &str) -> String {
    format!("{}) {}", option_letter(index), text)
}

impl Question {
    /// Build a question from raw option texts, prefixing each with its letter.
    pub fn new<I, S>(
        text: impl Into<String>,
        option_texts: I,
        answer: char,
    ) -> Result<Self, QuestionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let options = option_texts
            .into_iter()
            .enumerate()
            .map(|(i, option)| format_option(i, option.as_ref()))
            .collect();

        let question = Self {
            text: text.into(),
            options,
            answer: answer.to_string(),
        };
        question.validate()?;
        Ok(question)
    }

    pub fn validate(&self) -> Result<(), QuestionError> {
        let count = self.options.len();
        if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&count) {
            return Err(QuestionError::OptionCount(count));
        }

        let mut chars = self.answer.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) if self.letters().any(|l| l == letter) => Ok(()),
            _ => Err(QuestionError::UnknownAnswer(self.answer.clone())),
        }
    }

    /// Letters of this question's options, in order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        (0..self.options.len()).map(option_letter)
    }

    /// Compare a typed response with the stored answer, ignoring case and
    /// surrounding whitespace.
    pub fn is_correct(&self, response: &str) -> bool {
        response.trim().to_uppercase() == self.answer
    }
}
