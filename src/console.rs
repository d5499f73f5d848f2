//! Line-oriented terminal I/O.
//!
//! Every screen of the quiz talks to the user through a [`Console`], which
//! wraps a reader and a writer. The binary uses stdin/stdout; tests feed a
//! scripted `Cursor` and capture the output in a `Vec<u8>`.

use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::QuizError;

pub struct Console<R, W> {
    input: R,
    output: W,
}

pub type StdConsole = Console<StdinLock<'static>, Stdout>;

impl StdConsole {
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, line: impl Display) -> Result<(), QuizError> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    pub fn blank(&mut self) -> Result<(), QuizError> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Show `message` and block until the user enters a line. The returned
    /// line is trimmed.
    pub fn prompt(&mut self, message: &str) -> Result<String, QuizError> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(QuizError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
