use std::io::{BufRead, Write};

use crate::QuizError;
use crate::console::Console;
use crate::models::MenuChoice;

/// Print the main menu and read one choice. `None` means the input did not
/// name a menu entry.
pub fn read_choice<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Option<MenuChoice>, QuizError> {
    console.blank()?;
    console.say("Welcome to the Quiz Game!")?;
    for choice in MenuChoice::ALL {
        console.say(format_args!("{}) {}", choice.key(), choice.label()))?;
    }

    let input = console.prompt("Enter your choice (1, 2, or 3): ")?;
    Ok(MenuChoice::parse(&input))
}
