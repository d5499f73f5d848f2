mod menu;
mod question;

pub use menu::MenuChoice;
pub use question::{
    MAX_OPTIONS, MIN_OPTIONS, Question, QuestionError, format_option, option_letter,
};
