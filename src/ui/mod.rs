//! Console screens: the main menu, quiz play and the question editor.

pub mod editor;
pub mod menu;
pub mod quiz;

pub use quiz::Score;
