mod store;

pub use store::{DEFAULT_QUESTIONS_PATH, QuestionStore, StoreError};
