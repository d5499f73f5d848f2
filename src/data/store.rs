use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;
use tracing::debug;

use crate::models::Question;

pub const DEFAULT_QUESTIONS_PATH: &str = "questions.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// File-backed list of questions.
#[derive(Debug, Clone)]
pub struct QuestionStore {
    path: PathBuf,
}

impl Default for QuestionStore {
    fn default() -> Self {
        Self::new(DEFAULT_QUESTIONS_PATH)
    }
}

impl QuestionStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every stored question. A missing file is an empty list.
    pub fn load(&self) -> Result<Vec<Question>, StoreError> {
        let json_content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no question file, starting empty");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let questions: Vec<Question> =
            serde_json::from_str(&json_content).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })?;

        debug!(path = %self.path.display(), count = questions.len(), "loaded questions");
        Ok(questions)
    }

    /// Overwrite the file with `questions`, pretty-printed.
    pub fn save(&self, questions: &[Question]) -> Result<(), StoreError> {
        let write_err = |source: io::Error| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        questions
            .serialize(&mut ser)
            .map_err(|err| write_err(io::Error::from(err)))?;
        buf.push(b'\n');

        fs::write(&self.path, buf).map_err(write_err)?;
        debug!(path = %self.path.display(), count = questions.len(), "saved questions");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Vec<Question> {
        vec![
            Question::new("2+2?", ["3", "4"], 'B').unwrap(),
            Question::new("Capital of France?", ["Rome", "Paris", "Oslo", "Bern"], 'B').unwrap(),
            Question::new("Largest planet?", ["Mars", "Venus", "Jupiter"], 'C').unwrap(),
        ]
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = QuestionStore::new(dir.path().join("nope.json"));
        assert!(store.load().unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_save_then_load_preserves_order() {
        let dir = TempDir::new().unwrap();
        let store = QuestionStore::new(dir.path().join("questions.json"));
        let questions = sample();

        store.save(&questions).unwrap();
        assert_eq!(store.load().unwrap(), questions);
    }

    #[test]
    fn test_save_overwrites_and_pretty_prints() {
        let dir = TempDir::new().unwrap();
        let store = QuestionStore::new(dir.path().join("questions.json"));
        store.save(&sample()).unwrap();
        store.save(&sample()[..1]).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        let expected = "[\n    {\n        \"question\": \"2+2?\",\n        \"options\": [\n            \"A) 3\",\n            \"B) 4\"\n        ],\n        \"answer\": \"B\"\n    }\n]\n";
        assert_eq!(content, expected);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("questions.json");
        let store = QuestionStore::new(&path);

        fs::write(&path, "not json").unwrap();
        assert!(matches!(store.load(), Err(StoreError::Parse { .. })));

        fs::write(&path, r#"[{"question":"q","options":["A) 1","B) 2"]}]"#).unwrap();
        assert!(matches!(store.load(), Err(StoreError::Parse { .. })));

        fs::write(&path, r#"[{"question":"q","options":["A) 1"],"answer":"A"}]"#).unwrap();
        assert!(matches!(store.load(), Err(StoreError::Parse { .. })));
    }

    #[test]
    fn test_loads_fixed_four_option_records() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("questions.json");
        fs::write(
            &path,
            r#"[{"question":"Pick","options":["A) w","B) x","C) y","D) z"],"answer":"D"}]"#,
        )
        .unwrap();

        let questions = QuestionStore::new(&path).load().unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].answer, "D");
    }

    #[test]
    fn test_write_failure_is_reported() {
        let dir = TempDir::new().unwrap();
        let store = QuestionStore::new(dir.path().join("missing-dir").join("questions.json"));
        assert!(matches!(store.save(&sample()), Err(StoreError::Write { .. })));
    }
}
