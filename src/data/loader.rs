use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::{QuestionBank, QuestionRecord};

/// Errors raised while loading a question set.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("question set must contain at least one question")]
    Empty,

    #[error("question {} has fewer than two options", .index + 1)]
    TooFewOptions { index: usize },

    #[error("question {}: correct option is not one of its options", .index + 1)]
    CorrectOptionMissing { index: usize },
}

/// Load and validate a question set from a JSON file.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<QuestionBank, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let bank = parse_questions(&json_content, &path.display().to_string())?;
    tracing::info!(path = %path.display(), questions = bank.len(), "loaded question set");
    Ok(bank)
}

/// Parse and validate a JSON array of questions; `origin` names the source in errors.
pub fn parse_questions(json: &str, origin: &str) -> Result<QuestionBank, LoadError> {
    let questions: Vec<QuestionRecord> =
        serde_json::from_str(json).map_err(|source| LoadError::Parse {
            origin: origin.to_string(),
            source,
        })?;

    QuestionBank::new(questions)
}
