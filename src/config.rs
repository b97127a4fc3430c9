//! Runtime configuration: an optional JSON file, overridden by CLI flags.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::data::{LoadError, load_questions_from_json, reference_questions};
use crate::i18n::Language;
use crate::models::QuestionBank;
use crate::quiz::TierThresholds;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HubConfig {
    pub language: Language,
    /// Question set to use instead of the bundled one.
    pub questions: Option<PathBuf>,
    /// Explicit tier rules; take precedence over `proportional_tiers`.
    pub tiers: Option<TierThresholds>,
    /// Scale the default 70%/40% cut-offs to the question count.
    pub proportional_tiers: bool,
}

impl HubConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The configured question set, or the bundled reference quiz.
    pub fn question_bank(&self) -> Result<QuestionBank, LoadError> {
        match &self.questions {
            Some(path) => load_questions_from_json(path),
            None => reference_questions(),
        }
    }

    pub fn thresholds(&self, total: usize) -> TierThresholds {
        match &self.tiers {
            Some(tiers) => tiers.clone(),
            None if self.proportional_tiers => TierThresholds::proportional(total),
            None => TierThresholds::default(),
        }
    }
}
