//! Datasets compiled into the binary.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::models::QuestionBank;
use crate::myths::FactEntry;
use crate::simulator::StateStats;

use super::loader::{LoadError, parse_questions};

const QUESTIONS_JSON: &str = include_str!("../../assets/questions.json");
const FACTS_JSON: &str = include_str!("../../assets/facts.json");
const STATES_JSON: &str = include_str!("../../assets/states.json");
const EXPLAINER_JSON: &str = include_str!("../../assets/explainer.json");

/// One bullet of the home page explainer.
#[derive(Debug, Clone, Deserialize)]
pub struct ExplainerPoint {
    pub title: String,
    pub detail: String,
}

/// Static content of the home page.
#[derive(Debug, Clone, Deserialize)]
pub struct Explainer {
    pub summary: String,
    pub total_voters: String,
    pub total_voters_change: String,
    pub benefits: Vec<ExplainerPoint>,
    pub challenges: Vec<ExplainerPoint>,
    pub sources: String,
    pub disclaimer: String,
}

/// The ten-question reference quiz.
pub fn reference_questions() -> Result<QuestionBank, LoadError> {
    parse_questions(QUESTIONS_JSON, "bundled questions")
}

pub fn facts() -> Result<Vec<FactEntry>, LoadError> {
    parse_bundled(FACTS_JSON, "bundled facts")
}

pub fn states() -> Result<Vec<StateStats>, LoadError> {
    parse_bundled(STATES_JSON, "bundled state statistics")
}

pub fn explainer() -> Result<Explainer, LoadError> {
    parse_bundled(EXPLAINER_JSON, "bundled explainer")
}

fn parse_bundled<T: DeserializeOwned>(json: &str, origin: &str) -> Result<T, LoadError> {
    serde_json::from_str(json).map_err(|source| LoadError::Parse {
        origin: origin.to_string(),
        source,
    })
}
