mod bundled;
mod loader;

pub use bundled::{Explainer, ExplainerPoint, explainer, facts, reference_questions, states};
pub use loader::{LoadError, load_questions_from_json, parse_questions};
