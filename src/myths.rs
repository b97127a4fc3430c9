//! Myth/fact lookup.

use serde::{Deserialize, Serialize};

/// Hint shown when a search finds nothing.
pub const NO_MATCH_HINT: &str = "No matching myths found. Try 'cost' or 'EVM'.";

/// A common misconception paired with the verified fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactEntry {
    pub key: String,
    pub myth: String,
    pub fact: String,
    pub source: String,
}

impl FactEntry {
    fn matches(&self, needle: &str) -> bool {
        self.key.to_lowercase().contains(needle) || self.myth.to_lowercase().contains(needle)
    }
}

/// Entries whose key or myth contains `query`, ignoring case.
///
/// A blank query returns every entry. Dataset order is preserved.
pub fn search<'a>(entries: &'a [FactEntry], query: &str) -> Vec<&'a FactEntry> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return entries.iter().collect();
    }

    entries.iter().filter(|e| e.matches(&needle)).collect()
}
