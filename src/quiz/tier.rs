use serde::{Deserialize, Serialize};

/// Coarse qualitative bucket for a final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Excellent,
    Good,
    NeedsImprovement,
}

impl Tier {
    pub fn label(self) -> &'static str {
        match self {
            Tier::Excellent => "Excellent",
            Tier::Good => "Good",
            Tier::NeedsImprovement => "Needs improvement",
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            Tier::Excellent => "Excellent!",
            Tier::Good => "Good effort!",
            Tier::NeedsImprovement => "Keep learning!",
        }
    }

    pub fn advice(self) -> &'static str {
        match self {
            Tier::Excellent => "You are an ONOE Expert!",
            Tier::Good => "Review the Myth Buster section to learn more.",
            Tier::NeedsImprovement => "Check the Home page for more info.",
        }
    }
}

/// Awards `tier` to any score with at least `min_correct` correct answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThresholdRule {
    pub min_correct: usize,
    pub tier: Tier,
}

/// Tier boundaries, checked from the highest `min_correct` down.
///
/// A score that clears no rule is [`Tier::NeedsImprovement`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<ThresholdRule>")]
pub struct TierThresholds {
    rules: Vec<ThresholdRule>,
}

impl TierThresholds {
    pub fn new(mut rules: Vec<ThresholdRule>) -> Self {
        rules.sort_by(|a, b| b.min_correct.cmp(&a.min_correct));
        Self { rules }
    }

    /// 70% for [`Tier::Excellent`] and 40% for [`Tier::Good`], rounded up.
    pub fn proportional(total: usize) -> Self {
        Self::new(vec![
            ThresholdRule {
                min_correct: (total * 7).div_ceil(10),
                tier: Tier::Excellent,
            },
            ThresholdRule {
                min_correct: (total * 4).div_ceil(10),
                tier: Tier::Good,
            },
        ])
    }

    pub fn classify(&self, correct: usize) -> Tier {
        self.rules
            .iter()
            .find(|rule| correct >= rule.min_correct)
            .map(|rule| rule.tier)
            .unwrap_or(Tier::NeedsImprovement)
    }

    pub fn rules(&self) -> &[ThresholdRule] {
        &self.rules
    }
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self::new(vec![
            ThresholdRule {
                min_correct: 7,
                tier: Tier::Excellent,
            },
            ThresholdRule {
                min_correct: 4,
                tier: Tier::Good,
            },
        ])
    }
}

impl From<Vec<ThresholdRule>> for TierThresholds {
    fn from(rules: Vec<ThresholdRule>) -> Self {
        Self::new(rules)
    }
}
