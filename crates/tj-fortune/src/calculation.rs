//! The derived record produced by a fortune calculation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::levels::{EnergyFlow, Environment, FortuneLevel, Horizon, Relationship, Trend, VariableImpact};
use crate::rules::ComboTag;

/// An interaction rule that contributed to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentKind {
    /// Two or more extreme cards amplify each other.
    ExtremeAmplification,
    /// Three or more cards point the same way.
    DirectionalConsensus,
    /// An extreme Variable card swings the outcome.
    VariableAmplifier,
    /// The hand's horizon is clearly short or clearly long.
    TemporalCoherence,
}

impl fmt::Display for AdjustmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExtremeAmplification => write!(f, "extreme amplification"),
            Self::DirectionalConsensus => write!(f, "directional consensus"),
            Self::VariableAmplifier => write!(f, "variable amplifier"),
            Self::TemporalCoherence => write!(f, "temporal coherence"),
        }
    }
}

/// One fired interaction rule and its points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Adjustment {
    /// Which rule fired.
    pub kind: AdjustmentKind,
    /// Signed contribution to the interaction score.
    pub points: f64,
}

/// The four qualitative labels of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// From the energy mean and spread of all four cards.
    pub energy_flow: EnergyFlow,
    /// From the Earth card.
    pub environment: Environment,
    /// From the Human card.
    pub relationship: Relationship,
    /// From the Variable card.
    pub variable_impact: VariableImpact,
}

/// Everything derived from one fortune hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FortuneCalculation {
    /// Weighted sum of the four card contributions.
    pub base_score: f64,
    /// Sum of [`Self::adjustments`].
    pub interaction_score: f64,
    /// `base_score + interaction_score`.
    pub total_score: f64,
    /// Five-way classification of the total.
    pub level: FortuneLevel,
    /// From the sum of card directions.
    pub trend: Trend,
    /// From the mean temporal value.
    pub horizon: Horizon,
    /// Qualitative labels.
    pub dimensions: Dimensions,
    /// Special combinations in rule-table order.
    pub combinations: Vec<ComboTag>,
    /// Up to five most frequent keywords.
    pub key_themes: Vec<String>,
    /// The interaction rules that fired.
    pub adjustments: Vec<Adjustment>,
    /// Sum of the four directions.
    pub direction_sum: i32,
    /// Mean energy of the four cards.
    pub energy_average: f64,
    /// Mean temporal value of the four cards.
    pub temporal_average: f64,
}

impl FortuneCalculation {
    /// Whether the hand completes `tag`.
    pub fn has(&self, tag: ComboTag) -> bool {
        self.combinations.contains(&tag)
    }

    /// Whether `theme` is among the key themes (case-insensitive).
    pub fn has_theme(&self, theme: &str) -> bool {
        self.key_themes.iter().any(|t| t.eq_ignore_ascii_case(theme))
    }
}
