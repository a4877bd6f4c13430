//! The four-gauge summary of a situational draw.

use std::fmt;

use serde::{Deserialize, Serialize};

use tj_deck::{Card, ContextProfile};

use super::metrics::{OverallState, SituationMetrics};
use crate::error::ReadingResult;

/// A three-step level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gauge {
    /// Low.
    Low,
    /// Medium.
    Medium,
    /// High.
    High,
}

impl fmt::Display for Gauge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Overall state plus energy, risk and opportunity gauges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SituationSummary {
    /// Profile the summary was made for.
    pub profile_id: String,
    /// Overall state. Looser than the reading's state: energy only matters
    /// for `excellent`.
    pub overall: OverallState,
    /// Mean energy level.
    pub energy: Gauge,
    /// Adverse pressure.
    pub risk: Gauge,
    /// Favourable openings.
    pub opportunity: Gauge,
}

fn summary_state(direction_sum: i32, energy_average: f64) -> OverallState {
    match direction_sum {
        2.. if energy_average >= 7.0 => OverallState::Excellent,
        1.. => OverallState::Good,
        0 => OverallState::Neutral,
        -1 => OverallState::Challenging,
        _ => OverallState::Critical,
    }
}

/// Summarise a non-empty situational draw.
pub fn generate_situation_summary(
    cards: &[&Card],
    profile: &ContextProfile,
) -> ReadingResult<SituationSummary> {
    let metrics = SituationMetrics::from_cards(cards)?;

    let energy = if metrics.energy_average >= 7.0 {
        Gauge::High
    } else if metrics.energy_average >= 5.0 {
        Gauge::Medium
    } else {
        Gauge::Low
    };
    let risk = if cards.iter().any(|c| c.is_negative() && c.impact >= 7) {
        Gauge::High
    } else if metrics.impact_average >= 7.0 {
        Gauge::Medium
    } else {
        Gauge::Low
    };
    let opportunity = if cards.iter().any(|c| c.is_positive() && c.impact >= 7) {
        Gauge::High
    } else if metrics.direction_sum > 0 {
        Gauge::Medium
    } else {
        Gauge::Low
    };

    Ok(SituationSummary {
        profile_id: profile.id.clone(),
        overall: summary_state(metrics.direction_sum, metrics.energy_average),
        energy,
        risk,
        opportunity,
    })
}
