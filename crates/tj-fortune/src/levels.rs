//! Fixed-threshold classifications derived from a fortune hand.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Five-way fortune level, from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FortuneLevel {
    /// Total at or below -15.
    Dire,
    /// Total in (-15, -5].
    Poor,
    /// Total in (-5, 5].
    Fair,
    /// Total in (5, 15].
    Good,
    /// Total above 15.
    Excellent,
}

impl FortuneLevel {
    /// Classify a total score. Each bucket includes its upper bound.
    pub fn classify(total: f64) -> Self {
        if total <= -15.0 {
            Self::Dire
        } else if total <= -5.0 {
            Self::Poor
        } else if total <= 5.0 {
            Self::Fair
        } else if total <= 15.0 {
            Self::Good
        } else {
            Self::Excellent
        }
    }

    /// Ordinal from 1 (dire) to 5 (excellent).
    pub fn rank(self) -> u8 {
        match self {
            Self::Dire => 1,
            Self::Poor => 2,
            Self::Fair => 3,
            Self::Good => 4,
            Self::Excellent => 5,
        }
    }

    /// All levels from worst to best.
    pub fn all() -> &'static [Self] {
        &[Self::Dire, Self::Poor, Self::Fair, Self::Good, Self::Excellent]
    }
}

impl fmt::Display for FortuneLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dire => write!(f, "Dire"),
            Self::Poor => write!(f, "Poor"),
            Self::Fair => write!(f, "Fair"),
            Self::Good => write!(f, "Good"),
            Self::Excellent => write!(f, "Excellent"),
        }
    }
}

/// Which way the hand is heading, from the sum of directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    /// Direction sum at or below -2.
    Declining,
    /// Direction sum between -1 and 1.
    Flat,
    /// Direction sum at or above 2.
    Rising,
}

impl Trend {
    /// Classify a direction sum.
    pub fn classify(direction_sum: i32) -> Self {
        if direction_sum <= -2 {
            Self::Declining
        } else if direction_sum >= 2 {
            Self::Rising
        } else {
            Self::Flat
        }
    }

    /// All trends.
    pub fn all() -> &'static [Self] {
        &[Self::Declining, Self::Flat, Self::Rising]
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Declining => write!(f, "declining"),
            Self::Flat => write!(f, "flat"),
            Self::Rising => write!(f, "rising"),
        }
    }
}

/// When the hand plays out, from the mean temporal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Horizon {
    /// Mean temporal at or below 1.5.
    Short,
    /// Mean temporal in (1.5, 2.5).
    Medium,
    /// Mean temporal at or above 2.5.
    Long,
}

impl Horizon {
    /// Classify a mean temporal value.
    pub fn classify(temporal_average: f64) -> Self {
        if temporal_average <= 1.5 {
            Self::Short
        } else if temporal_average >= 2.5 {
            Self::Long
        } else {
            Self::Medium
        }
    }

    /// All horizons.
    pub fn all() -> &'static [Self] {
        &[Self::Short, Self::Medium, Self::Long]
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Short => write!(f, "short"),
            Self::Medium => write!(f, "medium"),
            Self::Long => write!(f, "long"),
        }
    }
}

/// Shape of the hand's energy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyFlow {
    /// Mean energy at or above 7.
    Abundant,
    /// Mean energy at or below 4.
    Weak,
    /// Middling mean, but the cards pull far apart.
    Volatile,
    /// Middling mean, cards close together.
    Steady,
}

impl EnergyFlow {
    /// Total absolute deviation from the mean above which a middling hand
    /// counts as volatile.
    pub const VOLATILITY_SPREAD: f64 = 8.0;

    /// Classify from the four energies.
    pub fn classify(energies: &[u8]) -> Self {
        if energies.is_empty() {
            return Self::Steady;
        }
        let avg = energies.iter().map(|&e| f64::from(e)).sum::<f64>() / energies.len() as f64;
        if avg >= 7.0 {
            return Self::Abundant;
        }
        if avg <= 4.0 {
            return Self::Weak;
        }
        let spread: f64 = energies.iter().map(|&e| (f64::from(e) - avg).abs()).sum();
        if spread > Self::VOLATILITY_SPREAD {
            Self::Volatile
        } else {
            Self::Steady
        }
    }
}

impl fmt::Display for EnergyFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Abundant => write!(f, "abundant"),
            Self::Weak => write!(f, "weak"),
            Self::Volatile => write!(f, "volatile"),
            Self::Steady => write!(f, "steady"),
        }
    }
}

/// How the Earth card's place treats you.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    /// direction × impact above 3.
    Favorable,
    /// direction × impact between -3 and 3.
    Neutral,
    /// direction × impact below -3.
    Challenging,
}

impl Environment {
    /// Classify from the Earth card's direction and impact.
    pub fn classify(direction: i8, impact: u8) -> Self {
        let product = i32::from(direction) * i32::from(impact);
        if product > 3 {
            Self::Favorable
        } else if product < -3 {
            Self::Challenging
        } else {
            Self::Neutral
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Favorable => write!(f, "favorable"),
            Self::Neutral => write!(f, "neutral"),
            Self::Challenging => write!(f, "challenging"),
        }
    }
}

/// The tone of the Human card's role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relationship {
    /// direction × impact above 3.
    Harmonious,
    /// direction × impact between -3 and 3.
    Balanced,
    /// direction × impact below -3.
    Tense,
}

impl Relationship {
    /// Classify from the Human card's direction and impact.
    pub fn classify(direction: i8, impact: u8) -> Self {
        let product = i32::from(direction) * i32::from(impact);
        if product > 3 {
            Self::Harmonious
        } else if product < -3 {
            Self::Tense
        } else {
            Self::Balanced
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Harmonious => write!(f, "harmonious"),
            Self::Balanced => write!(f, "balanced"),
            Self::Tense => write!(f, "tense"),
        }
    }
}

/// Weight of the Variable card's event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableImpact {
    /// Extreme intensity.
    Major,
    /// High intensity.
    Moderate,
    /// Low or medium intensity.
    Minor,
}

impl VariableImpact {
    /// Classify from the Variable card's intensity.
    pub fn classify(intensity: tj_deck::Intensity) -> Self {
        match intensity {
            tj_deck::Intensity::Extreme => Self::Major,
            tj_deck::Intensity::High => Self::Moderate,
            _ => Self::Minor,
        }
    }
}

impl fmt::Display for VariableImpact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Major => write!(f, "major"),
            Self::Moderate => write!(f, "moderate"),
            Self::Minor => write!(f, "minor"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tj_deck::Intensity;

    #[test]
    fn level_boundaries_are_inclusive_above() {
        assert_eq!(FortuneLevel::classify(-15.0), FortuneLevel::Poor);
        assert_eq!(FortuneLevel::classify(-15.0001), FortuneLevel::Dire);
        assert_eq!(FortuneLevel::classify(-5.0), FortuneLevel::Fair);
        assert_eq!(FortuneLevel::classify(-5.0001), FortuneLevel::Poor);
        assert_eq!(FortuneLevel::classify(5.0), FortuneLevel::Fair);
        assert_eq!(FortuneLevel::classify(5.0001), FortuneLevel::Good);
        assert_eq!(FortuneLevel::classify(15.0), FortuneLevel::Good);
        assert_eq!(FortuneLevel::classify(15.0001), FortuneLevel::Excellent);
    }

    #[test]
    fn level_ranks() {
        assert_eq!(FortuneLevel::classify(-15.0).rank(), 2);
        assert_eq!(FortuneLevel::classify(-40.0).rank(), 1);
        assert_eq!(FortuneLevel::classify(40.0).rank(), 5);
    }

    #[test]
    fn trend_and_horizon() {
        assert_eq!(Trend::classify(-2), Trend::Declining);
        assert_eq!(Trend::classify(-1), Trend::Flat);
        assert_eq!(Trend::classify(1), Trend::Flat);
        assert_eq!(Trend::classify(2), Trend::Rising);
        assert_eq!(Horizon::classify(1.5), Horizon::Short);
        assert_eq!(Horizon::classify(1.75), Horizon::Medium);
        assert_eq!(Horizon::classify(2.5), Horizon::Long);
    }

    #[test]
    fn energy_flow() {
        assert_eq!(EnergyFlow::classify(&[7, 7, 7, 7]), EnergyFlow::Abundant);
        assert_eq!(EnergyFlow::classify(&[4, 4, 4, 4]), EnergyFlow::Weak);
        assert_eq!(EnergyFlow::classify(&[5, 6, 5, 6]), EnergyFlow::Steady);
        assert_eq!(EnergyFlow::classify(&[1, 10, 1, 10]), EnergyFlow::Volatile);
        // spread exactly 8 is still steady
        assert_eq!(EnergyFlow::classify(&[3, 7, 3, 7]), EnergyFlow::Steady);
    }

    #[test]
    fn dimension_products() {
        assert_eq!(Environment::classify(1, 4), Environment::Favorable);
        assert_eq!(Environment::classify(1, 3), Environment::Neutral);
        assert_eq!(Environment::classify(-1, 4), Environment::Challenging);
        assert_eq!(Environment::classify(0, 10), Environment::Neutral);
        assert_eq!(Relationship::classify(1, 8), Relationship::Harmonious);
        assert_eq!(Relationship::classify(-1, 8), Relationship::Tense);
        assert_eq!(VariableImpact::classify(Intensity::Extreme), VariableImpact::Major);
        assert_eq!(VariableImpact::classify(Intensity::High), VariableImpact::Moderate);
        assert_eq!(VariableImpact::classify(Intensity::Low), VariableImpact::Minor);
    }

    proptest! {
        #[test]
        fn level_is_monotonic(a in -60.0f64..60.0, b in -60.0f64..60.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(FortuneLevel::classify(lo) <= FortuneLevel::classify(hi));
        }
    }
}
