//! Local metrics and combination patterns of a situational draw.

use std::fmt;

use serde::{Deserialize, Serialize};

use tj_deck::{Card, Category, Intensity, PerCategory};

use crate::error::{ReadingError, ReadingResult};

/// Five-way state of a situational draw.
///
/// Thresholds are independent of the fortune levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallState {
    /// Strongly favourable and energetic.
    Excellent,
    /// Leaning favourable.
    Good,
    /// Balanced.
    Neutral,
    /// Leaning adverse.
    Challenging,
    /// Strongly adverse.
    Critical,
}

impl OverallState {
    /// All states, best first.
    pub fn all() -> &'static [Self] {
        &[
            Self::Excellent,
            Self::Good,
            Self::Neutral,
            Self::Challenging,
            Self::Critical,
        ]
    }

    /// Classify from the direction sum and the energy and impact means.
    pub fn classify(direction_sum: i32, energy_average: f64, impact_average: f64) -> Self {
        if direction_sum >= 2 && energy_average >= 7.0 && impact_average >= 7.0 {
            Self::Excellent
        } else if direction_sum >= 1 && energy_average >= 5.0 {
            Self::Good
        } else if direction_sum == 0 && (4.0..=6.0).contains(&energy_average) {
            Self::Neutral
        } else if direction_sum >= -1 {
            Self::Challenging
        } else {
            Self::Critical
        }
    }
}

impl fmt::Display for OverallState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Excellent => write!(f, "excellent"),
            Self::Good => write!(f, "good"),
            Self::Neutral => write!(f, "neutral"),
            Self::Challenging => write!(f, "challenging"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// Aggregates over the drawn cards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SituationMetrics {
    /// Mean energy.
    pub energy_average: f64,
    /// Mean impact.
    pub impact_average: f64,
    /// Sum of directions.
    pub direction_sum: i32,
    /// Mean temporal value.
    pub temporal_average: f64,
    /// Cards of extreme intensity.
    pub extreme_count: usize,
    /// Cards of high or extreme intensity.
    pub high_intensity_count: usize,
    /// Cards with positive direction.
    pub positive_count: usize,
    /// Cards with negative direction.
    pub negative_count: usize,
    /// Classification of the above.
    pub state: OverallState,
}

impl SituationMetrics {
    /// Compute metrics for a non-empty draw.
    pub fn from_cards(cards: &[&Card]) -> ReadingResult<Self> {
        if cards.is_empty() {
            return Err(ReadingError::EmptyDraw);
        }
        let n = cards.len() as f64;
        let mean = |f: fn(&Card) -> f64| cards.iter().map(|c| f(c)).sum::<f64>() / n;
        let energy_average = mean(|c| f64::from(c.energy));
        let impact_average = mean(|c| f64::from(c.impact));
        let temporal_average = mean(|c| f64::from(c.temporal));
        let direction_sum = cards.iter().map(|c| i32::from(c.direction)).sum();

        Ok(Self {
            energy_average,
            impact_average,
            direction_sum,
            temporal_average,
            extreme_count: cards.iter().filter(|c| c.is_extreme()).count(),
            high_intensity_count: cards
                .iter()
                .filter(|c| c.intensity >= Intensity::High)
                .count(),
            positive_count: cards.iter().filter(|c| c.is_positive()).count(),
            negative_count: cards.iter().filter(|c| c.is_negative()).count(),
            state: OverallState::classify(direction_sum, energy_average, impact_average),
        })
    }
}

/// A combination pattern found in a situational draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    /// Two or more extreme cards.
    ExtremeCombo,
    /// Two or more cards with energy of 8 or more.
    EnergyPeak,
    /// A solstice or Miracle is present.
    TurningPoint,
    /// Two or more adverse cards with impact of 7 or more.
    Crisis,
    /// A low card (Ruins, Major Cold) meets a renewal card (Miracle, Start of Spring).
    Rebirth,
    /// Every card neutral with mid-range energy.
    PerfectBalance,
    /// Two or more cards of one category.
    Concentration(Category),
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExtremeCombo => write!(f, "extreme combination"),
            Self::EnergyPeak => write!(f, "energy peak"),
            Self::TurningPoint => write!(f, "turning point"),
            Self::Crisis => write!(f, "crisis"),
            Self::Rebirth => write!(f, "rebirth"),
            Self::PerfectBalance => write!(f, "perfect balance"),
            Self::Concentration(category) => write!(f, "{category} concentration"),
        }
    }
}

const TURNING_POINT_CARDS: [&str; 3] = ["Winter Solstice", "Summer Solstice", "Miracle"];
const LOW_POINT_CARDS: [&str; 2] = ["Ruins", "Major Cold"];
const RENEWAL_CARDS: [&str; 2] = ["Miracle", "Start of Spring"];

fn any_named(cards: &[&Card], names: &[&str]) -> bool {
    cards.iter().any(|c| names.contains(&c.name.as_str()))
}

/// Every pattern the draw shows, in a fixed order. Patterns co-occur freely.
pub fn detect_patterns(cards: &[&Card]) -> Vec<Pattern> {
    let mut patterns = Vec::new();
    let count = |pred: fn(&Card) -> bool| cards.iter().filter(|c| pred(c)).count();

    if count(Card::is_extreme) >= 2 {
        patterns.push(Pattern::ExtremeCombo);
    }
    if count(|c| c.energy >= 8) >= 2 {
        patterns.push(Pattern::EnergyPeak);
    }
    if any_named(cards, &TURNING_POINT_CARDS) {
        patterns.push(Pattern::TurningPoint);
    }
    if count(|c| c.is_negative() && c.impact >= 7) >= 2 {
        patterns.push(Pattern::Crisis);
    }
    if any_named(cards, &LOW_POINT_CARDS) && any_named(cards, &RENEWAL_CARDS) {
        patterns.push(Pattern::Rebirth);
    }
    if !cards.is_empty()
        && cards
            .iter()
            .all(|c| c.direction == 0 && (4..=6).contains(&c.energy))
    {
        patterns.push(Pattern::PerfectBalance);
    }

    let mut counts = PerCategory::<usize>::default();
    for card in cards {
        counts[card.category] += 1;
    }
    for (category, &n) in counts.iter() {
        if n >= 2 {
            patterns.push(Pattern::Concentration(category));
        }
    }
    patterns
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tj_deck::Deck;

    fn named<'d>(deck: &'d Deck, names: &[&str]) -> Vec<&'d Card> {
        names.iter().map(|n| deck.find_by_name(n).unwrap()).collect()
    }

    #[test]
    fn state_boundaries() {
        assert_eq!(OverallState::classify(2, 7.0, 7.0), OverallState::Excellent);
        assert_eq!(OverallState::classify(2, 7.0, 6.9), OverallState::Good);
        assert_eq!(OverallState::classify(1, 4.9, 9.0), OverallState::Challenging);
        assert_eq!(OverallState::classify(0, 4.0, 1.0), OverallState::Neutral);
        assert_eq!(OverallState::classify(0, 6.5, 1.0), OverallState::Challenging);
        assert_eq!(OverallState::classify(-1, 9.0, 9.0), OverallState::Challenging);
        assert_eq!(OverallState::classify(-2, 9.0, 9.0), OverallState::Critical);
    }

    #[test]
    fn metrics_of_a_draw() {
        let deck = Deck::builtin().unwrap();
        let cards = named(&deck, &["Summer Solstice", "Navigator", "Miracle"]);
        let m = SituationMetrics::from_cards(&cards).unwrap();
        assert_eq!(m.direction_sum, 3);
        assert!((m.energy_average - 9.0).abs() < 1e-9);
        assert!((m.impact_average - 9.0).abs() < 1e-9);
        assert_eq!(m.extreme_count, 2);
        assert_eq!(m.high_intensity_count, 3);
        assert_eq!(m.state, OverallState::Excellent);
    }

    #[test]
    fn empty_draw_is_rejected() {
        assert!(matches!(
            SituationMetrics::from_cards(&[]),
            Err(ReadingError::EmptyDraw)
        ));
    }

    #[test]
    fn patterns_co_occur() {
        let deck = Deck::builtin().unwrap();
        let cards = named(&deck, &["Major Cold", "Ruins", "Miracle"]);
        let patterns = detect_patterns(&cards);
        assert_eq!(
            patterns,
            vec![
                Pattern::ExtremeCombo,
                Pattern::TurningPoint,
                Pattern::Crisis,
                Pattern::Rebirth,
            ]
        );
    }

    #[test]
    fn balance_and_concentration() {
        let deck = Deck::builtin().unwrap();
        let cards = named(&deck, &["Spring Equinox", "Autumn Equinox", "Mediator"]);
        let patterns = detect_patterns(&cards);
        assert!(patterns.contains(&Pattern::PerfectBalance));
        assert!(patterns.contains(&Pattern::Concentration(Category::Sky)));
        assert!(!patterns.contains(&Pattern::Concentration(Category::Human)));
    }

    proptest! {
        #[test]
        fn state_is_monotone_in_direction(energy in 1.0f64..10.0, impact in 1.0f64..10.0, d in -4i32..4) {
            let rank = |s: OverallState| OverallState::all().iter().position(|x| *x == s).unwrap_or(0);
            let lower = OverallState::classify(d, energy, impact);
            let higher = OverallState::classify(d + 1, energy, impact);
            // a low-energy neutral draw turns challenging at direction 1
            prop_assert!(rank(higher) <= rank(lower) || lower == OverallState::Neutral);
        }
    }
}
