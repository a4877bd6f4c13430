//! The fortune scoring state machine: base score, interaction adjustments,
//! classification.

use tracing::debug;

use tj_deck::{Card, Category, DeckResult, FortuneHand, PerCategory};

use crate::calculation::{Adjustment, AdjustmentKind, Dimensions, FortuneCalculation};
use crate::levels::{EnergyFlow, Environment, FortuneLevel, Horizon, Relationship, Trend, VariableImpact};
use crate::rules::detect_combinations;

/// The engine's own category importance. Unrelated to profile weights.
pub const BASE_CATEGORY_WEIGHTS: PerCategory<f64> = PerCategory {
    sky: 0.30,
    earth: 0.25,
    human: 0.25,
    variable: 0.20,
};

/// Energy/impact blend for Sky, Earth and Human cards.
const STANDARD_BLEND: (f64, f64) = (0.4, 0.6);
/// Energy/impact blend for Variable cards.
const VARIABLE_BLEND: (f64, f64) = (0.5, 0.5);

const EXTREME_POINTS_PER_CARD: f64 = 2.0;
const CONSENSUS_POINTS: f64 = 3.0;
const VARIABLE_AMPLIFIER_POINTS: f64 = 5.0;
const SHORT_HORIZON_POINTS: f64 = 2.0;
const LONG_HORIZON_POINTS: f64 = -1.0;
const MAX_THEMES: usize = 5;

/// Signed contribution of one card to the base score.
///
/// A card with direction 0 contributes nothing.
pub fn card_contribution(card: &Card) -> f64 {
    let (we, wi) = if card.category == Category::Variable {
        VARIABLE_BLEND
    } else {
        STANDARD_BLEND
    };
    let blended = f64::from(card.energy) * we + f64::from(card.impact) * wi;
    blended * BASE_CATEGORY_WEIGHTS[card.category] * f64::from(card.direction)
}

/// The most frequent keywords across `cards`, at most five. Equal counts
/// keep first-seen order.
pub fn key_themes(cards: &[&Card]) -> Vec<String> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for keyword in cards.iter().flat_map(|c| c.keywords.iter()) {
        match counts.iter_mut().find(|(k, _)| *k == keyword.as_str()) {
            Some((_, n)) => *n += 1,
            None => counts.push((keyword.as_str(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(MAX_THEMES)
        .map(|(k, _)| k.to_string())
        .collect()
}

fn interaction_adjustments(hand: &FortuneHand<'_>, temporal_average: f64) -> Vec<Adjustment> {
    let cards = hand.cards();
    let mut adjustments = Vec::new();

    let extreme = cards.iter().filter(|c| c.is_extreme()).count();
    if extreme >= 2 {
        adjustments.push(Adjustment {
            kind: AdjustmentKind::ExtremeAmplification,
            points: EXTREME_POINTS_PER_CARD * extreme as f64,
        });
    }

    let positive = cards.iter().filter(|c| c.is_positive()).count();
    let negative = cards.iter().filter(|c| c.is_negative()).count();
    if positive >= 3 {
        adjustments.push(Adjustment {
            kind: AdjustmentKind::DirectionalConsensus,
            points: CONSENSUS_POINTS,
        });
    } else if negative >= 3 {
        adjustments.push(Adjustment {
            kind: AdjustmentKind::DirectionalConsensus,
            points: -CONSENSUS_POINTS,
        });
    }

    if hand.variable.is_extreme() && hand.variable.direction != 0 {
        adjustments.push(Adjustment {
            kind: AdjustmentKind::VariableAmplifier,
            points: VARIABLE_AMPLIFIER_POINTS * f64::from(hand.variable.direction),
        });
    }

    if temporal_average <= 1.5 {
        adjustments.push(Adjustment {
            kind: AdjustmentKind::TemporalCoherence,
            points: SHORT_HORIZON_POINTS,
        });
    } else if temporal_average >= 2.5 {
        adjustments.push(Adjustment {
            kind: AdjustmentKind::TemporalCoherence,
            points: LONG_HORIZON_POINTS,
        });
    }

    adjustments
}

/// Score and classify a fortune hand.
pub fn calculate_fortune(hand: &FortuneHand<'_>) -> FortuneCalculation {
    let cards = hand.cards();

    let base_score: f64 = cards.iter().map(|c| card_contribution(c)).sum();
    let temporal_average = cards.iter().map(|c| f64::from(c.temporal)).sum::<f64>() / 4.0;
    let energy_average = cards.iter().map(|c| f64::from(c.energy)).sum::<f64>() / 4.0;
    let direction_sum: i32 = cards.iter().map(|c| i32::from(c.direction)).sum();

    let adjustments = interaction_adjustments(hand, temporal_average);
    let interaction_score: f64 = adjustments.iter().map(|a| a.points).sum();
    let total_score = base_score + interaction_score;

    let energies: Vec<u8> = cards.iter().map(|c| c.energy).collect();
    let dimensions = Dimensions {
        energy_flow: EnergyFlow::classify(&energies),
        environment: Environment::classify(hand.earth.direction, hand.earth.impact),
        relationship: Relationship::classify(hand.human.direction, hand.human.impact),
        variable_impact: VariableImpact::classify(hand.variable.intensity),
    };

    let calculation = FortuneCalculation {
        base_score,
        interaction_score,
        total_score,
        level: FortuneLevel::classify(total_score),
        trend: Trend::classify(direction_sum),
        horizon: Horizon::classify(temporal_average),
        dimensions,
        combinations: detect_combinations(hand),
        key_themes: key_themes(&cards),
        adjustments,
        direction_sum,
        energy_average,
        temporal_average,
    };
    debug!(
        cards = ?hand.ids(),
        base = calculation.base_score,
        interaction = calculation.interaction_score,
        level = %calculation.level,
        "fortune calculated"
    );
    calculation
}

/// Validate a card slice as a fortune hand, then score it.
///
/// Fails with a validation error unless the slice holds exactly one card of
/// each category in canonical order.
pub fn calculate_from_cards(cards: &[&Card]) -> DeckResult<FortuneCalculation> {
    let hand = FortuneHand::from_cards(cards)?;
    Ok(calculate_fortune(&hand))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::ComboTag;
    use proptest::prelude::*;
    use tj_deck::{Deck, DeckError, Intensity};

    fn hand<'d>(deck: &'d Deck, names: [&str; 4]) -> FortuneHand<'d> {
        let cards: Vec<_> = names
            .iter()
            .map(|n| deck.find_by_name(n).unwrap())
            .collect();
        FortuneHand::from_cards(&cards).unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn crisis_hand_scores_as_expected() {
        let deck = Deck::builtin().unwrap();
        let calc = calculate_fortune(&hand(&deck, ["Major Heat", "Abyss", "Betrayer", "Lightning"]));
        assert!(close(calc.base_score, -7.95), "base {}", calc.base_score);
        // +8 extremes, -3 consensus, -5 variable, +2 short horizon
        assert!(close(calc.interaction_score, 2.0));
        assert!(close(calc.total_score, -5.95));
        assert_eq!(calc.level, FortuneLevel::Poor);
        assert_eq!(calc.trend, Trend::Declining);
        assert_eq!(calc.horizon, Horizon::Short);
        assert_eq!(calc.dimensions.energy_flow, EnergyFlow::Volatile);
        assert_eq!(calc.dimensions.environment, Environment::Challenging);
        assert_eq!(calc.dimensions.relationship, Relationship::Tense);
        assert_eq!(calc.dimensions.variable_impact, VariableImpact::Major);
        assert!(calc.has(ComboTag::Crisis));
        assert_eq!(
            calc.key_themes,
            vec!["climax", "eruption", "breakdown", "the unknown", "fear"]
        );
        assert_eq!(calc.adjustments.len(), 4);
    }

    #[test]
    fn leadership_hand_is_excellent() {
        let deck = Deck::builtin().unwrap();
        let calc = calculate_fortune(&hand(&deck, ["Summer Solstice", "Theater", "Navigator", "Miracle"]));
        assert!(close(calc.base_score, 8.57), "base {}", calc.base_score);
        assert!(close(calc.interaction_score, 14.0));
        assert_eq!(calc.level, FortuneLevel::Excellent);
        assert_eq!(calc.trend, Trend::Rising);
        assert_eq!(
            calc.combinations,
            vec![ComboTag::EnergyPeak, ComboTag::LeadershipPeak]
        );
    }

    #[test]
    fn neutral_cards_are_scoring_silent() {
        let deck = Deck::builtin().unwrap();
        let calc = calculate_fortune(&hand(&deck, ["Spring Equinox", "Fortress", "Mediator", "Void"]));
        assert_eq!(calc.base_score, 0.0);

        let mut loud = deck.get("sky04").unwrap().clone();
        loud.energy = 10;
        loud.impact = 10;
        loud.intensity = Intensity::Extreme;
        assert_eq!(card_contribution(&loud), 0.0);
    }

    #[test]
    fn long_horizon_subtracts() {
        let deck = Deck::builtin().unwrap();
        // temporal 3, 3, 3, 3
        let calc = calculate_fortune(&hand(&deck, ["Start of Winter", "Lone Island", "Hermit", "Drought"]));
        assert_eq!(calc.horizon, Horizon::Long);
        assert!(calc.adjustments.iter().any(|a| {
            a.kind == AdjustmentKind::TemporalCoherence && close(a.points, -1.0)
        }));
        assert!(calc.has(ComboTag::DeepIntrospection));
    }

    #[test]
    fn themes_count_repeats_first() {
        let deck = Deck::builtin().unwrap();
        let cards = [
            deck.get("sky02").unwrap(),
            deck.get("sky16").unwrap(),
            deck.get("earth01").unwrap(),
        ];
        // "resources" appears three times
        assert_eq!(key_themes(&cards)[0], "resources");
        assert_eq!(key_themes(&cards).len(), 5);
    }

    #[test]
    fn wrong_arity_is_validation_error() {
        let deck = Deck::builtin().unwrap();
        let sky = deck.get("sky01").unwrap();
        assert!(matches!(
            calculate_from_cards(&[sky]).unwrap_err(),
            DeckError::Validation(_)
        ));
    }

    #[test]
    fn calculation_serializes_snake_case() {
        let deck = Deck::builtin().unwrap();
        let calc = calculate_fortune(&hand(&deck, ["Grain Buds", "Plains", "Keystone", "Gift"]));
        let json = serde_json::to_string(&calc).unwrap();
        assert!(json.contains("\"level\":\"good\"") || json.contains("\"level\":\"fair\""));
        assert!(json.contains("\"energy_flow\""));
    }

    proptest! {
        #[test]
        fn calculation_is_pure_and_consistent(
            s in 0usize..24, e in 0usize..12, h in 0usize..18, v in 0usize..18,
        ) {
            let deck = Deck::builtin().unwrap();
            let hand = FortuneHand::new(
                deck.in_category(Category::Sky)[s],
                deck.in_category(Category::Earth)[e],
                deck.in_category(Category::Human)[h],
                deck.in_category(Category::Variable)[v],
            ).unwrap();
            let a = calculate_fortune(&hand);
            let b = calculate_fortune(&hand);
            prop_assert_eq!(&a, &b);
            prop_assert!(close(a.total_score, a.base_score + a.interaction_score));
            let summed: f64 = a.adjustments.iter().map(|x| x.points).sum();
            prop_assert!(close(summed, a.interaction_score));
            prop_assert_eq!(a.level, FortuneLevel::classify(a.total_score));
            prop_assert!(a.key_themes.len() <= 5);
        }
    }
}
