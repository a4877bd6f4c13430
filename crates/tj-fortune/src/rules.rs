//! Declarative special-combination rules.
//!
//! Each rule pairs a [`HandPattern`] with the [`ComboTag`] it records. Rules
//! are evaluated in table order; a tag produced by more than one rule is
//! recorded once, at its first position.

use std::fmt;

use serde::{Deserialize, Serialize};

use tj_deck::FortuneHand;

/// A named special combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComboTag {
    /// Three or more extreme cards.
    ExtremeConvergence,
    /// Summer Solstice on the Theater stage with the Navigator.
    EnergyPeak,
    /// Winter Solstice at the Crossroads, meeting the past.
    TurningPoint,
    /// Major Heat, Abyss, Betrayer, Lightning.
    Crisis,
    /// Major Cold, Ruins, Apprentice, Miracle.
    Rebirth,
    /// Spring Equinox on the Plains with the Mediator.
    PerfectBalance,
    /// Start of Winter on the Lone Island with the Hermit.
    DeepIntrospection,
    /// Start of Spring, Back Garden, Apprentice, Spark.
    NewGrowth,
    /// Start of Summer, Plains, Rival, Acceleration.
    RapidExpansion,
    /// Frost's Descent, Ruins, Betrayer, Collapse.
    EndingAndRestart,
    /// The energy peak crowned by a Miracle.
    LeadershipPeak,
    /// Major Heat, Labyrinth, Rival, Gale.
    FierceConflict,
    /// Spring Equinox, Back Garden, Mediator, Rainbow.
    Harmony,
    /// Grain Rain, Greenhouse, Apprentice, Encounter.
    LearningAndGrowth,
    /// Summer Solstice, Fortress, Gatekeeper, Gift.
    PowerConcentration,
    /// Rain Water, Plains, Wanderer, Lost Way.
    Drift,
    /// Winter Solstice, Abyss, Redeemer, Miracle.
    Redemption,
    /// Awakening of Insects, Ruins, Rebel, Earthquake.
    BreakingTheOldOrder,
    /// Start of Spring, Lone Peak, Heir, Reunion.
    Legacy,
}

impl ComboTag {
    /// Parse a tag from its snake_case or spaced name.
    pub fn parse(s: &str) -> Option<Self> {
        let key = s.trim().to_lowercase().replace([' ', '-'], "_");
        Self::all().iter().copied().find(|t| t.key() == key)
    }

    /// Stable snake_case key.
    pub fn key(self) -> &'static str {
        match self {
            Self::ExtremeConvergence => "extreme_convergence",
            Self::EnergyPeak => "energy_peak",
            Self::TurningPoint => "turning_point",
            Self::Crisis => "crisis",
            Self::Rebirth => "rebirth",
            Self::PerfectBalance => "perfect_balance",
            Self::DeepIntrospection => "deep_introspection",
            Self::NewGrowth => "new_growth",
            Self::RapidExpansion => "rapid_expansion",
            Self::EndingAndRestart => "ending_and_restart",
            Self::LeadershipPeak => "leadership_peak",
            Self::FierceConflict => "fierce_conflict",
            Self::Harmony => "harmony",
            Self::LearningAndGrowth => "learning_and_growth",
            Self::PowerConcentration => "power_concentration",
            Self::Drift => "drift",
            Self::Redemption => "redemption",
            Self::BreakingTheOldOrder => "breaking_the_old_order",
            Self::Legacy => "legacy",
        }
    }

    /// Every tag, in first-rule order.
    pub fn all() -> &'static [Self] {
        &[
            Self::ExtremeConvergence,
            Self::EnergyPeak,
            Self::TurningPoint,
            Self::Crisis,
            Self::Rebirth,
            Self::PerfectBalance,
            Self::DeepIntrospection,
            Self::NewGrowth,
            Self::RapidExpansion,
            Self::EndingAndRestart,
            Self::LeadershipPeak,
            Self::FierceConflict,
            Self::Harmony,
            Self::LearningAndGrowth,
            Self::PowerConcentration,
            Self::Drift,
            Self::Redemption,
            Self::BreakingTheOldOrder,
            Self::Legacy,
        ]
    }
}

impl fmt::Display for ComboTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::ExtremeConvergence => "Extreme Convergence",
            Self::EnergyPeak => "Energy Peak",
            Self::TurningPoint => "Turning Point",
            Self::Crisis => "Crisis",
            Self::Rebirth => "Rebirth",
            Self::PerfectBalance => "Perfect Balance",
            Self::DeepIntrospection => "Deep Introspection",
            Self::NewGrowth => "New Growth",
            Self::RapidExpansion => "Rapid Expansion",
            Self::EndingAndRestart => "Ending and Restart",
            Self::LeadershipPeak => "Leadership Peak",
            Self::FierceConflict => "Fierce Conflict",
            Self::Harmony => "Harmony",
            Self::LearningAndGrowth => "Learning and Growth",
            Self::PowerConcentration => "Power Concentration",
            Self::Drift => "Drift",
            Self::Redemption => "Redemption",
            Self::BreakingTheOldOrder => "Breaking the Old Order",
            Self::Legacy => "Legacy",
        };
        write!(f, "{label}")
    }
}

/// What a hand must look like for a rule to fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandPattern {
    /// At least this many extreme-intensity cards.
    MinExtreme(usize),
    /// Card names required per category (Sky, Earth, Human, Variable);
    /// `None` accepts any card.
    Names([Option<&'static str>; 4]),
}

impl HandPattern {
    /// Whether `hand` satisfies the pattern.
    pub fn matches(&self, hand: &FortuneHand<'_>) -> bool {
        match self {
            Self::MinExtreme(n) => hand.cards().iter().filter(|c| c.is_extreme()).count() >= *n,
            Self::Names(names) => hand
                .cards()
                .iter()
                .zip(names)
                .all(|(card, name)| name.is_none_or(|n| card.name == n)),
        }
    }
}

/// One row of the combination table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComboRule {
    /// Tag recorded when the rule fires.
    pub tag: ComboTag,
    /// Required hand shape.
    pub pattern: HandPattern,
}

const fn all4(sky: &'static str, earth: &'static str, human: &'static str, variable: &'static str) -> HandPattern {
    HandPattern::Names([Some(sky), Some(earth), Some(human), Some(variable)])
}

/// The combination table, evaluated top to bottom.
pub const COMBINATION_RULES: [ComboRule; 20] = [
    ComboRule {
        tag: ComboTag::ExtremeConvergence,
        pattern: HandPattern::MinExtreme(3),
    },
    ComboRule {
        tag: ComboTag::EnergyPeak,
        pattern: HandPattern::Names([Some("Summer Solstice"), Some("Theater"), Some("Navigator"), None]),
    },
    ComboRule {
        tag: ComboTag::TurningPoint,
        pattern: HandPattern::Names([Some("Winter Solstice"), Some("Crossroads"), None, Some("Reunion")]),
    },
    ComboRule {
        tag: ComboTag::Crisis,
        pattern: all4("Major Heat", "Abyss", "Betrayer", "Lightning"),
    },
    ComboRule {
        tag: ComboTag::Rebirth,
        pattern: all4("Major Cold", "Ruins", "Apprentice", "Miracle"),
    },
    ComboRule {
        tag: ComboTag::PerfectBalance,
        pattern: HandPattern::Names([Some("Spring Equinox"), Some("Plains"), Some("Mediator"), None]),
    },
    ComboRule {
        tag: ComboTag::DeepIntrospection,
        pattern: HandPattern::Names([Some("Start of Winter"), Some("Lone Island"), Some("Hermit"), None]),
    },
    ComboRule {
        tag: ComboTag::NewGrowth,
        pattern: all4("Start of Spring", "Back Garden", "Apprentice", "Spark"),
    },
    ComboRule {
        tag: ComboTag::RapidExpansion,
        pattern: all4("Start of Summer", "Plains", "Rival", "Acceleration"),
    },
    ComboRule {
        tag: ComboTag::EndingAndRestart,
        pattern: all4("Frost's Descent", "Ruins", "Betrayer", "Collapse"),
    },
    ComboRule {
        tag: ComboTag::LeadershipPeak,
        pattern: all4("Summer Solstice", "Theater", "Navigator", "Miracle"),
    },
    ComboRule {
        tag: ComboTag::DeepIntrospection,
        pattern: all4("Start of Winter", "Lone Island", "Hermit", "Void"),
    },
    ComboRule {
        tag: ComboTag::FierceConflict,
        pattern: all4("Major Heat", "Labyrinth", "Rival", "Gale"),
    },
    ComboRule {
        tag: ComboTag::Harmony,
        pattern: all4("Spring Equinox", "Back Garden", "Mediator", "Rainbow"),
    },
    ComboRule {
        tag: ComboTag::LearningAndGrowth,
        pattern: all4("Grain Rain", "Greenhouse", "Apprentice", "Encounter"),
    },
    ComboRule {
        tag: ComboTag::PowerConcentration,
        pattern: all4("Summer Solstice", "Fortress", "Gatekeeper", "Gift"),
    },
    ComboRule {
        tag: ComboTag::Drift,
        pattern: all4("Rain Water", "Plains", "Wanderer", "Lost Way"),
    },
    ComboRule {
        tag: ComboTag::Redemption,
        pattern: all4("Winter Solstice", "Abyss", "Redeemer", "Miracle"),
    },
    ComboRule {
        tag: ComboTag::BreakingTheOldOrder,
        pattern: all4("Awakening of Insects", "Ruins", "Rebel", "Earthquake"),
    },
    ComboRule {
        tag: ComboTag::Legacy,
        pattern: all4("Start of Spring", "Lone Peak", "Heir", "Reunion"),
    },
];

/// Tags of every rule `hand` satisfies, in table order, without repeats.
pub fn detect_combinations(hand: &FortuneHand<'_>) -> Vec<ComboTag> {
    let mut tags = Vec::new();
    for rule in &COMBINATION_RULES {
        if rule.pattern.matches(hand) && !tags.contains(&rule.tag) {
            tags.push(rule.tag);
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use tj_deck::Deck;

    fn hand<'d>(deck: &'d Deck, names: [&str; 4]) -> FortuneHand<'d> {
        let cards: Vec<_> = names
            .iter()
            .map(|n| deck.find_by_name(n).unwrap())
            .collect();
        FortuneHand::from_cards(&cards).unwrap()
    }

    #[test]
    fn every_rule_names_real_cards_in_the_right_category() {
        let deck = Deck::builtin().unwrap();
        for rule in &COMBINATION_RULES {
            if let HandPattern::Names(names) = rule.pattern {
                for (slot, name) in names.iter().enumerate() {
                    if let Some(name) = name {
                        let card = deck.find_by_name(name).unwrap();
                        assert_eq!(card.category.index(), slot, "{name} in {}", rule.tag);
                    }
                }
            }
        }
    }

    #[test]
    fn crisis_matches_exact_hand() {
        let deck = Deck::builtin().unwrap();
        let h = hand(&deck, ["Major Heat", "Abyss", "Betrayer", "Lightning"]);
        assert_eq!(
            detect_combinations(&h),
            vec![ComboTag::ExtremeConvergence, ComboTag::Crisis]
        );
    }

    #[test]
    fn wildcard_slot_accepts_any_card() {
        let deck = Deck::builtin().unwrap();
        let h = hand(&deck, ["Winter Solstice", "Crossroads", "Outsider", "Reunion"]);
        assert_eq!(detect_combinations(&h), vec![ComboTag::TurningPoint]);
    }

    #[test]
    fn leadership_peak_also_fires_energy_peak() {
        let deck = Deck::builtin().unwrap();
        let h = hand(&deck, ["Summer Solstice", "Theater", "Navigator", "Miracle"]);
        let tags = detect_combinations(&h);
        assert!(tags.contains(&ComboTag::EnergyPeak));
        assert!(tags.contains(&ComboTag::LeadershipPeak));
    }

    #[test]
    fn duplicate_tag_recorded_once() {
        let deck = Deck::builtin().unwrap();
        let h = hand(&deck, ["Start of Winter", "Lone Island", "Hermit", "Void"]);
        assert_eq!(detect_combinations(&h), vec![ComboTag::DeepIntrospection]);
    }

    #[test]
    fn ordinary_hand_has_no_tags() {
        let deck = Deck::builtin().unwrap();
        let h = hand(&deck, ["Grain Buds", "Plains", "Keystone", "Gift"]);
        assert!(detect_combinations(&h).is_empty());
    }

    #[test]
    fn tag_keys_round_trip() {
        for &tag in ComboTag::all() {
            assert_eq!(ComboTag::parse(tag.key()), Some(tag));
        }
        assert_eq!(ComboTag::parse("Turning Point"), Some(ComboTag::TurningPoint));
    }
}
