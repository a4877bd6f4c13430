//! Interpretation synthesizer for Tianji.
//!
//! Turns drawn cards (and, for fortune hands, their calculation) into
//! structured text. Three reading shapes exist, one per draw mode, and
//! [`Interpretation`] tags them for callers that handle all three.
//!
//! Every randomised choice goes through a [`tj_deck::RandomSource`], so a
//! scripted or seeded source makes a reading reproducible.

pub mod error;
pub mod fortune_text;
pub mod single;
pub mod situation;
pub mod template;

use serde::{Deserialize, Serialize};

pub use error::{ReadingError, ReadingResult};
pub use fortune_text::{FortuneReading, generate_fortune_text};
pub use single::{SingleReading, interpret_single};
pub use situation::{
    Gauge, OverallState, Pattern, SituationMetrics, SituationReading, SituationSummary,
    detect_patterns, generate_situation_interpretation, generate_situation_summary,
};

/// A reading of any draw mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Interpretation {
    /// One card.
    Single(SingleReading),
    /// A four-card fortune hand.
    Fortune(FortuneReading),
    /// A profile-guided draw.
    Situation(SituationReading),
}

impl Interpretation {
    /// Ids of the cards the reading covers.
    pub fn card_ids(&self) -> Vec<String> {
        match self {
            Self::Single(r) => vec![r.card_id.clone()],
            Self::Fortune(r) => r.card_ids.clone(),
            Self::Situation(r) => r.card_ids.clone(),
        }
    }

    /// Every advice line, in order.
    pub fn advice(&self) -> Vec<&str> {
        match self {
            Self::Single(r) => vec![r.advice.as_str()],
            Self::Fortune(r) => r.advice.iter().map(String::as_str).collect(),
            Self::Situation(r) => r.advice.iter().map(String::as_str).collect(),
        }
    }

    /// A one-line headline suitable for a history record.
    pub fn headline(&self) -> String {
        match self {
            Self::Single(r) => r.meaning.clone(),
            Self::Fortune(r) => format!("{} fortune: {}", r.level, r.opening),
            Self::Situation(r) => format!("{} ({}): {}", r.profile_id, r.state, r.opening),
        }
    }
}

impl From<SingleReading> for Interpretation {
    fn from(reading: SingleReading) -> Self {
        Self::Single(reading)
    }
}

impl From<FortuneReading> for Interpretation {
    fn from(reading: FortuneReading) -> Self {
        Self::Fortune(reading)
    }
}

impl From<SituationReading> for Interpretation {
    fn from(reading: SituationReading) -> Self {
        Self::Situation(reading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tj_deck::{Deck, FortuneHand, ProfileCatalog};
    use tj_fortune::calculate_fortune;

    #[test]
    fn tagged_by_mode() {
        let deck = Deck::builtin().unwrap();
        let reading: Interpretation = interpret_single(deck.get("earth07").unwrap()).into();
        let json = serde_json::to_string(&reading).unwrap();
        assert!(json.contains("\"mode\":\"single\""));
        let back: Interpretation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reading);
        assert_eq!(reading.card_ids(), vec!["earth07"]);
    }

    #[test]
    fn accessors_cover_each_variant() {
        let deck = Deck::builtin().unwrap();
        let profiles = ProfileCatalog::builtin().unwrap();
        let mut rng = StdRng::seed_from_u64(11);

        let hand = FortuneHand::new(
            deck.get("sky08").unwrap(),
            deck.get("earth03").unwrap(),
            deck.get("human07").unwrap(),
            deck.get("var08").unwrap(),
        )
        .unwrap();
        let calc = calculate_fortune(&hand);
        let fortune: Interpretation = generate_fortune_text(&hand, &calc, &mut rng).into();
        assert_eq!(fortune.card_ids().len(), 4);
        assert!(fortune.advice().len() >= 5);
        assert!(fortune.headline().contains("fortune"));

        let cards = [deck.get("sky01").unwrap(), deck.get("human04").unwrap()];
        let situation: Interpretation =
            generate_situation_interpretation(&cards, profiles.get("growth").unwrap(), &mut rng)
                .unwrap()
                .into();
        assert_eq!(situation.card_ids(), vec!["sky01", "human04"]);
        assert!(situation.headline().starts_with("growth ("));
    }
}
