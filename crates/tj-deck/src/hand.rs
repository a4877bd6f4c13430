//! The four-card, one-per-category hand used by fortune readings.

use crate::card::Card;
use crate::category::Category;
use crate::error::{DeckError, DeckResult};

/// Exactly one card per category, held in canonical order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FortuneHand<'d> {
    /// The Sky card.
    pub sky: &'d Card,
    /// The Earth card.
    pub earth: &'d Card,
    /// The Human card.
    pub human: &'d Card,
    /// The Variable card.
    pub variable: &'d Card,
}

impl<'d> FortuneHand<'d> {
    /// Build a hand from four cards in canonical category order.
    pub fn new(sky: &'d Card, earth: &'d Card, human: &'d Card, variable: &'d Card) -> DeckResult<Self> {
        Self::from_cards(&[sky, earth, human, variable])
    }

    /// Build a hand from a slice, rejecting the wrong arity or a slice that
    /// does not hold Sky, Earth, Human and Variable in that order.
    pub fn from_cards(cards: &[&'d Card]) -> DeckResult<Self> {
        let &[sky, earth, human, variable] = cards else {
            return Err(DeckError::Validation(format!(
                "a fortune hand needs exactly 4 cards, got {}",
                cards.len()
            )));
        };
        for (card, &expected) in cards.iter().zip(Category::all()) {
            if card.category != expected {
                return Err(DeckError::Validation(format!(
                    "expected a {expected} card in position {}, got '{}' ({})",
                    expected.index() + 1,
                    card.name,
                    card.category
                )));
            }
        }
        Ok(Self {
            sky,
            earth,
            human,
            variable,
        })
    }

    /// The four cards in canonical order.
    pub fn cards(&self) -> [&'d Card; 4] {
        [self.sky, self.earth, self.human, self.variable]
    }

    /// The card of `category`.
    pub fn card(&self, category: Category) -> &'d Card {
        match category {
            Category::Sky => self.sky,
            Category::Earth => self.earth,
            Category::Human => self.human,
            Category::Variable => self.variable,
        }
    }

    /// Ids of the four cards.
    pub fn ids(&self) -> Vec<String> {
        self.cards().iter().map(|c| c.id.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::fixtures::card;

    #[test]
    fn accepts_canonical_order() {
        let (s, e, h, v) = (
            card("s", "S", Category::Sky),
            card("e", "E", Category::Earth),
            card("h", "H", Category::Human),
            card("v", "V", Category::Variable),
        );
        let hand = FortuneHand::new(&s, &e, &h, &v).unwrap();
        assert_eq!(hand.card(Category::Human).id, "h");
        assert_eq!(hand.ids(), vec!["s", "e", "h", "v"]);
    }

    #[test]
    fn rejects_wrong_arity() {
        let s = card("s", "S", Category::Sky);
        let err = FortuneHand::from_cards(&[&s, &s, &s]).unwrap_err();
        assert!(matches!(err, DeckError::Validation(msg) if msg.contains("got 3")));
    }

    #[test]
    fn rejects_wrong_order() {
        let (s, e, h, v) = (
            card("s", "S", Category::Sky),
            card("e", "E", Category::Earth),
            card("h", "H", Category::Human),
            card("v", "V", Category::Variable),
        );
        let err = FortuneHand::from_cards(&[&e, &s, &h, &v]).unwrap_err();
        assert!(matches!(err, DeckError::Validation(msg) if msg.contains("position 1")));
    }
}
