//! Uniform draws: one card, or one card per category.

use tracing::debug;

use tj_deck::{Category, Deck, FortuneHand, RandomSource};

use crate::error::{DrawError, DrawResult};

/// Draw one card uniformly, optionally restricted to `category`.
///
/// Every card in the candidate pool is equally likely; card attributes play
/// no part in this mode.
pub fn draw_single<'d>(
    deck: &'d Deck,
    category: Option<Category>,
    rng: &mut dyn RandomSource,
) -> DrawResult<&'d tj_deck::Card> {
    let pool: Vec<_> = match category {
        Some(c) => deck.in_category(c),
        None => deck.cards().iter().collect(),
    };
    if pool.is_empty() {
        return Err(DrawError::EmptyPool(category));
    }
    let card = pool[rng.pick_index(pool.len())];
    debug!(card = %card.id, ?category, pool = pool.len(), "single draw");
    Ok(card)
}

/// Draw one card from each category, independently, in canonical order.
pub fn draw_fortune_set<'d>(deck: &'d Deck, rng: &mut dyn RandomSource) -> DrawResult<FortuneHand<'d>> {
    let sky = draw_single(deck, Some(Category::Sky), rng)?;
    let earth = draw_single(deck, Some(Category::Earth), rng)?;
    let human = draw_single(deck, Some(Category::Human), rng)?;
    let variable = draw_single(deck, Some(Category::Variable), rng)?;
    Ok(FortuneHand::new(sky, earth, human, variable)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;
    use tj_deck::ScriptedSource;

    fn deck() -> Deck {
        Deck::builtin().unwrap()
    }

    #[test]
    fn filter_is_respected() {
        let deck = deck();
        let mut rng = StdRng::seed_from_u64(42);
        for &category in Category::all() {
            for _ in 0..20 {
                let card = draw_single(&deck, Some(category), &mut rng).unwrap();
                assert_eq!(card.category, category);
            }
        }
    }

    #[test]
    fn scripted_source_pins_the_card() {
        let deck = deck();
        let mut first = ScriptedSource::constant(0.0);
        assert_eq!(draw_single(&deck, None, &mut first).unwrap().id, "sky01");
        let mut last = ScriptedSource::constant(0.999);
        assert_eq!(
            draw_single(&deck, Some(Category::Earth), &mut last).unwrap().id,
            "earth12"
        );
    }

    #[test]
    fn fortune_set_is_one_per_category_in_order() {
        let deck = deck();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let hand = draw_fortune_set(&deck, &mut rng).unwrap();
            let categories: Vec<_> = hand.cards().iter().map(|c| c.category).collect();
            assert_eq!(categories, Category::all());
        }
    }

    #[test]
    fn every_card_is_reachable() {
        let deck = deck();
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen: HashMap<&str, usize> = HashMap::new();
        for _ in 0..5000 {
            let card = draw_single(&deck, None, &mut rng).unwrap();
            *seen.entry(card.id.as_str()).or_default() += 1;
        }
        assert_eq!(seen.len(), 72);
    }
}
