//! One-card readings.

use serde::{Deserialize, Serialize};

use tj_deck::{Card, Category, Intensity};

/// The reading of a single drawn card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleReading {
    /// Id of the card read.
    pub card_id: String,
    /// What the card says.
    pub meaning: String,
    /// What to do about it.
    pub advice: String,
    /// Where the card sits: its category role, strength and horizon.
    pub context: String,
}

/// Read one card. Deterministic: the same card always gives the same text.
pub fn interpret_single(card: &Card) -> SingleReading {
    let meaning = if card.keywords.is_empty() {
        card.omen.clone()
    } else {
        format!(
            "{} {} speaks of {}.",
            card.omen.trim(),
            card.name,
            join_words(&card.keywords)
        )
    };

    let stance = match card.direction {
        d if d > 0 => "The current is with you; lean into it.",
        d if d < 0 => "The current runs against you; move carefully and protect what matters.",
        _ => "Nothing pushes either way yet; the next move is yours.",
    };
    let advice = format!("Ask yourself: {} {stance}", card.reflection.trim());

    let strength = match card.intensity {
        Intensity::Low => "a quiet background influence",
        Intensity::Medium => "a noticeable influence",
        Intensity::High => "a strong influence",
        Intensity::Extreme => "a force that dominates everything around it",
    };
    let article = if card.category == Category::Earth { "an" } else { "a" };
    let context = format!(
        "As {article} {} card, {} reflects {}. It is {strength}, unfolding over the {}.",
        card.category,
        card.name,
        card.category.role(),
        card.horizon_label()
    );

    SingleReading {
        card_id: card.id.clone(),
        meaning,
        advice,
        context,
    }
}

/// "a", "a and b", "a, b and c".
pub(crate) fn join_words(words: &[String]) -> String {
    match words {
        [] => String::new(),
        [one] => one.clone(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tj_deck::Deck;

    #[test]
    fn reading_is_deterministic() {
        let deck = Deck::builtin().unwrap();
        let card = deck.get("var18").unwrap();
        assert_eq!(interpret_single(card), interpret_single(card));
    }

    #[test]
    fn reading_uses_card_text() {
        let deck = Deck::builtin().unwrap();
        let card = deck.get("sky01").unwrap();
        let reading = interpret_single(card);
        assert!(reading.meaning.starts_with(card.omen.as_str()));
        assert!(reading.meaning.contains("new life, launch and potential"));
        assert!(reading.advice.contains(card.reflection.as_str()));
        assert!(reading.advice.contains("with you"));
        assert!(reading.context.contains("Sky card"));
        assert!(reading.context.contains("medium term"));
    }

    #[test]
    fn adverse_and_extreme_cards() {
        let deck = Deck::builtin().unwrap();
        let reading = interpret_single(deck.get("var01").unwrap());
        assert!(reading.advice.contains("against you"));
        assert!(reading.context.contains("dominates"));
    }

    #[test]
    fn join_words_forms() {
        let words: Vec<String> = vec!["a".into(), "b".into(), "c".into()];
        assert_eq!(join_words(&words[..1]), "a");
        assert_eq!(join_words(&words[..2]), "a and b");
        assert_eq!(join_words(&words), "a, b and c");
    }
}
