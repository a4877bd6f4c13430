//! Validated deck and profile catalogs.
//!
//! The built-in catalogs are embedded JSON. Custom catalogs can be loaded
//! from a string or a file; all go through the same validation, so an
//! invalid catalog is rejected at load time instead of at draw time.

use std::collections::HashSet;
use std::path::Path;

use tracing::debug;

use crate::card::Card;
use crate::category::{Category, PerCategory};
use crate::error::{DeckError, DeckResult};
use crate::profile::ContextProfile;

const BUILTIN_CARDS: &str = include_str!("../data/cards.json");
const BUILTIN_PROFILES: &str = include_str!("../data/profiles.json");

/// Card count of each category in the built-in deck.
pub const BUILTIN_PARTITION: PerCategory<usize> = PerCategory {
    sky: 24,
    earth: 12,
    human: 18,
    variable: 18,
};

/// An immutable, validated set of cards.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build a deck, checking every card and that no category is empty.
    pub fn new(cards: Vec<Card>) -> DeckResult<Self> {
        let mut ids = HashSet::new();
        for card in &cards {
            card.check().map_err(DeckError::Configuration)?;
            if !ids.insert(card.id.as_str()) {
                return Err(DeckError::Configuration(format!(
                    "duplicate card id '{}'",
                    card.id
                )));
            }
        }
        let deck = Self { cards };
        for &category in Category::all() {
            if deck.partition()[category] == 0 {
                return Err(DeckError::Configuration(format!(
                    "category {category} has no cards"
                )));
            }
        }
        Ok(deck)
    }

    /// The embedded 72-card deck.
    pub fn builtin() -> DeckResult<Self> {
        let deck = Self::from_json(BUILTIN_CARDS)?;
        let partition = deck.partition();
        if partition != BUILTIN_PARTITION {
            return Err(DeckError::Configuration(format!(
                "built-in deck partition {partition:?} does not match {BUILTIN_PARTITION:?}"
            )));
        }
        debug!(cards = deck.len(), "loaded built-in deck");
        Ok(deck)
    }

    /// Parse and validate a JSON array of cards.
    pub fn from_json(json: &str) -> DeckResult<Self> {
        let cards: Vec<Card> = serde_json::from_str(json)?;
        Self::new(cards)
    }

    /// Load a deck from a JSON file.
    pub fn from_path(path: &Path) -> DeckResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// All cards in catalog order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck has no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Look up a card by id.
    pub fn get(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Look up a card by name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&Card> {
        self.cards
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Cards of one category, in catalog order.
    pub fn in_category(&self, category: Category) -> Vec<&Card> {
        self.cards.iter().filter(|c| c.category == category).collect()
    }

    /// Number of cards in each category.
    pub fn partition(&self) -> PerCategory<usize> {
        let mut counts = PerCategory::default();
        for card in &self.cards {
            counts[card.category] += 1;
        }
        counts
    }
}

/// An immutable, validated set of context profiles.
#[derive(Debug, Clone)]
pub struct ProfileCatalog {
    profiles: Vec<ContextProfile>,
}

impl ProfileCatalog {
    /// Build a catalog, checking every profile and id uniqueness.
    pub fn new(profiles: Vec<ContextProfile>) -> DeckResult<Self> {
        if profiles.is_empty() {
            return Err(DeckError::Configuration("profile catalog is empty".into()));
        }
        let mut ids = HashSet::new();
        for profile in &profiles {
            profile.check().map_err(DeckError::Configuration)?;
            if !ids.insert(profile.id.as_str()) {
                return Err(DeckError::Configuration(format!(
                    "duplicate profile id '{}'",
                    profile.id
                )));
            }
        }
        Ok(Self { profiles })
    }

    /// The embedded eight profiles.
    pub fn builtin() -> DeckResult<Self> {
        let catalog = Self::from_json(BUILTIN_PROFILES)?;
        debug!(profiles = catalog.len(), "loaded built-in profiles");
        Ok(catalog)
    }

    /// Parse and validate a JSON array of profiles.
    pub fn from_json(json: &str) -> DeckResult<Self> {
        let profiles: Vec<ContextProfile> = serde_json::from_str(json)?;
        Self::new(profiles)
    }

    /// Load profiles from a JSON file.
    pub fn from_path(path: &Path) -> DeckResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// All profiles in catalog order.
    pub fn profiles(&self) -> &[ContextProfile] {
        &self.profiles
    }

    /// Number of profiles.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the catalog has no profiles. Always false once validated.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Look up a profile by id.
    pub fn get(&self, id: &str) -> DeckResult<&ContextProfile> {
        let needle = id.trim().to_lowercase();
        self.profiles
            .iter()
            .find(|p| p.id == needle)
            .ok_or_else(|| DeckError::UnknownProfile(id.to_string()))
    }
}
