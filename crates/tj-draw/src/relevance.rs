//! Relevance of a card to a context profile.
//!
//! Scoring is deterministic: the same card and profile always give the same
//! score. Randomness enters only when [`crate::draw_situational`] samples by
//! these scores.

use std::fmt;

use serde::{Deserialize, Serialize};

use tj_deck::{AttributeRange, Card, ContextProfile};

/// Points for each card keyword that fully matches a profile keyword.
pub const FULL_MATCH_POINTS: f64 = 8.0;
/// Points for each card keyword that only partially matches.
pub const PARTIAL_MATCH_POINTS: f64 = 3.0;
/// Shortest shared run of characters that counts as a partial match.
///
/// A card keyword that is not a full match scores as partial when it shares
/// a contiguous run of at least this many characters, compared lowercase,
/// with any profile keyword. Shorter runs are too common in English words.
pub const PARTIAL_MATCH_RUN: usize = 4;
/// Multiplier on the profile's weight for the card's category.
pub const CATEGORY_WEIGHT_SCALE: f64 = 30.0;
/// Flat score every card receives.
pub const BASE_POINTS: f64 = 5.0;
/// Multiplier on the summed attribute-range fit.
pub const RANGE_FIT_SCALE: f64 = 6.0;
/// Fit of an attribute that falls outside its preferred range.
pub const OUT_OF_RANGE_FIT: f64 = 0.1;

/// Which terms make up a relevance score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    /// Keyword overlap, category weight, profile emphasis and base.
    #[default]
    Keyword,
    /// Attribute-range fit, category weight and base.
    AttributeFit,
    /// Every term.
    Blended,
}

impl ScoringMode {
    /// All modes.
    pub fn all() -> &'static [Self] {
        &[Self::Keyword, Self::AttributeFit, Self::Blended]
    }

    /// Parse a mode from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "keyword" | "keywords" => Some(Self::Keyword),
            "attribute_fit" | "attribute" | "attributes" | "fit" => Some(Self::AttributeFit),
            "blended" | "blend" => Some(Self::Blended),
            _ => None,
        }
    }
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keyword => write!(f, "keyword"),
            Self::AttributeFit => write!(f, "attribute-fit"),
            Self::Blended => write!(f, "blended"),
        }
    }
}

/// Keyword overlap between one card and one profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeywordMatch {
    /// Card keywords contained in, or containing, a profile keyword.
    pub full: usize,
    /// Card keywords sharing a run of [`PARTIAL_MATCH_RUN`] characters with
    /// a profile keyword, without fully matching any.
    pub partial: usize,
}

impl KeywordMatch {
    /// Points contributed by this overlap.
    pub fn points(&self) -> f64 {
        self.full as f64 * FULL_MATCH_POINTS + self.partial as f64 * PARTIAL_MATCH_POINTS
    }
}

/// Scores cards against one profile under one mode.
#[derive(Debug, Clone)]
pub struct RelevanceScorer<'p> {
    profile: &'p ContextProfile,
    mode: ScoringMode,
    keywords: Vec<String>,
}

impl<'p> RelevanceScorer<'p> {
    /// Create a scorer for `profile`.
    pub fn new(profile: &'p ContextProfile, mode: ScoringMode) -> Self {
        let keywords = profile
            .keywords
            .iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self {
            profile,
            mode,
            keywords,
        }
    }

    /// The profile being scored against.
    pub fn profile(&self) -> &'p ContextProfile {
        self.profile
    }

    /// The scoring mode.
    pub fn mode(&self) -> ScoringMode {
        self.mode
    }

    /// Count full and partial keyword matches for `card`.
    ///
    /// A full match is containment either way with a profile keyword. A
    /// partial match shares a run of [`PARTIAL_MATCH_RUN`] lowercase
    /// characters with one; each card keyword counts at most once.
    pub fn keyword_match(&self, card: &Card) -> KeywordMatch {
        let mut result = KeywordMatch::default();
        for keyword in &card.keywords {
            let keyword = keyword.trim().to_lowercase();
            if keyword.is_empty() {
                continue;
            }
            if self
                .keywords
                .iter()
                .any(|p| p.contains(&keyword) || keyword.contains(p.as_str()))
            {
                result.full += 1;
            } else if self.keywords.iter().any(|p| shares_run(&keyword, p)) {
                result.partial += 1;
            }
        }
        result
    }

    /// Summed fit of the card's five attributes to the profile's preferred
    /// ranges, scaled by [`RANGE_FIT_SCALE`]. Zero when the profile has no
    /// preferred ranges.
    pub fn range_fit(&self, card: &Card) -> f64 {
        let Some(ranges) = &self.profile.preferred else {
            return 0.0;
        };
        let fits = [
            attribute_fit(f64::from(card.energy), ranges.energy),
            attribute_fit(f64::from(card.impact), ranges.impact),
            attribute_fit(f64::from(card.direction), ranges.direction),
            attribute_fit(f64::from(card.temporal), ranges.temporal),
            attribute_fit(f64::from(card.intensity.rank()), ranges.intensity),
        ];
        fits.iter().sum::<f64>() * RANGE_FIT_SCALE
    }

    /// Composite relevance of `card`. Always at least [`BASE_POINTS`].
    pub fn score(&self, card: &Card) -> f64 {
        let category = self.profile.weight(card.category) * CATEGORY_WEIGHT_SCALE;
        let keyword = || self.keyword_match(card).points() + self.profile.emphasis.bonus(card);
        let extra = match self.mode {
            ScoringMode::Keyword => keyword(),
            ScoringMode::AttributeFit => self.range_fit(card),
            ScoringMode::Blended => keyword() + self.range_fit(card),
        };
        BASE_POINTS + category + extra
    }
}

/// Fit of one value to one range: 1.0 at the midpoint, 0.5 at the edges,
/// [`OUT_OF_RANGE_FIT`] outside.
fn attribute_fit(value: f64, range: AttributeRange) -> f64 {
    if !range.contains(value) {
        return OUT_OF_RANGE_FIT;
    }
    let half = range.half_width();
    if half <= 0.0 {
        return 1.0;
    }
    1.0 - 0.5 * ((value - range.midpoint()).abs() / half)
}

/// Whether `a` and `b` share a run of at least [`PARTIAL_MATCH_RUN`] chars.
fn shares_run(a: &str, b: &str) -> bool {
    let chars: Vec<char> = a.chars().collect();
    chars
        .windows(PARTIAL_MATCH_RUN)
        .any(|w| b.contains(w.iter().collect::<String>().as_str()))
}
