//! Fortune scoring for a one-per-category hand.
//!
//! [`calculate_fortune`] turns a [`tj_deck::FortuneHand`] into a
//! [`FortuneCalculation`]: a weighted base score, rule-based interaction
//! adjustments, a five-level classification, a trend, a horizon, four
//! qualitative dimensions, the special combinations the hand completes and
//! its most frequent keyword themes. The calculation is a pure function of
//! the hand.

pub mod calculation;
pub mod engine;
pub mod levels;
pub mod rules;

pub use calculation::{Adjustment, AdjustmentKind, Dimensions, FortuneCalculation};
pub use engine::{
    BASE_CATEGORY_WEIGHTS, calculate_fortune, calculate_from_cards, card_contribution, key_themes,
};
pub use levels::{EnergyFlow, Environment, FortuneLevel, Horizon, Relationship, Trend, VariableImpact};
pub use rules::{COMBINATION_RULES, ComboRule, ComboTag, HandPattern, detect_combinations};
