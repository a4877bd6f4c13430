//! Context profiles ("situations") that steer situational draws.

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::category::{Category, PerCategory};

/// Per-profile attribute emphasis added to a card's relevance.
///
/// Every field defaults to zero, so a profile without emphasis scores on
/// keywords and category weight alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Emphasis {
    /// Multiplier applied to the card's energy.
    pub energy: f64,
    /// Multiplier applied to the card's impact.
    pub impact: f64,
    /// Flat bonus for cards with positive direction.
    pub positive_direction: f64,
    /// Flat bonus for short-horizon cards (temporal = 1).
    pub short_term: f64,
    /// Flat bonus for medium- and long-horizon cards (temporal >= 2).
    pub long_term: f64,
    /// Flat bonus for extreme-intensity cards.
    pub extreme: f64,
}

impl Emphasis {
    /// Bonus this emphasis grants to `card`.
    pub fn bonus(&self, card: &Card) -> f64 {
        let mut score = self.energy * f64::from(card.energy) + self.impact * f64::from(card.impact);
        if card.is_positive() {
            score += self.positive_direction;
        }
        if card.temporal == 1 {
            score += self.short_term;
        }
        if card.temporal >= 2 {
            score += self.long_term;
        }
        if card.is_extreme() {
            score += self.extreme;
        }
        score
    }
}

/// An inclusive numeric range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttributeRange {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl AttributeRange {
    /// Create a range.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies inside the range.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Midpoint of the range.
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Half the width of the range.
    pub fn half_width(&self) -> f64 {
        (self.max - self.min) / 2.0
    }
}

/// Preferred attribute ranges for the attribute-fit scoring mode.
///
/// The intensity range is expressed in [`crate::Intensity::rank`] units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreferredRanges {
    /// Preferred energy.
    pub energy: AttributeRange,
    /// Preferred impact.
    pub impact: AttributeRange,
    /// Preferred direction.
    pub direction: AttributeRange,
    /// Preferred temporal horizon.
    pub temporal: AttributeRange,
    /// Preferred intensity rank.
    pub intensity: AttributeRange,
}

/// A named bias configuration used to steer situational draws.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextProfile {
    /// Stable id, e.g. `work`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short description of the life domain.
    pub description: String,
    /// Target share of each category in a situational draw.
    pub category_weights: PerCategory<f64>,
    /// Keywords matched against card keywords.
    pub keywords: Vec<String>,
    /// Attribute emphasis for keyword scoring.
    #[serde(default)]
    pub emphasis: Emphasis,
    /// Preferred attribute ranges for attribute-fit scoring.
    #[serde(default)]
    pub preferred: Option<PreferredRanges>,
}

impl ContextProfile {
    /// Weight of `category` in this profile.
    pub fn weight(&self, category: Category) -> f64 {
        self.category_weights[category]
    }

    /// Category weights scaled to sum to 1. Falls back to an even split
    /// when every weight is zero.
    pub fn normalized_weights(&self) -> PerCategory<f64> {
        let total = self.category_weights.total();
        if total <= 0.0 {
            return PerCategory::from_fn(|_| 0.25);
        }
        self.category_weights.map(|_, w| w / total)
    }

    pub(crate) fn check(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("profile with empty id".into());
        }
        for (category, weight) in self.category_weights.iter() {
            if !weight.is_finite() || *weight < 0.0 {
                return Err(format!(
                    "profile '{}' has invalid {category} weight {weight}",
                    self.id
                ));
            }
        }
        if let Some(ranges) = &self.preferred {
            let all = [
                ("energy", ranges.energy),
                ("impact", ranges.impact),
                ("direction", ranges.direction),
                ("temporal", ranges.temporal),
                ("intensity", ranges.intensity),
            ];
            for (label, range) in all {
                if range.min > range.max {
                    return Err(format!(
                        "profile '{}' has an inverted {label} range",
                        self.id
                    ));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Intensity;
    use crate::card::fixtures::card;

    fn profile(weights: PerCategory<f64>) -> ContextProfile {
        ContextProfile {
            id: "test".into(),
            name: "Test".into(),
            description: String::new(),
            category_weights: weights,
            keywords: vec![],
            emphasis: Emphasis::default(),
            preferred: None,
        }
    }

    #[test]
    fn emphasis_bonus() {
        let emphasis = Emphasis {
            impact: 3.0,
            short_term: 3.0,
            extreme: 4.0,
            ..Emphasis::default()
        };
        let mut c = card("x", "X", Category::Sky);
        c.impact = 7;
        c.temporal = 1;
        c.intensity = Intensity::Extreme;
        assert!((emphasis.bonus(&c) - 28.0).abs() < 1e-9);

        c.temporal = 3;
        c.intensity = Intensity::Low;
        assert!((emphasis.bonus(&c) - 21.0).abs() < 1e-9);
    }

    #[test]
    fn default_emphasis_is_silent() {
        let c = card("x", "X", Category::Sky);
        assert_eq!(Emphasis::default().bonus(&c), 0.0);
    }

    #[test]
    fn range_helpers() {
        let r = AttributeRange::new(4.0, 8.0);
        assert!(r.contains(4.0) && r.contains(8.0) && !r.contains(8.5));
        assert_eq!(r.midpoint(), 6.0);
        assert_eq!(r.half_width(), 2.0);
    }

    #[test]
    fn normalized_weights_sum_to_one() {
        let p = profile(PerCategory {
            sky: 1.0,
            earth: 1.0,
            human: 2.0,
            variable: 0.0,
        });
        let n = p.normalized_weights();
        assert!((n.total() - 1.0).abs() < 1e-9);
        assert!((n.human - 0.5).abs() < 1e-9);

        let zero = profile(PerCategory::default());
        assert_eq!(zero.normalized_weights().sky, 0.25);
    }

    #[test]
    fn check_rejects_negative_weight() {
        let p = profile(PerCategory {
            sky: 0.5,
            earth: -0.1,
            human: 0.3,
            variable: 0.3,
        });
        assert!(p.check().unwrap_err().contains("Earth"));
    }
}
