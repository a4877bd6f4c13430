//! Card records and their attribute enums.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// How strongly a card acts on a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    /// Background influence.
    Low,
    /// Noticeable influence.
    Medium,
    /// Strong influence.
    High,
    /// Dominates the reading.
    Extreme,
}

impl Intensity {
    /// Ordinal rank from 1 (low) to 4 (extreme).
    pub fn rank(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Extreme => 4,
        }
    }

    /// Parse an intensity from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" | "mid" => Some(Self::Medium),
            "high" => Some(Self::High),
            "extreme" => Some(Self::Extreme),
            _ => None,
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
            Self::Extreme => write!(f, "extreme"),
        }
    }
}

/// An immutable card definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Unique id, e.g. `sky10`.
    pub id: String,
    /// Display name, unique within the built-in deck.
    pub name: String,
    /// The category this card belongs to.
    pub category: Category,
    /// Raw energy, 1-10.
    pub energy: u8,
    /// Reach of the card's effect, 1-10.
    pub impact: u8,
    /// -1 (adverse), 0 (neutral) or +1 (favourable).
    pub direction: i8,
    /// 1 (short), 2 (medium) or 3 (long) horizon.
    pub temporal: u8,
    /// Strength class.
    pub intensity: Intensity,
    /// Ordered thematic tags.
    pub keywords: Vec<String>,
    /// The heavenly message of the card.
    pub omen: String,
    /// The question the card asks of the reader.
    pub reflection: String,
}

impl Card {
    /// Whether the card pushes toward a favourable outcome.
    pub fn is_positive(&self) -> bool {
        self.direction > 0
    }

    /// Whether the card pushes toward an adverse outcome.
    pub fn is_negative(&self) -> bool {
        self.direction < 0
    }

    /// Whether the card has extreme intensity.
    pub fn is_extreme(&self) -> bool {
        self.intensity == Intensity::Extreme
    }

    /// Human-readable horizon label.
    pub fn horizon_label(&self) -> &'static str {
        match self.temporal {
            0 | 1 => "short term",
            2 => "medium term",
            _ => "long term",
        }
    }

    /// Check the numeric attribute ranges of this record.
    pub(crate) fn check(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("card with empty id".into());
        }
        if self.name.trim().is_empty() {
            return Err(format!("card '{}' has an empty name", self.id));
        }
        if !(1..=10).contains(&self.energy) {
            return Err(format!("card '{}' energy {} outside 1-10", self.id, self.energy));
        }
        if !(1..=10).contains(&self.impact) {
            return Err(format!("card '{}' impact {} outside 1-10", self.id, self.impact));
        }
        if !(-1..=1).contains(&self.direction) {
            return Err(format!(
                "card '{}' direction {} not in -1/0/1",
                self.id, self.direction
            ));
        }
        if !(1..=3).contains(&self.temporal) {
            return Err(format!(
                "card '{}' temporal {} not in 1/2/3",
                self.id, self.temporal
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.category)
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::card;
    use super::*;

    #[test]
    fn intensity_rank_and_parse() {
        assert_eq!(Intensity::Low.rank(), 1);
        assert_eq!(Intensity::Extreme.rank(), 4);
        assert_eq!(Intensity::parse("EXTREME"), Some(Intensity::Extreme));
        assert_eq!(Intensity::parse("huge"), None);
        assert!(Intensity::High < Intensity::Extreme);
    }

    #[test]
    fn check_accepts_valid_card() {
        assert!(card("x1", "Test", Category::Sky).check().is_ok());
    }

    #[test]
    fn check_rejects_out_of_range() {
        let mut c = card("x1", "Test", Category::Sky);
        c.energy = 11;
        assert!(c.check().unwrap_err().contains("energy"));

        let mut c = card("x1", "Test", Category::Sky);
        c.direction = 2;
        assert!(c.check().unwrap_err().contains("direction"));

        let mut c = card("x1", "Test", Category::Sky);
        c.temporal = 0;
        assert!(c.check().unwrap_err().contains("temporal"));

        let c = card("x1", "  ", Category::Sky);
        assert!(c.check().unwrap_err().contains("empty name"));
    }

    #[test]
    fn direction_helpers() {
        let mut c = card("x1", "Test", Category::Earth);
        assert!(!c.is_positive() && !c.is_negative());
        c.direction = 1;
        assert!(c.is_positive());
        c.direction = -1;
        assert!(c.is_negative());
    }

    #[test]
    fn serde_roundtrip_uses_lowercase_enums() {
        let c = card("x1", "Test", Category::Variable);
        let json = serde_json::to_string(&c).unwrap();
        assert!(json.contains("\"category\":\"variable\""));
        assert!(json.contains("\"intensity\":\"medium\""));
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
