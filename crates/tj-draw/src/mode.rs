//! The three draw modes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a set of cards was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawMode {
    /// One uniformly drawn card.
    Single,
    /// One card per category.
    Fortune,
    /// A profile-guided draw.
    Situation,
}

impl DrawMode {
    /// All modes.
    pub fn all() -> &'static [Self] {
        &[Self::Single, Self::Fortune, Self::Situation]
    }

    /// Parse a mode from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "single" | "one" => Some(Self::Single),
            "fortune" | "four" => Some(Self::Fortune),
            "situation" | "situational" => Some(Self::Situation),
            _ => None,
        }
    }

    /// Cards a draw of this mode yields, when fixed.
    pub fn fixed_size(self) -> Option<usize> {
        match self {
            Self::Single => Some(1),
            Self::Fortune => Some(4),
            Self::Situation => None,
        }
    }
}

impl fmt::Display for DrawMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Fortune => write!(f, "fortune"),
            Self::Situation => write!(f, "situation"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display_agree() {
        for &mode in DrawMode::all() {
            assert_eq!(DrawMode::parse(&mode.to_string()), Some(mode));
        }
        assert_eq!(DrawMode::parse("Situational"), Some(DrawMode::Situation));
        assert_eq!(DrawMode::parse("tarot"), None);
    }

    #[test]
    fn sizes() {
        assert_eq!(DrawMode::Single.fixed_size(), Some(1));
        assert_eq!(DrawMode::Fortune.fixed_size(), Some(4));
        assert_eq!(DrawMode::Situation.fixed_size(), None);
    }
}
