//! The four card categories and a fixed map keyed by them.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// One of the four fixed partitions of the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Heavenly timing: the 24 solar terms.
    Sky,
    /// Place and environment.
    Earth,
    /// Role and relationship.
    Human,
    /// Sudden events and turns of fortune.
    Variable,
}

impl Category {
    /// All categories in canonical order.
    pub fn all() -> &'static [Self] {
        &[Self::Sky, Self::Earth, Self::Human, Self::Variable]
    }

    /// Position in canonical order.
    pub fn index(self) -> usize {
        match self {
            Self::Sky => 0,
            Self::Earth => 1,
            Self::Human => 2,
            Self::Variable => 3,
        }
    }

    /// Parse a category from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "sky" | "heaven" | "a" => Some(Self::Sky),
            "earth" | "place" | "b" => Some(Self::Earth),
            "human" | "person" | "c" => Some(Self::Human),
            "variable" | "var" | "event" | "d" => Some(Self::Variable),
            _ => None,
        }
    }

    /// What cards of this category speak about.
    pub fn role(self) -> &'static str {
        match self {
            Self::Sky => "the energy and timing around you",
            Self::Earth => "the environment you are standing in",
            Self::Human => "the role you play among others",
            Self::Variable => "the unexpected factor in play",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sky => write!(f, "Sky"),
            Self::Earth => write!(f, "Earth"),
            Self::Human => write!(f, "Human"),
            Self::Variable => write!(f, "Variable"),
        }
    }
}

/// A value for each category, addressable by [`Category`].
///
/// Deserializing requires all four keys, so a catalog that omits a
/// category's weight fails to load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PerCategory<T> {
    /// Value for [`Category::Sky`].
    pub sky: T,
    /// Value for [`Category::Earth`].
    pub earth: T,
    /// Value for [`Category::Human`].
    pub human: T,
    /// Value for [`Category::Variable`].
    pub variable: T,
}

impl<T> PerCategory<T> {
    /// Build a map by evaluating `f` for each category in canonical order.
    pub fn from_fn(mut f: impl FnMut(Category) -> T) -> Self {
        Self {
            sky: f(Category::Sky),
            earth: f(Category::Earth),
            human: f(Category::Human),
            variable: f(Category::Variable),
        }
    }

    /// Iterate `(category, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &T)> {
        Category::all().iter().map(move |&c| (c, &self[c]))
    }

    /// Transform every value.
    pub fn map<U>(&self, mut f: impl FnMut(Category, &T) -> U) -> PerCategory<U> {
        PerCategory::from_fn(|c| f(c, &self[c]))
    }
}

impl PerCategory<f64> {
    /// Sum of all four values.
    pub fn total(&self) -> f64 {
        self.sky + self.earth + self.human + self.variable
    }
}

impl PerCategory<usize> {
    /// Sum of all four counts.
    pub fn total(&self) -> usize {
        self.sky + self.earth + self.human + self.variable
    }
}

impl<T> Index<Category> for PerCategory<T> {
    type Output = T;

    fn index(&self, category: Category) -> &T {
        match category {
            Category::Sky => &self.sky,
            Category::Earth => &self.earth,
            Category::Human => &self.human,
            Category::Variable => &self.variable,
        }
    }
}

impl<T> IndexMut<Category> for PerCategory<T> {
    fn index_mut(&mut self, category: Category) -> &mut T {
        match category {
            Category::Sky => &mut self.sky,
            Category::Earth => &mut self.earth,
            Category::Human => &mut self.human,
            Category::Variable => &mut self.variable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order() {
        let indices: Vec<usize> = Category::all().iter().map(|c| c.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert_eq!(Category::all()[3], Category::Variable);
    }

    #[test]
    fn parse_aliases() {
        assert_eq!(Category::parse("Sky"), Some(Category::Sky));
        assert_eq!(Category::parse(" earth "), Some(Category::Earth));
        assert_eq!(Category::parse("var"), Some(Category::Variable));
        assert_eq!(Category::parse("D"), Some(Category::Variable));
        assert_eq!(Category::parse("moon"), None);
    }

    #[test]
    fn per_category_indexing() {
        let mut counts: PerCategory<usize> = PerCategory::default();
        counts[Category::Human] += 2;
        counts[Category::Sky] += 1;
        assert_eq!(counts.human, 2);
        assert_eq!(counts.total(), 3);
        let pairs: Vec<_> = counts.iter().map(|(c, n)| (c, *n)).collect();
        assert_eq!(pairs[0], (Category::Sky, 1));
        assert_eq!(pairs[2], (Category::Human, 2));
    }

    #[test]
    fn weights_require_every_category() {
        let missing = r#"{"sky": 0.3, "earth": 0.3, "human": 0.4}"#;
        assert!(serde_json::from_str::<PerCategory<f64>>(missing).is_err());
        let full = r#"{"sky": 0.3, "earth": 0.3, "human": 0.3, "variable": 0.1}"#;
        let weights: PerCategory<f64> = serde_json::from_str(full).unwrap();
        assert!((weights.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn serde_lowercase() {
        let json = serde_json::to_string(&Category::Variable).unwrap();
        assert_eq!(json, "\"variable\"");
    }
}
