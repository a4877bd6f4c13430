//! Uniformity and category-balance assessments.

use std::fmt;

use serde::{Deserialize, Serialize};

use tj_deck::{Category, PerCategory};

/// Coefficient of variation below which counts are very uniform.
pub const VERY_UNIFORM_CV: f64 = 0.3;
/// Coefficient of variation above which counts are non-uniform.
pub const NON_UNIFORM_CV: f64 = 0.6;
/// Largest deviation, in percentage points, still rated reasonable.
pub const REASONABLE_DEVIATION: f64 = 10.0;
/// Largest deviation, in percentage points, still rated somewhat reasonable.
pub const SOMEWHAT_REASONABLE_DEVIATION: f64 = 20.0;

/// Population standard deviation over mean. Zero for empty or all-zero input.
pub fn coefficient_of_variation(counts: &[usize]) -> f64 {
    if counts.is_empty() {
        return 0.0;
    }
    let n = counts.len() as f64;
    let mean = counts.iter().sum::<usize>() as f64 / n;
    if mean == 0.0 {
        return 0.0;
    }
    let variance = counts
        .iter()
        .map(|&c| (c as f64 - mean).powi(2))
        .sum::<f64>()
        / n;
    variance.sqrt() / mean
}

/// How evenly cards were drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UniformityRating {
    /// CV below 0.3.
    VeryUniform,
    /// CV from 0.3 to 0.6.
    ReasonablyUniform,
    /// CV above 0.6.
    NonUniform,
}

impl UniformityRating {
    /// Rate a coefficient of variation.
    pub fn classify(cv: f64) -> Self {
        if cv < VERY_UNIFORM_CV {
            Self::VeryUniform
        } else if cv <= NON_UNIFORM_CV {
            Self::ReasonablyUniform
        } else {
            Self::NonUniform
        }
    }
}

impl fmt::Display for UniformityRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VeryUniform => write!(f, "very uniform"),
            Self::ReasonablyUniform => write!(f, "reasonably uniform"),
            Self::NonUniform => write!(f, "non-uniform"),
        }
    }
}

/// How closely observed shares track expected shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceRating {
    /// Every category less than 10 points off.
    Reasonable,
    /// Every category less than 20 points off.
    SomewhatReasonable,
    /// Some category 20 or more points off.
    Unreasonable,
}

impl BalanceRating {
    /// Rate a maximum deviation in percentage points. Both bounds are exclusive.
    pub fn classify(max_deviation: f64) -> Self {
        if max_deviation < REASONABLE_DEVIATION {
            Self::Reasonable
        } else if max_deviation < SOMEWHAT_REASONABLE_DEVIATION {
            Self::SomewhatReasonable
        } else {
            Self::Unreasonable
        }
    }
}

impl fmt::Display for BalanceRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reasonable => write!(f, "reasonable"),
            Self::SomewhatReasonable => write!(f, "somewhat reasonable"),
            Self::Unreasonable => write!(f, "unreasonable"),
        }
    }
}

/// Observed against expected category shares, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryBalance {
    /// Cards drawn per category.
    pub counts: PerCategory<usize>,
    /// Observed share per category.
    pub observed: PerCategory<f64>,
    /// Expected share per category.
    pub expected: PerCategory<f64>,
    /// Largest absolute difference between the two.
    pub max_deviation: f64,
    /// Rating of [`Self::max_deviation`].
    pub rating: BalanceRating,
}

impl CategoryBalance {
    /// Compare `counts` with `expected` fractions (summing to 1).
    pub fn compare(counts: PerCategory<usize>, expected: PerCategory<f64>) -> Self {
        let total = counts.total();
        let observed = counts.map(|_, &n| {
            if total == 0 {
                0.0
            } else {
                n as f64 * 100.0 / total as f64
            }
        });
        let expected = expected.map(|_, &share| share * 100.0);
        let max_deviation = Category::all()
            .iter()
            .map(|&c| (observed[c] - expected[c]).abs())
            .fold(0.0, f64::max);
        Self {
            counts,
            observed,
            expected,
            max_deviation,
            rating: BalanceRating::classify(max_deviation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn cv_of_even_counts_is_zero() {
        assert_eq!(coefficient_of_variation(&[5, 5, 5, 5]), 0.0);
        assert_eq!(coefficient_of_variation(&[]), 0.0);
        assert_eq!(coefficient_of_variation(&[0, 0]), 0.0);
    }

    #[test]
    fn cv_matches_hand_computation() {
        // mean 2, population sd 1
        let cv = coefficient_of_variation(&[1, 3, 1, 3]);
        assert!((cv - 0.5).abs() < 1e-12);
    }

    #[test]
    fn uniformity_boundaries() {
        assert_eq!(UniformityRating::classify(0.29), UniformityRating::VeryUniform);
        assert_eq!(UniformityRating::classify(0.3), UniformityRating::ReasonablyUniform);
        assert_eq!(UniformityRating::classify(0.6), UniformityRating::ReasonablyUniform);
        assert_eq!(UniformityRating::classify(0.61), UniformityRating::NonUniform);
    }

    #[test]
    fn balance_boundaries() {
        assert_eq!(BalanceRating::classify(9.9), BalanceRating::Reasonable);
        assert_eq!(BalanceRating::classify(10.0), BalanceRating::SomewhatReasonable);
        assert_eq!(BalanceRating::classify(19.9), BalanceRating::SomewhatReasonable);
        assert_eq!(BalanceRating::classify(20.0), BalanceRating::Unreasonable);
    }

    #[test]
    fn deviation_of_exactly_ten_is_not_reasonable() {
        let counts = PerCategory {
            sky: 30,
            earth: 35,
            human: 15,
            variable: 20,
        };
        let balance = CategoryBalance::compare(counts, PerCategory::from_fn(|_| 0.25));
        assert!((balance.max_deviation - 10.0).abs() < 1e-9);
        assert_eq!(balance.rating, BalanceRating::SomewhatReasonable);
    }

    #[test]
    fn balance_against_even_split() {
        let counts = PerCategory {
            sky: 40,
            earth: 20,
            human: 20,
            variable: 20,
        };
        let balance = CategoryBalance::compare(counts, PerCategory::from_fn(|_| 0.25));
        assert!((balance.observed.sky - 40.0).abs() < 1e-9);
        assert!((balance.max_deviation - 15.0).abs() < 1e-9);
        assert_eq!(balance.rating, BalanceRating::SomewhatReasonable);
    }

    proptest! {
        #[test]
        fn cv_is_non_negative(counts in proptest::collection::vec(0usize..1000, 1..80)) {
            let cv = coefficient_of_variation(&counts);
            prop_assert!(cv >= 0.0);
            prop_assert!(cv.is_finite());
        }
    }
}
