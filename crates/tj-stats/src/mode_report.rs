//! Repeated draws of one mode, tallied per card and per category.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use tj_deck::{Card, ContextProfile, Deck, PerCategory, RandomSource};
use tj_draw::{DrawMode, SituationalOptions, draw_fortune_set, draw_single, draw_situational};

use crate::error::{StatsError, StatsResult};
use crate::uniformity::{CategoryBalance, UniformityRating, coefficient_of_variation};

/// Iterations a mode report runs by default.
pub const DEFAULT_ITERATIONS: usize = 1000;
/// Cards listed in [`ModeReport::top_cards`].
pub const TOP_CARDS: usize = 10;

/// What a mode report draws.
#[derive(Debug, Clone, Copy)]
pub enum ReportTarget<'p> {
    /// Unfiltered single-card draws.
    Single,
    /// One-per-category fortune hands.
    Fortune,
    /// Situational draws of `count` cards for `profile`.
    Situation {
        /// Profile steering the draw.
        profile: &'p ContextProfile,
        /// Cards per draw.
        count: usize,
        /// Scoring and candidate pool settings.
        options: SituationalOptions,
    },
}

impl ReportTarget<'_> {
    /// The draw mode this target exercises.
    pub fn mode(&self) -> DrawMode {
        match self {
            Self::Single => DrawMode::Single,
            Self::Fortune => DrawMode::Fortune,
            Self::Situation { .. } => DrawMode::Situation,
        }
    }

    fn expected_shares(&self) -> PerCategory<f64> {
        match self {
            Self::Single | Self::Fortune => PerCategory::from_fn(|_| 0.25),
            Self::Situation { profile, .. } => profile.normalized_weights(),
        }
    }
}

/// How often one card was drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardCount {
    /// Card id.
    pub id: String,
    /// Card name.
    pub name: String,
    /// Times drawn.
    pub count: usize,
}

/// Result of running one mode many times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeReport {
    /// Mode exercised.
    pub mode: DrawMode,
    /// Profile id for situational reports.
    pub profile_id: Option<String>,
    /// Draws performed.
    pub iterations: usize,
    /// Cards drawn across all iterations.
    pub cards_drawn: usize,
    /// Count for every card in the deck, in deck order, including zeros.
    pub card_counts: Vec<CardCount>,
    /// Coefficient of variation of [`Self::card_counts`].
    pub coefficient_of_variation: f64,
    /// Rating of the coefficient.
    pub uniformity: UniformityRating,
    /// Category shares against the mode's expectation.
    pub balance: CategoryBalance,
    /// Distinct cards seen.
    pub unique_cards: usize,
    /// Distinct cards seen over deck size.
    pub unique_rate: f64,
    /// Most drawn cards, count descending then id ascending.
    pub top_cards: Vec<CardCount>,
}

/// Run `iterations` draws of `target` and tally the results.
pub fn run_mode_report(
    deck: &Deck,
    target: ReportTarget<'_>,
    iterations: usize,
    rng: &mut dyn RandomSource,
) -> StatsResult<ModeReport> {
    if iterations == 0 {
        return Err(StatsError::NoIterations);
    }
    info!(mode = %target.mode(), iterations, "running mode report");

    let mut tally: HashMap<String, usize> = HashMap::new();
    let mut per_category = PerCategory::<usize>::default();
    let mut record = |card: &Card| {
        *tally.entry(card.id.clone()).or_default() += 1;
        per_category[card.category] += 1;
    };

    for _ in 0..iterations {
        match target {
            ReportTarget::Single => record(draw_single(deck, None, rng)?),
            ReportTarget::Fortune => {
                for card in draw_fortune_set(deck, rng)?.cards() {
                    record(card);
                }
            }
            ReportTarget::Situation {
                profile,
                count,
                options,
            } => {
                for card in draw_situational(deck, profile, count, options, rng)? {
                    record(card);
                }
            }
        }
    }

    let card_counts: Vec<CardCount> = deck
        .cards()
        .iter()
        .map(|c| CardCount {
            id: c.id.clone(),
            name: c.name.clone(),
            count: tally.get(&c.id).copied().unwrap_or(0),
        })
        .collect();
    let counts: Vec<usize> = card_counts.iter().map(|c| c.count).collect();
    let cv = coefficient_of_variation(&counts);
    let unique_cards = counts.iter().filter(|&&n| n > 0).count();

    let mut top_cards = card_counts.clone();
    top_cards.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.id.cmp(&b.id)));
    top_cards.truncate(TOP_CARDS);

    let report = ModeReport {
        mode: target.mode(),
        profile_id: match target {
            ReportTarget::Situation { profile, .. } => Some(profile.id.clone()),
            _ => None,
        },
        iterations,
        cards_drawn: per_category.total(),
        coefficient_of_variation: cv,
        uniformity: UniformityRating::classify(cv),
        balance: CategoryBalance::compare(per_category, target.expected_shares()),
        unique_cards,
        unique_rate: unique_cards as f64 / deck.len().max(1) as f64,
        top_cards,
        card_counts,
    };
    debug!(
        cv = report.coefficient_of_variation,
        unique = report.unique_cards,
        max_deviation = report.balance.max_deviation,
        "mode report done"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uniformity::BalanceRating;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tj_deck::{Category, ProfileCatalog};

    #[test]
    fn zero_iterations_is_an_error() {
        let deck = Deck::builtin().unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            run_mode_report(&deck, ReportTarget::Single, 0, &mut rng),
            Err(StatsError::NoIterations)
        ));
    }

    #[test]
    fn fortune_report_draws_four_per_iteration() {
        let deck = Deck::builtin().unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let report = run_mode_report(&deck, ReportTarget::Fortune, 500, &mut rng).unwrap();
        assert_eq!(report.cards_drawn, 2000);
        assert_eq!(report.balance.counts[Category::Sky], 500);
        assert_eq!(report.balance.rating, BalanceRating::Reasonable);
        assert_eq!(report.card_counts.len(), 72);
        assert_eq!(report.top_cards.len(), TOP_CARDS);
        assert!(report.top_cards[0].count >= report.top_cards[9].count);
    }

    #[test]
    fn single_report_is_uniform() {
        let deck = Deck::builtin().unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        let report = run_mode_report(&deck, ReportTarget::Single, 7200, &mut rng).unwrap();
        assert_eq!(report.cards_drawn, 7200);
        assert_eq!(report.uniformity, UniformityRating::VeryUniform);
        assert_eq!(report.unique_cards, 72);
        assert!((report.unique_rate - 1.0).abs() < 1e-12);
    }

    #[test]
    fn situation_report_tracks_profile() {
        let deck = Deck::builtin().unwrap();
        let profiles = ProfileCatalog::builtin().unwrap();
        let work = profiles.get("work").unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let target = ReportTarget::Situation {
            profile: work,
            count: 3,
            options: SituationalOptions::default(),
        };
        let report = run_mode_report(&deck, target, 200, &mut rng).unwrap();
        assert_eq!(report.mode, DrawMode::Situation);
        assert_eq!(report.profile_id.as_deref(), Some("work"));
        assert_eq!(report.cards_drawn, 600);
        assert!((report.balance.expected.sky - 35.0).abs() < 1e-9);
    }
}
