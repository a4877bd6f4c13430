//! Category-balanced, relevance-weighted draws for a context profile.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use tj_deck::{Card, Category, ContextProfile, Deck, PerCategory, RandomSource};

use crate::error::{DrawError, DrawResult};
use crate::relevance::{RelevanceScorer, ScoringMode};

/// Default size of the ranked candidate slice.
pub const DEFAULT_CANDIDATE_POOL: usize = 50;
/// Multiplier on the category weight when ranking candidates.
pub const RANK_WEIGHT_SCALE: f64 = 50.0;

/// Tuning knobs for a situational draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SituationalOptions {
    /// How relevance is scored.
    pub mode: ScoringMode,
    /// Size of the ranked candidate slice sampled first.
    pub candidate_pool: usize,
}

impl Default for SituationalOptions {
    fn default() -> Self {
        Self {
            mode: ScoringMode::default(),
            candidate_pool: DEFAULT_CANDIDATE_POOL,
        }
    }
}

impl SituationalOptions {
    /// Set the scoring mode.
    pub fn with_mode(mut self, mode: ScoringMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the candidate slice size.
    pub fn with_candidate_pool(mut self, size: usize) -> Self {
        self.candidate_pool = size;
        self
    }
}

#[derive(Debug, Clone, Copy)]
struct Scored<'d> {
    card: &'d Card,
    relevance: f64,
}

/// Per-category card counts for a draw of `count` cards.
///
/// Each target is `count × weight` rounded, using the profile's normalized
/// weights. A shortfall goes entirely to the category with the largest raw
/// target. An excess is taken back one card at a time from successive
/// categories in descending raw order, so it can be spread over several
/// categories, and no target drops below zero. Ties resolve in canonical
/// category order. The targets always sum to `count`.
pub fn category_targets(profile: &ContextProfile, count: usize) -> PerCategory<usize> {
    let weights = profile.normalized_weights();
    let raw = weights.map(|_, w| count as f64 * w);
    let mut targets = raw.map(|_, r| r.round() as usize);

    let mut by_raw: Vec<Category> = Category::all().to_vec();
    by_raw.sort_by(|a, b| raw[*b].total_cmp(&raw[*a]));

    let assigned = targets.total();
    if assigned < count {
        targets[by_raw[0]] += count - assigned;
    } else {
        let mut excess = assigned - count;
        while excess > 0 {
            for &category in &by_raw {
                if excess == 0 {
                    break;
                }
                if targets[category] > 0 {
                    targets[category] -= 1;
                    excess -= 1;
                }
            }
        }
    }
    targets
}

/// Draw `count` distinct cards steered by `profile`.
///
/// Every card is scored, the deck is ranked by relevance plus a category
/// weight term, and the top slice becomes the candidate pool. Each category
/// is then filled to its [`category_targets`] share by relevance-weighted
/// sampling without replacement. A category whose candidates run out is
/// topped up from its remaining deck cards, and any final shortfall from
/// the rest of the deck, so the result always has `count` cards. The cards
/// are returned in descending relevance.
pub fn draw_situational<'d>(
    deck: &'d Deck,
    profile: &ContextProfile,
    count: usize,
    options: SituationalOptions,
    rng: &mut dyn RandomSource,
) -> DrawResult<Vec<&'d Card>> {
    if count == 0 {
        return Err(DrawError::Validation(
            "a situational draw needs at least one card".into(),
        ));
    }
    if deck.len() < count {
        return Err(DrawError::InsufficientDeck {
            requested: count,
            available: deck.len(),
        });
    }

    let scorer = RelevanceScorer::new(profile, options.mode);
    let mut ranked: Vec<(Scored<'d>, f64)> = deck
        .cards()
        .iter()
        .map(|card| {
            let relevance = scorer.score(card);
            let rank = relevance + profile.weight(card.category) * RANK_WEIGHT_SCALE;
            (Scored { card, relevance }, rank)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    let pool_size = options.candidate_pool.clamp(count, deck.len());
    let mut candidates: PerCategory<Vec<Scored<'d>>> = PerCategory::default();
    let mut rest: PerCategory<Vec<Scored<'d>>> = PerCategory::default();
    for (i, (scored, _)) in ranked.into_iter().enumerate() {
        let bucket = if i < pool_size { &mut candidates } else { &mut rest };
        bucket[scored.card.category].push(scored);
    }

    let targets = category_targets(profile, count);
    debug!(profile = %profile.id, count, pool_size, ?targets, "situational targets");

    let mut selected: Vec<Scored<'d>> = Vec::with_capacity(count);
    for &category in Category::all() {
        let want = targets[category];
        let before = selected.len();
        sample_into(&mut candidates[category], want, &mut selected, rng);
        let missing = want - (selected.len() - before);
        if missing > 0 {
            debug!(%category, missing, "candidate pool exhausted, backfilling from deck");
            sample_into(&mut rest[category], missing, &mut selected, rng);
        }
    }

    if selected.len() < count {
        let mut leftover: Vec<Scored<'d>> = Vec::new();
        for &category in Category::all() {
            leftover.append(&mut candidates[category]);
            leftover.append(&mut rest[category]);
        }
        let missing = count - selected.len();
        debug!(missing, "category exhausted, backfilling from the whole deck");
        sample_into(&mut leftover, missing, &mut selected, rng);
    }

    selected.sort_by(|a, b| b.relevance.total_cmp(&a.relevance));
    let ids: HashSet<&str> = selected.iter().map(|s| s.card.id.as_str()).collect();
    if selected.len() != count || ids.len() != count {
        return Err(DrawError::InsufficientDeck {
            requested: count,
            available: ids.len(),
        });
    }
    debug!(
        profile = %profile.id,
        cards = ?selected.iter().map(|s| s.card.id.as_str()).collect::<Vec<_>>(),
        "situational draw"
    );
    Ok(selected.into_iter().map(|s| s.card).collect())
}

/// Move up to `want` cards from `pool` into `out`, sampling by relevance
/// without replacement.
fn sample_into<'d>(
    pool: &mut Vec<Scored<'d>>,
    want: usize,
    out: &mut Vec<Scored<'d>>,
    rng: &mut dyn RandomSource,
) {
    for _ in 0..want {
        if pool.is_empty() {
            return;
        }
        let idx = weighted_index(pool, rng);
        out.push(pool.remove(idx));
    }
}

fn weighted_index(pool: &[Scored<'_>], rng: &mut dyn RandomSource) -> usize {
    let total: f64 = pool.iter().map(|s| s.relevance.max(0.0)).sum();
    if total <= 0.0 {
        return rng.pick_index(pool.len());
    }
    let target = rng.next_unit() * total;
    let mut acc = 0.0;
    for (i, scored) in pool.iter().enumerate() {
        acc += scored.relevance.max(0.0);
        if target < acc {
            return i;
        }
    }
    pool.len() - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tj_deck::{Emphasis, ProfileCatalog, ScriptedSource};

    fn fixtures() -> (Deck, ProfileCatalog) {
        (Deck::builtin().unwrap(), ProfileCatalog::builtin().unwrap())
    }

    fn weighted(weights: PerCategory<f64>) -> ContextProfile {
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
    fn reconciliation_gives_remainder_to_largest() {
        let (_, catalog) = fixtures();
        let work = catalog.get("work").unwrap();
        let targets = category_targets(work, 3);
        assert_eq!(targets.total(), 3);
        assert_eq!(
            targets,
            PerCategory {
                sky: 1,
                earth: 1,
                human: 1,
                variable: 0
            }
        );

        let single = category_targets(work, 1);
        assert_eq!(single.sky, 1);
        assert_eq!(single.total(), 1);
    }

    #[test]
    fn reconciliation_trims_excess_in_raw_order() {
        let even = weighted(PerCategory::from_fn(|_| 0.25));
        let targets = category_targets(&even, 3);
        assert_eq!(targets.total(), 3);
        assert_eq!(targets.sky, 0);

        let skewed = weighted(PerCategory {
            sky: 0.0,
            earth: 0.0,
            human: 0.0,
            variable: 1.0,
        });
        assert_eq!(category_targets(&skewed, 5).variable, 5);
    }

    #[test]
    fn excess_is_spread_over_several_categories() {
        let even = weighted(PerCategory::from_fn(|_| 0.25));
        assert_eq!(
            category_targets(&even, 2),
            PerCategory {
                sky: 0,
                earth: 0,
                human: 1,
                variable: 1
            }
        );
        assert_eq!(
            category_targets(&even, 6),
            PerCategory {
                sky: 1,
                earth: 1,
                human: 2,
                variable: 2
            }
        );
    }

    #[test]
    fn targets_sum_for_every_builtin_profile() {
        let (_, catalog) = fixtures();
        for p in catalog.profiles() {
            for count in 1..=20 {
                assert_eq!(category_targets(p, count).total(), count, "{} x{count}", p.id);
            }
        }
    }

    #[test]
    fn zero_count_is_validation_error() {
        let (deck, catalog) = fixtures();
        let mut rng = StdRng::seed_from_u64(1);
        let err = draw_situational(
            &deck,
            catalog.get("love").unwrap(),
            0,
            SituationalOptions::default(),
            &mut rng,
        )
        .unwrap_err();
        assert!(matches!(err, DrawError::Validation(_)));
    }

    #[test]
    fn oversized_count_is_insufficient_deck() {
        let (deck, catalog) = fixtures();
        let mut rng = StdRng::seed_from_u64(1);
        let err = draw_situational(
            &deck,
            catalog.get("love").unwrap(),
            73,
            SituationalOptions::default(),
            &mut rng,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DrawError::InsufficientDeck {
                requested: 73,
                available: 72
            }
        ));
    }

    #[test]
    fn whole_deck_draw_uses_every_card() {
        let (deck, catalog) = fixtures();
        let mut rng = StdRng::seed_from_u64(3);
        let cards = draw_situational(
            &deck,
            catalog.get("social").unwrap(),
            72,
            SituationalOptions::default(),
            &mut rng,
        )
        .unwrap();
        let ids: HashSet<_> = cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), 72);
    }

    #[test]
    fn tiny_candidate_pool_still_fills_count() {
        let (deck, catalog) = fixtures();
        let mut rng = StdRng::seed_from_u64(9);
        let options = SituationalOptions::default().with_candidate_pool(1);
        let cards =
            draw_situational(&deck, catalog.get("health").unwrap(), 6, options, &mut rng).unwrap();
        assert_eq!(cards.len(), 6);
    }

    #[test]
    fn output_is_sorted_by_relevance() {
        let (deck, catalog) = fixtures();
        let work = catalog.get("work").unwrap();
        let scorer = RelevanceScorer::new(work, ScoringMode::Keyword);
        let mut rng = StdRng::seed_from_u64(11);
        let cards =
            draw_situational(&deck, work, 8, SituationalOptions::default(), &mut rng).unwrap();
        let scores: Vec<f64> = cards.iter().map(|c| scorer.score(c)).collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn scripted_source_is_deterministic() {
        let (deck, catalog) = fixtures();
        let decision = catalog.get("decision").unwrap();
        let draw = || {
            let mut src = ScriptedSource::new(vec![0.1, 0.7, 0.4]);
            draw_situational(&deck, decision, 3, SituationalOptions::default(), &mut src)
                .unwrap()
                .iter()
                .map(|c| c.id.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(draw(), draw());
    }

    #[test]
    fn composition_tracks_weights_over_many_draws() {
        let (deck, catalog) = fixtures();
        let social = catalog.get("social").unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let mut counts: PerCategory<usize> = PerCategory::default();
        for _ in 0..200 {
            for card in
                draw_situational(&deck, social, 3, SituationalOptions::default(), &mut rng).unwrap()
            {
                counts[card.category] += 1;
            }
        }
        assert!(counts.human >= counts.sky);
        assert_eq!(counts.total(), 600);
    }

    proptest! {
        #[test]
        fn exact_count_without_duplicates(
            profile_idx in 0usize..8,
            count in 1usize..=10,
            seed in any::<u64>(),
            mode_idx in 0usize..3,
        ) {
            let (deck, catalog) = fixtures();
            let profile = &catalog.profiles()[profile_idx];
            let options = SituationalOptions::default().with_mode(ScoringMode::all()[mode_idx]);
            let mut rng = StdRng::seed_from_u64(seed);
            let cards = draw_situational(&deck, profile, count, options, &mut rng).unwrap();
            prop_assert_eq!(cards.len(), count);
            let ids: HashSet<_> = cards.iter().map(|c| c.id.as_str()).collect();
            prop_assert_eq!(ids.len(), count);
        }
    }
}
