//! The distribution of fortune levels over all hands or a sample of them.

use serde::{Deserialize, Serialize};
use tracing::info;

use tj_deck::{Category, Deck, FortuneHand, RandomSource};
use tj_draw::draw_fortune_set;
use tj_fortune::{FortuneCalculation, FortuneLevel, Horizon, Trend, calculate_fortune};

use crate::error::{StatsError, StatsResult};
use crate::summary::ScoreSummary;

/// Share each level would have under an even split, in percent.
pub const EVEN_LEVEL_SHARE: f64 = 20.0;

/// How a distribution was gathered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Coverage {
    /// Every possible hand, once.
    Exhaustive,
    /// Randomly drawn hands.
    Sampled,
}

/// Tally for one fortune level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelStats {
    /// The level.
    pub level: FortuneLevel,
    /// Hands at this level.
    pub count: usize,
    /// Share of all hands, in percent.
    pub percentage: f64,
    /// Lowest and highest total score seen at this level.
    pub score_range: Option<(f64, f64)>,
}

/// Level, score, trend and horizon distribution of fortune hands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FortuneDistribution {
    /// How the hands were gathered.
    pub coverage: Coverage,
    /// Hands scored.
    pub total: usize,
    /// One entry per level, worst first.
    pub levels: Vec<LevelStats>,
    /// Summary of total scores.
    pub scores: ScoreSummary,
    /// Hands per trend.
    pub trends: Vec<(Trend, usize)>,
    /// Hands per horizon.
    pub horizons: Vec<(Horizon, usize)>,
    /// Mean absolute deviation of level shares from an even split.
    pub average_deviation: f64,
    /// Largest absolute deviation of a level share from an even split.
    pub max_deviation: f64,
}

impl FortuneDistribution {
    /// Stats for `level`.
    pub fn level(&self, level: FortuneLevel) -> Option<&LevelStats> {
        self.levels.iter().find(|l| l.level == level)
    }
}

#[derive(Default)]
struct Accumulator {
    scores: Vec<f64>,
    levels: Vec<FortuneLevel>,
    trends: Vec<Trend>,
    horizons: Vec<Horizon>,
}

impl Accumulator {
    fn add(&mut self, calc: &FortuneCalculation) {
        self.scores.push(calc.total_score);
        self.levels.push(calc.level);
        self.trends.push(calc.trend);
        self.horizons.push(calc.horizon);
    }

    fn finish(self, coverage: Coverage) -> StatsResult<FortuneDistribution> {
        let scores = ScoreSummary::from_scores(&self.scores).ok_or(StatsError::NoIterations)?;
        let total = self.scores.len();

        let levels: Vec<LevelStats> = FortuneLevel::all()
            .iter()
            .map(|&level| {
                let at_level: Vec<f64> = self
                    .levels
                    .iter()
                    .zip(&self.scores)
                    .filter(|(l, _)| **l == level)
                    .map(|(_, &s)| s)
                    .collect();
                let score_range = ScoreSummary::from_scores(&at_level).map(|s| (s.min, s.max));
                LevelStats {
                    level,
                    count: at_level.len(),
                    percentage: at_level.len() as f64 * 100.0 / total as f64,
                    score_range,
                }
            })
            .collect();

        let deviations: Vec<f64> = levels
            .iter()
            .map(|l| (l.percentage - EVEN_LEVEL_SHARE).abs())
            .collect();
        let average_deviation = deviations.iter().sum::<f64>() / deviations.len() as f64;
        let max_deviation = deviations.iter().copied().fold(0.0, f64::max);

        let trends = Trend::all()
            .iter()
            .map(|&t| (t, self.trends.iter().filter(|&&x| x == t).count()))
            .collect();
        let horizons = Horizon::all()
            .iter()
            .map(|&h| (h, self.horizons.iter().filter(|&&x| x == h).count()))
            .collect();

        Ok(FortuneDistribution {
            coverage,
            total,
            levels,
            scores,
            trends,
            horizons,
            average_deviation,
            max_deviation,
        })
    }
}

/// Score every Sky × Earth × Human × Variable hand in the deck once.
pub fn exhaustive_distribution(deck: &Deck) -> StatsResult<FortuneDistribution> {
    let sky = deck.in_category(Category::Sky);
    let earth = deck.in_category(Category::Earth);
    let human = deck.in_category(Category::Human);
    let variable = deck.in_category(Category::Variable);
    info!(
        hands = sky.len() * earth.len() * human.len() * variable.len(),
        "enumerating every fortune hand"
    );

    let mut acc = Accumulator::default();
    for &s in &sky {
        for &e in &earth {
            for &h in &human {
                for &v in &variable {
                    acc.add(&calculate_fortune(&FortuneHand::new(s, e, h, v)?));
                }
            }
        }
    }
    acc.finish(Coverage::Exhaustive)
}

/// Score `draws` randomly drawn fortune hands.
pub fn sampled_distribution(
    deck: &Deck,
    draws: usize,
    rng: &mut dyn RandomSource,
) -> StatsResult<FortuneDistribution> {
    if draws == 0 {
        return Err(StatsError::NoIterations);
    }
    info!(draws, "sampling fortune hands");
    let mut acc = Accumulator::default();
    for _ in 0..draws {
        let hand = draw_fortune_set(deck, rng)?;
        acc.add(&calculate_fortune(&hand));
    }
    acc.finish(Coverage::Sampled)
}
