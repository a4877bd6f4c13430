//! The session facade: catalogs, one random source and a history store.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::info;

use tj_deck::{Card, Category, Deck, ProfileCatalog};
use tj_draw::{DrawError, DrawMode, draw_fortune_set, draw_single, draw_situational};
use tj_fortune::{FortuneCalculation, calculate_fortune};
use tj_reading::{
    FortuneReading, Interpretation, SingleReading, SituationReading, SituationSummary,
    generate_fortune_text, generate_situation_interpretation, generate_situation_summary,
    interpret_single,
};
use tj_stats::{
    FortuneDistribution, ModeReport, ReportTarget, exhaustive_distribution, run_mode_report,
    sampled_distribution,
};

use crate::config::SessionConfig;
use crate::error::SessionResult;
use crate::history::{HistoryRecord, HistoryStore, MemoryStore};

/// A single-card draw and its reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleOutcome {
    /// The card drawn.
    pub card: Card,
    /// Its reading.
    pub reading: SingleReading,
}

/// A fortune draw, its score and its reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FortuneOutcome {
    /// Sky, earth, human and variable card.
    pub cards: Vec<Card>,
    /// The fortune calculation.
    pub calculation: FortuneCalculation,
    /// The generated text.
    pub reading: FortuneReading,
}

/// A situational draw with its reading and summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SituationOutcome {
    /// Cards drawn, most relevant first.
    pub cards: Vec<Card>,
    /// The full reading.
    pub reading: SituationReading,
    /// The short summary.
    pub summary: SituationSummary,
}

/// A drawing session.
///
/// Owns the catalogs and the random source; every completed draw is
/// appended to the history store.
pub struct Session<S = MemoryStore> {
    deck: Deck,
    profiles: ProfileCatalog,
    config: SessionConfig,
    rng: StdRng,
    store: S,
}

impl<S: HistoryStore> Session<S> {
    /// Load the catalogs named in `config` and start a session.
    pub fn new(config: SessionConfig, store: S) -> SessionResult<Self> {
        let deck = match &config.deck_path {
            Some(path) => Deck::from_path(path)?,
            None => Deck::builtin()?,
        };
        let profiles = match &config.profiles_path {
            Some(path) => ProfileCatalog::from_path(path)?,
            None => ProfileCatalog::builtin()?,
        };
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        info!(
            cards = deck.len(),
            profiles = profiles.len(),
            seed = ?config.seed,
            "session started"
        );
        Ok(Self {
            deck,
            profiles,
            config,
            rng,
            store,
        })
    }

    /// The card catalog.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The profile catalog.
    pub fn profiles(&self) -> &ProfileCatalog {
        &self.profiles
    }

    /// The configuration in use.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The history store.
    pub fn history(&self) -> &S {
        &self.store
    }

    /// Mutable access to the history store.
    pub fn history_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Draw and read one card, optionally from one category.
    pub fn draw_single(&mut self, category: Option<Category>) -> SessionResult<SingleOutcome> {
        let card = draw_single(&self.deck, category, &mut self.rng)?;
        let reading = interpret_single(card);
        record(
            &mut self.store,
            Interpretation::Single(reading.clone()),
            None,
        )?;
        Ok(SingleOutcome {
            card: card.clone(),
            reading,
        })
    }

    /// Draw one card per category, score the hand and write its reading.
    pub fn draw_fortune(&mut self) -> SessionResult<FortuneOutcome> {
        let hand = draw_fortune_set(&self.deck, &mut self.rng)?;
        let calculation = calculate_fortune(&hand);
        let reading = generate_fortune_text(&hand, &calculation, &mut self.rng);
        record(
            &mut self.store,
            Interpretation::Fortune(reading.clone()),
            None,
        )?;
        Ok(FortuneOutcome {
            cards: hand.cards().into_iter().cloned().collect(),
            calculation,
            reading,
        })
    }

    /// Draw `count` cards for a profile (the configured default when `None`)
    /// and read them.
    pub fn draw_situation(
        &mut self,
        profile_id: &str,
        count: Option<usize>,
    ) -> SessionResult<SituationOutcome> {
        let profile = self.profiles.get(profile_id)?;
        let count = count.unwrap_or(self.config.situation_count);
        let cards = draw_situational(
            &self.deck,
            profile,
            count,
            self.config.situational_options(),
            &mut self.rng,
        )?;
        let reading = generate_situation_interpretation(&cards, profile, &mut self.rng)?;
        let summary = generate_situation_summary(&cards, profile)?;
        record(
            &mut self.store,
            Interpretation::Situation(reading.clone()),
            Some(&profile.id),
        )?;
        Ok(SituationOutcome {
            cards: cards.into_iter().cloned().collect(),
            reading,
            summary,
        })
    }

    /// Run `iterations` draws of `mode` without recording them.
    ///
    /// Situational reports need a profile.
    pub fn mode_report(
        &mut self,
        mode: DrawMode,
        profile_id: Option<&str>,
        iterations: usize,
    ) -> SessionResult<ModeReport> {
        let target = match (mode, profile_id) {
            (DrawMode::Single, _) => ReportTarget::Single,
            (DrawMode::Fortune, _) => ReportTarget::Fortune,
            (DrawMode::Situation, Some(id)) => ReportTarget::Situation {
                profile: self.profiles.get(id)?,
                count: self.config.situation_count,
                options: self.config.situational_options(),
            },
            (DrawMode::Situation, None) => {
                return Err(DrawError::Validation(
                    "a situational report needs a profile".into(),
                )
                .into());
            }
        };
        Ok(run_mode_report(&self.deck, target, iterations, &mut self.rng)?)
    }

    /// Fortune level distribution over every hand, or over `draws` random ones.
    pub fn fortune_distribution(
        &mut self,
        exhaustive: bool,
        draws: usize,
    ) -> SessionResult<FortuneDistribution> {
        let distribution = if exhaustive {
            exhaustive_distribution(&self.deck)?
        } else {
            sampled_distribution(&self.deck, draws, &mut self.rng)?
        };
        Ok(distribution)
    }
}

fn record<S: HistoryStore>(
    store: &mut S,
    interpretation: Interpretation,
    profile_id: Option<&str>,
) -> SessionResult<()> {
    let mode = match &interpretation {
        Interpretation::Single(_) => DrawMode::Single,
        Interpretation::Fortune(_) => DrawMode::Fortune,
        Interpretation::Situation(_) => DrawMode::Situation,
    };
    let mut entry = HistoryRecord::new(mode, interpretation.card_ids(), interpretation.headline());
    if let Some(id) = profile_id {
        entry = entry.with_profile(id);
    }
    store.append(entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SessionError;
    use tj_deck::DeckError;
    use tj_fortune::FortuneLevel;

    fn session(seed: u64) -> Session {
        Session::new(SessionConfig::default().with_seed(seed), MemoryStore::new()).unwrap()
    }

    #[test]
    fn single_draw_is_recorded() {
        let mut s = session(1);
        let outcome = s.draw_single(Some(Category::Human)).unwrap();
        assert_eq!(outcome.card.category, Category::Human);
        assert_eq!(outcome.reading.card_id, outcome.card.id);

        let records = s.history().records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].mode, DrawMode::Single);
        assert_eq!(records[0].card_ids, vec![outcome.card.id.clone()]);
        assert_eq!(s.history().last_mode(), Some(DrawMode::Single));
    }

    #[test]
    fn fortune_draw_has_one_card_per_category() {
        let mut s = session(2);
        let outcome = s.draw_fortune().unwrap();
        let categories: Vec<Category> = outcome.cards.iter().map(|c| c.category).collect();
        assert_eq!(categories, Category::all().to_vec());
        assert!(FortuneLevel::all().contains(&outcome.calculation.level));
        assert_eq!(outcome.reading.level, outcome.calculation.level);
        assert_eq!(s.history().card_counts().len(), 4);
    }

    #[test]
    fn situation_draw_uses_default_count() {
        let mut s = session(3);
        let outcome = s.draw_situation("work", None).unwrap();
        assert_eq!(outcome.cards.len(), 3);
        assert_eq!(outcome.reading.profile_id, "work");
        assert_eq!(outcome.summary.profile_id, "work");
        let record = &s.history().records()[0];
        assert_eq!(record.profile_id.as_deref(), Some("work"));
        assert_eq!(record.card_ids.len(), 3);
    }

    #[test]
    fn unknown_profile_is_an_error() {
        let mut s = session(4);
        let err = s.draw_situation("astrology", Some(3)).unwrap_err();
        assert!(matches!(
            err,
            SessionError::Deck(DeckError::UnknownProfile(_))
        ));
        assert!(s.history().records().is_empty());
    }

    #[test]
    fn same_seed_same_draws() {
        let mut a = session(42);
        let mut b = session(42);
        for _ in 0..5 {
            assert_eq!(
                a.draw_fortune().unwrap().reading,
                b.draw_fortune().unwrap().reading
            );
        }
    }

    #[test]
    fn reports_do_not_touch_history() {
        let mut s = session(5);
        let report = s.mode_report(DrawMode::Single, None, 200).unwrap();
        assert_eq!(report.iterations, 200);
        let situational = s.mode_report(DrawMode::Situation, Some("love"), 50).unwrap();
        assert_eq!(situational.cards_drawn, 150);
        assert!(s.mode_report(DrawMode::Situation, None, 50).is_err());

        let dist = s.fortune_distribution(false, 300).unwrap();
        assert_eq!(dist.total, 300);
        assert!(s.history().records().is_empty());
    }

    #[test]
    fn missing_deck_file_fails_to_start() {
        let config = SessionConfig::default().with_deck_path("/nonexistent/cards.json");
        assert!(matches!(
            Session::new(config, MemoryStore::new()),
            Err(SessionError::Deck(DeckError::Io(_)))
        ));
    }
}
