//! Configuration for a Tianji session.

use std::path::PathBuf;

use tj_draw::{ScoringMode, SituationalOptions};

/// Records kept by default before the oldest is dropped.
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;
/// Cards in a situational draw when the caller does not say.
pub const DEFAULT_SITUATION_COUNT: usize = 3;

/// Configuration for a session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// RNG seed for reproducible draws. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// History records retained.
    pub history_capacity: usize,
    /// Relevance scoring for situational draws.
    pub scoring_mode: ScoringMode,
    /// Ranked candidate slice for situational draws.
    pub candidate_pool: usize,
    /// Default situational draw size.
    pub situation_count: usize,
    /// Card catalog to load instead of the built-in one.
    pub deck_path: Option<PathBuf>,
    /// Profile catalog to load instead of the built-in one.
    pub profiles_path: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        let options = SituationalOptions::default();
        Self {
            seed: None,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            scoring_mode: options.mode,
            candidate_pool: options.candidate_pool,
            situation_count: DEFAULT_SITUATION_COUNT,
            deck_path: None,
            profiles_path: None,
        }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the history capacity (at least 1).
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity.max(1);
        self
    }

    /// Set the scoring mode.
    pub fn with_scoring_mode(mut self, mode: ScoringMode) -> Self {
        self.scoring_mode = mode;
        self
    }

    /// Set the candidate slice size (at least 1).
    pub fn with_candidate_pool(mut self, size: usize) -> Self {
        self.candidate_pool = size.max(1);
        self
    }

    /// Set the default situational draw size.
    pub fn with_situation_count(mut self, count: usize) -> Self {
        self.situation_count = count;
        self
    }

    /// Load cards from `path`.
    pub fn with_deck_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.deck_path = Some(path.into());
        self
    }

    /// Load profiles from `path`.
    pub fn with_profiles_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.profiles_path = Some(path.into());
        self
    }

    /// Options for situational draws.
    pub fn situational_options(&self) -> SituationalOptions {
        SituationalOptions::default()
            .with_mode(self.scoring_mode)
            .with_candidate_pool(self.candidate_pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = SessionConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.history_capacity, 100);
        assert_eq!(cfg.candidate_pool, 50);
        assert_eq!(cfg.situation_count, 3);
        assert_eq!(cfg.scoring_mode, ScoringMode::Keyword);
    }

    #[test]
    fn builder_methods() {
        let cfg = SessionConfig::default()
            .with_seed(7)
            .with_history_capacity(0)
            .with_scoring_mode(ScoringMode::Blended)
            .with_candidate_pool(20)
            .with_situation_count(5)
            .with_deck_path("cards.json");
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.history_capacity, 1);
        assert_eq!(cfg.situation_count, 5);
        assert_eq!(cfg.deck_path, Some(PathBuf::from("cards.json")));
        let options = cfg.situational_options();
        assert_eq!(options.mode, ScoringMode::Blended);
        assert_eq!(options.candidate_pool, 20);
    }
}
