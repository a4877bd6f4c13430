pub mod deck;
pub mod draw;
pub mod fortune;
pub mod history;
pub mod profiles;
pub mod situation;
pub mod stats;

use std::path::PathBuf;

use colored::{ColoredString, Colorize};
use serde::Serialize;

use tj_deck::{Card, Category};
use tj_fortune::FortuneLevel;
use tj_session::{HistoryStore, JsonFileStore, MemoryStore, Session, SessionConfig};

/// Flags shared by every subcommand.
pub struct Globals {
    pub seed: Option<u64>,
    pub history: Option<PathBuf>,
    pub deck: Option<PathBuf>,
    pub profiles: Option<PathBuf>,
    pub json: bool,
}

impl Globals {
    fn config(&self) -> SessionConfig {
        let mut config = SessionConfig::default();
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(path) = &self.deck {
            config = config.with_deck_path(path.clone());
        }
        if let Some(path) = &self.profiles {
            config = config.with_profiles_path(path.clone());
        }
        config
    }
}

type CliSession = Session<Box<dyn HistoryStore>>;

/// Start a session with the configured catalogs and history store.
fn open_session(globals: &Globals) -> Result<CliSession, String> {
    open_session_with(globals, globals.config())
}

fn open_session_with(globals: &Globals, config: SessionConfig) -> Result<CliSession, String> {
    let store: Box<dyn HistoryStore> = match &globals.history {
        Some(path) => Box::new(JsonFileStore::open(path, config.history_capacity)),
        None => Box::new(MemoryStore::with_capacity(config.history_capacity)),
    };
    Session::new(config, store).map_err(|e| e.to_string())
}

fn parse_category(s: &str) -> Result<Category, String> {
    Category::parse(s).ok_or_else(|| {
        format!("unknown category '{s}' (expected sky, earth, human or variable)")
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

fn direction_label(direction: i8) -> ColoredString {
    match direction {
        d if d > 0 => "+".green(),
        d if d < 0 => "-".red(),
        _ => "0".normal(),
    }
}

fn level_label(level: FortuneLevel) -> ColoredString {
    let text = level.to_string();
    match level {
        FortuneLevel::Excellent => text.green().bold(),
        FortuneLevel::Good => text.green(),
        FortuneLevel::Fair => text.yellow(),
        FortuneLevel::Poor => text.red(),
        FortuneLevel::Dire => text.red().bold(),
    }
}

fn card_line(card: &Card) -> String {
    format!(
        "{} {} {}",
        card.name.bold(),
        format!("[{}]", card.category).dimmed(),
        format!("({})", card.id).dimmed()
    )
}
