//! Session facade for Tianji.
//!
//! A [`Session`] owns the card and profile catalogs, one random source and a
//! [`HistoryStore`]. Every draw it makes is read, then appended to the store;
//! batch reports run against the same catalogs without touching history.

pub mod config;
pub mod error;
pub mod history;
pub mod session;

pub use config::SessionConfig;
pub use error::{SessionError, SessionResult};
pub use history::{HistoryLog, HistoryRecord, HistoryStore, JsonFileStore, MemoryStore};
pub use session::{FortuneOutcome, Session, SingleOutcome, SituationOutcome};
