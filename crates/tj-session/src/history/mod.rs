//! Draw history: the records a session writes and the counts it reads back.

mod file;
mod memory;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tj_draw::DrawMode;

use crate::config::DEFAULT_HISTORY_CAPACITY;
use crate::error::SessionResult;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// One completed draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Unique record id.
    pub id: Uuid,
    /// Mode the draw was made in.
    pub mode: DrawMode,
    /// Drawn card ids in draw order.
    pub card_ids: Vec<String>,
    /// Profile id for situational draws.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,
    /// When the draw was made.
    pub timestamp: DateTime<Utc>,
    /// One-line result summary.
    pub summary: String,
}

impl HistoryRecord {
    /// Create a record stamped now.
    pub fn new(mode: DrawMode, card_ids: Vec<String>, summary: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            mode,
            card_ids,
            profile_id: None,
            timestamp: Utc::now(),
            summary: summary.into(),
        }
    }

    /// Attach the profile a situational draw was made for.
    pub fn with_profile(mut self, profile_id: impl Into<String>) -> Self {
        self.profile_id = Some(profile_id.into());
        self
    }
}

/// Bounded record list plus cumulative per-card counts.
///
/// This is the state every store keeps and the on-disk shape of
/// [`JsonFileStore`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryLog {
    capacity: usize,
    records: Vec<HistoryRecord>,
    card_counts: BTreeMap<String, usize>,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl HistoryLog {
    /// Create an empty log keeping at most `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            records: Vec::new(),
            card_counts: BTreeMap::new(),
        }
    }

    /// Record a draw. The oldest record falls off past capacity; counts never shrink.
    pub fn push(&mut self, record: HistoryRecord) {
        for id in &record.card_ids {
            *self.card_counts.entry(id.clone()).or_default() += 1;
        }
        self.records.insert(0, record);
        self.records.truncate(self.capacity);
    }

    /// Records, newest first.
    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    /// Times each card id has been drawn.
    pub fn card_counts(&self) -> &BTreeMap<String, usize> {
        &self.card_counts
    }

    /// Maximum records kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Change the capacity, dropping the oldest records if needed.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        self.records.truncate(self.capacity);
    }

    /// Drop all records and counts.
    pub fn clear(&mut self) {
        self.records.clear();
        self.card_counts.clear();
    }
}

/// Where a session writes its draws.
///
/// Stores assume a single writer.
pub trait HistoryStore {
    /// The log held by this store.
    fn log(&self) -> &HistoryLog;

    /// Append a record.
    fn append(&mut self, record: HistoryRecord) -> SessionResult<()>;

    /// Drop every record and count.
    fn clear(&mut self) -> SessionResult<()>;

    /// Records, newest first.
    fn records(&self) -> &[HistoryRecord] {
        self.log().records()
    }

    /// Cumulative draw count per card id.
    fn card_counts(&self) -> &BTreeMap<String, usize> {
        self.log().card_counts()
    }

    /// The `limit` most drawn cards, count descending then id ascending.
    fn most_frequent(&self, limit: usize) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = self
            .card_counts()
            .iter()
            .map(|(id, &n)| (id.clone(), n))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        counts.truncate(limit);
        counts
    }

    /// Mode of the newest record.
    fn last_mode(&self) -> Option<DrawMode> {
        self.records().first().map(|r| r.mode)
    }
}

impl<S: HistoryStore + ?Sized> HistoryStore for Box<S> {
    fn log(&self) -> &HistoryLog {
        (**self).log()
    }

    fn append(&mut self, record: HistoryRecord) -> SessionResult<()> {
        (**self).append(record)
    }

    fn clear(&mut self) -> SessionResult<()> {
        (**self).clear()
    }
}
