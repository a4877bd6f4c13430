//! In-memory history store.

use crate::error::SessionResult;

use super::{HistoryLog, HistoryRecord, HistoryStore};

/// A history store that lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    log: HistoryLog,
}

impl MemoryStore {
    /// Create an empty store with the default capacity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store keeping at most `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            log: HistoryLog::with_capacity(capacity),
        }
    }
}

impl HistoryStore for MemoryStore {
    fn log(&self) -> &HistoryLog {
        &self.log
    }

    fn append(&mut self, record: HistoryRecord) -> SessionResult<()> {
        self.log.push(record);
        Ok(())
    }

    fn clear(&mut self) -> SessionResult<()> {
        self.log.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tj_draw::DrawMode;

    fn append(store: &mut MemoryStore, mode: DrawMode, ids: &[&str]) {
        let ids = ids.iter().map(|s| s.to_string()).collect();
        store.append(HistoryRecord::new(mode, ids, "")).unwrap();
    }

    #[test]
    fn most_frequent_breaks_ties_by_id() {
        let mut store = MemoryStore::new();
        append(&mut store, DrawMode::Single, &["var02"]);
        append(&mut store, DrawMode::Single, &["sky05"]);
        append(&mut store, DrawMode::Single, &["var02"]);
        append(&mut store, DrawMode::Single, &["earth01"]);
        let top = store.most_frequent(3);
        assert_eq!(
            top,
            vec![
                ("var02".to_string(), 2),
                ("earth01".to_string(), 1),
                ("sky05".to_string(), 1),
            ]
        );
        assert_eq!(store.most_frequent(0), vec![]);
    }

    #[test]
    fn last_mode_and_clear() {
        let mut store = MemoryStore::with_capacity(10);
        assert_eq!(store.last_mode(), None);
        append(&mut store, DrawMode::Fortune, &["sky01"]);
        append(&mut store, DrawMode::Situation, &["sky02"]);
        assert_eq!(store.last_mode(), Some(DrawMode::Situation));
        store.clear().unwrap();
        assert!(store.records().is_empty());
        assert!(store.card_counts().is_empty());
    }
}
