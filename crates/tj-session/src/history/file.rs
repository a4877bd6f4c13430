//! History persisted to a JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::SessionResult;

use super::{HistoryLog, HistoryRecord, HistoryStore};

/// A history store backed by one JSON file.
///
/// Storage is best effort: a missing or unreadable file yields an empty
/// history, and every write replaces the whole file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    log: HistoryLog,
}

impl JsonFileStore {
    /// Open the store at `path`, keeping at most `capacity` records.
    pub fn open(path: impl Into<PathBuf>, capacity: usize) -> Self {
        let path = path.into();
        let mut log = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str::<HistoryLog>(&text).unwrap_or_else(|err| {
                warn!(path = %path.display(), %err, "history file unreadable, starting empty");
                HistoryLog::with_capacity(capacity)
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                HistoryLog::with_capacity(capacity)
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "history file unreadable, starting empty");
                HistoryLog::with_capacity(capacity)
            }
        };
        log.set_capacity(capacity);
        Self { path, log }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> SessionResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.log)?;
        fs::write(&self.path, json)?;
        info!(
            path = %self.path.display(),
            records = self.log.records().len(),
            "history saved"
        );
        Ok(())
    }
}

impl HistoryStore for JsonFileStore {
    fn log(&self) -> &HistoryLog {
        &self.log
    }

    fn append(&mut self, record: HistoryRecord) -> SessionResult<()> {
        self.log.push(record);
        self.save()
    }

    fn clear(&mut self) -> SessionResult<()> {
        self.log.clear();
        self.save()
    }
}
