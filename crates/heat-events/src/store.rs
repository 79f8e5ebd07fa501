//! JSON-lines file storage for thermal events.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use tracing::warn;

use crate::error::Result;
use crate::types::ThermalEvent;

/// Name of the event log file inside the storage directory.
pub const EVENTS_FILE: &str = "events.jsonl";

/// Append-only event log backed by a JSON-lines file.
///
/// File access is serialized through an internal lock; the store itself can
/// be shared within a process, though the monitoring loop is its only
/// writer in practice.
#[derive(Debug)]
pub struct EventStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl EventStore {
    /// Opens (and if necessary creates) a store rooted at the given
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            path: dir.join(EVENTS_FILE),
            lock: Mutex::new(()),
        })
    }

    /// Returns the path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends a single event as one JSON line.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn append(&self, event: &ThermalEvent) -> Result<()> {
        let json = serde_json::to_string(event)?;

        let _guard = self.lock.lock();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{json}")?;
        Ok(())
    }

    /// Reads every intact event from the log, oldest first.
    ///
    /// Malformed lines are skipped with a warning; a missing file reads as
    /// an empty history.
    ///
    /// # Errors
    ///
    /// Returns an error only when the file exists but cannot be read.
    pub fn read_all(&self) -> Result<Vec<ThermalEvent>> {
        let _guard = self.lock.lock();
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut events = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<ThermalEvent>(&line) {
                Ok(event) => events.push(event),
                Err(err) => warn!(%err, "skipping malformed event line"),
            }
        }
        Ok(events)
    }

    /// Reads every event newer than the cutoff, oldest first.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`EventStore::read_all`].
    pub fn read_since(&self, cutoff: DateTime<Utc>) -> Result<Vec<ThermalEvent>> {
        Ok(self
            .read_all()?
            .into_iter()
            .filter(|event| event.timestamp > cutoff)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use heat_analyzer::ThermalState;

    fn event(state: ThermalState, timestamp: DateTime<Utc>) -> ThermalEvent {
        ThermalEvent::state_change(state, "test event", timestamp)
    }

    #[test]
    fn append_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = EventStore::open(dir.path()).unwrap();

        let first = event(ThermalState::Throttling, Utc::now());
        let second = event(ThermalState::Recovery, Utc::now());
        store.append(&first).unwrap();
        store.append(&second).unwrap();

        let events = store.read_all().unwrap();
        assert_eq!(events, vec![first, second]);
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = EventStore::open(dir.path()).unwrap();
        assert!(store.read_all().unwrap().is_empty());
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let store = EventStore::open(dir.path()).unwrap();

        let good = event(ThermalState::HeatStress, Utc::now());
        store.append(&good).unwrap();
        fs::write(
            store.path(),
            format!(
                "{}\nnot json at all\n{}\n",
                serde_json::to_string(&good).unwrap(),
                "{\"half\": true"
            ),
        )
        .unwrap();

        let events = store.read_all().unwrap();
        assert_eq!(events, vec![good]);
    }

    #[test]
    fn read_since_filters_by_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let store = EventStore::open(dir.path()).unwrap();

        let now = Utc::now();
        let old = event(ThermalState::Throttling, now - Duration::hours(3));
        let recent = event(ThermalState::Normal, now - Duration::minutes(5));
        store.append(&old).unwrap();
        store.append(&recent).unwrap();

        let events = store.read_since(now - Duration::hours(1)).unwrap();
        assert_eq!(events, vec![recent]);
    }

    #[test]
    fn open_creates_the_storage_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("storage").join("deep");
        let store = EventStore::open(&nested).unwrap();
        assert!(nested.is_dir());
        assert!(store.read_all().unwrap().is_empty());
    }
}
