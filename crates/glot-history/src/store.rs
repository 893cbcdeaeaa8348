use std::fs;
use std::io;

use glot_config::history::HistoryConfig;

use crate::entry::HistoryEntry;

#[derive(Debug, thiserror::Error)]
enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Size-bounded log of past translations backed by a single JSON file.
///
/// The file is rewritten whole on every save and read whole on every load;
/// there is no cross-process locking, so overlapping writers race with
/// last-writer-wins semantics. Persistence failures are logged and reported
/// as `false`, never raised.
pub struct HistoryStore {
    config: HistoryConfig,
}

impl HistoryStore {
    pub fn new(config: HistoryConfig) -> Self {
        Self { config }
    }

    /// Append one exchange, keeping only the newest `max_entries`
    pub fn save_entry(
        &self,
        original: &str,
        translated: &str,
        from_lang: &str,
        to_lang: &str,
        confidence: f32,
    ) -> bool {
        let mut entries = self.load_history();
        entries.push(HistoryEntry::new(
            original, translated, from_lang, to_lang, confidence,
        ));

        let excess = entries.len().saturating_sub(self.config.max_entries);
        entries.drain(..excess);

        match self.write_entries(&entries) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!("history save failed: {err}");
                false
            }
        }
    }

    /// All entries, oldest first. Absent, empty, and corrupt files all read
    /// as an empty history.
    pub fn load_history(&self) -> Vec<HistoryEntry> {
        let raw = match fs::read_to_string(&self.config.file_path) {
            Ok(raw) => raw,
            Err(err) => {
                if err.kind() != io::ErrorKind::NotFound {
                    tracing::warn!("history load failed: {err}");
                }
                return Vec::new();
            }
        };

        if raw.trim().is_empty() {
            return Vec::new();
        }

        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!("history file unreadable, treating as empty: {err}");
                Vec::new()
            }
        }
    }

    /// Delete the backing file. True when a file existed and was removed.
    pub fn clear_history(&self) -> bool {
        if !self.config.file_path.exists() {
            return false;
        }

        match fs::remove_file(&self.config.file_path) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!("history clear failed: {err}");
                false
            }
        }
    }

    /// The last `limit` entries in chronological order
    pub fn recent_entries(&self, limit: usize) -> Vec<HistoryEntry> {
        let mut entries = self.load_history();
        let skip = entries.len().saturating_sub(limit);
        entries.drain(..skip);
        entries
    }

    fn write_entries(&self, entries: &[HistoryEntry]) -> Result<(), StoreError> {
        if let Some(parent) = self.config.file_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&self.config.file_path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use glot_config::history::HistoryConfig;
    use tempfile::TempDir;

    use super::HistoryStore;

    fn store_in(dir: &TempDir, max_entries: usize) -> HistoryStore {
        HistoryStore::new(HistoryConfig {
            file_path: dir.path().join("history.json"),
            max_entries,
        })
    }

    #[test]
    fn load_history_on_a_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir, 100);

        assert!(store.load_history().is_empty());
    }

    #[test]
    fn save_then_load_round_trips_entries_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir, 100);

        assert!(store.save_entry("Hello", "Halo", "en", "id", 0.9));
        assert!(store.save_entry("World", "Dunia", "en", "id", 0.9));

        let entries = store.load_history();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].original, "Hello");
        assert_eq!(entries[1].original, "World");
        assert_eq!(entries[1].translated, "Dunia");
    }

    #[test]
    fn recent_entries_returns_the_newest_slice_oldest_first() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir, 100);

        for i in 0..7 {
            store.save_entry(&format!("original {i}"), "t", "en", "id", 0.9);
        }

        let recent = store.recent_entries(5);
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].original, "original 2");
        assert_eq!(recent[4].original, "original 6");
    }

    #[test]
    fn the_log_is_capped_at_max_entries() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir, 100);

        for i in 0..150 {
            assert!(store.save_entry(&format!("original {i}"), "t", "en", "id", 0.9));
        }

        let entries = store.load_history();
        assert_eq!(entries.len(), 100);
        assert_eq!(entries[0].original, "original 50");
        assert_eq!(entries[99].original, "original 149");
    }

    #[test]
    fn clear_history_reports_whether_a_file_was_removed() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir, 100);

        store.save_entry("Hello", "Halo", "en", "id", 0.9);

        assert!(store.clear_history());
        assert!(!dir.path().join("history.json").exists());
        assert!(!store.clear_history());
    }

    #[test]
    fn corrupt_files_read_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir, 100);

        std::fs::write(dir.path().join("history.json"), "{ not json ]").unwrap();

        assert!(store.load_history().is_empty());
        // and a save on top of the corruption starts a fresh log
        assert!(store.save_entry("Hello", "Halo", "en", "id", 0.9));
        assert_eq!(store.load_history().len(), 1);
    }

    #[test]
    fn missing_parent_directories_are_created_on_save() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(HistoryConfig {
            file_path: dir.path().join("nested").join("deep").join("history.json"),
            max_entries: 100,
        });

        assert!(store.save_entry("Hello", "Halo", "en", "id", 0.9));
        assert_eq!(store.load_history().len(), 1);
    }
}
