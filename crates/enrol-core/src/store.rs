//! Local key-value store.
//!
//! Each key is stored as a JSON file at `${ENROL_HOME}/store/<key>.json`.
//! Writes go through a temp file and rename, so a crash mid-write never
//! leaves a half-written value behind. All operations return explicit
//! `Result`s; persistence failures are the caller's to surface.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::SystemTime;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::paths::store_dir;

/// A key-value store rooted at a directory.
#[derive(Debug, Clone)]
pub struct KvStore {
    dir: PathBuf,
}

impl KvStore {
    /// Guard to prevent store writes in tests without proper isolation.
    ///
    /// # Panics
    /// - In unit tests (`#[cfg(test)]`): panics if `ENROL_HOME` is not set
    /// - At runtime: panics if `ENROL_BLOCK_STORE_WRITES=1` is set
    ///
    /// This ensures tests don't pollute the user's home directory.
    fn guard_store_writes() {
        // Compile-time guard for unit tests
        #[cfg(test)]
        if std::env::var("ENROL_HOME").is_err() {
            panic!(
                "Tests must set ENROL_HOME to a temp directory!\n\
                 The store would be created in the user's home directory."
            );
        }

        // Runtime guard for integration tests
        #[cfg(not(test))]
        if std::env::var("ENROL_BLOCK_STORE_WRITES").is_ok_and(|v| v == "1") {
            panic!(
                "ENROL_BLOCK_STORE_WRITES=1 but trying to open the store!\n\
                 Set ENROL_HOME to a temp directory."
            );
        }
    }

    /// Opens the store in the configured home directory, creating it if
    /// needed.
    pub fn open() -> Result<Self> {
        Self::guard_store_writes();

        let dir = store_dir();
        fs::create_dir_all(&dir).context("Failed to create store directory")?;
        Ok(Self { dir })
    }

    /// The file path a key is stored at.
    ///
    /// Keys must be plain names: non-empty, no path separators, no leading
    /// dot. Anything else is rejected rather than resolved.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() {
            bail!("Store key must not be empty");
        }
        if key.starts_with('.') || key.contains(['/', '\\']) {
            bail!("Invalid store key '{key}'");
        }
        Ok(self.dir.join(format!("{key}.json")))
    }

    /// Writes a value under a key, overwriting any prior value.
    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.path_for(key)?;
        let json = serde_json::to_string_pretty(value).context("Failed to serialize value")?;

        let temp_path = path.with_extension("json.tmp");
        let mut temp = fs::File::create(&temp_path).context("Failed to create temp store file")?;
        temp.write_all(json.as_bytes())
            .context("Failed to write store value")?;
        temp.sync_all().context("Failed to sync store value")?;
        fs::rename(&temp_path, &path).context("Failed to replace store file")?;

        tracing::debug!(key, "store write");
        Ok(())
    }

    /// Reads a value by key. Returns `Ok(None)` when the key is absent.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&path).context("Failed to read store file")?;
        let value = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse store value '{key}'"))?;
        Ok(Some(value))
    }

    /// Removes a key. Returns whether a value was present.
    pub fn remove(&self, key: &str) -> Result<bool> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path).context("Failed to remove store file")?;
        tracing::debug!(key, "store remove");
        Ok(true)
    }

    /// Lists stored keys, newest first.
    pub fn entries(&self) -> Result<Vec<StoreEntry>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.dir).context("Failed to read store directory")? {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.extension().is_some_and(|ext| ext == "json")
                && let Some(stem) = path.file_stem()
            {
                let key = stem.to_string_lossy().to_string();
                let modified = entry.metadata().ok().and_then(|m| m.modified().ok());
                entries.push(StoreEntry { key, modified });
            }
        }

        entries.sort_by(|a, b| b.modified.cmp(&a.modified));
        Ok(entries)
    }
}

/// Summary information about a stored key.
#[derive(Debug, Clone)]
pub struct StoreEntry {
    pub key: String,
    pub modified: Option<SystemTime>,
}

/// Formats a SystemTime as a simple date/time string (YYYY-MM-DD HH:MM).
pub fn format_timestamp(time: SystemTime) -> String {
    let datetime: DateTime<Utc> = time.into();
    datetime.format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use std::sync::LazyLock;

    use tempfile::TempDir;

    use super::*;
    use crate::session::{PLACEHOLDER_TOKEN, SessionRecord};

    // One temp home for the whole test binary. Tests run in parallel, so the
    // env var is set exactly once; isolation between tests comes from using
    // a distinct key per test.
    static TEST_HOME: LazyLock<TempDir> = LazyLock::new(|| {
        let temp = TempDir::new().unwrap();
        // SAFETY: Set once before any store is opened, never mutated again
        unsafe {
            std::env::set_var("ENROL_HOME", temp.path());
        }
        temp
    });

    fn test_store() -> KvStore {
        LazyLock::force(&TEST_HOME);
        KvStore::open().unwrap()
    }

    #[test]
    fn test_get_missing_key_is_none() {
        let store = test_store();
        let value: Option<SessionRecord> = store.get_json("never-written").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let store = test_store();

        let record =
            SessionRecord::issue("alice", "alice@example.com", "Secret1!", PLACEHOLDER_TOKEN);
        store.set_json("round-trip", &record).unwrap();

        let back: SessionRecord = store.get_json("round-trip").unwrap().unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_set_overwrites_prior_value() {
        let store = test_store();

        let first = SessionRecord::issue("alice", "a@b.com", "Secret1!", PLACEHOLDER_TOKEN);
        let second = SessionRecord::issue("bob", "b@c.com", "Hunter2!!", PLACEHOLDER_TOKEN);
        store.set_json("overwrite", &first).unwrap();
        store.set_json("overwrite", &second).unwrap();

        let back: SessionRecord = store.get_json("overwrite").unwrap().unwrap();
        assert_eq!(back, second);
    }

    #[test]
    fn test_set_leaves_no_temp_file_behind() {
        let store = test_store();

        let record = SessionRecord::issue("alice", "a@b.com", "Secret1!", PLACEHOLDER_TOKEN);
        store.set_json("atomic", &record).unwrap();

        let temp_path = store.path_for("atomic").unwrap().with_extension("json.tmp");
        assert!(!temp_path.exists());
    }

    #[test]
    fn test_remove_reports_presence() {
        let store = test_store();

        assert!(!store.remove("removable").unwrap());

        let record = SessionRecord::issue("alice", "a@b.com", "Secret1!", PLACEHOLDER_TOKEN);
        store.set_json("removable", &record).unwrap();
        assert!(store.remove("removable").unwrap());
        assert!(!store.remove("removable").unwrap());
    }

    #[test]
    fn test_invalid_keys_are_rejected() {
        let store = test_store();
        assert!(store.path_for("").is_err());
        assert!(store.path_for("../escape").is_err());
        assert!(store.path_for("a/b").is_err());
        assert!(store.path_for(".hidden").is_err());
    }

    #[test]
    fn test_entries_lists_stored_keys() {
        let store = test_store();

        let record = SessionRecord::issue("alice", "a@b.com", "Secret1!", PLACEHOLDER_TOKEN);
        store.set_json("listed", &record).unwrap();

        let entries = store.entries().unwrap();
        let listed = entries.iter().find(|e| e.key == "listed").expect("entry");
        assert!(listed.modified.is_some());
    }
}
