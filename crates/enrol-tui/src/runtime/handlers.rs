//! Effect handler implementations.
//!
//! Pure async functions that perform store I/O and return the result as a
//! `UiEvent` for the inbox. Errors are stringified here; the reducer decides
//! how to surface them.

use enrol_core::session::{SESSION_KEY, SessionRecord};
use enrol_core::store::KvStore;

use crate::events::UiEvent;

/// Persists the session record under the well-known key, overwriting any
/// prior value.
pub(crate) async fn save_session(store: KvStore, record: SessionRecord) -> UiEvent {
    let result = store
        .set_json(SESSION_KEY, &record)
        .map_err(|e| format!("{e:#}"));

    match &result {
        Ok(()) => tracing::info!(user = %record.user_name, "session saved"),
        Err(error) => tracing::warn!(%error, "session save failed"),
    }

    UiEvent::SessionSaved { result }
}

/// Loads the stored session record, if any.
pub(crate) async fn load_session(store: KvStore) -> UiEvent {
    let result = store
        .get_json::<SessionRecord>(SESSION_KEY)
        .map_err(|e| format!("{e:#}"));

    if let Err(error) = &result {
        tracing::warn!(%error, "session load failed");
    }

    UiEvent::SessionLoaded { result }
}

#[cfg(test)]
mod tests {
    use std::sync::LazyLock;

    use tempfile::TempDir;

    use super::*;

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

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let store = test_store();
        let record = SessionRecord::issue("alice", "alice@example.com", "Secret1!", "sample-token");

        let saved = save_session(store.clone(), record.clone()).await;
        assert!(matches!(saved, UiEvent::SessionSaved { result: Ok(()) }));

        let loaded = load_session(store).await;
        let UiEvent::SessionLoaded { result: Ok(Some(back)) } = loaded else {
            panic!("expected loaded session, got {loaded:?}");
        };
        assert_eq!(back, record);
    }
}
