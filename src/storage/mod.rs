//! Key-value persistence port for carts and saved builds.
//!
//! Values are JSON text under a fixed key, mirroring browser local storage. Callers
//! treat the store as best effort: read failures degrade to "nothing stored" and write
//! failures are logged, never surfaced to the shopper.

mod file;
mod in_memory;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StorageError;

pub use file::FileKeyValueStore;
pub use in_memory::InMemoryKeyValueStore;

/// Abstract string storage keyed by name.
pub trait KeyValueStore: Send + Sync {
    /// Raw value under `key`, `None` if never written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Returns true if it existed.
    fn remove(&self, key: &str) -> Result<bool, StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<bool, StorageError> {
        (**self).remove(key)
    }
}

/// Decode the JSON value under `key`.
pub fn read_json<T: DeserializeOwned>(
    store: &(impl KeyValueStore + ?Sized),
    key: &str,
) -> Result<Option<T>, StorageError> {
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Encode `value` as JSON under `key`.
pub fn write_json<T: Serialize + ?Sized>(
    store: &(impl KeyValueStore + ?Sized),
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

/// [`read_json`] that logs and falls back to `T::default()` on any failure.
pub fn load_or_default<T: DeserializeOwned + Default>(
    store: &(impl KeyValueStore + ?Sized),
    key: &str,
) -> T {
    match read_json(store, key) {
        Ok(Some(value)) => value,
        Ok(None) => T::default(),
        Err(err) => {
            tracing::warn!(target: "storage", key, error = %err, "stored value unreadable, starting empty");
            T::default()
        }
    }
}

/// A persisted JSON array, keeping only the entries that decode as `T`.
///
/// A missing key, unreadable value or non-array value yields an empty list; every
/// problem is logged.
pub fn load_list<T: DeserializeOwned>(store: &(impl KeyValueStore + ?Sized), key: &str) -> Vec<T> {
    let entries: Vec<serde_json::Value> = load_or_default(store, key);
    let total = entries.len();
    let items: Vec<T> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(item) => Some(item),
            Err(err) => {
                tracing::warn!(target: "storage", key, index, error = %err, "dropping malformed entry");
                None
            }
        })
        .collect();
    if items.len() < total {
        tracing::debug!(target: "storage", key, kept = items.len(), total, "list loaded");
    }
    items
}

/// [`write_json`] that logs failures. Returns whether the write landed.
pub fn persist<T: Serialize + ?Sized>(
    store: &(impl KeyValueStore + ?Sized),
    key: &str,
    value: &T,
) -> bool {
    match write_json(store, key, value) {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(target: "storage", key, error = %err, "failed to persist value");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_helpers_round_trip_through_store() {
        let store = InMemoryKeyValueStore::new();
        write_json(&store, "numbers", &vec![1, 2, 3]).unwrap();
        let numbers: Option<Vec<u32>> = read_json(&store, "numbers").unwrap();
        assert_eq!(numbers, Some(vec![1, 2, 3]));
        assert_eq!(read_json::<Vec<u32>>(&store, "missing").unwrap(), None);
    }

    #[test]
    fn corrupt_value_loads_as_default() {
        let store = InMemoryKeyValueStore::new();
        store.set("savedBuilds", "{not json").unwrap();
        assert!(read_json::<Vec<u32>>(&store, "savedBuilds").is_err());
        let loaded: Vec<u32> = load_or_default(&store, "savedBuilds");
        assert!(loaded.is_empty());
    }

    #[test]
    fn load_list_drops_malformed_entries() {
        let store = InMemoryKeyValueStore::new();
        store.set("numbers", r#"[1, "two", 3, null]"#).unwrap();
        let numbers: Vec<u32> = load_list(&store, "numbers");
        assert_eq!(numbers, vec![1, 3]);

        store.set("numbers", r#"{"not": "an array"}"#).unwrap();
        assert!(load_list::<u32>(&store, "numbers").is_empty());
    }

    #[test]
    fn arc_store_shares_state() {
        let store = std::sync::Arc::new(InMemoryKeyValueStore::new());
        assert!(persist(&store, "k", "v"));
        assert_eq!(store.get("k").unwrap().as_deref(), Some("\"v\""));
    }
}
