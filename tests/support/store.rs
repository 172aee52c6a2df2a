use std::sync::atomic::{AtomicUsize, Ordering};

use part_picker::{KeyValueStore, StorageError};

/// Reads find nothing and every write fails.
#[derive(Default)]
pub struct FailingStore {
    pub writes: AtomicUsize,
}

impl FailingStore {
    pub fn attempted_writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Io("disk unavailable".into()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        Err(StorageError::Io("disk full".into()))
    }

    fn remove(&self, _key: &str) -> Result<bool, StorageError> {
        Err(StorageError::Io("disk unavailable".into()))
    }
}
