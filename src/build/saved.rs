use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::BuildSelection;
use crate::storage::{load_list, persist, KeyValueStore};

pub const SAVED_BUILDS_KEY: &str = "savedBuilds";

/// A named snapshot of a selection and its metrics at save time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedBuild {
    #[serde(rename = "buildID")]
    pub id: String,
    pub name: String,
    pub components: BuildSelection,
    pub total_price: u64,
    pub power_consumption: u32,
    pub created_at: DateTime<Utc>,
}

/// Append-only list of saved builds, mirrored to a [`KeyValueStore`].
///
/// The in-memory list is authoritative for the session; the store is written best
/// effort after every append.
pub struct SavedBuilds<S> {
    store: S,
    builds: Vec<SavedBuild>,
}

impl<S: KeyValueStore> SavedBuilds<S> {
    /// Reads the persisted list once. Unreadable data yields an empty list.
    pub fn load(store: S) -> Self {
        let builds: Vec<SavedBuild> = load_list(&store, SAVED_BUILDS_KEY);
        tracing::debug!(target: "build", count = builds.len(), "saved builds loaded");
        Self { store, builds }
    }

    pub fn all(&self) -> &[SavedBuild] {
        &self.builds
    }

    pub fn get(&self, id: &str) -> Option<&SavedBuild> {
        self.builds.iter().find(|build| build.id == id)
    }

    pub fn len(&self) -> usize {
        self.builds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builds.is_empty()
    }

    /// `build_<epoch-millis>`, bumping the millis past any id already taken.
    pub fn next_id(&self, now: DateTime<Utc>) -> String {
        let mut millis = now.timestamp_millis();
        loop {
            let id = format!("build_{}", millis);
            if self.get(&id).is_none() {
                return id;
            }
            millis += 1;
        }
    }

    /// Appends and persists. Returns whether the store accepted the write.
    pub fn append(&mut self, build: SavedBuild) -> bool {
        self.builds.push(build);
        persist(&self.store, SAVED_BUILDS_KEY, &self.builds)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::Slot;
    use crate::storage::InMemoryKeyValueStore;
    use chrono::TimeZone;

    fn saved(id: &str) -> SavedBuild {
        SavedBuild {
            id: id.to_string(),
            name: "Gaming rig".to_string(),
            components: BuildSelection::new()
                .with(Slot::Cpu, "PROD001")
                .with(Slot::Storage, "PROD025"),
            total_price: 23498,
            power_consumption: 122,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn serializes_persisted_layout() {
        let value = serde_json::to_value(saved("build_1714564800000")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "buildID": "build_1714564800000",
                "name": "Gaming rig",
                "components": { "cpu": "PROD001", "storage": ["PROD025"] },
                "totalPrice": 23498,
                "powerConsumption": 122,
                "createdAt": "2024-05-01T12:00:00Z"
            })
        );
    }

    #[test]
    fn append_persists_whole_list() {
        let store = InMemoryKeyValueStore::new();
        let mut builds = SavedBuilds::load(store.clone());
        assert!(builds.append(saved("build_1")));
        assert!(builds.append(saved("build_2")));

        let reloaded = SavedBuilds::load(store);
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.get("build_2"), builds.get("build_2"));
    }

    #[test]
    fn next_id_skips_taken_millis() {
        let now = Utc.timestamp_millis_opt(1_000).unwrap();
        let mut builds = SavedBuilds::load(InMemoryKeyValueStore::new());
        assert_eq!(builds.next_id(now), "build_1000");

        builds.append(saved("build_1000"));
        builds.append(saved("build_1001"));
        assert_eq!(builds.next_id(now), "build_1002");
    }

    #[test]
    fn malformed_entries_are_skipped_on_load() {
        let store = InMemoryKeyValueStore::new();
        let good = serde_json::to_value(saved("build_1")).unwrap();
        let raw = serde_json::json!([good, { "buildID": 7 }]).to_string();
        store.set(SAVED_BUILDS_KEY, &raw).unwrap();

        let builds = SavedBuilds::load(store);
        assert_eq!(builds.len(), 1);
        assert!(builds.get("build_1").is_some());
    }
}
