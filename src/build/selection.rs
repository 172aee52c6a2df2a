use serde::{Deserialize, Serialize};

use super::Slot;

/// The components picked so far. Always partial; nothing is required.
///
/// Serializes to the saved-build `components` layout: one optional id per singular
/// slot and a `storage` array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSelection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motherboard: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpu: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooler: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub psu: Option<String>,
    #[serde(default)]
    pub storage: Vec<String>,
}

impl BuildSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Singular slots are replaced; storage is appended to, duplicates included.
    pub fn select(&mut self, slot: Slot, product_id: impl Into<String>) {
        let product_id = product_id.into();
        match self.single_mut(slot) {
            Some(current) => *current = Some(product_id),
            None => self.storage.push(product_id),
        }
    }

    /// Clears a singular slot, or every storage device.
    pub fn remove(&mut self, slot: Slot) {
        match self.single_mut(slot) {
            Some(current) => *current = None,
            None => self.storage.clear(),
        }
    }

    /// Builder-style [`select`](Self::select).
    pub fn with(mut self, slot: Slot, product_id: impl Into<String>) -> Self {
        self.select(slot, product_id);
        self
    }

    /// The id in a singular slot. Always `None` for storage.
    pub fn get(&self, slot: Slot) -> Option<&str> {
        match slot {
            Slot::Cpu => self.cpu.as_deref(),
            Slot::Motherboard => self.motherboard.as_deref(),
            Slot::Gpu => self.gpu.as_deref(),
            Slot::Case => self.case.as_deref(),
            Slot::Cooler => self.cooler.as_deref(),
            Slot::Psu => self.psu.as_deref(),
            Slot::Storage => None,
        }
    }

    pub fn is_filled(&self, slot: Slot) -> bool {
        match slot {
            Slot::Storage => !self.storage.is_empty(),
            other => self.get(other).is_some(),
        }
    }

    pub fn is_complete(&self) -> bool {
        Slot::ORDER.into_iter().all(|slot| self.is_filled(slot))
    }

    pub fn is_empty(&self) -> bool {
        Slot::ORDER.into_iter().all(|slot| !self.is_filled(slot))
    }

    /// Every selected id with its slot, storage once per occurrence.
    pub fn entries(&self) -> Vec<(Slot, &str)> {
        let mut entries: Vec<(Slot, &str)> = Slot::ORDER
            .into_iter()
            .filter_map(|slot| self.get(slot).map(|id| (slot, id)))
            .collect();
        entries.extend(self.storage.iter().map(|id| (Slot::Storage, id.as_str())));
        entries
    }

    fn single_mut(&mut self, slot: Slot) -> Option<&mut Option<String>> {
        match slot {
            Slot::Cpu => Some(&mut self.cpu),
            Slot::Motherboard => Some(&mut self.motherboard),
            Slot::Gpu => Some(&mut self.gpu),
            Slot::Case => Some(&mut self.case),
            Slot::Cooler => Some(&mut self.cooler),
            Slot::Psu => Some(&mut self.psu),
            Slot::Storage => None,
        }
    }
}
