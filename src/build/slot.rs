use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::Category;

/// A position in a build. Every slot but storage holds at most one component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Cpu,
    Motherboard,
    Gpu,
    Case,
    Cooler,
    Psu,
    Storage,
}

impl Slot {
    /// Builder order, also used by "Next".
    pub const ORDER: [Slot; 7] = [
        Slot::Cpu,
        Slot::Motherboard,
        Slot::Gpu,
        Slot::Case,
        Slot::Cooler,
        Slot::Psu,
        Slot::Storage,
    ];

    pub fn category(self) -> Category {
        match self {
            Slot::Cpu => Category::Cpu,
            Slot::Motherboard => Category::Motherboard,
            Slot::Gpu => Category::Gpu,
            Slot::Case => Category::Case,
            Slot::Cooler => Category::Cooler,
            Slot::Psu => Category::Psu,
            Slot::Storage => Category::Storage,
        }
    }

    pub fn for_category(category: Category) -> Slot {
        match category {
            Category::Cpu => Slot::Cpu,
            Category::Motherboard => Slot::Motherboard,
            Category::Gpu => Slot::Gpu,
            Category::Case => Slot::Case,
            Category::Cooler => Slot::Cooler,
            Category::Psu => Slot::Psu,
            Category::Storage => Slot::Storage,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Slot::Cpu => "cpu",
            Slot::Motherboard => "motherboard",
            Slot::Gpu => "gpu",
            Slot::Case => "case",
            Slot::Cooler => "cooler",
            Slot::Psu => "psu",
            Slot::Storage => "storage",
        }
    }

    pub fn is_multi(self) -> bool {
        self == Slot::Storage
    }

    fn position(self) -> usize {
        Slot::ORDER
            .iter()
            .position(|slot| *slot == self)
            .unwrap_or_default()
    }

    /// The slot after this one in builder order, wrapping around.
    pub fn following(self) -> Slot {
        Slot::ORDER[(self.position() + 1) % Slot::ORDER.len()]
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
