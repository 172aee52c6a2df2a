use std::fmt;

use serde::{Deserialize, Serialize};

/// The seven product categories the storefront sells.
///
/// Serialized as the catalog's category codes (`CAT001` ..= `CAT007`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "CAT001")]
    Cpu,
    #[serde(rename = "CAT002")]
    Gpu,
    #[serde(rename = "CAT003")]
    Motherboard,
    #[serde(rename = "CAT004")]
    Psu,
    #[serde(rename = "CAT005")]
    Case,
    #[serde(rename = "CAT006")]
    Cooler,
    #[serde(rename = "CAT007")]
    Storage,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Cpu,
        Category::Gpu,
        Category::Motherboard,
        Category::Psu,
        Category::Case,
        Category::Cooler,
        Category::Storage,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Category::Cpu => "CAT001",
            Category::Gpu => "CAT002",
            Category::Motherboard => "CAT003",
            Category::Psu => "CAT004",
            Category::Case => "CAT005",
            Category::Cooler => "CAT006",
            Category::Storage => "CAT007",
        }
    }

    pub fn from_code(code: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|category| category.code() == code)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Category::Cpu => "CPU",
            Category::Gpu => "GPU",
            Category::Motherboard => "Motherboard",
            Category::Psu => "PSU",
            Category::Case => "Case",
            Category::Cooler => "Cooler",
            Category::Storage => "Storage",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
