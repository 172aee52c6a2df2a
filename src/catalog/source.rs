use std::fmt;

use serde_json::Value;

use crate::error::CatalogError;

/// The nine JSON documents the catalog is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Document {
    Products,
    Cpus,
    Gpus,
    Motherboards,
    Psus,
    Cases,
    Coolers,
    Storage,
    Ratings,
}

impl Document {
    pub const ALL: [Document; 9] = [
        Document::Products,
        Document::Cpus,
        Document::Gpus,
        Document::Motherboards,
        Document::Psus,
        Document::Cases,
        Document::Coolers,
        Document::Storage,
        Document::Ratings,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Document::Products => "products",
            Document::Cpus => "lookup_cpus",
            Document::Gpus => "lookup_gpus",
            Document::Motherboards => "lookup_motherboards",
            Document::Psus => "lookup_psus",
            Document::Cases => "lookup_cases",
            Document::Coolers => "lookup_coolers",
            Document::Storage => "lookup_storage",
            Document::Ratings => "ratings",
        }
    }

    fn bundled_json(self) -> &'static str {
        match self {
            Document::Products => include_str!("../../data/products.json"),
            Document::Cpus => include_str!("../../data/lookup_cpus.json"),
            Document::Gpus => include_str!("../../data/lookup_gpus.json"),
            Document::Motherboards => include_str!("../../data/lookup_motherboards.json"),
            Document::Psus => include_str!("../../data/lookup_psus.json"),
            Document::Cases => include_str!("../../data/lookup_cases.json"),
            Document::Coolers => include_str!("../../data/lookup_coolers.json"),
            Document::Storage => include_str!("../../data/lookup_storage.json"),
            Document::Ratings => include_str!("../../data/ratings.json"),
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw, not-yet-validated catalog entries.
///
/// Entries stay as JSON values so that one malformed record can be skipped without
/// losing the rest of its document.
#[derive(Debug, Clone, Default)]
pub struct CatalogSource {
    pub products: Vec<Value>,
    pub cpus: Vec<Value>,
    pub gpus: Vec<Value>,
    pub motherboards: Vec<Value>,
    pub psus: Vec<Value>,
    pub cases: Vec<Value>,
    pub coolers: Vec<Value>,
    pub storage: Vec<Value>,
    pub ratings: Vec<Value>,
}

impl CatalogSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// The documents compiled into the crate from `data/`.
    pub fn bundled() -> Result<Self, CatalogError> {
        Document::ALL
            .into_iter()
            .try_fold(Self::new(), |source, document| {
                source.with_document(document, document.bundled_json())
            })
    }

    /// Replace one document with the entries of a JSON array.
    pub fn with_document(mut self, document: Document, raw: &str) -> Result<Self, CatalogError> {
        let entries: Vec<Value> =
            serde_json::from_str(raw).map_err(|e| CatalogError::Parse {
                document: document.name(),
                message: e.to_string(),
            })?;
        *self.entries_mut(document) = entries;
        Ok(self)
    }

    pub fn entries(&self, document: Document) -> &[Value] {
        match document {
            Document::Products => &self.products,
            Document::Cpus => &self.cpus,
            Document::Gpus => &self.gpus,
            Document::Motherboards => &self.motherboards,
            Document::Psus => &self.psus,
            Document::Cases => &self.cases,
            Document::Coolers => &self.coolers,
            Document::Storage => &self.storage,
            Document::Ratings => &self.ratings,
        }
    }

    fn entries_mut(&mut self, document: Document) -> &mut Vec<Value> {
        match document {
            Document::Products => &mut self.products,
            Document::Cpus => &mut self.cpus,
            Document::Gpus => &mut self.gpus,
            Document::Motherboards => &mut self.motherboards,
            Document::Psus => &mut self.psus,
            Document::Cases => &mut self.cases,
            Document::Coolers => &mut self.coolers,
            Document::Storage => &mut self.storage,
            Document::Ratings => &mut self.ratings,
        }
    }
}
