use std::collections::HashMap;
use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::search::SearchQuery;
use super::source::{CatalogSource, Document};
use super::spec::{
    CaseDetails, CaseSpec, ComponentSpec, CoolerDetails, CoolerSpec, CpuDetails, CpuSpec,
    GpuDetails, GpuSpec, MotherboardDetails, MotherboardSpec, PsuDetails, PsuSpec, Spec,
    SpecDetails, StorageDetails, StorageSpec,
};
use super::{Category, CatalogLookup, Product, Rating};

/// A data-integrity problem found while indexing. Reported, never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    /// A product exists but its category has no technical record for it. The product
    /// stays browsable but is not offered as a component.
    MissingSpec {
        category: Category,
        product_id: String,
    },
    /// A technical record has no product of the matching category.
    OrphanSpec {
        category: Category,
        product_id: String,
    },
    /// A second product with an already-indexed id. The first one wins.
    DuplicateProduct { product_id: String },
    /// An entry that does not have the documented shape.
    MalformedEntry {
        document: Document,
        index: usize,
        message: String,
    },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogIssue::MissingSpec {
                category,
                product_id,
            } => write!(f, "{} spec not found for product {}, skipping", category, product_id),
            CatalogIssue::OrphanSpec {
                category,
                product_id,
            } => write!(f, "{} spec {} has no matching product", category, product_id),
            CatalogIssue::DuplicateProduct { product_id } => {
                write!(f, "duplicate product {}, keeping first occurrence", product_id)
            }
            CatalogIssue::MalformedEntry {
                document,
                index,
                message,
            } => write!(f, "malformed entry {} in {}: {}", index, document, message),
        }
    }
}

/// Read-only catalog, indexed once.
///
/// Products live in an arena keyed by id; each category keeps its merged specs in a
/// secondary map. Listing order follows the products document.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    products: HashMap<String, Product>,
    order: Vec<String>,
    cpus: HashMap<String, CpuSpec>,
    gpus: HashMap<String, GpuSpec>,
    motherboards: HashMap<String, MotherboardSpec>,
    psus: HashMap<String, PsuSpec>,
    cases: HashMap<String, CaseSpec>,
    coolers: HashMap<String, CoolerSpec>,
    storage: HashMap<String, StorageSpec>,
    ratings: Vec<Rating>,
    issues: Vec<CatalogIssue>,
}

impl CatalogIndex {
    pub fn build(source: CatalogSource) -> Self {
        let mut index = CatalogIndex::default();
        let mut issues = Vec::new();

        for (position, raw) in source.products.iter().enumerate() {
            let Some(product) = parse_entry::<Product>(Document::Products, position, raw, &mut issues)
            else {
                continue;
            };
            if index.products.contains_key(&product.id) {
                issues.push(CatalogIssue::DuplicateProduct {
                    product_id: product.id,
                });
                continue;
            }
            index.order.push(product.id.clone());
            index.products.insert(product.id.clone(), product);
        }

        index.cpus = index.merge::<CpuDetails>(Document::Cpus, &source.cpus, &mut issues);
        index.gpus = index.merge::<GpuDetails>(Document::Gpus, &source.gpus, &mut issues);
        index.motherboards =
            index.merge::<MotherboardDetails>(Document::Motherboards, &source.motherboards, &mut issues);
        index.psus = index.merge::<PsuDetails>(Document::Psus, &source.psus, &mut issues);
        index.cases = index.merge::<CaseDetails>(Document::Cases, &source.cases, &mut issues);
        index.coolers = index.merge::<CoolerDetails>(Document::Coolers, &source.coolers, &mut issues);
        index.storage = index.merge::<StorageDetails>(Document::Storage, &source.storage, &mut issues);

        index.ratings = source
            .ratings
            .iter()
            .enumerate()
            .filter_map(|(position, raw)| {
                parse_entry::<Rating>(Document::Ratings, position, raw, &mut issues)
            })
            .collect();

        for issue in &issues {
            tracing::warn!(target: "catalog", issue = %issue, "catalog integrity issue");
        }
        tracing::info!(
            target: "catalog",
            products = index.products.len(),
            components = index.component_count(),
            ratings = index.ratings.len(),
            issues = issues.len(),
            "catalog indexed"
        );

        index.issues = issues;
        index
    }

    /// Joins technical records onto the already-indexed products of `D::CATEGORY`.
    fn merge<D>(
        &self,
        document: Document,
        raw_records: &[Value],
        issues: &mut Vec<CatalogIssue>,
    ) -> HashMap<String, Spec<D>>
    where
        D: SpecDetails + DeserializeOwned,
    {
        let mut records: HashMap<String, D> = HashMap::new();
        for (position, raw) in raw_records.iter().enumerate() {
            let Some(record) = parse_entry::<D>(document, position, raw, issues) else {
                continue;
            };
            let id = record.product_id().to_string();
            if records.contains_key(&id) {
                issues.push(CatalogIssue::MalformedEntry {
                    document,
                    index: position,
                    message: format!("duplicate record for {}", id),
                });
                continue;
            }
            records.insert(id, record);
        }

        let mut merged = HashMap::new();
        for id in &self.order {
            let Some(product) = self.products.get(id) else {
                continue;
            };
            if product.category != D::CATEGORY {
                continue;
            }
            match records.remove(id) {
                Some(details) => {
                    merged.insert(
                        id.clone(),
                        Spec {
                            product: product.clone(),
                            details,
                        },
                    );
                }
                None => issues.push(CatalogIssue::MissingSpec {
                    category: D::CATEGORY,
                    product_id: id.clone(),
                }),
            }
        }

        let mut orphans: Vec<String> = records.into_keys().collect();
        orphans.sort();
        issues.extend(orphans.into_iter().map(|product_id| CatalogIssue::OrphanSpec {
            category: D::CATEGORY,
            product_id,
        }));

        merged
    }

    /// Problems found while indexing, in discovery order.
    pub fn issues(&self) -> &[CatalogIssue] {
        &self.issues
    }

    /// All products in catalog order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.order.iter().filter_map(|id| self.products.get(id))
    }

    pub fn ratings_for(&self, product_id: &str) -> Vec<&Rating> {
        self.ratings
            .iter()
            .filter(|rating| rating.product_id == product_id)
            .collect()
    }

    pub fn search(&self, query: &SearchQuery) -> Vec<&Product> {
        self.products().filter(|product| query.matches(product)).collect()
    }

    /// One category's specs as components, in catalog order.
    fn listed<D>(&self, specs: &HashMap<String, Spec<D>>) -> Vec<ComponentSpec>
    where
        D: SpecDetails + Clone,
    {
        self.order
            .iter()
            .filter_map(|id| specs.get(id))
            .cloned()
            .map(D::into_component)
            .collect()
    }

    fn component_count(&self) -> usize {
        self.cpus.len()
            + self.gpus.len()
            + self.motherboards.len()
            + self.psus.len()
            + self.cases.len()
            + self.coolers.len()
            + self.storage.len()
    }
}

impl CatalogLookup for CatalogIndex {
    fn product(&self, id: &str) -> Option<&Product> {
        self.products.get(id)
    }

    fn cpu(&self, id: &str) -> Option<&CpuSpec> {
        self.cpus.get(id)
    }

    fn gpu(&self, id: &str) -> Option<&GpuSpec> {
        self.gpus.get(id)
    }

    fn motherboard(&self, id: &str) -> Option<&MotherboardSpec> {
        self.motherboards.get(id)
    }

    fn psu(&self, id: &str) -> Option<&PsuSpec> {
        self.psus.get(id)
    }

    fn case(&self, id: &str) -> Option<&CaseSpec> {
        self.cases.get(id)
    }

    fn cooler(&self, id: &str) -> Option<&CoolerSpec> {
        self.coolers.get(id)
    }

    fn storage(&self, id: &str) -> Option<&StorageSpec> {
        self.storage.get(id)
    }

    fn components_in(&self, category: Category) -> Vec<ComponentSpec> {
        match category {
            Category::Cpu => self.listed(&self.cpus),
            Category::Gpu => self.listed(&self.gpus),
            Category::Motherboard => self.listed(&self.motherboards),
            Category::Psu => self.listed(&self.psus),
            Category::Case => self.listed(&self.cases),
            Category::Cooler => self.listed(&self.coolers),
            Category::Storage => self.listed(&self.storage),
        }
    }
}

fn parse_entry<T: DeserializeOwned>(
    document: Document,
    index: usize,
    raw: &Value,
    issues: &mut Vec<CatalogIssue>,
) -> Option<T> {
    match T::deserialize(raw) {
        Ok(entry) => Some(entry),
        Err(err) => {
            issues.push(CatalogIssue::MalformedEntry {
                document,
                index,
                message: err.to_string(),
            });
            None
        }
    }
}
