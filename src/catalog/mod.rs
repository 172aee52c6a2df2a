//! Catalog - typed, read-only lookup over the storefront's static product data.
//!
//! The catalog is assembled from one products document plus one technical-record
//! document per [`Category`]. Each component spec is the base [`Product`] merged with
//! its category record. Products whose record is missing stay browsable but are not
//! offered as components; the problem is logged and kept in
//! [`CatalogIndex::issues`].
//!
//! ## Example
//!
//! ```ignore
//! use part_picker::{catalog, CatalogLookup};
//!
//! let catalog = catalog::bundled();
//! let cpu = catalog.cpu("PROD001").unwrap();
//! println!("{} uses socket {}", cpu.name(), cpu.socket_type);
//! ```

mod category;
mod index;
mod product;
mod search;
mod source;
mod spec;
pub mod tokens;

use once_cell::sync::Lazy;

pub use category::Category;
pub use index::{CatalogIndex, CatalogIssue};
pub use product::{Product, Rating};
pub use search::{paginate, Page, SearchQuery, DEFAULT_PAGE_SIZE};
pub use source::{CatalogSource, Document};
pub use spec::{
    CaseDetails, CaseSpec, ComponentSpec, CoolerDetails, CoolerSpec, CoolerType, CpuDetails,
    CpuSpec, GpuDetails, GpuSpec, MotherboardDetails, MotherboardSpec, PsuDetails, PsuSpec, Spec,
    SpecDetails, StorageDetails, StorageSpec,
};

/// Lookup contract consumed by the compatibility engine, carts and sessions.
///
/// Every getter returns `None` for an unknown id or an id of another category; none of
/// them fail.
pub trait CatalogLookup {
    fn product(&self, id: &str) -> Option<&Product>;

    fn cpu(&self, id: &str) -> Option<&CpuSpec>;

    fn gpu(&self, id: &str) -> Option<&GpuSpec>;

    fn motherboard(&self, id: &str) -> Option<&MotherboardSpec>;

    fn psu(&self, id: &str) -> Option<&PsuSpec>;

    fn case(&self, id: &str) -> Option<&CaseSpec>;

    fn cooler(&self, id: &str) -> Option<&CoolerSpec>;

    fn storage(&self, id: &str) -> Option<&StorageSpec>;

    /// Every component of `category`, in catalog order.
    fn components_in(&self, category: Category) -> Vec<ComponentSpec>;

    /// The component with this id, whatever its category.
    fn component(&self, id: &str) -> Option<ComponentSpec> {
        let product = self.product(id)?;
        match product.category {
            Category::Cpu => self.cpu(id).cloned().map(ComponentSpec::Cpu),
            Category::Gpu => self.gpu(id).cloned().map(ComponentSpec::Gpu),
            Category::Motherboard => self.motherboard(id).cloned().map(ComponentSpec::Motherboard),
            Category::Psu => self.psu(id).cloned().map(ComponentSpec::Psu),
            Category::Case => self.case(id).cloned().map(ComponentSpec::Case),
            Category::Cooler => self.cooler(id).cloned().map(ComponentSpec::Cooler),
            Category::Storage => self.storage(id).cloned().map(ComponentSpec::Storage),
        }
    }
}

static BUNDLED: Lazy<CatalogIndex> = Lazy::new(|| match CatalogSource::bundled() {
    Ok(source) => CatalogIndex::build(source),
    Err(err) => {
        tracing::error!(target: "catalog", error = %err, "bundled catalog unreadable, serving empty catalog");
        CatalogIndex::default()
    }
});

/// The catalog compiled into the crate, indexed on first use.
pub fn bundled() -> &'static CatalogIndex {
    &BUNDLED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_is_consistent() {
        let catalog = bundled();
        assert!(catalog.issues().is_empty(), "{:?}", catalog.issues());
        for category in Category::ALL {
            assert!(!catalog.components_in(category).is_empty(), "{}", category);
        }
    }

    #[test]
    fn bundled_lookup_by_category() {
        let catalog = bundled();
        let cpu = catalog.cpu("PROD001").unwrap();
        assert_eq!(cpu.socket_type, "LGA1700");
        assert!(catalog.gpu("PROD001").is_none());
        assert!(catalog.product("PROD999").is_none());
    }

    #[test]
    fn component_dispatches_on_category() {
        let catalog = bundled();
        match catalog.component("PROD013") {
            Some(ComponentSpec::Psu(psu)) => assert_eq!(psu.wattage, 750),
            other => panic!("expected a PSU, got {:?}", other),
        }
    }

    #[test]
    fn bundled_index_is_shared() {
        assert!(std::ptr::eq(bundled(), bundled()));
    }
}
