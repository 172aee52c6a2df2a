//! Shopping cart persisted under the `empireCart` key.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::build::{BuildSelection, Clock, SystemClock};
use crate::catalog::{CatalogLookup, Product};
use crate::storage::{load_list, persist, KeyValueStore};

pub const CART_KEY: &str = "empireCart";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(rename = "prodID")]
    pub product_id: String,
    pub quantity: u32,
    pub added_at: DateTime<Utc>,
}

/// Cart line joined with its catalog product, `None` if the product is gone.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine<'a> {
    pub item: &'a CartItem,
    pub product: Option<&'a Product>,
}

/// Cart contents mirrored to a [`KeyValueStore`] after every change.
pub struct Cart<S> {
    store: S,
    items: Vec<CartItem>,
    clock: Arc<dyn Clock>,
}

impl<S: KeyValueStore> Cart<S> {
    /// Reads the persisted cart, dropping entries that do not decode.
    pub fn load(store: S) -> Self {
        let items: Vec<CartItem> = load_list(&store, CART_KEY);
        tracing::debug!(target: "cart", items = items.len(), "cart loaded");
        Self {
            store,
            items,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, product_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.product_id == product_id)
    }

    /// Adds `quantity` of a product, merging with an existing line. A zero quantity
    /// is ignored.
    pub fn add_item(&mut self, product_id: &str, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self.items.iter_mut().find(|item| item.product_id == product_id) {
            Some(item) => item.quantity = item.quantity.saturating_add(quantity),
            None => self.items.push(CartItem {
                product_id: product_id.to_string(),
                quantity,
                added_at: self.clock.now(),
            }),
        }
        tracing::debug!(target: "cart", product_id, quantity, "item added");
        self.save();
    }

    /// Returns whether a line was removed.
    pub fn remove_item(&mut self, product_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.product_id != product_id);
        let removed = self.items.len() < before;
        if removed {
            tracing::debug!(target: "cart", product_id, "item removed");
            self.save();
        }
        removed
    }

    /// Sets a line's quantity; zero or less removes it. Unknown lines are left alone.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id);
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(item) = self.items.iter_mut().find(|item| item.product_id == product_id) {
            item.quantity = quantity;
            self.save();
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
        tracing::debug!(target: "cart", "cart cleared");
        self.save();
    }

    /// Total units across every line.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Price times quantity over every line; products missing from the catalog add 0.
    pub fn subtotal<C: CatalogLookup + ?Sized>(&self, catalog: &C) -> u64 {
        self.items
            .iter()
            .filter_map(|item| {
                catalog
                    .product(&item.product_id)
                    .map(|product| product.price * u64::from(item.quantity))
            })
            .sum()
    }

    pub fn items_with_products<'a, C: CatalogLookup + ?Sized>(
        &'a self,
        catalog: &'a C,
    ) -> Vec<CartLine<'a>> {
        self.items
            .iter()
            .map(|item| CartLine {
                item,
                product: catalog.product(&item.product_id),
            })
            .collect()
    }

    /// Adds one of every selected component; storage once per occurrence.
    pub fn add_build(&mut self, selection: &BuildSelection) {
        for (_, product_id) in selection.entries() {
            self.add_item(product_id, 1);
        }
    }

    fn save(&self) {
        persist(&self.store, CART_KEY, &self.items);
    }
}
