mod support;

use std::sync::Arc;

use part_picker::cart::CART_KEY;
use part_picker::{BuildSession, Cart, InMemoryKeyValueStore, KeyValueStore, Slot};
use support::catalog::fixture;
use support::store::FailingStore;

#[test]
fn checkout_a_finished_build() {
    let catalog = fixture();
    let store = InMemoryKeyValueStore::new();
    let mut session = BuildSession::new(&catalog, store.clone());
    session.select(Slot::Cpu, "CPU-AMD");
    session.select(Slot::Motherboard, "MB-AM4-ATX");
    session.select(Slot::Storage, "SSD-1TB");
    session.select(Slot::Storage, "SSD-1TB");
    assert!(session.checkout_ready());

    let mut cart = Cart::load(store.clone());
    cart.add_build(session.selection());
    assert_eq!(cart.item_count(), 4);
    assert_eq!(cart.subtotal(&catalog), session.evaluation().total_price);

    let reloaded = Cart::load(store);
    assert_eq!(reloaded.items(), cart.items());
}

#[test]
fn lines_join_catalog_products() {
    let catalog = fixture();
    let mut cart = Cart::load(InMemoryKeyValueStore::new());
    cart.add_item("PSU-450", 2);
    cart.add_item("DISCONTINUED", 1);

    let lines = cart.items_with_products(&catalog);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].product.map(|p| p.name.as_str()), Some("450W"));
    assert!(lines[1].product.is_none());
    assert_eq!(cart.subtotal(&catalog), 11000);
}

#[test]
fn non_array_cart_loads_empty() {
    let store = InMemoryKeyValueStore::new();
    store.set(CART_KEY, r#"{"prodID":"PSU-450"}"#).unwrap();
    assert!(Cart::load(store).items().is_empty());
}

#[test]
fn failing_store_keeps_cart_usable() {
    let catalog = fixture();
    let store = Arc::new(FailingStore::default());
    let mut cart = Cart::load(store.clone());
    cart.add_item("CPU-INTEL", 1);
    cart.update_quantity("CPU-INTEL", 3);
    assert_eq!(cart.subtotal(&catalog), 60000);
    assert_eq!(store.attempted_writes(), 2);
}
