//! Storefront State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use nursery_core::domain::{Cart, CartTotals, Plant};
use nursery_core::view::Section;

/// Home page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ShopState {
    /// Cart lines, in the order plants were first added
    pub cart: Cart,
    /// Section shown on the home page
    pub section: Section,
}

/// Type alias for the store
pub type ShopStore = Store<ShopState>;

/// Get the shop store from context
pub fn use_shop_store() -> ShopStore {
    expect_context::<ShopStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_add_to_cart(store: &ShopStore, plant: &Plant) {
    store.cart().write().add(plant);
}

pub fn store_remove_from_cart(store: &ShopStore, id: i64) {
    store.cart().write().remove(id);
}

pub fn store_update_quantity(store: &ShopStore, id: i64, delta: i32) {
    store.cart().write().update_quantity(id, delta);
}

pub fn store_cart_totals(store: &ShopStore) -> CartTotals {
    store.cart().read().totals()
}
