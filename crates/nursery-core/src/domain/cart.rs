//! Shopping Cart
//!
//! In-memory set of cart lines keyed by plant id.
//!
//! Invariants:
//! - at most one line per plant id
//! - every line has quantity >= 1; a line driven to 0 is removed

use serde::{Deserialize, Serialize};

use super::plant::Plant;

/// A plant in the cart with its quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub plant: Plant,
    pub quantity: u32,
}

impl CartItem {
    pub fn id(&self) -> i64 {
        self.plant.id
    }

    pub fn subtotal(&self) -> f64 {
        self.plant.price * f64::from(self.quantity)
    }
}

/// Derived cart figures, recomputed on every read
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CartTotals {
    pub items: u32,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cart {
    lines: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `plant`, creating its line if needed
    pub fn add(&mut self, plant: &Plant) {
        match self.lines.iter_mut().find(|line| line.id() == plant.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartItem {
                plant: plant.clone(),
                quantity: 1,
            }),
        }
    }

    /// Drop the line for `id`; absent ids are ignored
    pub fn remove(&mut self, id: i64) {
        self.lines.retain(|line| line.id() != id);
    }

    /// Shift the quantity of `id` by `delta`, clamping at zero.
    /// A line that reaches zero is removed.
    pub fn update_quantity(&mut self, id: i64, delta: i32) {
        let Some(line) = self.lines.iter_mut().find(|line| line.id() == id) else {
            return;
        };
        let next = (i64::from(line.quantity) + i64::from(delta)).max(0);
        if next == 0 {
            self.remove(id);
        } else {
            line.quantity = u32::try_from(next).unwrap_or(u32::MAX);
        }
    }

    pub fn lines(&self) -> &[CartItem] {
        &self.lines
    }

    pub fn quantity_of(&self, id: i64) -> Option<u32> {
        self.lines.iter().find(|line| line.id() == id).map(|line| line.quantity)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn total_price(&self) -> f64 {
        self.lines.iter().map(CartItem::subtotal).sum()
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals {
            items: self.total_items(),
            price: self.total_price(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_plant(id: i64, price: f64) -> Plant {
        Plant {
            id,
            name: format!("Plant {}", id),
            category: "Shrubs".to_string(),
            price,
            image_url: String::new(),
            description: String::new(),
            in_stock: true,
        }
    }

    #[test]
    fn test_add_twice_increments() {
        let mut cart = Cart::new();
        let pine = make_plant(1, 1200.0);
        cart.add(&pine);
        cart.add(&pine);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.quantity_of(1), Some(2));
        assert_eq!(cart.totals(), CartTotals { items: 2, price: 2400.0 });
    }

    #[test]
    fn test_quantity_equals_number_of_adds() {
        for n in 1..=25u32 {
            let mut cart = Cart::new();
            let plant = make_plant(7, 600.0);
            for _ in 0..n {
                cart.add(&plant);
            }
            assert_eq!(cart.quantity_of(7), Some(n));
            assert_eq!(cart.lines().len(), 1);
        }
    }

    #[test]
    fn test_large_negative_delta_removes_line() {
        let mut cart = Cart::new();
        cart.add(&make_plant(2, 800.0));
        cart.update_quantity(2, -5);

        assert!(cart.is_empty());
        assert_eq!(cart.totals(), CartTotals::default());
    }

    #[test]
    fn test_update_quantity_never_leaves_zero() {
        let mut cart = Cart::new();
        let a = make_plant(1, 100.0);
        let b = make_plant(2, 50.0);
        for _ in 0..3 {
            cart.add(&a);
        }
        cart.add(&b);

        for delta in [-1, 2, -4, 1, -1, -1, 3, -10] {
            cart.update_quantity(1, delta);
            cart.update_quantity(2, delta);
            assert!(cart.lines().iter().all(|line| line.quantity >= 1));
        }
    }

    #[test]
    fn test_update_quantity_steps() {
        let mut cart = Cart::new();
        cart.add(&make_plant(5, 1500.0));
        cart.update_quantity(5, 1);
        assert_eq!(cart.quantity_of(5), Some(2));
        cart.update_quantity(5, -1);
        assert_eq!(cart.quantity_of(5), Some(1));
        cart.update_quantity(5, -1);
        assert_eq!(cart.quantity_of(5), None);
    }

    #[test]
    fn test_update_absent_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(&make_plant(1, 10.0));
        let before = cart.clone();
        cart.update_quantity(99, 3);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_absent_id_leaves_cart_unchanged() {
        let mut cart = Cart::new();
        cart.add(&make_plant(1, 10.0));
        cart.add(&make_plant(2, 20.0));
        let before = cart.clone();

        cart.remove(3);
        assert_eq!(cart, before);

        cart.remove(1);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].id(), 2);
    }

    #[test]
    fn test_totals_match_lines_and_are_stable() {
        let mut cart = Cart::new();
        cart.add(&make_plant(1, 1200.0));
        cart.add(&make_plant(4, 800.0));
        cart.add(&make_plant(4, 800.0));
        cart.add(&make_plant(8, 500.0));

        let expected_price: f64 = cart.lines().iter().map(|l| l.plant.price * l.quantity as f64).sum();
        let expected_items: u32 = cart.lines().iter().map(|l| l.quantity).sum();

        let first = cart.totals();
        assert_eq!(first.price, expected_price);
        assert_eq!(first.items, expected_items);
        assert_eq!(first, cart.totals());
        assert_eq!(first, CartTotals { items: 4, price: 3300.0 });
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add(&make_plant(3, 1.0));
        cart.add(&make_plant(1, 1.0));
        cart.add(&make_plant(3, 1.0));
        let ids: Vec<i64> = cart.lines().iter().map(CartItem::id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_cart_item_serializes_flat() {
        let item = CartItem {
            plant: make_plant(1, 1200.0),
            quantity: 2,
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["quantity"], 2);
    }
}
