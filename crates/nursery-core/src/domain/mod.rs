//! Domain Layer
//!
//! Storefront entities and the cart reducer.
//! This layer has no I/O.

mod cart;
mod catalog;
mod plant;
mod user;

pub use cart::{Cart, CartItem, CartTotals};
pub use catalog::Catalog;
pub use plant::{Plant, PlantDraft};
pub use user::User;
