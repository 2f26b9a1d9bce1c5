//! UI Components
//!
//! Reusable Leptos components.

mod cart_sheet;
mod plant_card;
mod plant_form;
mod site_header;
mod toaster;

pub use cart_sheet::CartSheet;
pub use plant_card::PlantCard;
pub use plant_form::PlantFormDialog;
pub use site_header::SiteHeader;
pub use toaster::Toaster;

/// Whole-ruble price with the currency sign
pub fn format_price(price: f64) -> String {
    format!("{} ₽", price.round() as i64)
}
