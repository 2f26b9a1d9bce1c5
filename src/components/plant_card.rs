//! Plant Card Component

use leptos::prelude::*;

use nursery_core::domain::Plant;

use super::format_price;
use crate::store::{store_add_to_cart, use_shop_store};

/// Catalog card with an add-to-cart button (disabled when out of stock)
#[component]
pub fn PlantCard(plant: Plant) -> impl IntoView {
    let store = use_shop_store();
    let in_stock = plant.in_stock;
    let for_cart = plant.clone();

    view! {
        <div class="plant-card">
            <img class="plant-image" src=plant.image_url.clone() alt=plant.name.clone() />
            <div class="plant-card-body">
                <span class="badge">{plant.category.clone()}</span>
                <h3>{plant.name.clone()}</h3>
                <p class="plant-description">{plant.description.clone()}</p>
                <p class="plant-price">{format_price(plant.price)}</p>
            </div>
            <button
                class="add-btn"
                disabled=!in_stock
                on:click=move |_| store_add_to_cart(&store, &for_cart)
            >
                {if in_stock { "Add to cart" } else { "Out of stock" }}
            </button>
        </div>
    }
}
