//! Cart Sheet Component
//!
//! Cart button with item count, and the slide-out panel listing cart lines.

use leptos::prelude::*;

use super::format_price;
use crate::store::{
    store_cart_totals, store_remove_from_cart, store_update_quantity, use_shop_store, ShopStateStoreFields,
};

#[component]
pub fn CartSheet() -> impl IntoView {
    let store = use_shop_store();
    let (open, set_open) = signal(false);

    let total_items = move || store_cart_totals(&store).items;

    view! {
        <button class="cart-btn" on:click=move |_| set_open.update(|o| *o = !*o)>
            "Cart"
            <Show when=move || { total_items() > 0 }>
                <span class="badge cart-count">{total_items}</span>
            </Show>
        </button>

        <Show when=move || open.get()>
            <aside class="cart-sheet">
                <header class="cart-sheet-header">
                    <h2>"Cart"</h2>
                    <p>
                        {move || {
                            let items = total_items();
                            if items > 0 { format!("Items in cart: {}", items) } else { "Your cart is empty".to_string() }
                        }}
                    </p>
                    <button class="close-btn" on:click=move |_| set_open.set(false)>"×"</button>
                </header>

                <ul class="cart-lines">
                    {move || store.cart().read().lines().iter().map(|line| {
                        let id = line.id();
                        view! {
                            <li class="cart-line">
                                <img src=line.plant.image_url.clone() alt=line.plant.name.clone() />
                                <div class="cart-line-info">
                                    <span class="cart-line-name">{line.plant.name.clone()}</span>
                                    <span class="cart-line-price">{format_price(line.plant.price)}</span>
                                </div>
                                <div class="cart-line-controls">
                                    <button on:click=move |_| store_update_quantity(&store, id, -1)>"−"</button>
                                    <span class="cart-line-qty">{line.quantity}</span>
                                    <button on:click=move |_| store_update_quantity(&store, id, 1)>"+"</button>
                                    <button class="remove-btn" on:click=move |_| store_remove_from_cart(&store, id)>"✕"</button>
                                </div>
                            </li>
                        }
                    }).collect_view()}
                </ul>

                <Show when=move || !store.cart().read().is_empty()>
                    <footer class="cart-total">
                        <span>"Total:"</span>
                        <span>{move || format_price(store_cart_totals(&store).price)}</span>
                    </footer>
                </Show>
            </aside>
        </Show>
    }
}
