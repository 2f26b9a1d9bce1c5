//! Site Header Component
//!
//! Brand, home page section switch, session box and cart.

use leptos::prelude::*;
use leptos_router::components::A;

use nursery_core::view::{Page, Section};

use super::CartSheet;
use crate::context::use_app_context;
use crate::store::{use_shop_store, ShopStateStoreFields};

#[component]
pub fn SiteHeader() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_shop_store();

    view! {
        <header class="site-header">
            <span class="brand">"RamNursery"</span>

            <nav class="section-nav">
                {Section::ALL.iter().map(|&section| {
                    let is_active = move || store.section().get() == section;
                    view! {
                        <button
                            class=move || if is_active() { "nav-btn active" } else { "nav-btn" }
                            on:click=move |_| *store.section().write() = section
                        >
                            {section.label()}
                        </button>
                    }
                }).collect_view()}
            </nav>

            <div class="session-box">
                {move || match ctx.session.with(|s| s.current_user().cloned()) {
                    Some(user) => view! {
                        <span class="user-name">{user.full_name}</span>
                        {user.is_admin.then(|| view! {
                            <A href=Page::Admin.path() attr:class="outline-btn">"Admin"</A>
                        })}
                        <button class="ghost-btn" on:click=move |_| ctx.logout()>"Log out"</button>
                    }.into_any(),
                    None => view! {
                        <A href=Page::Login.path() attr:class="outline-btn">"Sign in"</A>
                    }.into_any(),
                }}
                <CartSheet />
            </div>
        </header>
    }
}
