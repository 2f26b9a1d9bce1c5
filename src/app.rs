//! Nursery Storefront App
//!
//! Root component: contexts, routes and the notice overlay.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use nursery_core::ApiConfig;

use crate::components::Toaster;
use crate::context::AppContext;
use crate::pages::{AdminPage, HomePage, LoginPage, RegisterPage};
use crate::store::ShopState;

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all children
    provide_context(AppContext::new(ApiConfig::default()));
    provide_context(Store::new(ShopState::default()));

    view! {
        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/register") view=RegisterPage />
                <Route path=path!("/admin") view=AdminPage />
            </Routes>
        </Router>
        <Toaster />
    }
}
