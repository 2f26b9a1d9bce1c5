//! Home Page
//!
//! Header plus one of the storefront sections.

use leptos::prelude::*;

use nursery_core::domain::Catalog;
use nursery_core::view::Section;

use crate::components::{PlantCard, SiteHeader};
use crate::store::{use_shop_store, ShopStateStoreFields};

#[component]
pub fn HomePage() -> impl IntoView {
    let store = use_shop_store();

    view! {
        <div class="page">
            <SiteHeader />
            <main class="main-content">
                {move || match store.section().get() {
                    Section::Catalog => view! { <CatalogSection /> }.into_any(),
                    Section::About => view! { <AboutSection /> }.into_any(),
                    Section::Delivery => view! { <DeliverySection /> }.into_any(),
                    Section::Contacts => view! { <ContactsSection /> }.into_any(),
                }}
            </main>
            <footer class="site-footer">
                <p>"© 2024 RamNursery. All rights reserved."</p>
            </footer>
        </div>
    }
}

#[component]
fn CatalogSection() -> impl IntoView {
    let catalog = Catalog::nursery();

    view! {
        <section class="hero">
            <h1>"RamNursery plant nursery"</h1>
            <p>"Quality saplings of conifers and deciduous trees, shrubs and perennials"</p>
        </section>
        <div class="plant-grid">
            {catalog.plants().iter().cloned().map(|plant| view! { <PlantCard plant=plant /> }).collect_view()}
        </div>
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section class="info-section">
            <h2>"About us"</h2>
            <p>
                "RamNursery has been growing plants since 2010: conifer and deciduous trees, "
                "ornamental shrubs and perennial flowers."
            </p>
            <div class="info-cards">
                <div class="info-card">
                    <h3>"Own cultivation"</h3>
                    <p>"Every plant is grown in our nursery following proper agronomy"</p>
                </div>
                <div class="info-card">
                    <h3>"Careful delivery"</h3>
                    <p>"Delivery across Moscow and the Moscow region"</p>
                </div>
                <div class="info-card">
                    <h3>"Guarantee"</h3>
                    <p>"We guarantee our plants take root"</p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn DeliverySection() -> impl IntoView {
    view! {
        <section class="info-section">
            <h2>"Delivery and payment"</h2>
            <div class="info-card">
                <h3>"Delivery"</h3>
                <p>"We deliver across Moscow and the Moscow region. Pickup from the nursery is also available."</p>
            </div>
            <div class="info-card">
                <h3>"Payment"</h3>
                <ul>
                    <li>"Cash on delivery"</li>
                    <li>"Card on delivery"</li>
                    <li>"Online payment on the website"</li>
                    <li>"Bank transfer for companies"</li>
                </ul>
            </div>
        </section>
    }
}

#[component]
fn ContactsSection() -> impl IntoView {
    view! {
        <section class="info-section">
            <h2>"Contacts"</h2>
            <div class="info-card">
                <h3>"Address"</h3>
                <p>"Moscow region, Ramensky district"</p>
            </div>
        </section>
    }
}
