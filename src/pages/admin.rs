//! Admin Page
//!
//! Catalog editor. Entry is gated on an admin session; anyone else is sent
//! back to the store before any catalog data is requested. The gate is a UI
//! convenience only: the catalog service has to authorize writes itself.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use nursery_core::admin::AdminConsole;
use nursery_core::api::CatalogService;
use nursery_core::view::Page;

use crate::components::{format_price, PlantFormDialog};
use crate::context::use_app_context;

#[component]
pub fn AdminPage() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();
    let console = RwSignal::new(AdminConsole::new());

    let fetch_plants = move || {
        spawn_local(async move {
            let result = ctx.client().list().await;
            if let Some(notice) = console.try_update(|c| c.finish_refresh(result)).flatten() {
                ctx.notify(notice);
            }
        });
    };

    // Gate on mount; denied visitors never trigger a fetch
    let gate_navigate = navigate.clone();
    Effect::new(move |_| {
        let entered = ctx.session.with_untracked(|s| console.try_update(|c| c.enter(s)));
        match entered {
            Some(Ok(())) => fetch_plants(),
            Some(Err(denied)) => {
                ctx.notify(denied.notice());
                gate_navigate(Page::Home.path(), Default::default());
            }
            None => {}
        }
    });

    let submit = move |_: ()| {
        let request = match console.try_update(|c| c.begin_submit()) {
            Some(Ok(Some(request))) => request,
            Some(Ok(None)) | None => return,
            Some(Err(notice)) => {
                ctx.notify(notice);
                return;
            }
        };
        spawn_local(async move {
            let outcome = ctx.client().upsert(&request).await;
            let Some(reply) = console.try_update(|c| c.finish_submit(&request, &outcome)) else {
                return;
            };
            ctx.notify(reply.notice);
            if reply.reload {
                fetch_plants();
            }
        });
    };

    let logout_navigate = navigate.clone();
    let logout = move |_| {
        ctx.logout();
        logout_navigate(Page::Login.path(), Default::default());
    };
    let home_navigate = navigate;

    view! {
        <div class="admin-page">
            <header class="admin-header">
                <h1>"Catalog administration"</h1>
                <div class="admin-actions">
                    <button class="outline-btn" on:click=move |_| home_navigate(Page::Home.path(), Default::default())>
                        "Back to the store"
                    </button>
                    <button class="outline-btn" on:click=logout>"Log out"</button>
                </div>
            </header>

            <Show
                when=move || !console.with(|c| c.is_loading())
                fallback=|| view! { <p class="loading">"Loading..."</p> }
            >
                <div class="admin-toolbar">
                    <h2>"Plants"</h2>
                    <button
                        disabled=move || console.with(|c| c.dialog.is_pending())
                        on:click=move |_| console.update(|c| c.dialog.open_create())
                    >
                        "Add plant"
                    </button>
                </div>

                <table class="plant-table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Name"</th>
                            <th>"Category"</th>
                            <th>"Price"</th>
                            <th>"Stock"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || console.with(|c| c.plants().iter().cloned().map(|plant| {
                            let id = plant.id;
                            let name = plant.name.clone();
                            let category = plant.category.clone();
                            let price = format_price(plant.price);
                            let (badge_class, badge_text) = if plant.in_stock {
                                ("badge", "In stock")
                            } else {
                                ("badge muted", "Out of stock")
                            };
                            view! {
                                <tr>
                                    <td>{id}</td>
                                    <td>{name}</td>
                                    <td>{category}</td>
                                    <td>{price}</td>
                                    <td><span class=badge_class>{badge_text}</span></td>
                                    <td>
                                        <button
                                            class="ghost-btn"
                                            on:click=move |_| console.update(|c| c.dialog.open_edit(&plant))
                                        >
                                            "Edit"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view())}
                    </tbody>
                </table>
            </Show>

            <PlantFormDialog console=console on_submit=submit />
        </div>
    }
}
