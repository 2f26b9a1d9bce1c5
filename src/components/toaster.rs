//! Notice Overlay
//!
//! Renders the context's notices as dismissible toasts.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn Toaster() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="toaster">
            <For
                each=move || ctx.notices.get()
                key=|(id, _)| *id
                children=move |(id, notice)| {
                    let class = if notice.is_destructive() { "toast destructive" } else { "toast" };
                    view! {
                        <div class=class on:click=move |_| ctx.dismiss(id)>
                            <strong class="toast-title">{notice.title}</strong>
                            <p class="toast-description">{notice.description}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}
