//! Plant Form Dialog Component
//!
//! Create/edit dialog for the admin screen. The dialog state lives in the
//! page's `AdminConsole`; this component only binds the form fields.

use leptos::prelude::*;

use nursery_core::admin::AdminConsole;
use nursery_core::domain::PlantDraft;

/// Modal form for a new or existing plant
///
/// # Arguments
/// * `console` - admin screen state holding the dialog
/// * `on_submit` - runs when the form is submitted
#[component]
pub fn PlantFormDialog(
    console: RwSignal<AdminConsole>,
    #[prop(into)] on_submit: Callback<()>,
) -> impl IntoView {
    let field = move |read: fn(&PlantDraft) -> String| move || console.with(|c| read(c.dialog.form()));
    let edit = move |apply: fn(&mut PlantDraft, String)| {
        move |ev: web_sys::Event| {
            let value = event_target_value(&ev);
            console.update(|c| apply(c.dialog.form_mut(), value));
        }
    };

    view! {
        <Show when=move || console.with(|c| c.dialog.is_open())>
            <div class="dialog-backdrop" on:click=move |_| console.update(|c| c.dialog.cancel())></div>
            <div class="dialog">
                <h2>{move || console.with(|c| c.dialog.title())}</h2>
                <p class="dialog-description">"Fill in the plant details"</p>
                <form on:submit=move |ev: web_sys::SubmitEvent| {
                    ev.prevent_default();
                    on_submit.run(());
                }>
                    <div class="form-row">
                        <label for="name">"Name"</label>
                        <input
                            id="name"
                            required=true
                            prop:value=field(|f| f.name.clone())
                            on:input=edit(|f, v| f.name = v)
                        />
                    </div>
                    <div class="form-row">
                        <label for="category">"Category"</label>
                        <input
                            id="category"
                            required=true
                            prop:value=field(|f| f.category.clone())
                            on:input=edit(|f, v| f.category = v)
                        />
                    </div>
                    <div class="form-row">
                        <label for="price">"Price (₽)"</label>
                        <input
                            id="price"
                            type="number"
                            min="0"
                            required=true
                            prop:value=field(|f| f.price.to_string())
                            on:input=edit(|f, v| f.price = v.trim().parse().unwrap_or(0.0))
                        />
                    </div>
                    <div class="form-row">
                        <label for="in_stock">"In stock"</label>
                        <select
                            id="in_stock"
                            prop:value=field(|f| f.in_stock.to_string())
                            on:change=edit(|f, v| f.in_stock = v == "true")
                        >
                            <option value="true">"Yes"</option>
                            <option value="false">"No"</option>
                        </select>
                    </div>
                    <div class="form-row">
                        <label for="image_url">"Image URL"</label>
                        <input
                            id="image_url"
                            prop:value=field(|f| f.image_url.clone())
                            on:input=edit(|f, v| f.image_url = v)
                        />
                    </div>
                    <div class="form-row">
                        <label for="description">"Description"</label>
                        <textarea
                            id="description"
                            prop:value=field(|f| f.description.clone())
                            on:input=edit(|f, v| f.description = v)
                        ></textarea>
                    </div>
                    <div class="dialog-actions">
                        <button
                            type="button"
                            class="outline-btn"
                            disabled=move || console.with(|c| c.dialog.is_pending())
                            on:click=move |_| console.update(|c| c.dialog.cancel())
                        >
                            "Cancel"
                        </button>
                        <button type="submit" disabled=move || console.with(|c| c.dialog.is_pending())>
                            "Save"
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
