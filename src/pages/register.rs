//! Registration Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use nursery_core::api::{AuthService, Registration};
use nursery_core::notice::Notice;
use nursery_core::view::Page;

use crate::context::use_app_context;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    let form = RwSignal::new(Registration::default());
    let (loading, set_loading) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let registration = form.get_untracked();
        let navigate = navigate.clone();
        set_loading.set(true);

        spawn_local(async move {
            match ctx.client().register(&registration).await {
                Ok(auth) => match ctx.establish(&auth) {
                    Ok(()) => {
                        ctx.notify(Notice::info("Registration successful", "Welcome to RamNursery!"));
                        navigate(Page::Home.path(), Default::default());
                    }
                    Err(e) => {
                        log::warn!("Could not persist session: {}", e);
                        ctx.notify(Notice::from_error("Registration not saved", &e));
                    }
                },
                Err(e) => {
                    log::warn!("Registration failed: {}", e);
                    ctx.notify(Notice::from_error("Registration failed", &e));
                }
            }
            set_loading.try_set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=submit>
                <h1>"Create an account"</h1>
                <div class="form-row">
                    <label for="full_name">"Full name"</label>
                    <input
                        id="full_name"
                        placeholder="Ivan Ivanov"
                        required=true
                        prop:value=move || form.with(|f| f.full_name.clone())
                        on:input=move |ev| form.update(|f| f.full_name = event_target_value(&ev))
                    />
                </div>
                <div class="form-row">
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        placeholder="example@mail.com"
                        required=true
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </div>
                <div class="form-row">
                    <label for="phone">"Phone"</label>
                    <input
                        id="phone"
                        type="tel"
                        placeholder="+7 (999) 123-45-67"
                        prop:value=move || form.with(|f| f.phone.clone())
                        on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                    />
                </div>
                <div class="form-row">
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        placeholder="••••••••"
                        required=true
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                </div>
                <button type="submit" disabled=move || loading.get()>
                    {move || if loading.get() { "Registering..." } else { "Register" }}
                </button>
                <p class="auth-switch">
                    "Already have an account? "
                    <A href=Page::Login.path()>"Sign in"</A>
                </p>
            </form>
        </div>
    }
}
