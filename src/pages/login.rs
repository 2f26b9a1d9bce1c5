//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use nursery_core::api::{AuthService, Credentials};
use nursery_core::notice::Notice;
use nursery_core::view::Page;

use crate::context::use_app_context;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let credentials = Credentials {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let navigate = navigate.clone();
        set_loading.set(true);

        spawn_local(async move {
            match ctx.client().login(&credentials).await {
                Ok(auth) => match ctx.establish(&auth) {
                    Ok(()) => {
                        ctx.notify(Notice::info("Signed in", format!("Welcome, {}!", auth.user.full_name)));
                        navigate(Page::Home.path(), Default::default());
                    }
                    Err(e) => {
                        log::warn!("Could not persist session: {}", e);
                        ctx.notify(Notice::from_error("Sign-in not saved", &e));
                    }
                },
                Err(e) => {
                    log::warn!("Login failed: {}", e);
                    ctx.notify(Notice::from_error("Sign-in failed", &e));
                }
            }
            set_loading.try_set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=submit>
                <h1>"Sign in"</h1>
                <div class="form-row">
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        placeholder="example@mail.com"
                        required=true
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-row">
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        placeholder="••••••••"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" disabled=move || loading.get()>
                    {move || if loading.get() { "Signing in..." } else { "Sign in" }}
                </button>
                <p class="auth-switch">
                    "No account yet? "
                    <A href=Page::Register.path()>"Register"</A>
                </p>
                <A href=Page::Home.path() attr:class="back-link">"Back to the store"</A>
            </form>
        </div>
    }
}
