//! Account registration page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::net::auth;
use crate::routes::LOGIN_PATH;
use crate::state::session::Role;
use crate::util::lifecycle::{ViewScope, sleep_ms};
use crate::util::validate::validate_registration;

/// Pause on the confirmation before moving to the login page.
const REDIRECT_DELAY_MS: u32 = 1_500;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();
    let scope = ViewScope::for_view();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let registration = match validate_registration(
            &username.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &role.get_untracked(),
        ) {
            Ok(r) => r,
            Err(e) => {
                error.set(Some(e.message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);
        success.set(None);

        let api = ApiClient::anonymous();
        let navigate = navigate.clone();
        let redirect_scope = scope.clone();
        scope.spawn(async move { auth::register(&api, &registration).await }, move |result| {
            busy.set(false);
            match result {
                Ok(()) => {
                    success.set(Some("Registration successful! Redirecting to login...".to_owned()));
                    redirect_scope.spawn(sleep_ms(REDIRECT_DELAY_MS), move |()| {
                        navigate(LOGIN_PATH, NavigateOptions::default());
                    });
                }
                Err(err) => {
                    log::warn!("registration failed: {err:?}");
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Register"</h1>
                <label class="field">
                    <span>"Username"</span>
                    <input
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"Email"</span>
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"Password"</span>
                    <input
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"Role"</span>
                    <select prop:value=move || role.get() on:change=move |ev| role.set(event_target_value(&ev))>
                        <option value="">"Select role"</option>
                        <option value={Role::User.as_str()}>"Student"</option>
                        <option value={Role::Admin.as_str()}>"Admin"</option>
                    </select>
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="auth-card__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || success.get().is_some()>
                    <p class="auth-card__success">{move || success.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Registering..." } else { "Register" }}
                </button>
                <p class="auth-card__alt">"Already registered? " <A href=LOGIN_PATH>"Login"</A></p>
            </form>
        </div>
    }
}
