//! Student and admin sign-in pages.
//!
//! Both submit to the same gateway; the admin variant additionally rejects
//! non-admin accounts. On success the user lands on their role's dashboard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::net::auth;
use crate::state::notify::Notifier;
use crate::state::session::SessionContext;
use crate::util::lifecycle::ViewScope;
use crate::util::validate::validate_login;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! { <LoginForm admin=false/> }
}

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    view! { <LoginForm admin=true/> }
}

#[component]
fn LoginForm(admin: bool) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let notifier = expect_context::<Notifier>();
    let navigate = use_navigate();
    let scope = ViewScope::for_view();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let message = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match validate_login(&username.get_untracked(), &password.get_untracked()) {
            Ok(c) => c,
            Err(e) => {
                message.set(Some(e.message.to_owned()));
                return;
            }
        };
        busy.set(true);
        message.set(None);

        let api = ApiClient::anonymous();
        let sink = session.clone();
        let navigate = navigate.clone();
        scope.spawn(
            async move {
                if admin {
                    auth::admin_login(&api, &sink, &credentials).await
                } else {
                    auth::login(&api, &sink, &credentials).await
                }
            },
            move |result| {
                busy.set(false);
                match result {
                    Ok(role) => {
                        notifier.success("Login successful");
                        navigate(role.landing_path(), NavigateOptions::default());
                    }
                    Err(err) => {
                        log::warn!("login failed: {err:?}");
                        message.set(Some(err.to_string()));
                    }
                }
            },
        );
    };

    let title = if admin { "Admin Login" } else { "Login" };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>{title}</h1>
                <label class="field">
                    <span>"Username"</span>
                    <input
                        type="text"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"Password"</span>
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || message.get().is_some()>
                    <p class="auth-card__error">{move || message.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Login" }}
                </button>
                {(!admin)
                    .then(|| {
                        view! {
                            <p class="auth-card__alt">
                                "No account? " <A href="/register">"Register"</A>
                            </p>
                        }
                    })}
            </form>
        </div>
    }
}
