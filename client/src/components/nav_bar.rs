//! Top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Links come from the shared route table via `routes::nav_links`, so a
//! protected link is shown exactly when the guard would let the user in.
//! Logout clears the session and returns to the login page.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::routes::{self, LOGIN_PATH};
use crate::state::session::{Session, SessionContext};
use crate::util::lifecycle::use_mounted;

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let mounted = use_mounted();
    let navigate = use_navigate();

    let current = Memo::new({
        let session = session.clone();
        move |_| if mounted.get() { session.snapshot() } else { Session::default() }
    });

    let on_logout = move |_| {
        session.sign_out();
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <A href="/" attr:class="navbar__brand">
                "CourseApp"
            </A>
            <ul class="navbar__links">
                {move || {
                    routes::nav_links(&current.get())
                        .into_iter()
                        .filter_map(|route| route.nav.map(|nav| (route.path, nav.label)))
                        .map(|(path, label)| {
                            view! {
                                <li>
                                    <A href=path>{label}</A>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
            <Show when=move || current.get().is_authenticated()>
                <div class="navbar__account">
                    <A href=routes::PROFILE.path attr:class="navbar__user">
                        {move || current.get().username.unwrap_or_default()}
                    </A>
                    <button class="btn btn--ghost navbar__logout" on:click=on_logout.clone()>
                        "Logout"
                    </button>
                </div>
            </Show>
        </nav>
    }
}
