//! Route-guard wrapper for protected pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router wraps every protected page in `Guarded`. The decision is made
//! from `sessionStorage` on every render, so a logout or a role change in
//! another tab takes effect on the next navigation.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::components::loading::Loading;
use crate::routes::{self, GuardDecision, RouteDescriptor};
use crate::state::session::SessionContext;
use crate::util::lifecycle::use_mounted;

#[component]
pub fn Guarded(route: &'static RouteDescriptor, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let mounted = use_mounted();

    move || {
        // The server never sees the session, so decide only in the browser.
        if !mounted.get() {
            return view! { <Loading/> }.into_any();
        }
        match routes::guard(&session.snapshot(), route) {
            GuardDecision::Allow => children().into_any(),
            GuardDecision::Redirect(path) => {
                log::info!("guard redirected {} to {path}", route.path);
                view! { <Redirect path=path/> }.into_any()
            }
        }
    }
}
