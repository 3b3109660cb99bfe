//! Toast stack rendered once at the app root.

use leptos::prelude::*;

use crate::state::notify::Notifier;

#[component]
pub fn Toaster() -> impl IntoView {
    let notifier = expect_context::<Notifier>();
    let queue = notifier.queue();

    view! {
        <div class="toaster" aria-live="polite">
            {move || {
                queue
                    .get()
                    .items
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class={toast.level.class()} role="alert">
                                <span class="toast__message">{toast.message}</span>
                                <button
                                    class="toast__close"
                                    aria-label="Dismiss"
                                    on:click=move |_| notifier.dismiss(id)
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
