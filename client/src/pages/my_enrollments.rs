//! The signed-in student's enrollments, with cancel.

use leptos::prelude::*;

use crate::components::loading::Loading;
use crate::net::api::ApiClient;
use crate::state::enrollments::{MyEnrollmentsState, short_date};
use crate::state::notify::Notifier;
use crate::state::session::SessionContext;
use crate::util::dom;
use crate::util::lifecycle::ViewScope;

#[component]
pub fn MyEnrollmentsPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let notifier = expect_context::<Notifier>();
    let scope = ViewScope::for_view();
    let state = RwSignal::new(MyEnrollmentsState { loading: true, ..MyEnrollmentsState::default() });

    Effect::new({
        let session = session.clone();
        let scope = scope.clone();
        move || {
            let current = session.snapshot_untracked();
            let api = ApiClient::for_session(&current);
            let user_id = current.user_id.unwrap_or_default();
            scope.spawn(async move { api.list_student_enrollments(&user_id).await }, move |result| {
                match result {
                    Ok(items) => state.set(MyEnrollmentsState { items, loading: false }),
                    Err(err) => {
                        state.update(|s| s.loading = false);
                        notifier.error(format!("Failed to load enrollments: {}", err.user_message()));
                    }
                }
            });
        }
    });

    let on_cancel = Callback::new(move |course_id: i64| {
        if !dom::confirm("Are you sure you want to cancel this enrollment?") {
            return;
        }
        let current = session.snapshot_untracked();
        let api = ApiClient::for_session(&current);
        let user_id = current.user_id.unwrap_or_default();
        scope.spawn(async move { api.cancel_enrollment(&user_id, course_id).await }, move |result| {
            match result {
                Ok(()) => {
                    state.update(|s| s.remove_course(course_id));
                    notifier.success("Enrollment cancelled");
                }
                Err(err) => notifier.error(format!("Failed to cancel enrollment: {}", err.user_message())),
            }
        });
    });

    view! {
        <div class="page">
            <h1>"My Enrolled Courses"</h1>
            <Show when=move || !state.with(|s| s.loading) fallback=|| view! { <Loading/> }>
                {move || {
                    let items = state.with(|s| s.items.clone());
                    if items.is_empty() {
                        return view! { <p class="empty">"You have not enrolled in any courses yet."</p> }
                            .into_any();
                    }
                    view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Course"</th>
                                    <th>"Enrolled on"</th>
                                    <th>"Status"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {items
                                    .into_iter()
                                    .map(|e| {
                                        let course_id = e.course_id;
                                        view! {
                                            <tr>
                                                <td>{e.course_title.clone()}</td>
                                                <td>{short_date(e.enrolled_at.as_deref())}</td>
                                                <td>{e.status.clone().unwrap_or_else(|| "ACTIVE".to_owned())}</td>
                                                <td>
                                                    <button
                                                        class="btn btn--danger"
                                                        on:click=move |_| on_cancel.run(course_id)
                                                    >
                                                        "Cancel"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                        .into_any()
                }}
            </Show>
        </div>
    }
}
