//! All enrollments, grouped by course, with cancel.

use leptos::prelude::*;

use crate::components::loading::Loading;
use crate::net::api::ApiClient;
use crate::net::types::Enrollment;
use crate::state::enrollments::{group_by_course, short_date};
use crate::state::notify::Notifier;
use crate::state::session::SessionContext;
use crate::util::dom;
use crate::util::lifecycle::ViewScope;

#[component]
pub fn AdminEnrollmentsPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let notifier = expect_context::<Notifier>();
    let scope = ViewScope::for_view();
    let items = RwSignal::new(Vec::<Enrollment>::new());
    let loading = RwSignal::new(true);

    let load = Callback::new({
        let session = session.clone();
        let scope = scope.clone();
        move |()| {
            let api = ApiClient::for_session(&session.snapshot_untracked());
            scope.spawn(async move { api.list_all_enrollments().await }, move |result| {
                loading.set(false);
                match result {
                    Ok(list) => items.set(list),
                    Err(err) => notifier.error(format!("Failed to load enrollments: {}", err.user_message())),
                }
            });
        }
    });
    Effect::new(move || load.run(()));

    let on_cancel = Callback::new(move |(student_id, course_id): (String, i64)| {
        if !dom::confirm("Cancel this student's enrollment?") {
            return;
        }
        let api = ApiClient::for_session(&session.snapshot_untracked());
        scope.spawn(async move { api.cancel_enrollment(&student_id, course_id).await }, move |result| {
            match result {
                Ok(()) => {
                    notifier.success("Enrollment cancelled");
                    load.run(());
                }
                Err(err) => notifier.error(format!("Failed to cancel enrollment: {}", err.user_message())),
            }
        });
    });

    view! {
        <div class="page">
            <h1>"Enrollments"</h1>
            <Show when=move || !loading.get() fallback=|| view! { <Loading/> }>
                {move || {
                    let groups = items.with(|list| group_by_course(list));
                    if groups.is_empty() {
                        return view! { <p class="empty">"No enrollments yet."</p> }.into_any();
                    }
                    groups
                        .into_iter()
                        .map(|(title, members)| {
                            view! {
                                <section class="enrollment-group">
                                    <h2>{format!("{title} ({})", members.len())}</h2>
                                    <table class="table">
                                        <thead>
                                            <tr>
                                                <th>"Student"</th>
                                                <th>"Enrolled on"</th>
                                                <th>"Status"</th>
                                                <th></th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {members
                                                .into_iter()
                                                .map(|e| {
                                                    let course_id = e.course_id;
                                                    let student = e.student_id.clone();
                                                    view! {
                                                        <tr>
                                                            <td>
                                                                {e.student_name.clone().or(e.student_id.clone()).unwrap_or_default()}
                                                            </td>
                                                            <td>{short_date(e.enrolled_at.as_deref())}</td>
                                                            <td>{e.status.clone().unwrap_or_else(|| "ACTIVE".to_owned())}</td>
                                                            <td>
                                                                {student
                                                                    .map(|sid| {
                                                                        view! {
                                                                            <button
                                                                                class="btn btn--danger"
                                                                                on:click=move |_| on_cancel.run((sid.clone(), course_id))
                                                                            >
                                                                                "Cancel"
                                                                            </button>
                                                                        }
                                                                    })}
                                                            </td>
                                                        </tr>
                                                    }
                                                })
                                                .collect_view()}
                                        </tbody>
                                    </table>
                                </section>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </Show>
        </div>
    }
}
