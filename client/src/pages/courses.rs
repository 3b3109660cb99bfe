//! Public course catalog with search and enroll.
//!
//! SYSTEM CONTEXT
//! ==============
//! Anyone may browse. A signed-in student also gets their enrolled set so
//! cards show "Enrolled"; an anonymous enroll click goes to the login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::course_card::CourseCard;
use crate::components::loading::Loading;
use crate::net::api::ApiClient;
use crate::routes::LOGIN_PATH;
use crate::state::catalog::{CatalogState, EnrollOutcome};
use crate::state::notify::Notifier;
use crate::state::session::SessionContext;
use crate::util::lifecycle::ViewScope;

#[component]
pub fn CoursesPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let notifier = expect_context::<Notifier>();
    let navigate = use_navigate();
    let scope = ViewScope::for_view();
    let state = RwSignal::new(CatalogState { loading: true, ..CatalogState::default() });

    let load = Callback::new({
        let session = session.clone();
        let scope = scope.clone();
        move |()| {
            let current = session.snapshot_untracked();
            let api = ApiClient::for_session(&current);
            let user_id = current.user_id.clone().filter(|_| current.is_authenticated());

            let courses_api = api.clone();
            scope.spawn(async move { courses_api.list_courses().await }, move |result| {
                let mut applied = Ok(());
                state.update(|s| applied = s.apply_courses(result));
                if let Err(msg) = applied {
                    notifier.error(format!("Failed to load courses: {msg}"));
                }
            });

            if let Some(uid) = user_id {
                scope.spawn(async move { api.list_user_enrollments(&uid).await }, move |result| {
                    let mut applied = Ok(());
                    state.update(|s| applied = s.apply_enrollments(result));
                    if let Err(msg) = applied {
                        notifier.error(format!("Failed to load your enrollments: {msg}"));
                    }
                });
            }
        }
    });
    Effect::new(move || load.run(()));

    let on_enroll = Callback::new(move |course_id: i64| {
        let current = session.snapshot_untracked();
        let Some(user_id) = current.user_id.clone().filter(|_| current.is_authenticated()) else {
            notifier.info("Please login to enroll");
            navigate(LOGIN_PATH, NavigateOptions::default());
            return;
        };
        let api = ApiClient::for_session(&current);
        scope.spawn(async move { api.enroll(&user_id, course_id).await }, move |result| {
            let mut outcome = EnrollOutcome::NeedsLogin;
            state.update(|s| outcome = s.apply_enroll(course_id, result));
            match outcome {
                EnrollOutcome::Enrolled => {
                    notifier.success("Enrolled successfully!");
                    load.run(());
                }
                EnrollOutcome::AlreadyEnrolled => notifier.info("You are already enrolled in this course"),
                EnrollOutcome::Failed(msg) => notifier.error(format!("Enrollment failed: {msg}")),
                EnrollOutcome::NeedsLogin => {}
            }
        });
    });

    view! {
        <div class="page courses-page">
            <header class="page__header">
                <h1>"Available Courses"</h1>
                <input
                    class="search"
                    type="search"
                    placeholder="Search by title, instructor, or description"
                    prop:value=move || state.with(|s| s.query.clone())
                    on:input=move |ev| state.update(|s| s.query = event_target_value(&ev))
                />
            </header>
            <Show when=move || !state.with(|s| s.loading) fallback=|| view! { <Loading/> }>
                {move || {
                    let courses = state.with(CatalogState::filtered);
                    if courses.is_empty() {
                        return view! { <p class="empty">"No courses match your search."</p> }.into_any();
                    }
                    view! {
                        <div class="grid grid--3">
                            {courses
                                .into_iter()
                                .map(|course| {
                                    let id = course.id;
                                    let enrolled = Signal::derive(move || state.with(|s| s.is_enrolled(id)));
                                    view! { <CourseCard course=course enrolled=enrolled on_enroll=on_enroll/> }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }}
            </Show>
        </div>
    }
}
