//! Student landing page: enrollment counts, trending courses, and the
//! student's course list.
//!
//! Enrollments and the catalog load together; either failing fails the page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::course_card::CourseCard;
use crate::components::loading::Loading;
use crate::components::modal::Modal;
use crate::net::api::ApiClient;
use crate::state::enrollments::{StudentDashboardState, short_date};
use crate::state::notify::Notifier;
use crate::state::session::SessionContext;
use crate::util::lifecycle::ViewScope;

#[component]
pub fn StudentDashboardPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let notifier = expect_context::<Notifier>();
    let scope = ViewScope::for_view();
    let state = RwSignal::new(StudentDashboardState { loading: true, ..StudentDashboardState::default() });
    let username = session.snapshot_untracked().username.unwrap_or_else(|| "Student".to_owned());

    Effect::new({
        let session = session.clone();
        let scope = scope.clone();
        move || {
            let current = session.snapshot_untracked();
            let api = ApiClient::for_session(&current);
            let user_id = current.user_id.unwrap_or_default();
            scope.spawn(
                async move {
                    futures::future::try_join(api.list_student_enrollments(&user_id), api.list_courses()).await
                },
                move |result| match result {
                    Ok((enrollments, courses)) => state.update(|s| {
                        s.enrollments = enrollments;
                        s.courses = courses;
                        s.loading = false;
                    }),
                    Err(err) => {
                        state.update(|s| s.loading = false);
                        notifier.error(format!("Failed to load dashboard: {}", err.user_message()));
                    }
                },
            );
        }
    });

    let on_details = Callback::new(move |course_id: i64| {
        let api = ApiClient::for_session(&session.snapshot_untracked());
        scope.spawn(async move { api.get_course(course_id).await }, move |result| match result {
            Ok(course) => state.update(|s| s.detail = Some(course)),
            Err(err) => notifier.error(format!("Failed to load course: {}", err.user_message())),
        });
    });
    let on_close = Callback::new(move |()| state.update(|s| s.detail = None));

    view! {
        <div class="page dashboard">
            <h1>{format!("Welcome back, {username}")}</h1>
            <Show when=move || !state.with(|s| s.loading) fallback=|| view! { <Loading/> }>
                {move || {
                    let counts = state.with(StudentDashboardState::counts);
                    view! {
                        <div class="stats">
                            <div class="stat">
                                <span class="stat__value">{counts.total}</span>
                                <span class="stat__label">"Enrolled"</span>
                            </div>
                            <div class="stat">
                                <span class="stat__value">{counts.active}</span>
                                <span class="stat__label">"In progress"</span>
                            </div>
                            <div class="stat">
                                <span class="stat__value">{counts.completed}</span>
                                <span class="stat__label">"Completed"</span>
                            </div>
                        </div>
                    }
                }}
                <section>
                    <h2>"Trending Courses"</h2>
                    <div class="grid grid--3">
                        {move || {
                            state
                                .with(|s| s.trending().to_vec())
                                .into_iter()
                                .map(|course| view! { <CourseCard course=course on_details=on_details/> })
                                .collect_view()
                        }}
                    </div>
                </section>
                <section>
                    <h2>"My Courses"</h2>
                    {move || {
                        let enrollments = state.with(|s| s.enrollments.clone());
                        if enrollments.is_empty() {
                            return view! {
                                <p class="empty">
                                    "No enrollments yet. " <A href="/courses">"Browse courses"</A>
                                </p>
                            }
                                .into_any();
                        }
                        view! {
                            <ul class="enrollment-list">
                                {enrollments
                                    .into_iter()
                                    .map(|e| {
                                        let course_id = e.course_id;
                                        view! {
                                            <li class="enrollment-list__item">
                                                <span>{e.course_title.clone()}</span>
                                                <span class="muted">{short_date(e.enrolled_at.as_deref())}</span>
                                                <button class="btn btn--ghost" on:click=move |_| on_details.run(course_id)>
                                                    "Details"
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                            .into_any()
                    }}
                </section>
            </Show>
            {move || {
                state
                    .with(|s| s.detail.clone())
                    .map(|course| {
                        view! {
                            <Modal title=course.title.clone() on_close=on_close>
                                <p>{course.description.clone()}</p>
                                <p>"Instructor: " {course.instructor_name.clone().unwrap_or(course.instructor.clone())}</p>
                                {course.capacity.map(|c| view! { <p>"Capacity: " {c}</p> })}
                                {course.duration.map(|d| view! { <p>"Duration: " {d} " hours"</p> })}
                            </Modal>
                        }
                    })
            }}
        </div>
    }
}
