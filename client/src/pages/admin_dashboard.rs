//! Admin landing page: platform totals and this admin's courses.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::course_card::CourseCard;
use crate::components::loading::Loading;
use crate::net::api::ApiClient;
use crate::state::admin::AdminDashboardState;
use crate::state::notify::Notifier;
use crate::state::session::SessionContext;
use crate::util::lifecycle::ViewScope;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let notifier = expect_context::<Notifier>();
    let scope = ViewScope::for_view();
    let state = RwSignal::new(AdminDashboardState { loading: true, ..AdminDashboardState::default() });
    let username = session.snapshot_untracked().username.unwrap_or_else(|| "Admin".to_owned());

    Effect::new(move || {
        let current = session.snapshot_untracked();
        let api = ApiClient::for_session(&current);
        let admin_id = current.user_id.unwrap_or_default();
        scope.spawn(
            async move { futures::future::try_join(api.admin_stats(), api.list_courses_by_admin(&admin_id)).await },
            move |result| match result {
                Ok((stats, courses)) => state.set(AdminDashboardState { stats: Some(stats), courses, loading: false }),
                Err(err) => {
                    state.update(|s| s.loading = false);
                    notifier.error(format!("Failed to load dashboard: {}", err.user_message()));
                }
            },
        );
    });

    let stat = |label: &'static str, value: i64, href: &'static str| {
        view! {
            <A href=href attr:class="stat">
                <span class="stat__value">{value}</span>
                <span class="stat__label">{label}</span>
            </A>
        }
    };

    view! {
        <div class="page dashboard">
            <h1>{format!("Admin Dashboard · {username}")}</h1>
            <Show when=move || !state.with(|s| s.loading) fallback=|| view! { <Loading/> }>
                {move || {
                    state
                        .with(|s| s.stats)
                        .map(|st| {
                            view! {
                                <div class="stats">
                                    {stat("Users", st.total_users, "/admin/users")}
                                    {stat("Students", st.total_students, "/admin/users")}
                                    {stat("Courses", st.total_courses, "/admin/courses")}
                                    {stat("Enrollments", st.total_enrollments, "/admin/enrollments")}
                                </div>
                            }
                        })
                }}
                <section>
                    <h2>"Your Courses"</h2>
                    {move || {
                        let courses = state.with(|s| s.courses.clone());
                        if courses.is_empty() {
                            return view! {
                                <p class="empty">
                                    "You have not created any courses yet. "
                                    <A href="/admin/courses">"Create one"</A>
                                </p>
                            }
                                .into_any();
                        }
                        view! {
                            <div class="grid grid--3">
                                {courses.into_iter().map(|course| view! { <CourseCard course=course/> }).collect_view()}
                            </div>
                        }
                            .into_any()
                    }}
                </section>
            </Show>
        </div>
    }
}
