//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{footer::Footer, guarded::Guarded, nav_bar::NavBar, toaster::Toaster};
use crate::pages::{
    admin_courses::AdminCoursesPage,
    admin_dashboard::AdminDashboardPage,
    admin_enrollments::AdminEnrollmentsPage,
    admin_users::AdminUsersPage,
    courses::CoursesPage,
    home::HomePage,
    login::{AdminLoginPage, LoginPage},
    my_enrollments::MyEnrollmentsPage,
    not_found::NotFoundPage,
    profile::ProfilePage,
    register::RegisterPage,
    student_dashboard::StudentDashboardPage,
};
use crate::routes;
use crate::state::notify::Notifier;
use crate::state::session::{SessionContext, SessionStore};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session handle and the notification queue for the lifetime of
/// the tab; logout clears the session through the same handle.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(SessionContext::new(SessionStore::browser()));
    provide_context(Notifier::new());

    view! {
        <Stylesheet id="leptos" href="/pkg/courseapp.css"/>
        <Title text="CourseApp"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("home") view=HomePage/>
                    <Route path=StaticSegment("courses") view=CoursesPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("admin-login") view=AdminLoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route
                        path=StaticSegment("student-dashboard")
                        view=|| view! { <Guarded route=&routes::STUDENT_DASHBOARD><StudentDashboardPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("userenrolled")
                        view=|| view! { <Guarded route=&routes::MY_ENROLLMENTS><MyEnrollmentsPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("profile")
                        view=|| view! { <Guarded route=&routes::PROFILE><ProfilePage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("admin-dashboard")
                        view=|| view! { <Guarded route=&routes::ADMIN_DASHBOARD><AdminDashboardPage/></Guarded> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("users"))
                        view=|| view! { <Guarded route=&routes::ADMIN_USERS><AdminUsersPage/></Guarded> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("courses"))
                        view=|| view! { <Guarded route=&routes::ADMIN_COURSES><AdminCoursesPage/></Guarded> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("enrollments"))
                        view=|| view! { <Guarded route=&routes::ADMIN_ENROLLMENTS><AdminEnrollmentsPage/></Guarded> }
                    />
                </Routes>
            </main>
            <Footer/>
            <Toaster/>
        </Router>
    }
}
