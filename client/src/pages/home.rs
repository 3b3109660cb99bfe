//! Static landing page.

use leptos::prelude::*;
use leptos_router::components::A;

const CATEGORIES: [(&str, &str); 3] = [
    (
        "Software Development",
        "Full-stack development with modern frameworks and DevOps workflows.",
    ),
    ("Data Science & AI", "Machine learning, Python, and analytics for real-world problems."),
    ("Cloud & DevOps", "Deploy and scale with containers, orchestration, and CI/CD pipelines."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <section class="hero">
                <h1>"Welcome to CourseApp"</h1>
                <p class="hero__lead">
                    "Seamless course management for learners and administrators."
                </p>
                <A href="/courses" attr:class="btn btn--primary btn--lg">
                    "Explore Courses"
                </A>
            </section>
            <section class="home__about">
                <h2>"About the Course Management System"</h2>
                <p>
                    "Browse the catalog, enroll in courses, and track your progress. "
                    "Administrators manage users, courses, and enrollments from one place."
                </p>
            </section>
            <section class="home__categories">
                <h2>"Popular Categories"</h2>
                <div class="grid grid--3">
                    {CATEGORIES
                        .iter()
                        .map(|(title, blurb)| {
                            view! {
                                <div class="card">
                                    <h3>{*title}</h3>
                                    <p>{*blurb}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
