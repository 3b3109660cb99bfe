//! Card for one course in the catalog and dashboards.

use leptos::prelude::*;

use crate::config;
use crate::net::api;
use crate::net::types::Course;

/// Course card. Action buttons appear only when their callback is given.
#[component]
pub fn CourseCard(
    course: Course,
    #[prop(optional)] enrolled: Option<Signal<bool>>,
    #[prop(optional)] on_enroll: Option<Callback<i64>>,
    #[prop(optional)] on_details: Option<Callback<i64>>,
) -> impl IntoView {
    let id = course.id;
    let image = course.image_path.as_deref().and_then(|p| api::image_url(&config::api_base(), p));
    let seats = match (course.enrolled_count, course.capacity) {
        (Some(taken), Some(cap)) => Some(format!("{taken}/{cap} enrolled")),
        (None, Some(cap)) => Some(format!("Capacity {cap}")),
        _ => None,
    };
    let instructor = course.instructor_name.clone().unwrap_or_else(|| course.instructor.clone());
    let enrolled = enrolled.unwrap_or_else(|| Signal::derive(|| false));

    view! {
        <article class="course-card">
            {image.map(|src| view! { <img class="course-card__image" src=src alt=course.title.clone()/> })}
            <div class="course-card__body">
                <h3 class="course-card__title">{course.title.clone()}</h3>
                <p class="course-card__instructor">{instructor}</p>
                <p class="course-card__description">{course.description.clone()}</p>
                <div class="course-card__meta">
                    {course.category.clone().map(|c| view! { <span class="chip">{c}</span> })}
                    {course.level.clone().map(|l| view! { <span class="chip">{l}</span> })}
                    {seats.map(|s| view! { <span class="course-card__seats">{s}</span> })}
                </div>
            </div>
            <div class="course-card__actions">
                {on_details
                    .map(|cb| {
                        view! {
                            <button class="btn btn--ghost" on:click=move |_| cb.run(id)>
                                "Details"
                            </button>
                        }
                    })}
                {on_enroll
                    .map(|cb| {
                        view! {
                            <button
                                class="btn btn--primary"
                                disabled=move || enrolled.get()
                                on:click=move |_| cb.run(id)
                            >
                                {move || if enrolled.get() { "Enrolled" } else { "Enroll" }}
                            </button>
                        }
                    })}
            </div>
        </article>
    }
}
