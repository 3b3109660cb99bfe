//! Admin course management: list, create, edit, delete.
//!
//! Create and edit share one form dialog. Both send the course as a JSON
//! `course` part plus an optional `image` part; the list is refetched after
//! either succeeds.

use leptos::prelude::*;

use crate::components::loading::Loading;
use crate::components::modal::Modal;
use crate::config;
use crate::net::api::{self, ApiClient, ImageUpload};
use crate::state::admin::{AdminCoursesState, CourseForm};
use crate::state::notify::Notifier;
use crate::state::session::SessionContext;
use crate::util::dom;
use crate::util::lifecycle::ViewScope;

#[component]
pub fn AdminCoursesPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let notifier = expect_context::<Notifier>();
    let scope = ViewScope::for_view();
    let state = RwSignal::new(AdminCoursesState { loading: true, ..AdminCoursesState::default() });
    let image = RwSignal::new_local(None::<ImageUpload>);
    let form_error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let load = Callback::new({
        let session = session.clone();
        let scope = scope.clone();
        move |()| {
            let api = ApiClient::for_session(&session.snapshot_untracked());
            scope.spawn(async move { api.list_courses().await }, move |result| match result {
                Ok(courses) => state.update(|s| {
                    s.courses = courses;
                    s.loading = false;
                }),
                Err(err) => {
                    state.update(|s| s.loading = false);
                    notifier.error(format!("Failed to load courses: {}", err.user_message()));
                }
            });
        }
    });
    Effect::new(move || load.run(()));

    let on_submit = Callback::new({
        let session = session.clone();
        let scope = scope.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if saving.get_untracked() {
                return;
            }
            let form = state.with_untracked(|s| s.form.clone());
            let draft = match form.to_draft() {
                Ok(d) => d,
                Err(e) => {
                    form_error.set(Some(e.message.to_owned()));
                    return;
                }
            };
            form_error.set(None);
            saving.set(true);
            let current = session.snapshot_untracked();
            let api = ApiClient::for_session(&current);
            let admin_id = current.user_id.unwrap_or_default();
            let upload = image.get_untracked();
            let editing = form.editing;
            scope.spawn(
                async move {
                    match editing {
                        Some(id) => api.update_course(id, &draft, upload.as_ref()).await,
                        None => api.create_course(&admin_id, &draft, upload.as_ref()).await,
                    }
                },
                move |result| {
                    saving.set(false);
                    match result {
                        Ok(()) => {
                            notifier.success(if editing.is_some() { "Course updated" } else { "Course created" });
                            state.update(AdminCoursesState::close_form);
                            image.set(None);
                            load.run(());
                        }
                        Err(err) => notifier.error(format!("Failed to save course: {}", err.user_message())),
                    }
                },
            );
        }
    });

    let on_delete = Callback::new(move |id: i64| {
        if !dom::confirm("Are you sure you want to delete this course?") {
            return;
        }
        state.update(|s| s.confirm_delete = Some(id));
        let api = ApiClient::for_session(&session.snapshot_untracked());
        scope.spawn(async move { api.delete_course(id).await }, move |result| match result {
            Ok(()) => {
                state.update(|s| s.remove(id));
                notifier.success("Course deleted");
            }
            Err(err) => {
                state.update(|s| s.confirm_delete = None);
                notifier.error(format!("Failed to delete course: {}", err.user_message()));
            }
        });
    });

    let on_close = Callback::new(move |()| {
        state.update(AdminCoursesState::close_form);
        image.set(None);
        form_error.set(None);
    });

    let input = move |label: &'static str, kind: &'static str, get: fn(&CourseForm) -> String, set: fn(&mut CourseForm, String)| {
        view! {
            <label class="field">
                <span>{label}</span>
                <input
                    type=kind
                    prop:value=move || state.with(|s| get(&s.form))
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| set(&mut s.form, value));
                    }
                />
            </label>
        }
    };

    view! {
        <div class="page">
            <header class="page__header">
                <h1>"All Courses"</h1>
                <button class="btn btn--primary" on:click=move |_| state.update(AdminCoursesState::open_create)>
                    "Add Course"
                </button>
            </header>
            <Show when=move || !state.with(|s| s.loading) fallback=|| view! { <Loading/> }>
                <table class="table">
                    <thead>
                        <tr>
                            <th></th>
                            <th>"Title"</th>
                            <th>"Instructor"</th>
                            <th>"Capacity"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            state
                                .with(|s| s.courses.clone())
                                .into_iter()
                                .map(|course| {
                                    let id = course.id;
                                    let thumb = course
                                        .image_path
                                        .as_deref()
                                        .and_then(|p| api::image_url(&config::api_base(), p));
                                    view! {
                                        <tr>
                                            <td>{thumb.map(|src| view! { <img class="thumb" src=src alt=""/> })}</td>
                                            <td>{course.title.clone()}</td>
                                            <td>{course.instructor.clone()}</td>
                                            <td>{course.capacity.map_or_else(|| "-".to_owned(), |c| c.to_string())}</td>
                                            <td class="table__actions">
                                                <button
                                                    class="btn btn--ghost"
                                                    on:click=move |_| {
                                                        state.update(|s| {
                                                            s.open_edit(id);
                                                        });
                                                    }
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="btn btn--danger"
                                                    disabled=move || state.with(|s| s.confirm_delete == Some(id))
                                                    on:click=move |_| on_delete.run(id)
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </Show>
            <Show when=move || state.with(|s| s.form_open)>
                <Modal
                    title={if state.with_untracked(|s| s.form.is_editing()) { "Edit Course" } else { "Add Course" }}
                    on_close=on_close
                >
                    <form class="course-form" on:submit=move |ev| on_submit.run(ev)>
                        {input("Title", "text", |f| f.title.clone(), |f, v| f.title = v)}
                        {input("Instructor", "text", |f| f.instructor.clone(), |f, v| f.instructor = v)}
                        {input("Capacity", "number", |f| f.capacity.clone(), |f, v| f.capacity = v)}
                        <label class="field">
                            <span>"Description"</span>
                            <textarea
                                prop:value=move || state.with(|s| s.form.description.clone())
                                on:input=move |ev| state.update(|s| s.form.description = event_target_value(&ev))
                            ></textarea>
                        </label>
                        <label class="field">
                            <span>"Image"</span>
                            <input type="file" accept="image/*" on:change=move |ev| image.set(dom::picked_image(&ev))/>
                        </label>
                        <Show when=move || form_error.get().is_some()>
                            <p class="form-error">{move || form_error.get().unwrap_or_default()}</p>
                        </Show>
                        <div class="form-actions">
                            <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                                {move || if saving.get() { "Saving..." } else { "Save" }}
                            </button>
                            <button class="btn btn--ghost" type="button" on:click=move |_| on_close.run(())>
                                "Cancel"
                            </button>
                        </div>
                    </form>
                </Modal>
            </Show>
        </div>
    }
}
