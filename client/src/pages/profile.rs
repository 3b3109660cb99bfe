//! Profile page for students and admins.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads `/api/profile/{userId}`; a missing profile opens an empty form.
//! Saving creates the profile the first time and updates it afterwards,
//! optionally attaching a picked image.

use leptos::prelude::*;

use crate::components::loading::Loading;
use crate::net::api::{ApiClient, ImageUpload};
use crate::net::types::Profile;
use crate::state::notify::Notifier;
use crate::state::profile::{ProfileState, initials};
use crate::state::session::SessionContext;
use crate::util::dom;
use crate::util::lifecycle::ViewScope;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let notifier = expect_context::<Notifier>();
    let scope = ViewScope::for_view();
    let state = RwSignal::new(ProfileState { loading: true, ..ProfileState::default() });
    let draft = RwSignal::new(Profile::default());
    let image = RwSignal::new_local(None::<ImageUpload>);
    let preview = RwSignal::new(None::<String>);

    let who = session.snapshot_untracked();
    let username = who.username.clone().unwrap_or_default();
    let email = who.email.clone().unwrap_or_default();
    let role_label = who.role.map_or("", |r| r.as_str());

    Effect::new({
        let session = session.clone();
        let scope = scope.clone();
        move || {
            let current = session.snapshot_untracked();
            let api = ApiClient::for_session(&current);
            let user_id = current.user_id.unwrap_or_default();
            scope.spawn(async move { api.fetch_profile(&user_id).await }, move |result| {
                let mut message = None;
                state.update(|s| message = s.apply_fetch(result));
                draft.set(state.with_untracked(|s| s.profile.clone()));
                if let Some(msg) = message {
                    notifier.error(msg);
                }
            });
        }
    });

    let on_pick = move |ev: leptos::ev::Event| {
        let picked = dom::picked_image(&ev);
        preview.set(picked.as_ref().and_then(dom::preview_url));
        image.set(picked);
    };

    let on_save = Callback::new(move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.with_untracked(|s| s.saving) {
            return;
        }
        state.update(|s| s.saving = true);
        let current = session.snapshot_untracked();
        let api = ApiClient::for_session(&current);
        let user_id = current.user_id.unwrap_or_default();
        let submitted = draft.get_untracked();
        let exists = state.with_untracked(|s| s.exists);
        let upload = image.get_untracked();
        let payload = submitted.clone();
        scope.spawn(
            async move { api.save_profile(&user_id, &payload, upload.as_ref(), exists).await },
            move |result| {
                let mut outcome = Ok(String::new());
                state.update(|s| outcome = s.apply_save(submitted, result));
                match outcome {
                    Ok(msg) => {
                        draft.set(state.with_untracked(|s| s.profile.clone()));
                        image.set(None);
                        preview.set(None);
                        notifier.success(msg);
                    }
                    Err(msg) => notifier.error(msg),
                }
            },
        );
    });

    let on_edit = move |_| {
        draft.set(state.with_untracked(|s| s.profile.clone()));
        state.update(|s| s.editing = true);
    };
    let on_cancel = move |_| {
        draft.set(state.with_untracked(|s| s.profile.clone()));
        image.set(None);
        preview.set(None);
        state.update(|s| s.editing = false);
    };

    let avatar_name = username.clone();
    let avatar = move || {
        let src = preview.get().or_else(|| {
            state.with(|s| s.profile.profile_image_path.clone()).and_then(|p| {
                crate::net::api::image_url(&crate::config::api_base(), &p)
            })
        });
        match src {
            Some(src) => view! { <img class="avatar" src=src alt="Profile"/> }.into_any(),
            None => {
                let text = state.with(|s| initials(&s.profile, &avatar_name));
                view! { <div class="avatar avatar--initials">{text}</div> }.into_any()
            }
        }
    };

    let field = move |label: &'static str, get: fn(&Profile) -> String, set: fn(&mut Profile, String)| {
        view! {
            <label class="field">
                <span>{label}</span>
                <input
                    type="text"
                    prop:value=move || draft.with(get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|p| set(p, value));
                    }
                />
            </label>
        }
    };

    view! {
        <div class="page profile-page">
            <h1>"My Profile"</h1>
            <Show when=move || !state.with(|s| s.loading) fallback=|| view! { <Loading/> }>
                <div class="profile-card">
                    {avatar.clone()}
                    <div class="profile-card__identity">
                        <h2>{username.clone()}</h2>
                        <p class="muted">{email.clone()}</p>
                        <span class="chip">{role_label}</span>
                    </div>
                </div>
                {move || {
                    if state.with(|s| s.editing) {
                        view! {
                            <form class="profile-form" on:submit=move |ev| on_save.run(ev)>
                                {field("First name", |p| p.first_name.clone(), |p, v| p.first_name = v)}
                                {field("Last name", |p| p.last_name.clone(), |p, v| p.last_name = v)}
                                {field("Phone", |p| p.phone.clone(), |p, v| p.phone = v)}
                                {field("Address", |p| p.address.clone(), |p, v| p.address = v)}
                                <label class="field">
                                    <span>"Bio"</span>
                                    <textarea
                                        prop:value=move || draft.with(|p| p.bio.clone())
                                        on:input=move |ev| draft.update(|p| p.bio = event_target_value(&ev))
                                    ></textarea>
                                </label>
                                <label class="field">
                                    <span>"Profile image"</span>
                                    <input type="file" accept="image/*" on:change=on_pick/>
                                </label>
                                <div class="form-actions">
                                    <button
                                        class="btn btn--primary"
                                        type="submit"
                                        disabled=move || state.with(|s| s.saving)
                                    >
                                        {move || if state.with(|s| s.exists) { "Update Profile" } else { "Create Profile" }}
                                    </button>
                                    <Show when=move || state.with(|s| s.exists)>
                                        <button class="btn btn--ghost" type="button" on:click=on_cancel>
                                            "Cancel"
                                        </button>
                                    </Show>
                                </div>
                            </form>
                        }
                            .into_any()
                    } else {
                        let p = state.with(|s| s.profile.clone());
                        view! {
                            <dl class="profile-details">
                                <dt>"Name"</dt>
                                <dd>{format!("{} {}", p.first_name, p.last_name)}</dd>
                                <dt>"Phone"</dt>
                                <dd>{p.phone}</dd>
                                <dt>"Address"</dt>
                                <dd>{p.address}</dd>
                                <dt>"Bio"</dt>
                                <dd>{p.bio}</dd>
                            </dl>
                            <button class="btn btn--primary" on:click=on_edit>
                                "Edit Profile"
                            </button>
                        }
                            .into_any()
                    }
                }}
            </Show>
        </div>
    }
}
