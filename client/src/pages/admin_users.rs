//! Admin user list: details and delete.
//!
//! Admin rows show a locked button. If the backend still refuses a delete
//! because the account is an admin, that is a warning and the list stays as
//! it was.

use leptos::prelude::*;

use crate::components::loading::Loading;
use crate::components::modal::Modal;
use crate::net::api::ApiClient;
use crate::state::notify::Notifier;
use crate::state::session::SessionContext;
use crate::state::users::{DeleteOutcome, UsersState};
use crate::util::dom;
use crate::util::lifecycle::ViewScope;

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let notifier = expect_context::<Notifier>();
    let scope = ViewScope::for_view();
    let state = RwSignal::new(UsersState { loading: true, ..UsersState::default() });

    Effect::new({
        let session = session.clone();
        let scope = scope.clone();
        move || {
            let api = ApiClient::for_session(&session.snapshot_untracked());
            scope.spawn(async move { api.list_users().await }, move |result| match result {
                Ok(users) => state.update(|s| {
                    s.users = users;
                    s.loading = false;
                }),
                Err(err) => {
                    state.update(|s| s.loading = false);
                    notifier.error(format!("Failed to load users: {}", err.user_message()));
                }
            });
        }
    });

    let on_view = Callback::new({
        let session = session.clone();
        let scope = scope.clone();
        move |id: i64| {
            let api = ApiClient::for_session(&session.snapshot_untracked());
            scope.spawn(async move { api.get_user(id).await }, move |result| match result {
                Ok(user) => state.update(|s| s.detail = Some(user)),
                Err(err) => notifier.error(format!("Failed to load user: {}", err.user_message())),
            });
        }
    });

    let on_delete = Callback::new(move |id: i64| {
        if !state.with_untracked(|s| s.can_delete(id)) {
            notifier.warning("Admin accounts cannot be deleted");
            return;
        }
        if !dom::confirm("Are you sure you want to delete this user?") {
            return;
        }
        state.update(|s| s.confirm_delete = Some(id));
        let api = ApiClient::for_session(&session.snapshot_untracked());
        scope.spawn(async move { api.delete_user(id).await }, move |result| {
            let mut outcome = DeleteOutcome::Removed(None);
            state.update(|s| outcome = s.apply_delete(id, result));
            match outcome {
                DeleteOutcome::Removed(msg) => notifier.success(msg.unwrap_or_else(|| "User deleted".to_owned())),
                DeleteOutcome::AdminProtected(msg) => notifier.warning(msg),
                DeleteOutcome::Failed(msg) => notifier.error(format!("Failed to delete user: {msg}")),
            }
        });
    });
    let on_close = Callback::new(move |()| state.update(|s| s.detail = None));

    view! {
        <div class="page">
            <h1>"Users List"</h1>
            <Show when=move || !state.with(|s| s.loading) fallback=|| view! { <Loading/> }>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Username"</th>
                            <th>"Email"</th>
                            <th>"Role"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            state
                                .with(|s| s.users.clone())
                                .into_iter()
                                .map(|user| {
                                    let id = user.id;
                                    let locked = user.is_admin();
                                    let pending = move || state.with(|s| s.confirm_delete == Some(id));
                                    view! {
                                        <tr>
                                            <td>{id}</td>
                                            <td>{user.username.clone()}</td>
                                            <td>{user.email.clone()}</td>
                                            <td>{user.role.clone()}</td>
                                            <td class="table__actions">
                                                <button class="btn btn--ghost" on:click=move |_| on_view.run(id)>
                                                    "View"
                                                </button>
                                                <button
                                                    class="btn btn--danger"
                                                    disabled=move || locked || pending()
                                                    title={if locked { "Admin accounts cannot be deleted" } else { "Delete user" }}
                                                    on:click=move |_| on_delete.run(id)
                                                >
                                                    {if locked { "🔒 Locked" } else { "Delete" }}
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
            {move || {
                state
                    .with(|s| s.detail.clone())
                    .map(|user| {
                        view! {
                            <Modal title=format!("User #{}", user.id) on_close=on_close>
                                <dl class="details">
                                    <dt>"Username"</dt>
                                    <dd>{user.username.clone()}</dd>
                                    <dt>"Email"</dt>
                                    <dd>{user.email.clone()}</dd>
                                    <dt>"Role"</dt>
                                    <dd>{user.role.clone()}</dd>
                                    <dt>"Max courses"</dt>
                                    <dd>{user.max_courses.map_or_else(|| "-".to_owned(), |m| m.to_string())}</dd>
                                </dl>
                            </Modal>
                        }
                    })
            }}
        </div>
    }
}
