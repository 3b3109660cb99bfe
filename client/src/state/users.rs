//! Admin user-management state.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use crate::net::error::ApiError;
use crate::net::types::UserAccount;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UsersState {
    pub users: Vec<UserAccount>,
    pub loading: bool,
    pub detail: Option<UserAccount>,
    /// User awaiting delete confirmation.
    pub confirm_delete: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Removed(Option<String>),
    /// The backend refused because the account is an admin.
    AdminProtected(String),
    Failed(String),
}

impl UsersState {
    pub fn find(&self, id: i64) -> Option<&UserAccount> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Admin accounts are locked in the UI before any request is made.
    pub fn can_delete(&self, id: i64) -> bool {
        self.find(id).is_some_and(|u| !u.is_admin())
    }

    /// Fold a delete call's result into the list. Only a success changes it.
    pub fn apply_delete(&mut self, id: i64, result: Result<Option<String>, ApiError>) -> DeleteOutcome {
        self.confirm_delete = None;
        match result {
            Ok(message) => {
                self.users.retain(|u| u.id != id);
                if self.detail.as_ref().is_some_and(|u| u.id == id) {
                    self.detail = None;
                }
                DeleteOutcome::Removed(message)
            }
            Err(err) if err.is_admin_protected() => DeleteOutcome::AdminProtected(err.user_message()),
            Err(err) => DeleteOutcome::Failed(err.user_message()),
        }
    }
}
