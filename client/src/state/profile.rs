//! Profile page state, shared by students and admins.
//!
//! ERROR HANDLING
//! ==============
//! A 404 on fetch only means the user has not created a profile yet, so the
//! form starts empty and nothing is reported. A 403 on save means the token
//! is no longer accepted and the user is told to sign in again.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::error::ApiError;
use crate::net::types::Profile;

pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired. Please login again.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileState {
    pub profile: Profile,
    /// Whether the backend already holds a profile (selects PUT over POST).
    pub exists: bool,
    pub loading: bool,
    pub editing: bool,
    pub saving: bool,
}

impl ProfileState {
    /// Fold a fetch result in. Returns the message to surface, if any.
    pub fn apply_fetch(&mut self, result: Result<Option<Profile>, ApiError>) -> Option<String> {
        self.loading = false;
        match result {
            Ok(Some(profile)) => {
                self.profile = profile;
                self.exists = true;
                self.editing = false;
                None
            }
            Err(err) if !err.is_not_found() => Some(format!("Could not load profile: {}", err.user_message())),
            Ok(None) | Err(_) => {
                self.profile = Profile::default();
                self.exists = false;
                self.editing = true;
                None
            }
        }
    }

    /// Fold a save result in. `Ok` carries the success message.
    pub fn apply_save(&mut self, submitted: Profile, result: Result<Option<Profile>, ApiError>) -> Result<String, String> {
        self.saving = false;
        match result {
            Ok(saved) => {
                let message = if self.exists { "Profile updated successfully" } else { "Profile created successfully" };
                self.profile = saved.unwrap_or(submitted);
                self.exists = true;
                self.editing = false;
                Ok(message.to_owned())
            }
            Err(err) if err.is_forbidden() => Err(SESSION_EXPIRED_MESSAGE.to_owned()),
            Err(err) => Err(format!("Could not save profile: {}", err.user_message())),
        }
    }
}

/// Initials shown in place of a missing avatar.
pub fn initials(profile: &Profile, username: &str) -> String {
    let from_names: String = [&profile.first_name, &profile.last_name]
        .iter()
        .filter_map(|s| s.trim().chars().next())
        .collect();
    let raw = if from_names.is_empty() { username.trim().chars().take(1).collect() } else { from_names };
    if raw.is_empty() { "?".to_owned() } else { raw.to_uppercase() }
}
