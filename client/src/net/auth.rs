//! Auth gateway: login and registration against the backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call `login`/`admin_login`/`register` and redirect on the returned
//! outcome. A successful login writes the whole session in one call; a failed
//! one leaves storage untouched. Nothing here retries: a failure is reported
//! once and the user resubmits.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::api::ApiClient;
use super::error::ApiError;
use super::types::{Credentials, LoginResponse, Registration};
use crate::state::session::{Role, Session, SessionContext, SessionStore};

/// Receiver of session changes made by the gateway.
pub trait SessionSink {
    fn sign_in(&self, session: &Session);
    fn sign_out(&self);
}

impl SessionSink for SessionStore {
    fn sign_in(&self, session: &Session) {
        self.save(session);
    }

    fn sign_out(&self) {
        self.clear();
    }
}

impl SessionSink for SessionContext {
    fn sign_in(&self, session: &Session) {
        SessionContext::sign_in(self, session);
    }

    fn sign_out(&self) {
        SessionContext::sign_out(self);
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid username or password!")]
    InvalidCredentials,
    #[error("Access denied! You are not an admin.")]
    NotAdmin,
    #[error("Unrecognized account role: {0}")]
    UnknownRole(String),
    #[error("Unable to connect to the server. Try again later.")]
    Network(#[source] ApiError),
    #[error("Server error. Please try again later.")]
    Server(#[source] ApiError),
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegisterError {
    #[error("Username or Email already exists. Try another one.")]
    DuplicateIdentity,
    #[error("Unable to connect to the server. Try again later.")]
    Network(#[source] ApiError),
    #[error("Something went wrong. Please try again later.")]
    Server(#[source] ApiError),
}

/// Map a login call's outcome to the session it should create.
pub fn interpret_login(result: Result<LoginResponse, ApiError>) -> Result<Session, LoginError> {
    match result {
        Ok(resp) => resp.to_session().ok_or(LoginError::UnknownRole(resp.role)),
        Err(ApiError::Unauthorized { status: 401, .. }) => Err(LoginError::InvalidCredentials),
        Err(err @ ApiError::Network(_)) => Err(LoginError::Network(err)),
        Err(err) => Err(LoginError::Server(err)),
    }
}

/// Persist a login outcome and return the role to redirect on.
pub fn complete_login(sink: &impl SessionSink, result: Result<LoginResponse, ApiError>) -> Result<Role, LoginError> {
    let session = interpret_login(result)?;
    let role = session.role.ok_or_else(|| LoginError::UnknownRole(String::new()))?;
    sink.sign_in(&session);
    Ok(role)
}

/// Admin sign-in: like [`complete_login`], but a non-admin account is signed
/// straight back out.
pub fn complete_admin_login(
    sink: &impl SessionSink,
    result: Result<LoginResponse, ApiError>,
) -> Result<Role, LoginError> {
    match complete_login(sink, result)? {
        Role::Admin => Ok(Role::Admin),
        Role::User => {
            sink.sign_out();
            Err(LoginError::NotAdmin)
        }
    }
}

pub fn interpret_register(result: Result<(), ApiError>) -> Result<(), RegisterError> {
    match result {
        Ok(()) => Ok(()),
        Err(err) if err.is_duplicate_identity() => Err(RegisterError::DuplicateIdentity),
        Err(err @ ApiError::Network(_)) => Err(RegisterError::Network(err)),
        Err(err) => Err(RegisterError::Server(err)),
    }
}

pub async fn login(api: &ApiClient, sink: &impl SessionSink, credentials: &Credentials) -> Result<Role, LoginError> {
    complete_login(sink, api.login(credentials).await)
}

pub async fn admin_login(
    api: &ApiClient,
    sink: &impl SessionSink,
    credentials: &Credentials,
) -> Result<Role, LoginError> {
    complete_admin_login(sink, api.login(credentials).await)
}

pub async fn register(api: &ApiClient, registration: &Registration) -> Result<(), RegisterError> {
    interpret_register(api.register(registration).await)
}
