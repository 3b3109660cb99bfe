//! Error taxonomy for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Every REST helper returns `Result<_, ApiError>`. Pages never crash on an
//! error: they log it, raise a notification, and keep their last good state.
//! Some domain conflicts are only reported as text in the response body, so
//! the substring classifiers here are the single place those markers live.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Backend reports a second enrollment in the same course.
pub const ALREADY_ENROLLED_MARKER: &str = "Already enrolled";
/// Backend reports a username/email collision on registration.
pub const DUPLICATE_IDENTITY_MARKER: &str = "Username or Email already exists";
/// Backend refuses to delete an admin account.
pub const ADMIN_PROTECTED_MARKER: &str = "Admin accounts cannot be deleted";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unauthorized ({status})")]
    Unauthorized { status: u16, body: String },
    #[error("not found")]
    NotFound,
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("server error {status}: {body}")]
    Server { status: u16, body: String },
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("could not build request: {0}")]
    Request(String),
    #[error("not available during server render")]
    Unavailable,
}

impl ApiError {
    /// Classify a non-2xx response.
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        match status {
            401 | 403 => Self::Unauthorized { status, body },
            404 => Self::NotFound,
            409 => Self::Conflict(body),
            _ => Self::Server { status, body },
        }
    }

    /// Response body text, when the failure carried one.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { body, .. } | Self::Server { body, .. } | Self::Conflict(body) => Some(body),
            _ => None,
        }
    }

    fn body_contains(&self, marker: &str) -> bool {
        self.body().is_some_and(|b| b.contains(marker))
    }

    pub fn is_already_enrolled(&self) -> bool {
        self.body_contains(ALREADY_ENROLLED_MARKER)
    }

    pub fn is_duplicate_identity(&self) -> bool {
        self.body_contains(DUPLICATE_IDENTITY_MARKER)
    }

    pub fn is_admin_protected(&self) -> bool {
        self.body_contains(ADMIN_PROTECTED_MARKER)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::Unauthorized { status: 403, .. })
    }

    /// Text worth showing to a user: the server's message when it sent a
    /// short plain one, otherwise the error description.
    pub fn user_message(&self) -> String {
        match self.body().map(extract_message) {
            Some(msg) if !msg.is_empty() && msg.len() <= 200 => msg,
            _ => self.to_string(),
        }
    }
}

/// Pull `error`/`message` out of a JSON error body, or return the trimmed text.
pub fn extract_message(body: &str) -> String {
    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error", "message"] {
            if let Some(serde_json::Value::String(msg)) = map.get(key) {
                return msg.trim().to_owned();
            }
        }
    }
    body.trim().to_owned()
}
