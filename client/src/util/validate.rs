//! Client-side form validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Forms check these rules before any request is sent and show the returned
//! message beside the offending field. The backend remains the authority; this
//! only saves a round trip for obviously bad input.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::net::types::{CourseDraft, Credentials, Registration};
use crate::state::session::Role;

pub const USERNAME_MIN: usize = 3;
pub const PASSWORD_MIN: usize = 6;

/// A rejected field and the message to show for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

fn reject<T>(field: &'static str, message: &'static str) -> Result<T, FieldError> {
    Err(FieldError { field, message })
}

fn check_username(raw: &str) -> Result<String, FieldError> {
    let value = raw.trim();
    if value.is_empty() {
        return reject("username", "Username is required");
    }
    if value.chars().count() < USERNAME_MIN {
        return reject("username", "Minimum 3 characters");
    }
    Ok(value.to_owned())
}

fn check_password(raw: &str) -> Result<String, FieldError> {
    if raw.is_empty() {
        return reject("password", "Password is required");
    }
    if raw.chars().count() < PASSWORD_MIN {
        return reject("password", "Minimum 6 characters");
    }
    Ok(raw.to_owned())
}

/// `local@domain.tld` with no whitespace and a single `@`.
static EMAIL_PATTERN: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"));

/// Rejects everything if the pattern failed to compile.
pub fn is_valid_email(raw: &str) -> bool {
    EMAIL_PATTERN.as_ref().is_ok_and(|re| re.is_match(raw))
}

pub fn validate_login(username: &str, password: &str) -> Result<Credentials, FieldError> {
    Ok(Credentials { username: check_username(username)?, password: check_password(password)? })
}

pub fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
    role: &str,
) -> Result<Registration, FieldError> {
    let username = check_username(username)?;
    let email = email.trim();
    if email.is_empty() {
        return reject("email", "Email is required");
    }
    if !is_valid_email(email) {
        return reject("email", "Invalid email format");
    }
    let password = check_password(password)?;
    let Some(role) = Role::parse(role) else {
        return reject("role", "Select a role");
    };
    Ok(Registration { username, email: email.to_owned(), password, role })
}

pub fn validate_course(title: &str, instructor: &str, description: &str, capacity: &str) -> Result<CourseDraft, FieldError> {
    let title = title.trim();
    if title.is_empty() {
        return reject("title", "Course title is required");
    }
    let instructor = instructor.trim();
    if instructor.is_empty() {
        return reject("instructor", "Instructor is required");
    }
    let description = description.trim();
    if description.is_empty() {
        return reject("description", "Description is required");
    }
    let capacity = match capacity.trim().parse::<i64>() {
        Ok(n) if n > 0 => n,
        _ => return reject("capacity", "Capacity must be a positive number"),
    };
    Ok(CourseDraft {
        title: title.to_owned(),
        description: description.to_owned(),
        capacity,
        instructor: instructor.to_owned(),
    })
}
