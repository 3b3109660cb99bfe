//! Course catalog state: the public course list, search, and enrollment.
//!
//! DESIGN
//! ======
//! The enrolled set is keyed by course id so a repeated enroll (or the
//! backend's "already enrolled" reply) can never list a course twice.
//!
//! Courses and the enrolled set load independently. A failed enrollment read
//! leaves the course list as it is.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::BTreeSet;

use crate::net::error::ApiError;
use crate::net::types::{Course, Enrollment};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogState {
    pub courses: Vec<Course>,
    pub enrolled: BTreeSet<i64>,
    pub query: String,
    pub loading: bool,
}

/// What the page should do after an enroll attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EnrollOutcome {
    /// No session: send the user to the login page.
    NeedsLogin,
    Enrolled,
    AlreadyEnrolled,
    Failed(String),
}

/// Case-insensitive match on title, instructor, or description.
pub fn matches_query(course: &Course, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    [&course.title, &course.instructor, &course.description]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

impl CatalogState {
    pub fn filtered(&self) -> Vec<Course> {
        self.courses.iter().filter(|c| matches_query(c, &self.query)).cloned().collect()
    }

    pub fn is_enrolled(&self, course_id: i64) -> bool {
        self.enrolled.contains(&course_id)
    }

    pub fn set_enrollments(&mut self, enrollments: &[Enrollment]) {
        self.enrolled = enrollments.iter().map(|e| e.course_id).collect();
    }

    /// Apply the course list read. Clears `loading` either way.
    pub fn apply_courses(&mut self, result: Result<Vec<Course>, ApiError>) -> Result<(), String> {
        self.loading = false;
        self.courses = result.map_err(|err| err.user_message())?;
        Ok(())
    }

    /// Apply the enrolled-course read. On failure the courses and the current
    /// enrolled set are kept.
    pub fn apply_enrollments(&mut self, result: Result<Vec<Enrollment>, ApiError>) -> Result<(), String> {
        let enrollments = result.map_err(|err| err.user_message())?;
        self.set_enrollments(&enrollments);
        Ok(())
    }

    /// Fold an enroll call's result into the enrolled set.
    pub fn apply_enroll(&mut self, course_id: i64, result: Result<(), ApiError>) -> EnrollOutcome {
        match result {
            Ok(()) => {
                self.enrolled.insert(course_id);
                EnrollOutcome::Enrolled
            }
            Err(err) if err.is_already_enrolled() => {
                self.enrolled.insert(course_id);
                EnrollOutcome::AlreadyEnrolled
            }
            Err(err) => EnrollOutcome::Failed(err.user_message()),
        }
    }
}
