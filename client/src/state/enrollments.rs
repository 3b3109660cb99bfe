//! Enrollment views: the student's own list, the student dashboard, and the
//! admin overview grouped by course.

#[cfg(test)]
#[path = "enrollments_test.rs"]
mod enrollments_test;

use std::collections::BTreeMap;

use crate::net::types::{Course, Enrollment};

/// Courses featured on the student dashboard.
pub const TRENDING_COUNT: usize = 3;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MyEnrollmentsState {
    pub items: Vec<Enrollment>,
    pub loading: bool,
}

impl MyEnrollmentsState {
    /// Drop every enrollment for `course_id` after the server confirmed the
    /// cancellation.
    pub fn remove_course(&mut self, course_id: i64) {
        self.items.retain(|e| e.course_id != course_id);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnrollmentCounts {
    pub total: usize,
    pub completed: usize,
    pub active: usize,
}

pub fn counts(enrollments: &[Enrollment]) -> EnrollmentCounts {
    let completed = enrollments.iter().filter(|e| e.is_completed()).count();
    EnrollmentCounts { total: enrollments.len(), completed, active: enrollments.len() - completed }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StudentDashboardState {
    pub enrollments: Vec<Enrollment>,
    pub courses: Vec<Course>,
    pub loading: bool,
    /// Course shown in the detail modal.
    pub detail: Option<Course>,
}

impl StudentDashboardState {
    pub fn counts(&self) -> EnrollmentCounts {
        counts(&self.enrollments)
    }

    pub fn trending(&self) -> &[Course] {
        &self.courses[..self.courses.len().min(TRENDING_COUNT)]
    }
}

/// Enrollments grouped by course title, titles sorted.
pub fn group_by_course(enrollments: &[Enrollment]) -> Vec<(String, Vec<Enrollment>)> {
    let mut groups: BTreeMap<String, Vec<Enrollment>> = BTreeMap::new();
    for e in enrollments {
        let title = if e.course_title.trim().is_empty() {
            format!("Course #{}", e.course_id)
        } else {
            e.course_title.clone()
        };
        groups.entry(title).or_default().push(e.clone());
    }
    groups.into_iter().collect()
}

/// Date part of an ISO timestamp (`2024-05-01T10:00:00` → `2024-05-01`).
pub fn short_date(raw: Option<&str>) -> String {
    match raw {
        Some(ts) => ts.split(['T', ' ']).next().unwrap_or(ts).to_owned(),
        None => "-".to_owned(),
    }
}
