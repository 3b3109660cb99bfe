//! Admin dashboard and course-management state.
//!
//! DESIGN
//! ======
//! The course form keeps raw input strings; validation turns them into a
//! `CourseDraft` only on submit so partial edits never fail mid-typing.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use crate::net::types::{AdminStats, Course, CourseDraft};
use crate::util::validate::{FieldError, validate_course};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdminDashboardState {
    pub stats: Option<AdminStats>,
    pub courses: Vec<Course>,
    pub loading: bool,
}

/// Course form contents. `editing` is the id being updated, `None` when
/// creating.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CourseForm {
    pub editing: Option<i64>,
    pub title: String,
    pub instructor: String,
    pub description: String,
    pub capacity: String,
}

impl CourseForm {
    pub fn for_course(course: &Course) -> Self {
        Self {
            editing: Some(course.id),
            title: course.title.clone(),
            instructor: course.instructor.clone(),
            description: course.description.clone(),
            capacity: course.capacity.map(|c| c.to_string()).unwrap_or_default(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn to_draft(&self) -> Result<CourseDraft, FieldError> {
        validate_course(&self.title, &self.instructor, &self.description, &self.capacity)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdminCoursesState {
    pub courses: Vec<Course>,
    pub loading: bool,
    pub form: CourseForm,
    pub form_open: bool,
    pub confirm_delete: Option<i64>,
}

impl AdminCoursesState {
    pub fn open_create(&mut self) {
        self.form = CourseForm::default();
        self.form_open = true;
    }

    pub fn open_edit(&mut self, id: i64) -> bool {
        let Some(course) = self.courses.iter().find(|c| c.id == id) else {
            return false;
        };
        self.form = CourseForm::for_course(course);
        self.form_open = true;
        true
    }

    pub fn close_form(&mut self) {
        self.form = CourseForm::default();
        self.form_open = false;
    }

    pub fn remove(&mut self, id: i64) {
        self.courses.retain(|c| c.id != id);
        self.confirm_delete = None;
    }
}
