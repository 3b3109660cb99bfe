use super::*;

fn course(id: i64, title: &str) -> Course {
    Course {
        id,
        title: title.to_owned(),
        description: "desc".to_owned(),
        instructor: "Ferris".to_owned(),
        capacity: Some(25),
        enrolled_count: Some(3),
        image_path: None,
        category: None,
        level: None,
        duration: None,
        instructor_name: None,
    }
}

#[test]
fn edit_prefills_form_from_course() {
    let mut state = AdminCoursesState { courses: vec![course(4, "Rust")], ..Default::default() };
    assert!(state.open_edit(4));
    assert!(state.form_open);
    assert_eq!(state.form.editing, Some(4));
    assert_eq!(state.form.capacity, "25");
    assert_eq!(state.form.to_draft().unwrap().title, "Rust");
}

#[test]
fn edit_unknown_course_is_noop() {
    let mut state = AdminCoursesState::default();
    assert!(!state.open_edit(9));
    assert!(!state.form_open);
}

#[test]
fn create_starts_blank_and_fails_validation() {
    let mut state = AdminCoursesState { courses: vec![course(4, "Rust")], ..Default::default() };
    state.open_edit(4);
    state.open_create();
    assert!(!state.form.is_editing());
    assert_eq!(state.form.to_draft().unwrap_err().field, "title");
}

#[test]
fn missing_capacity_prefills_empty() {
    let mut c = course(1, "x");
    c.capacity = None;
    assert_eq!(CourseForm::for_course(&c).capacity, "");
}

#[test]
fn remove_drops_course_and_clears_confirmation() {
    let mut state = AdminCoursesState {
        courses: vec![course(1, "a"), course(2, "b")],
        confirm_delete: Some(1),
        ..Default::default()
    };
    state.remove(1);
    assert_eq!(state.courses.len(), 1);
    assert_eq!(state.courses[0].id, 2);
    assert_eq!(state.confirm_delete, None);
}

#[test]
fn close_form_resets() {
    let mut state = AdminCoursesState::default();
    state.open_create();
    state.form.title = "draft".to_owned();
    state.close_form();
    assert!(!state.form_open);
    assert_eq!(state.form, CourseForm::default());
}
