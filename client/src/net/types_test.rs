use super::*;

// =============================================================
// Login
// =============================================================

#[test]
fn login_response_accepts_numeric_user_id() {
    let resp: LoginResponse = serde_json::from_value(serde_json::json!({
        "token": "jwt",
        "userid": 42,
        "username": "root",
        "email": "root@example.com",
        "role": "ADMIN"
    }))
    .unwrap();
    assert_eq!(resp.userid, "42");
}

#[test]
fn login_response_maps_to_full_session() {
    let resp = LoginResponse {
        token: "jwt".to_owned(),
        userid: "5".to_owned(),
        username: "amy".to_owned(),
        email: Some("amy@example.com".to_owned()),
        role: "USER".to_owned(),
    };
    let session = resp.to_session().unwrap();
    assert!(session.is_authenticated());
    assert_eq!(session.user_id.as_deref(), Some("5"));
    assert_eq!(session.role, Some(Role::User));
}

#[test]
fn login_response_with_unknown_role_has_no_session() {
    let resp = LoginResponse {
        token: "jwt".to_owned(),
        userid: "5".to_owned(),
        username: "amy".to_owned(),
        email: None,
        role: "GUEST".to_owned(),
    };
    assert_eq!(resp.to_session(), None);
}

#[test]
fn registration_serializes_role_uppercase() {
    let body = serde_json::to_value(Registration {
        username: "amy".to_owned(),
        email: "amy@example.com".to_owned(),
        password: "secret1".to_owned(),
        role: Role::User,
    })
    .unwrap();
    assert_eq!(body["role"], "USER");
}

// =============================================================
// Courses and enrollments
// =============================================================

#[test]
fn course_deserializes_camel_case_with_optional_fields() {
    let course: Course = serde_json::from_value(serde_json::json!({
        "id": "3",
        "title": "Rust 101",
        "description": "Ownership",
        "instructor": "Ferris",
        "capacity": 30,
        "enrolledCount": 12.0,
        "imagePath": "uploads\\rust.png"
    }))
    .unwrap();
    assert_eq!(course.id, 3);
    assert_eq!(course.capacity, Some(30));
    assert_eq!(course.enrolled_count, Some(12));
    assert_eq!(course.image_path.as_deref(), Some("uploads\\rust.png"));
    assert_eq!(course.category, None);
}

#[test]
fn course_rejects_fractional_id() {
    let result: Result<Course, _> = serde_json::from_value(serde_json::json!({ "id": 1.5, "title": "x" }));
    assert!(result.is_err());
}

#[test]
fn course_list_reads_null_text_fields_as_empty() {
    let courses: Vec<Course> = serde_json::from_str(
        r#"[{"id":1,"title":"Rust","description":null,"instructor":null,"imagePath":null},{"id":2,"title":null}]"#,
    )
    .unwrap();
    assert_eq!(courses.len(), 2);
    assert_eq!(courses[0].description, "");
    assert_eq!(courses[0].instructor, "");
    assert_eq!(courses[0].image_path, None);
    assert_eq!(courses[1].title, "");
}

#[test]
fn course_draft_serializes_camel_case() {
    let draft = CourseDraft {
        title: "Rust".to_owned(),
        description: "d".to_owned(),
        capacity: 10,
        instructor: "i".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(draft).unwrap(),
        serde_json::json!({ "title": "Rust", "description": "d", "capacity": 10, "instructor": "i" })
    );
}

#[test]
fn enrollment_completion_flag() {
    let enrollment: Enrollment = serde_json::from_value(serde_json::json!({
        "id": 1,
        "courseId": 9,
        "courseTitle": "Rust",
        "studentId": 4,
        "status": "COMPLETED"
    }))
    .unwrap();
    assert!(enrollment.is_completed());
    assert_eq!(enrollment.student_id.as_deref(), Some("4"));
}

#[test]
fn enrollment_list_reads_null_course_title_as_empty() {
    let enrollments: Vec<Enrollment> =
        serde_json::from_str(r#"[{"id":1,"courseId":9,"courseTitle":null,"studentName":null}]"#).unwrap();
    assert_eq!(enrollments[0].course_title, "");
    assert_eq!(enrollments[0].student_name, None);
}

// =============================================================
// Users and profiles
// =============================================================

#[test]
fn user_account_accepts_snake_case_max_courses() {
    let user: UserAccount = serde_json::from_value(serde_json::json!({
        "id": 2,
        "username": "amy",
        "email": "amy@example.com",
        "role": "USER",
        "max_courses": 5
    }))
    .unwrap();
    assert_eq!(user.max_courses, Some(5));
    assert!(!user.is_admin());
}

#[test]
fn user_account_detects_admin() {
    let user: UserAccount =
        serde_json::from_value(serde_json::json!({ "id": 1, "username": "root", "role": "ADMIN" })).unwrap();
    assert!(user.is_admin());
}

#[test]
fn user_account_reads_null_email_as_empty() {
    let user: UserAccount =
        serde_json::from_str(r#"{"id":3,"username":"bob","email":null,"role":"USER","maxCourses":null}"#).unwrap();
    assert_eq!(user.email, "");
    assert_eq!(user.max_courses, None);
}

#[test]
fn profile_phone_accepts_number_or_string() {
    let numeric: Profile = serde_json::from_value(serde_json::json!({ "phone": 5551234 })).unwrap();
    let text: Profile = serde_json::from_value(serde_json::json!({ "phone": "555-1234" })).unwrap();
    let null: Profile = serde_json::from_value(serde_json::json!({ "phone": null })).unwrap();
    assert_eq!(numeric.phone, "5551234");
    assert_eq!(text.phone, "555-1234");
    assert_eq!(null.phone, "");
}

#[test]
fn profile_blank_detection() {
    assert!(Profile::default().is_blank());
    let profile: Profile = serde_json::from_value(serde_json::json!({ "firstName": "Amy" })).unwrap();
    assert!(!profile.is_blank());
}

#[test]
fn profile_serialization_omits_image_path() {
    let profile = Profile { profile_image_path: Some("/img.png".to_owned()), ..Profile::default() };
    let value = serde_json::to_value(profile).unwrap();
    assert!(value.get("profileImagePath").is_none());
    assert_eq!(value["firstName"], "");
}

#[test]
fn profile_reads_null_text_fields_as_empty() {
    let profile: Profile = serde_json::from_str(
        r#"{"firstName":"Ann","lastName":null,"phone":null,"address":null,"bio":null,"profileImagePath":null}"#,
    )
    .unwrap();
    assert_eq!(profile.first_name, "Ann");
    assert_eq!(profile.last_name, "");
    assert_eq!(profile.address, "");
    assert_eq!(profile.bio, "");
    assert!(!profile.is_blank());
}
