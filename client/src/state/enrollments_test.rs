use super::*;

fn enrollment(id: i64, course_id: i64, title: &str, status: Option<&str>) -> Enrollment {
    Enrollment {
        id,
        course_id,
        course_title: title.to_owned(),
        student_id: Some("7".to_owned()),
        student_name: Some("amy".to_owned()),
        enrolled_at: Some("2024-05-01T10:00:00".to_owned()),
        status: status.map(str::to_owned),
    }
}

fn course(id: i64) -> Course {
    Course {
        id,
        title: format!("C{id}"),
        description: String::new(),
        instructor: String::new(),
        capacity: None,
        enrolled_count: None,
        image_path: None,
        category: None,
        level: None,
        duration: None,
        instructor_name: None,
    }
}

#[test]
fn cancel_removes_exactly_that_course() {
    let mut state = MyEnrollmentsState {
        items: vec![enrollment(1, 10, "A", None), enrollment(2, 11, "B", None), enrollment(3, 12, "C", None)],
        loading: false,
    };
    state.remove_course(11);
    let left: Vec<i64> = state.items.iter().map(|e| e.course_id).collect();
    assert_eq!(left, vec![10, 12]);
}

#[test]
fn counts_split_completed_and_active() {
    let items = vec![
        enrollment(1, 10, "A", Some("COMPLETED")),
        enrollment(2, 11, "B", Some("ACTIVE")),
        enrollment(3, 12, "C", None),
    ];
    assert_eq!(counts(&items), EnrollmentCounts { total: 3, completed: 1, active: 2 });
    assert_eq!(counts(&[]), EnrollmentCounts::default());
}

#[test]
fn trending_is_first_three_courses() {
    let mut state = StudentDashboardState { courses: (1..=5).map(course).collect(), ..Default::default() };
    let ids: Vec<i64> = state.trending().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    state.courses.truncate(2);
    assert_eq!(state.trending().len(), 2);
}

#[test]
fn grouping_sorts_titles_and_keeps_members() {
    let items = vec![
        enrollment(1, 11, "Zoology", None),
        enrollment(2, 10, "Algebra", None),
        enrollment(3, 11, "Zoology", None),
        enrollment(4, 12, "", None),
    ];
    let groups = group_by_course(&items);
    let titles: Vec<&str> = groups.iter().map(|(t, _)| t.as_str()).collect();
    assert_eq!(titles, vec!["Algebra", "Course #12", "Zoology"]);
    assert_eq!(groups[2].1.len(), 2);
}

#[test]
fn short_date_trims_time() {
    assert_eq!(short_date(Some("2024-05-01T10:00:00")), "2024-05-01");
    assert_eq!(short_date(Some("2024-05-01 10:00")), "2024-05-01");
    assert_eq!(short_date(Some("2024-05-01")), "2024-05-01");
    assert_eq!(short_date(None), "-");
}
