use super::*;

fn client() -> ApiClient {
    ApiClient::new("http://backend.test/", Some("tok".to_owned()))
}

// =============================================================
// Endpoints
// =============================================================

#[test]
fn auth_endpoints() {
    assert_eq!(Endpoint::Login.path(), "/api/users/login");
    assert_eq!(Endpoint::Register.path(), "/api/users/register");
}

#[test]
fn course_endpoints() {
    assert_eq!(Endpoint::Courses.path(), "/api/courses");
    assert_eq!(Endpoint::Course(12).path(), "/api/courses/12");
    assert_eq!(Endpoint::CoursesByAdmin("3").path(), "/api/courses/admin/3");
    assert_eq!(Endpoint::CreateCourse("3").path(), "/api/courses/create/3");
}

#[test]
fn enrollment_endpoints() {
    assert_eq!(Endpoint::UserEnrollments("7").path(), "/api/enrollments/user/7");
    assert_eq!(Endpoint::StudentEnrollments("7").path(), "/api/enrollments/student/7");
    assert_eq!(Endpoint::AllEnrollments.path(), "/api/enrollments/admin/all");
    assert_eq!(
        Endpoint::Enroll { user_id: "7", course_id: 2 }.path(),
        "/api/enrollments/enroll/7/2"
    );
    assert_eq!(
        Endpoint::CancelEnrollment { user_id: "7", course_id: 2 }.path(),
        "/api/enrollments/cancel/7/2"
    );
}

#[test]
fn admin_and_user_endpoints() {
    assert_eq!(Endpoint::Count(CountKind::Users).path(), "/api/admin/users/count");
    assert_eq!(Endpoint::Count(CountKind::Students).path(), "/api/admin/students/count");
    assert_eq!(Endpoint::Count(CountKind::Courses).path(), "/api/admin/courses/count");
    assert_eq!(Endpoint::Count(CountKind::Enrollments).path(), "/api/admin/enrollments/count");
    assert_eq!(Endpoint::Users.path(), "/api/users");
    assert_eq!(Endpoint::UserDetail(4).path(), "/api/users/id/4");
    assert_eq!(Endpoint::User(4).path(), "/api/users/4");
    assert_eq!(Endpoint::Profile("4").path(), "/api/profile/4");
}

#[test]
fn client_joins_base_and_path() {
    let api = client();
    assert_eq!(api.base(), "http://backend.test");
    assert_eq!(api.url(&Endpoint::Courses), "http://backend.test/api/courses");
    assert_eq!(api.token(), Some("tok"));
}

#[test]
fn client_for_anonymous_session_has_no_token() {
    let api = ApiClient::for_session(&Session::default());
    assert_eq!(api.token(), None);
    assert_eq!(api.base(), crate::config::api_base());
}

#[test]
fn anonymous_client_never_carries_a_signed_in_token() {
    let signed_in = Session { token: Some("old-jwt".to_owned()), ..Session::default() };
    assert_eq!(ApiClient::for_session(&signed_in).token(), Some("old-jwt"));

    let api = ApiClient::anonymous();
    assert_eq!(api.token(), None);
    assert_eq!(api.base(), crate::config::api_base());
}

// =============================================================
// Image URLs
// =============================================================

#[test]
fn image_url_normalizes_backslashes() {
    assert_eq!(
        image_url("http://backend.test", "uploads\\courses\\a.png"),
        Some("http://backend.test/uploads/courses/a.png".to_owned())
    );
}

#[test]
fn image_url_handles_leading_slash_and_blank() {
    assert_eq!(
        client().image_url("/profiles/p.jpg"),
        Some("http://backend.test/profiles/p.jpg".to_owned())
    );
    assert_eq!(image_url("http://backend.test", "  "), None);
}

#[test]
fn image_url_passes_absolute_urls_through() {
    assert_eq!(
        image_url("http://backend.test", "https://cdn.test/x.png"),
        Some("https://cdn.test/x.png".to_owned())
    );
}

// =============================================================
// Decoding
// =============================================================

#[test]
fn decode_count_accepts_plain_integer() {
    assert_eq!(decode_count(" 42\n"), Ok(42));
    assert!(matches!(decode_count("many"), Err(ApiError::Decode(_))));
}

#[test]
fn decode_profile_treats_empty_as_missing() {
    assert_eq!(decode_profile(""), Ok(None));
    assert_eq!(decode_profile("{}"), Ok(None));
    let profile = decode_profile(r#"{"firstName":"Amy","phone":123}"#).unwrap().unwrap();
    assert_eq!(profile.first_name, "Amy");
    assert_eq!(profile.phone, "123");
}

#[test]
fn decode_reports_malformed_json() {
    let result: Result<Vec<Course>, ApiError> = decode("<html>");
    assert!(matches!(result, Err(ApiError::Decode(_))));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_the_browser() {
    let result = block_on(client().list_courses());
    assert_eq!(result, Err(ApiError::Unavailable));
}

/// Poll a future that never suspends (the non-browser transport) to completion.
#[cfg(not(feature = "hydrate"))]
fn block_on<F: std::future::Future>(future: F) -> F::Output {
    use std::task::{Context, Poll, Waker};

    let mut future = std::pin::pin!(future);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(output) = future.as_mut().poll(&mut cx) {
            return output;
        }
    }
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn admin_stats_fails_with_the_first_count_error() {
    let result = block_on(client().admin_stats());
    assert_eq!(result, Err(ApiError::Unavailable));
}
