use super::*;

fn filled() -> Profile {
    Profile {
        first_name: "Amy".to_owned(),
        last_name: "Pond".to_owned(),
        phone: "5551234".to_owned(),
        address: "Leadworth".to_owned(),
        bio: String::new(),
        profile_image_path: None,
    }
}

// =============================================================
// Fetch
// =============================================================

#[test]
fn fetch_404_is_benign_empty_form() {
    let mut state = ProfileState { loading: true, ..Default::default() };
    assert_eq!(state.apply_fetch(Err(ApiError::NotFound)), None);
    assert!(!state.exists);
    assert!(state.editing);
    assert!(!state.loading);
}

#[test]
fn fetch_blank_body_is_same_as_missing() {
    let mut state = ProfileState::default();
    assert_eq!(state.apply_fetch(Ok(None)), None);
    assert!(!state.exists);
}

#[test]
fn fetch_success_loads_profile() {
    let mut state = ProfileState::default();
    assert_eq!(state.apply_fetch(Ok(Some(filled()))), None);
    assert!(state.exists);
    assert!(!state.editing);
    assert_eq!(state.profile.first_name, "Amy");
}

#[test]
fn fetch_other_failure_reports_and_keeps_state() {
    let mut state = ProfileState { profile: filled(), exists: true, ..Default::default() };
    let msg = state.apply_fetch(Err(ApiError::from_status(500, "boom")));
    assert_eq!(msg.as_deref(), Some("Could not load profile: boom"));
    assert_eq!(state.profile, filled());
    assert!(state.exists);
}

// =============================================================
// Save
// =============================================================

#[test]
fn first_save_creates_then_marks_existing() {
    let mut state = ProfileState::default();
    let msg = state.apply_save(filled(), Ok(None)).unwrap();
    assert_eq!(msg, "Profile created successfully");
    assert!(state.exists);
    assert_eq!(state.profile, filled());
}

#[test]
fn later_save_updates_and_prefers_server_copy() {
    let mut state = ProfileState { exists: true, ..Default::default() };
    let mut server = filled();
    server.profile_image_path = Some("uploads/amy.png".to_owned());
    let msg = state.apply_save(filled(), Ok(Some(server.clone()))).unwrap();
    assert_eq!(msg, "Profile updated successfully");
    assert_eq!(state.profile, server);
}

#[test]
fn forbidden_save_asks_to_login_again() {
    let mut state = ProfileState { saving: true, ..Default::default() };
    let err = state.apply_save(filled(), Err(ApiError::from_status(403, ""))).unwrap_err();
    assert_eq!(err, SESSION_EXPIRED_MESSAGE);
    assert!(!state.saving);
    assert!(!state.exists);
}

#[test]
fn initials_fall_back_to_username() {
    assert_eq!(initials(&filled(), "amy"), "AP");
    assert_eq!(initials(&Profile::default(), "rory"), "R");
    assert_eq!(initials(&Profile::default(), ""), "?");
}
