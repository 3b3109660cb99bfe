use super::*;
use crate::state::session::SessionStore;

fn session(role: Option<Role>, token: bool) -> Session {
    Session {
        token: token.then(|| "tok".to_owned()),
        user_id: Some("1".to_owned()),
        username: Some("sam".to_owned()),
        email: Some("sam@example.com".to_owned()),
        role,
    }
}

fn labels(session: &Session) -> Vec<&'static str> {
    nav_links(session)
        .into_iter()
        .filter_map(|r| r.nav.map(|n| n.label))
        .collect()
}

// =============================================================
// Table shape
// =============================================================

#[test]
fn table_paths_are_unique() {
    for (i, a) in ROUTES.iter().enumerate() {
        for b in &ROUTES[i + 1..] {
            assert_ne!(a.path, b.path);
        }
    }
}

#[test]
fn table_covers_every_client_route() {
    for path in [
        "/",
        "/home",
        "/courses",
        "/login",
        "/register",
        "/admin-login",
        "/profile",
        "/userenrolled",
        "/student-dashboard",
        "/admin-dashboard",
        "/admin/users",
        "/admin/courses",
        "/admin/enrollments",
    ] {
        assert!(ROUTES.iter().any(|r| r.path == path), "missing route {path}");
    }
    assert!(!ROUTES.iter().any(|r| r.path == "/nope"));
}

#[test]
fn role_requirements() {
    assert_eq!(STUDENT_DASHBOARD.allowed_roles, &[Role::User]);
    assert_eq!(MY_ENROLLMENTS.allowed_roles, &[Role::User]);
    assert_eq!(ADMIN_DASHBOARD.allowed_roles, &[Role::Admin]);
    assert_eq!(ADMIN_USERS.allowed_roles, &[Role::Admin]);
    assert_eq!(ADMIN_COURSES.allowed_roles, &[Role::Admin]);
    assert_eq!(ADMIN_ENROLLMENTS.allowed_roles, &[Role::Admin]);
    assert!(COURSES.is_public());
    assert!(LOGIN.is_public());
    assert!(!PROFILE.is_public());
}

// =============================================================
// Guard
// =============================================================

#[test]
fn public_routes_allow_anonymous() {
    let anon = Session::default();
    for route in ROUTES.iter().filter(|r| r.is_public()) {
        assert_eq!(guard(&anon, route), GuardDecision::Allow, "{}", route.path);
    }
}

#[test]
fn protected_routes_redirect_without_token() {
    let anon = Session::default();
    let tokenless_admin = session(Some(Role::Admin), false);
    for route in ROUTES.iter().filter(|r| !r.is_public()) {
        assert_eq!(guard(&anon, route), GuardDecision::Redirect("/login"), "{}", route.path);
        assert_eq!(guard(&tokenless_admin, route), GuardDecision::Redirect("/login"), "{}", route.path);
    }
}

#[test]
fn admin_route_rejects_user_and_accepts_admin() {
    assert_eq!(guard(&session(Some(Role::User), true), &ADMIN_DASHBOARD), GuardDecision::Redirect("/login"));
    assert_eq!(guard(&session(Some(Role::Admin), true), &ADMIN_DASHBOARD), GuardDecision::Allow);
}

#[test]
fn user_route_rejects_admin() {
    assert_eq!(guard(&session(Some(Role::Admin), true), &STUDENT_DASHBOARD), GuardDecision::Redirect("/login"));
    assert_eq!(guard(&session(Some(Role::User), true), &STUDENT_DASHBOARD), GuardDecision::Allow);
}

#[test]
fn token_without_role_is_redirected_from_protected_routes() {
    assert_eq!(guard(&session(None, true), &PROFILE), GuardDecision::Redirect("/login"));
}

#[test]
fn profile_allows_both_roles() {
    assert_eq!(guard(&session(Some(Role::User), true), &PROFILE), GuardDecision::Allow);
    assert_eq!(guard(&session(Some(Role::Admin), true), &PROFILE), GuardDecision::Allow);
}

#[test]
fn logout_redirects_every_protected_route() {
    let store = SessionStore::in_memory();
    store.save(&session(Some(Role::Admin), true));
    store.clear();

    let after = store.load();
    assert!(!store.is_authenticated());
    for route in ROUTES.iter().filter(|r| !r.is_public()) {
        assert_eq!(guard(&after, route), GuardDecision::Redirect("/login"));
    }
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn guest_nav_lists_public_entries() {
    assert_eq!(labels(&Session::default()), vec!["Home", "Courses", "Admin", "Login", "Register"]);
}

#[test]
fn student_nav_lists_student_entries() {
    assert_eq!(
        labels(&session(Some(Role::User), true)),
        vec!["Courses", "Dashboard", "My Enrollments"]
    );
}

#[test]
fn admin_nav_lists_admin_entries() {
    assert_eq!(
        labels(&session(Some(Role::Admin), true)),
        vec!["Dashboard", "Users List", "All Courses", "Enrollments"]
    );
}

#[test]
fn nav_never_lists_a_route_the_guard_rejects() {
    for s in [
        Session::default(),
        session(Some(Role::User), true),
        session(Some(Role::Admin), true),
        session(None, true),
    ] {
        for route in nav_links(&s) {
            assert_eq!(guard(&s, route), GuardDecision::Allow, "{}", route.path);
        }
    }
}
