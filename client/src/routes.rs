//! Declarative route table and the session guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router in `app` wraps every protected page in `Guarded`, passing it the
//! page's descriptor from this table, and the navigation bar renders its links
//! from the same table. Role requirements therefore live in exactly one place.
//!
//! Guard order: public routes always pass; a missing token redirects to
//! `/login`; a role outside the allowed set redirects to `/login`. The guard
//! is evaluated on every render and never cached.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::session::{Role, Session};

pub const LOGIN_PATH: &str = "/login";

/// Who sees a public route's link in the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAudience {
    /// Anonymous visitors only.
    Guests,
    /// Anonymous visitors and signed-in users holding one of these roles.
    GuestsAnd(&'static [Role]),
}

/// Navigation-bar entry for a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    /// Ignored for protected routes, whose links follow the guard.
    pub audience: NavAudience,
}

/// One client route and the roles allowed to render it.
#[derive(Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    /// Empty means public.
    pub allowed_roles: &'static [Role],
    pub nav: Option<NavEntry>,
}

impl RouteDescriptor {
    pub fn is_public(&self) -> bool {
        self.allowed_roles.is_empty()
    }
}

/// Result of checking a route against the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

const STUDENTS: &[Role] = &[Role::User];
const ADMINS: &[Role] = &[Role::Admin];
const MEMBERS: &[Role] = &[Role::User, Role::Admin];

pub static ROOT: RouteDescriptor = RouteDescriptor { path: "/", allowed_roles: &[], nav: None };

pub static HOME: RouteDescriptor = RouteDescriptor {
    path: "/home",
    allowed_roles: &[],
    nav: Some(NavEntry { label: "Home", audience: NavAudience::Guests }),
};

pub static COURSES: RouteDescriptor = RouteDescriptor {
    path: "/courses",
    allowed_roles: &[],
    nav: Some(NavEntry { label: "Courses", audience: NavAudience::GuestsAnd(STUDENTS) }),
};

pub static ADMIN_LOGIN: RouteDescriptor = RouteDescriptor {
    path: "/admin-login",
    allowed_roles: &[],
    nav: Some(NavEntry { label: "Admin", audience: NavAudience::Guests }),
};

pub static LOGIN: RouteDescriptor = RouteDescriptor {
    path: LOGIN_PATH,
    allowed_roles: &[],
    nav: Some(NavEntry { label: "Login", audience: NavAudience::Guests }),
};

pub static REGISTER: RouteDescriptor = RouteDescriptor {
    path: "/register",
    allowed_roles: &[],
    nav: Some(NavEntry { label: "Register", audience: NavAudience::Guests }),
};

pub static STUDENT_DASHBOARD: RouteDescriptor = RouteDescriptor {
    path: "/student-dashboard",
    allowed_roles: STUDENTS,
    nav: Some(NavEntry { label: "Dashboard", audience: NavAudience::Guests }),
};

pub static MY_ENROLLMENTS: RouteDescriptor = RouteDescriptor {
    path: "/userenrolled",
    allowed_roles: STUDENTS,
    nav: Some(NavEntry { label: "My Enrollments", audience: NavAudience::Guests }),
};

pub static ADMIN_DASHBOARD: RouteDescriptor = RouteDescriptor {
    path: "/admin-dashboard",
    allowed_roles: ADMINS,
    nav: Some(NavEntry { label: "Dashboard", audience: NavAudience::Guests }),
};

pub static ADMIN_USERS: RouteDescriptor = RouteDescriptor {
    path: "/admin/users",
    allowed_roles: ADMINS,
    nav: Some(NavEntry { label: "Users List", audience: NavAudience::Guests }),
};

pub static ADMIN_COURSES: RouteDescriptor = RouteDescriptor {
    path: "/admin/courses",
    allowed_roles: ADMINS,
    nav: Some(NavEntry { label: "All Courses", audience: NavAudience::Guests }),
};

pub static ADMIN_ENROLLMENTS: RouteDescriptor = RouteDescriptor {
    path: "/admin/enrollments",
    allowed_roles: ADMINS,
    nav: Some(NavEntry { label: "Enrollments", audience: NavAudience::Guests }),
};

/// Rendered as the username link rather than a labelled entry.
pub static PROFILE: RouteDescriptor = RouteDescriptor { path: "/profile", allowed_roles: MEMBERS, nav: None };

/// Every client route, in navigation-bar order.
pub static ROUTES: [&RouteDescriptor; 13] = [
    &ROOT,
    &HOME,
    &COURSES,
    &ADMIN_LOGIN,
    &LOGIN,
    &REGISTER,
    &STUDENT_DASHBOARD,
    &MY_ENROLLMENTS,
    &ADMIN_DASHBOARD,
    &ADMIN_USERS,
    &ADMIN_COURSES,
    &ADMIN_ENROLLMENTS,
    &PROFILE,
];

/// Decide whether `session` may render `route`.
pub fn guard(session: &Session, route: &RouteDescriptor) -> GuardDecision {
    if route.is_public() {
        return GuardDecision::Allow;
    }
    if !session.is_authenticated() {
        return GuardDecision::Redirect(LOGIN_PATH);
    }
    match session.role {
        Some(role) if route.allowed_roles.contains(&role) => GuardDecision::Allow,
        _ => GuardDecision::Redirect(LOGIN_PATH),
    }
}

/// Navigation-bar links visible to `session`, in table order.
pub fn nav_links(session: &Session) -> Vec<&'static RouteDescriptor> {
    ROUTES
        .iter()
        .copied()
        .filter(|route| route.nav.is_some_and(|nav| nav_visible(session, route, nav)))
        .collect()
}

fn nav_visible(session: &Session, route: &RouteDescriptor, nav: NavEntry) -> bool {
    if !route.is_public() {
        return guard(session, route) == GuardDecision::Allow;
    }
    if !session.is_authenticated() {
        return true;
    }
    match nav.audience {
        NavAudience::Guests => false,
        NavAudience::GuestsAnd(roles) => session.role.is_some_and(|role| roles.contains(&role)),
    }
}
