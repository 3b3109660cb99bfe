//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its view state and request orchestration and delegates
//! rendering details to `components`. Protected pages never check the
//! session themselves; the router wraps them in `Guarded`.

pub mod admin_courses;
pub mod admin_dashboard;
pub mod admin_enrollments;
pub mod admin_users;
pub mod courses;
pub mod home;
pub mod login;
pub mod my_enrollments;
pub mod not_found;
pub mod profile;
pub mod register;
pub mod student_dashboard;
