//! Client state: the session plus one plain state model per view.
//!
//! DESIGN
//! ======
//! View models are plain structs with pure update rules so they test without
//! a browser. Pages hold them in `RwSignal`s and feed them API results.

pub mod admin;
pub mod catalog;
pub mod enrollments;
pub mod notify;
pub mod profile;
pub mod session;
pub mod users;
