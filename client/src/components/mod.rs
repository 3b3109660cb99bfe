//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (navigation, toasts, dialogs, cards) and
//! the route guard, reading session and notification handles from Leptos
//! context providers.

pub mod course_card;
pub mod footer;
pub mod guarded;
pub mod loading;
pub mod modal;
pub mod nav_bar;
pub mod toaster;
