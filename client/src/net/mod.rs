//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `auth` turns login/registration responses
//! into session changes, `error` classifies failures, and `types` defines the
//! wire schema.

pub mod api;
pub mod auth;
pub mod error;
pub mod types;
