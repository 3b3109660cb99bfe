//! REST client for the course backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call resolves to [`ApiError::Unavailable`] since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! All calls funnel through one `send` so status classification, bearer
//! tokens, and body decoding behave identically for every endpoint. Callers
//! get `Result` outputs instead of panics so fetch failures degrade a page
//! without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    AdminStats, Course, CourseDraft, Credentials, Enrollment, LoginResponse, Profile, Registration, UserAccount,
};
use crate::state::session::Session;

/// Admin dashboard counters served by `/api/admin/{kind}/count`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountKind {
    Users,
    Students,
    Courses,
    Enrollments,
}

impl CountKind {
    fn segment(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Students => "students",
            Self::Courses => "courses",
            Self::Enrollments => "enrollments",
        }
    }
}

/// Every backend path this client calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Login,
    Register,
    Courses,
    Course(i64),
    CoursesByAdmin(&'a str),
    CreateCourse(&'a str),
    UserEnrollments(&'a str),
    StudentEnrollments(&'a str),
    AllEnrollments,
    Enroll { user_id: &'a str, course_id: i64 },
    CancelEnrollment { user_id: &'a str, course_id: i64 },
    Profile(&'a str),
    Count(CountKind),
    Users,
    UserDetail(i64),
    User(i64),
}

impl Endpoint<'_> {
    pub fn path(&self) -> String {
        match self {
            Self::Login => "/api/users/login".to_owned(),
            Self::Register => "/api/users/register".to_owned(),
            Self::Courses => "/api/courses".to_owned(),
            Self::Course(id) => format!("/api/courses/{id}"),
            Self::CoursesByAdmin(admin_id) => format!("/api/courses/admin/{admin_id}"),
            Self::CreateCourse(admin_id) => format!("/api/courses/create/{admin_id}"),
            Self::UserEnrollments(user_id) => format!("/api/enrollments/user/{user_id}"),
            Self::StudentEnrollments(user_id) => format!("/api/enrollments/student/{user_id}"),
            Self::AllEnrollments => "/api/enrollments/admin/all".to_owned(),
            Self::Enroll { user_id, course_id } => format!("/api/enrollments/enroll/{user_id}/{course_id}"),
            Self::CancelEnrollment { user_id, course_id } => {
                format!("/api/enrollments/cancel/{user_id}/{course_id}")
            }
            Self::Profile(user_id) => format!("/api/profile/{user_id}"),
            Self::Count(kind) => format!("/api/admin/{}/count", kind.segment()),
            Self::Users => "/api/users".to_owned(),
            Self::UserDetail(id) => format!("/api/users/id/{id}"),
            Self::User(id) => format!("/api/users/{id}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// An image picked in a file input, attached as the `image` multipart part.
#[derive(Clone, Debug)]
pub struct ImageUpload {
    pub name: String,
    #[cfg(feature = "hydrate")]
    file: web_sys::File,
}

#[cfg(feature = "hydrate")]
impl ImageUpload {
    pub fn from_file(file: web_sys::File) -> Self {
        Self { name: file.name(), file }
    }

    /// Object URL for previewing the picked file before upload.
    pub fn preview_url(&self) -> Option<String> {
        web_sys::Url::create_object_url_with_blob(&self.file).ok()
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
enum Body<'a> {
    Empty,
    Json(String),
    Multipart { part: &'static str, json: String, image: Option<&'a ImageUpload> },
}

/// Resolve a backend-relative image path (which may use `\` separators)
/// against the configured base URL.
pub fn image_url(base: &str, path: &str) -> Option<String> {
    let cleaned = path.trim().replace('\\', "/");
    let cleaned = cleaned.trim_start_matches('/');
    if cleaned.is_empty() {
        return None;
    }
    if cleaned.starts_with("http://") || cleaned.starts_with("https://") {
        return Some(cleaned.to_owned());
    }
    Some(format!("{}/{cleaned}", base.trim_end_matches('/')))
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

fn decode_count(text: &str) -> Result<i64, ApiError> {
    text.trim()
        .parse::<i64>()
        .map_err(|e| ApiError::Decode(format!("count {text:?}: {e}")))
}

fn encode<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::Request(e.to_string()))
}

/// Handle for backend calls, carrying the base URL and the bearer token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base: impl Into<String>, token: Option<String>) -> Self {
        Self { base: base.into().trim_end_matches('/').to_owned(), token }
    }

    /// Client for the configured backend with no bearer token. Login and
    /// registration use this so a stale session is never sent along.
    pub fn anonymous() -> Self {
        Self::new(crate::config::api_base(), None)
    }

    /// Client for the configured backend, authorized as `session`.
    pub fn for_session(session: &Session) -> Self {
        Self::new(crate::config::api_base(), session.token.clone())
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn url(&self, endpoint: &Endpoint<'_>) -> String {
        format!("{}{}", self.base, endpoint.path())
    }

    pub fn image_url(&self, path: &str) -> Option<String> {
        image_url(&self.base, path)
    }

    // ---------------------------------------------------------------
    // Auth
    // ---------------------------------------------------------------

    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let text = self.send(Method::Post, Endpoint::Login, Body::Json(encode(credentials)?)).await?;
        decode(&text)
    }

    pub async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        self.send(Method::Post, Endpoint::Register, Body::Json(encode(registration)?)).await?;
        Ok(())
    }

    // ---------------------------------------------------------------
    // Courses
    // ---------------------------------------------------------------

    pub async fn list_courses(&self) -> Result<Vec<Course>, ApiError> {
        decode(&self.send(Method::Get, Endpoint::Courses, Body::Empty).await?)
    }

    pub async fn get_course(&self, id: i64) -> Result<Course, ApiError> {
        decode(&self.send(Method::Get, Endpoint::Course(id), Body::Empty).await?)
    }

    pub async fn list_courses_by_admin(&self, admin_id: &str) -> Result<Vec<Course>, ApiError> {
        decode(&self.send(Method::Get, Endpoint::CoursesByAdmin(admin_id), Body::Empty).await?)
    }

    pub async fn create_course(
        &self,
        admin_id: &str,
        draft: &CourseDraft,
        image: Option<&ImageUpload>,
    ) -> Result<(), ApiError> {
        let body = Body::Multipart { part: "course", json: encode(draft)?, image };
        self.send(Method::Post, Endpoint::CreateCourse(admin_id), body).await?;
        Ok(())
    }

    pub async fn update_course(&self, id: i64, draft: &CourseDraft, image: Option<&ImageUpload>) -> Result<(), ApiError> {
        let body = Body::Multipart { part: "course", json: encode(draft)?, image };
        self.send(Method::Put, Endpoint::Course(id), body).await?;
        Ok(())
    }

    pub async fn delete_course(&self, id: i64) -> Result<(), ApiError> {
        self.send(Method::Delete, Endpoint::Course(id), Body::Empty).await?;
        Ok(())
    }

    // ---------------------------------------------------------------
    // Enrollments
    // ---------------------------------------------------------------

    pub async fn list_user_enrollments(&self, user_id: &str) -> Result<Vec<Enrollment>, ApiError> {
        decode(&self.send(Method::Get, Endpoint::UserEnrollments(user_id), Body::Empty).await?)
    }

    pub async fn list_student_enrollments(&self, user_id: &str) -> Result<Vec<Enrollment>, ApiError> {
        decode(&self.send(Method::Get, Endpoint::StudentEnrollments(user_id), Body::Empty).await?)
    }

    pub async fn list_all_enrollments(&self) -> Result<Vec<Enrollment>, ApiError> {
        decode(&self.send(Method::Get, Endpoint::AllEnrollments, Body::Empty).await?)
    }

    pub async fn enroll(&self, user_id: &str, course_id: i64) -> Result<(), ApiError> {
        self.send(Method::Post, Endpoint::Enroll { user_id, course_id }, Body::Empty).await?;
        Ok(())
    }

    pub async fn cancel_enrollment(&self, user_id: &str, course_id: i64) -> Result<(), ApiError> {
        self.send(Method::Delete, Endpoint::CancelEnrollment { user_id, course_id }, Body::Empty)
            .await?;
        Ok(())
    }

    // ---------------------------------------------------------------
    // Profile
    // ---------------------------------------------------------------

    /// Fetch a profile. An empty body or an object with no filled-in fields
    /// reads as `None`.
    pub async fn fetch_profile(&self, user_id: &str) -> Result<Option<Profile>, ApiError> {
        let text = self.send(Method::Get, Endpoint::Profile(user_id), Body::Empty).await?;
        decode_profile(&text)
    }

    /// Create (`POST`) or update (`PUT`) a profile.
    pub async fn save_profile(
        &self,
        user_id: &str,
        profile: &Profile,
        image: Option<&ImageUpload>,
        exists: bool,
    ) -> Result<Option<Profile>, ApiError> {
        let method = if exists { Method::Put } else { Method::Post };
        let body = Body::Multipart { part: "profile", json: encode(profile)?, image };
        let text = self.send(method, Endpoint::Profile(user_id), body).await?;
        decode_profile(&text)
    }

    // ---------------------------------------------------------------
    // Admin
    // ---------------------------------------------------------------

    pub async fn count(&self, kind: CountKind) -> Result<i64, ApiError> {
        decode_count(&self.send(Method::Get, Endpoint::Count(kind), Body::Empty).await?)
    }

    /// Fetch all four dashboard counters together; the first failure wins.
    pub async fn admin_stats(&self) -> Result<AdminStats, ApiError> {
        let (total_users, total_students, total_courses, total_enrollments) = futures::future::try_join4(
            self.count(CountKind::Users),
            self.count(CountKind::Students),
            self.count(CountKind::Courses),
            self.count(CountKind::Enrollments),
        )
        .await?;
        Ok(AdminStats { total_users, total_students, total_courses, total_enrollments })
    }

    pub async fn list_users(&self) -> Result<Vec<UserAccount>, ApiError> {
        decode(&self.send(Method::Get, Endpoint::Users, Body::Empty).await?)
    }

    pub async fn get_user(&self, id: i64) -> Result<UserAccount, ApiError> {
        decode(&self.send(Method::Get, Endpoint::UserDetail(id), Body::Empty).await?)
    }

    /// Delete a user; returns the server's confirmation message, if any.
    pub async fn delete_user(&self, id: i64) -> Result<Option<String>, ApiError> {
        let text = self.send(Method::Delete, Endpoint::User(id), Body::Empty).await?;
        let message = super::error::extract_message(&text);
        Ok((!message.is_empty()).then_some(message))
    }

    // ---------------------------------------------------------------
    // Transport
    // ---------------------------------------------------------------

    async fn send(&self, method: Method, endpoint: Endpoint<'_>, body: Body<'_>) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let url = self.url(&endpoint);
            let mut builder = match method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Put => Request::put(&url),
                Method::Delete => Request::delete(&url),
            };
            if let Some(token) = &self.token {
                builder = builder.header("Authorization", &format!("Bearer {token}"));
            }
            let request = match body {
                Body::Empty => builder.build(),
                Body::Json(json) => builder.header("Content-Type", "application/json").body(json),
                Body::Multipart { part, json, image } => builder.body(multipart_form(part, &json, image)?),
            }
            .map_err(|e| ApiError::Request(e.to_string()))?;

            let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            let ok = resp.ok();
            let status = resp.status();
            let text = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
            if ok { Ok(text) } else { Err(ApiError::from_status(status, text)) }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (method, endpoint, body);
            Err(ApiError::Unavailable)
        }
    }
}

fn decode_profile(text: &str) -> Result<Option<Profile>, ApiError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    let profile: Profile = decode(text)?;
    Ok((!profile.is_blank()).then_some(profile))
}

/// Build a `multipart/form-data` body: one JSON part plus an optional image.
#[cfg(feature = "hydrate")]
fn multipart_form(part: &str, json: &str, image: Option<&ImageUpload>) -> Result<web_sys::FormData, ApiError> {
    let js_err = |e: wasm_bindgen::JsValue| ApiError::Request(format!("{e:?}"));

    let form = web_sys::FormData::new().map_err(js_err)?;
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/json");
    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(json));
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_err)?;
    form.append_with_blob(part, &blob).map_err(js_err)?;
    if let Some(image) = image {
        form.append_with_blob_and_filename("image", &image.file, &image.name)
            .map_err(js_err)?;
    }
    Ok(form)
}
