//! Wire DTOs for the backend REST API.
//!
//! DESIGN
//! ======
//! The backend speaks camelCase JSON and is loose about identifier types:
//! the same id may arrive as a number or a numeric string depending on the
//! endpoint. The lenient deserializers below accept both so one schema change
//! on the backend does not blank a whole page. Free-text fields read an
//! explicit `null` as empty, the same as a missing key.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::state::session::{Role, Session};

/// Body of `POST /api/users/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Successful login payload.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub userid: String,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role: String,
}

impl LoginResponse {
    /// Session to persist, or `None` when the role is not one we route.
    pub fn to_session(&self) -> Option<Session> {
        let role = Role::parse(&self.role)?;
        Some(Session {
            token: Some(self.token.clone()),
            user_id: Some(self.userid.clone()),
            username: Some(self.username.clone()),
            email: self.email.clone(),
            role: Some(role),
        })
    }
}

/// Body of `POST /api/users/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// A course as listed by `/api/courses`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(deserialize_with = "deserialize_i64_from_scalar")]
    pub id: i64,
    #[serde(default, deserialize_with = "deserialize_string_or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_string_or_default")]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_string_or_default")]
    pub instructor: String,
    #[serde(default, deserialize_with = "deserialize_opt_i64_from_scalar")]
    pub capacity: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_opt_i64_from_scalar")]
    pub enrolled_count: Option<i64>,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_i64_from_scalar")]
    pub duration: Option<i64>,
    #[serde(default)]
    pub instructor_name: Option<String>,
}

/// Editable course fields sent as the `course` multipart part.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDraft {
    pub title: String,
    pub description: String,
    pub capacity: i64,
    pub instructor: String,
}

/// A student's enrollment in one course.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    #[serde(deserialize_with = "deserialize_i64_from_scalar")]
    pub id: i64,
    #[serde(deserialize_with = "deserialize_i64_from_scalar")]
    pub course_id: i64,
    #[serde(default, deserialize_with = "deserialize_string_or_default")]
    pub course_title: String,
    #[serde(default, deserialize_with = "deserialize_opt_string_from_scalar")]
    pub student_id: Option<String>,
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default)]
    pub enrolled_at: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Enrollment {
    pub fn is_completed(&self) -> bool {
        self.status.as_deref() == Some("COMPLETED")
    }
}

/// A platform account as listed by `/api/users`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    #[serde(deserialize_with = "deserialize_i64_from_scalar")]
    pub id: i64,
    #[serde(default, deserialize_with = "deserialize_string_or_default")]
    pub username: String,
    #[serde(default, deserialize_with = "deserialize_string_or_default")]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_string_or_default")]
    pub role: String,
    #[serde(default, alias = "max_courses", deserialize_with = "deserialize_opt_i64_from_scalar")]
    pub max_courses: Option<i64>,
}

impl UserAccount {
    pub fn is_admin(&self) -> bool {
        Role::parse(&self.role) == Some(Role::Admin)
    }
}

/// Student/admin profile stored by `/api/profile/{userId}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default, deserialize_with = "deserialize_string_or_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "deserialize_string_or_default")]
    pub last_name: String,
    #[serde(default, deserialize_with = "deserialize_string_or_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "deserialize_string_or_default")]
    pub address: String,
    #[serde(default, deserialize_with = "deserialize_string_or_default")]
    pub bio: String,
    #[serde(default, skip_serializing)]
    pub profile_image_path: Option<String>,
}

impl Profile {
    /// True when the backend returned an object with no filled-in fields.
    pub fn is_blank(&self) -> bool {
        self.first_name.is_empty()
            && self.last_name.is_empty()
            && self.phone.is_empty()
            && self.address.is_empty()
            && self.bio.is_empty()
            && self.profile_image_path.is_none()
    }
}

/// Admin dashboard totals, assembled from the four count endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdminStats {
    pub total_users: i64,
    pub total_students: i64,
    pub total_courses: i64,
    pub total_enrollments: i64,
}

fn scalar_to_string<E: serde::de::Error>(value: serde_json::Value) -> Result<Option<String>, E> {
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(s) => Ok(Some(s)),
        serde_json::Value::Number(n) => Ok(Some(n.to_string())),
        _ => Err(E::custom("expected string or number")),
    }
}

fn scalar_to_i64<E: serde::de::Error>(value: serde_json::Value) -> Result<Option<i64>, E> {
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(Some(int));
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(Some(float as i64));
            }
            Err(E::custom("expected integer-compatible number"))
        }
        serde_json::Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| E::custom(format!("expected integer, got {s:?}"))),
        _ => Err(E::custom("expected number")),
    }
}

fn deserialize_string_from_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    scalar_to_string(value)?.ok_or_else(|| D::Error::custom("expected string or number, got null"))
}

fn deserialize_opt_string_from_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    scalar_to_string(serde_json::Value::deserialize(deserializer)?)
}

fn deserialize_string_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_opt_string_from_scalar(deserializer)?.unwrap_or_default())
}

fn deserialize_i64_from_scalar<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    scalar_to_i64(value)?.ok_or_else(|| D::Error::custom("expected number, got null"))
}

fn deserialize_opt_i64_from_scalar<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    scalar_to_i64(serde_json::Value::deserialize(deserializer)?)
}
