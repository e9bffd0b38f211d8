use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Teacher {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub department: String,
    pub position: String,
    #[serde(rename = "profilePhoto")]
    pub profile_photo: String,
    pub points: i64,
}

/// Request body for registering a teacher. Email is the unique identifier and
/// the only required field.
#[derive(Debug, Deserialize)]
pub struct TeacherPayload {
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub position: String,
    #[serde(default, rename = "profilePhoto")]
    pub profile_photo: String,
    #[serde(default)]
    pub points: i64,
}
