use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use crate::models::role::Role;

/// An event row as stored: roles are an opaque serialized blob.
#[derive(Debug, Clone, FromRow)]
pub struct EventRow {
    pub id: i64,
    pub name: String,
    pub date: String,
    pub time: String,
    pub description: String,
    pub roles: String,
    pub deleted_at: Option<NaiveDateTime>,
}

/// An event as callers see it: roles decoded into well-formed entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub date: String,
    pub time: String,
    pub description: String,
    pub roles: Vec<Role>,
    pub deleted_at: Option<NaiveDateTime>,
}

/// Request body for creating or updating an event. Scalar fields are applied
/// unconditionally on update, empty strings included. `roles` stays untyped
/// here; the codec decides what it means.
#[derive(Debug, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub roles: Option<Value>,
}
