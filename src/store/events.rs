use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::event::{Event, EventPayload, EventRow};
use crate::models::role::{decode_roles, decode_roles_json, encode_roles, merge_roles, Role};
use crate::utils::error::AppError;

const EVENT_COLUMNS: &str = "id, name, date, time, description, roles, deleted_at";

/// Create/read/update/soft-delete for event records. Every read decodes the
/// stored roles blob before a record leaves this module; every write encodes
/// normalized roles back in.
#[derive(Clone)]
pub struct EventStore {
    pool: SqlitePool,
}

impl EventStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, include_deleted: bool) -> Result<Vec<Event>, AppError> {
        let sql = if include_deleted {
            format!("SELECT {EVENT_COLUMNS} FROM events ORDER BY id")
        } else {
            format!("SELECT {EVENT_COLUMNS} FROM events WHERE deleted_at IS NULL ORDER BY id")
        };

        let rows = sqlx::query_as::<_, EventRow>(&sql).fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(materialize).collect())
    }

    pub async fn get(&self, id: i64, include_deleted: bool) -> Result<Event, AppError> {
        let sql = if include_deleted {
            format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = ?")
        } else {
            format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = ? AND deleted_at IS NULL")
        };

        let row = sqlx::query_as::<_, EventRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        Ok(materialize(row))
    }

    /// Roles pass through decode→encode once so later reads see a consistent
    /// shape regardless of what the client sent.
    pub async fn create(&self, payload: EventPayload) -> Result<Event, AppError> {
        let roles = match &payload.roles {
            Some(value) => decode_roles(value)?,
            None => Vec::new(),
        };

        let result = sqlx::query(
            "INSERT INTO events (name, date, time, description, roles) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&payload.name)
        .bind(&payload.date)
        .bind(&payload.time)
        .bind(&payload.description)
        .bind(encode_roles(&roles))
        .execute(&self.pool)
        .await?;

        Ok(Event {
            id: result.last_insert_rowid(),
            name: payload.name,
            date: payload.date,
            time: payload.time,
            description: payload.description,
            roles,
            deleted_at: None,
        })
    }

    /// Scalar fields are overwritten unconditionally from the payload. Roles
    /// are reconciled with the stored list only when the payload carries a
    /// roles section; an absent section leaves stored roles untouched.
    pub async fn update(&self, id: i64, payload: EventPayload) -> Result<Event, AppError> {
        let row = sqlx::query_as::<_, EventRow>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE id = ? AND deleted_at IS NULL"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        let existing = decode_stored(&row);
        let roles = match &payload.roles {
            Some(value) => merge_roles(&existing, decode_roles(value)?),
            None => existing,
        };

        sqlx::query("UPDATE events SET name = ?, date = ?, time = ?, description = ?, roles = ? WHERE id = ?")
            .bind(&payload.name)
            .bind(&payload.date)
            .bind(&payload.time)
            .bind(&payload.description)
            .bind(encode_roles(&roles))
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(Event {
            id,
            name: payload.name,
            date: payload.date,
            time: payload.time,
            description: payload.description,
            roles,
            deleted_at: row.deleted_at,
        })
    }

    pub async fn soft_delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE events SET deleted_at = ? WHERE id = ? AND deleted_at IS NULL")
            .bind(Utc::now().naive_utc())
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Event not found".to_string()));
        }
        Ok(())
    }
}

/// Post-fetch transform applied to every row before it reaches a caller: the
/// materialized event always carries well-formed roles.
fn materialize(row: EventRow) -> Event {
    let roles = decode_stored(&row);
    Event {
        id: row.id,
        name: row.name,
        date: row.date,
        time: row.time,
        description: row.description,
        roles,
        deleted_at: row.deleted_at,
    }
}

fn decode_stored(row: &EventRow) -> Vec<Role> {
    match decode_roles_json(&row.roles) {
        Ok(roles) => roles,
        Err(err) => {
            tracing::warn!(event_id = row.id, error = %err, "stored roles blob failed to decode");
            Vec::new()
        }
    }
}
