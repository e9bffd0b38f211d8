use sqlx::SqlitePool;

use crate::models::teacher::{Teacher, TeacherPayload};
use crate::utils::error::AppError;

const TEACHER_COLUMNS: &str = "id, email, name, department, position, profile_photo, points";

#[derive(Clone)]
pub struct TeacherStore {
    pool: SqlitePool,
}

impl TeacherStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Teacher>, AppError> {
        let teachers = sqlx::query_as::<_, Teacher>(&format!(
            "SELECT {TEACHER_COLUMNS} FROM teachers ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(teachers)
    }

    /// The duplicate check is a pre-read rather than a reliance on the unique
    /// index, so the conflict message stays deterministic and descriptive.
    pub async fn create(&self, payload: TeacherPayload) -> Result<Teacher, AppError> {
        let existing = sqlx::query_as::<_, Teacher>(&format!(
            "SELECT {TEACHER_COLUMNS} FROM teachers WHERE email = ?"
        ))
        .bind(&payload.email)
        .fetch_optional(&self.pool)
        .await?;

        if existing.is_some() {
            return Err(AppError::Conflict(format!(
                "A teacher with email '{}' already exists",
                payload.email
            )));
        }

        let result = sqlx::query(
            "INSERT INTO teachers (email, name, department, position, profile_photo, points) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&payload.email)
        .bind(&payload.name)
        .bind(&payload.department)
        .bind(&payload.position)
        .bind(&payload.profile_photo)
        .bind(payload.points)
        .execute(&self.pool)
        .await?;

        Ok(Teacher {
            id: result.last_insert_rowid(),
            email: payload.email,
            name: payload.name,
            department: payload.department,
            position: payload.position,
            profile_photo: payload.profile_photo,
            points: payload.points,
        })
    }
}
