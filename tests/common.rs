use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};

// A single connection keeps every query in the same in-memory database.
pub async fn setup_pool() -> Pool<Sqlite> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create connection pool");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}
