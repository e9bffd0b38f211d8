pub mod events;
pub mod teachers;

pub use events::EventStore;
pub use teachers::TeacherStore;

use sqlx::SqlitePool;

/// Explicitly constructed store handles shared with the routing layer. The
/// pool inside is the only cross-request state in the process.
#[derive(Clone)]
pub struct AppState {
    pub events: EventStore,
    pub teachers: TeacherStore,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            events: EventStore::new(pool.clone()),
            teachers: TeacherStore::new(pool),
        }
    }
}
