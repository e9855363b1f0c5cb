//! Application state shared across request handlers.
//!
//! The state is initialized once during startup and cloned for each request
//! through Axum's state extraction. The database connection is a pool, so
//! clones share the underlying connections. Handlers receive the store
//! handle explicitly through this state instead of any ambient global.

use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
