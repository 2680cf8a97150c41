//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned for each request
//! through Axum's state extraction. All persistent state lives in the database,
//! so the only shared resource is the connection pool.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// `DatabaseConnection` is a connection pool, so clones share the pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates a new application state around an established connection pool.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
