use sea_orm::DatabaseConnection;

/// Handles shared by every request.
///
/// The connection pool is opened once at startup and closed after shutdown.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
