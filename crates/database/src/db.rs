use log::info;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;

/// Creates a pooled database connection.
///
/// Each statement checks a connection out of the pool and returns it when the
/// statement finishes, whether it succeeded or not.
pub async fn create_connection(
    database_url: &str,
    max_connections: u32,
) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url);
    options
        .max_connections(max_connections)
        .connect_timeout(Duration::from_secs(8))
        .sqlx_logging(false);

    let db = Database::connect(options).await?;
    info!("Connected to database ({max_connections} max connections)");
    Ok(db)
}
